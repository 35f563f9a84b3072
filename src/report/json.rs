use super::text::ExportHeader;
use crate::types::report::AnalysisResult;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    meta: &'a ExportHeader,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

pub fn to_json(result: &AnalysisResult, header: &ExportHeader) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        meta: header,
        result,
    })
}

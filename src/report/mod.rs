pub mod json;
pub mod md;
pub mod text;

use crate::error::ReadinessError;
use crate::types::report::AnalysisResult;
use text::ExportHeader;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(
    result: &AnalysisResult,
    header: &ExportHeader,
    format: OutputFormat,
) -> Result<String, ReadinessError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(result, header)),
        OutputFormat::Json => json::to_json(result, header).map_err(ReadinessError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}

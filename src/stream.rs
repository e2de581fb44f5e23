//! Multi-document YAML stream parsing

use crate::error::{AppError, Result};
use crate::models::Document;
use serde::Deserialize;

/// Parse every document of a YAML stream, in order.
///
/// Empty documents (a bare `---`) come back as `Value::Null`. A stream
/// holding nothing but blank lines and comments has no documents.
pub fn parse_stream(text: &str) -> Result<Vec<Document>> {
    let mut documents = Vec::new();

    if !has_content(text) {
        return Ok(documents);
    }

    for (index, deserializer) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let document = Document::deserialize(deserializer)
            .map_err(|e| AppError::parse(format!("document {}: {}", index + 1, e)))?;
        documents.push(document);
    }

    Ok(documents)
}

/// Whether any line carries YAML beyond whitespace and comments
fn has_content(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#'))
}

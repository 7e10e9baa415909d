//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Envelope for JSON output: the payload plus run metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339)
    pub generated_at: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                generated_at: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the output envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_json_output_meta() {
        let output = JsonOutput::new(1);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.generated_at.is_empty());
    }

    #[test]
    fn test_format_json_settings() {
        let result = format_json(&Settings::default()).unwrap();

        assert!(result.contains("\"data\""));
        assert!(result.contains("\"meta\""));
        assert!(result.contains("\"netdataUrl\""));
        assert!(result.contains("\"generated_at\""));
    }

    #[test]
    fn test_format_json_empty_slice() {
        let items: Vec<String> = vec![];
        let result = format_json(&items).unwrap();
        assert!(result.contains("\"data\": []"));
    }
}

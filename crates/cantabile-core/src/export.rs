//! Prompt export as plain text or JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::vocab::closed_vocab;
use crate::model::Mode;

closed_vocab!(ExportFormat, "export format", "File format for an exported prompt.", {
    Txt => "txt",
    Json => "json",
});

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Txt
    }
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        self.as_str()
    }
}

/// The JSON export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptExport {
    pub prompt: String,
    pub generation_mode: Mode,
    pub timestamp: DateTime<Utc>,
}

impl PromptExport {
    #[must_use]
    pub fn new(prompt: impl Into<String>, generation_mode: Mode) -> Self {
        Self {
            prompt: prompt.into(),
            generation_mode,
            timestamp: Utc::now(),
        }
    }

    /// File contents for `format`. Text exports are the bare prompt.
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Txt => Ok(self.prompt.clone()),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// `suno-prompt-<date>.<ext>`, dated by the export timestamp.
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!(
            "suno-prompt-{}.{}",
            self.timestamp.format("%Y-%m-%d"),
            format.extension()
        )
    }
}

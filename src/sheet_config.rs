use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Layout settings for stroke sequence rows
///
/// Values are kept in memory only; callers that persist them can use the
/// serde derives. Missing fields fall back to the defaults below.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StrokeLayout {
    /// Number of stroke images per tikz row
    #[serde(default = "default_strokes_per_line")]
    pub strokes_per_line: usize,

    /// Width passed to `\includegraphics`
    #[serde(default = "default_image_width")]
    pub image_width: String,

    /// Vertical space between rows
    #[serde(default = "default_row_spacing")]
    pub row_spacing: String,

    /// Vertical space after the last row
    #[serde(default = "default_trailing_spacing")]
    pub trailing_spacing: String,

    /// Upper bound on steps rendered for one character
    #[serde(default = "default_max_strokes")]
    pub max_strokes: usize,
}

fn default_strokes_per_line() -> usize {
    8
}

fn default_image_width() -> String {
    r"0.12\linewidth".to_string()
}

fn default_row_spacing() -> String {
    "2em".to_string()
}

fn default_trailing_spacing() -> String {
    "2em".to_string()
}

fn default_max_strokes() -> usize {
    29
}

impl Default for StrokeLayout {
    fn default() -> Self {
        Self {
            strokes_per_line: default_strokes_per_line(),
            image_width: default_image_width(),
            row_spacing: default_row_spacing(),
            trailing_spacing: default_trailing_spacing(),
            max_strokes: default_max_strokes(),
        }
    }
}

impl StrokeLayout {
    /// Build a layout from a JSON object, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let layout: Self = serde_json::from_str(json)
            .map_err(|e| anyhow!("Invalid stroke layout: {}", e))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Validate the layout
    pub fn validate(&self) -> Result<()> {
        if self.strokes_per_line == 0 {
            return Err(anyhow!("strokes_per_line must be at least 1"));
        }

        if self.image_width.trim().is_empty() {
            return Err(anyhow!("image_width must not be empty"));
        }

        if self.row_spacing.trim().is_empty() || self.trailing_spacing.trim().is_empty() {
            return Err(anyhow!("Spacing values must not be empty"));
        }

        Ok(())
    }
}

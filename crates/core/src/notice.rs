//! Non-fatal, per-page reports produced while flattening.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A condition on one page that was reported and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub page: usize,
    pub message: String,
}

impl Notice {
    /// The requested page does not exist in the document.
    pub fn out_of_range(page: usize) -> Self {
        Self {
            level: NoticeLevel::Warning,
            page,
            message: format!("Page {page} is out of range and will be skipped."),
        }
    }

    /// The page exists but no table was detected on it.
    pub fn no_tables(page: usize) -> Self {
        Self {
            level: NoticeLevel::Info,
            page,
            message: format!("No tables found on page {page}"),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.level == NoticeLevel::Warning
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Notice::out_of_range(5).to_string(),
            "Page 5 is out of range and will be skipped."
        );
        assert_eq!(Notice::no_tables(2).to_string(), "No tables found on page 2");
        assert!(Notice::out_of_range(5).is_warning());
        assert!(!Notice::no_tables(2).is_warning());
    }

    #[test]
    fn test_serializes_level_lowercase() {
        let json = serde_json::to_string(&Notice::no_tables(3)).unwrap();
        assert_eq!(
            json,
            r#"{"level":"info","page":3,"message":"No tables found on page 3"}"#
        );
    }
}

//! Input result type

use serde::Serialize;

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input changed shell state
    Handled,
    /// Input was not for the window manager (pass through)
    Unhandled,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }

    /// Handled if `changed`, unhandled otherwise
    #[inline]
    pub fn from_changed(changed: bool) -> Self {
        if changed {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_string(&InputResult::Handled).unwrap();
        assert_eq!(json, r#"{"type":"handled"}"#);
    }

    #[test]
    fn test_from_changed() {
        assert!(InputResult::from_changed(true).is_handled());
        assert!(!InputResult::from_changed(false).is_handled());
    }
}

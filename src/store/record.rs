//! Record types for the interaction log.
//!
//! A [`LogRecord`] is one immutable logged event: what kind of element was
//! touched, a free-text action description, when it happened, and (for
//! resolved screen-visibility spans only) how long the screen was visible.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category label for the UI element a record describes.
///
/// The vocabulary is fixed; unrecognized controls fall back to [`Other`]
/// carrying the host-reported runtime type name.
///
/// [`Other`]: ElementType::Other
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementType {
    ViewController,
    Button,
    Switch,
    Slider,
    SegmentedControl,
    DatePicker,
    TableCell,
    /// Any other control, identified by its runtime type name.
    Other(String),
}

impl ElementType {
    /// The canonical label string for this element type.
    pub fn label(&self) -> &str {
        match self {
            ElementType::ViewController => "ViewController",
            ElementType::Button => "Button",
            ElementType::Switch => "Switch",
            ElementType::Slider => "Slider",
            ElementType::SegmentedControl => "SegmentedControl",
            ElementType::DatePicker => "DatePicker",
            ElementType::TableCell => "TableCell",
            ElementType::Other(name) => name,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One logged interaction event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Category of the element that produced the event
    pub element_type: ElementType,
    /// Free-text description of the action (e.g. "Button Click - Save")
    pub action: String,
    /// When the event was recorded
    pub timestamp: DateTime<Utc>,
    /// Elapsed screen-visible time in seconds.
    ///
    /// Set only on a screen-disappear record whose screen had a matching
    /// prior appear; `None` everywhere else.
    pub duration_secs: Option<f64>,
}

impl LogRecord {
    /// Create a record stamped with the current time and no duration.
    pub fn new(element_type: ElementType, action: impl Into<String>) -> Self {
        Self {
            element_type,
            action: action.into(),
            timestamp: Utc::now(),
            duration_secs: None,
        }
    }

    /// Create a record stamped with the current time and a resolved duration.
    pub fn with_duration(
        element_type: ElementType,
        action: impl Into<String>,
        duration_secs: f64,
    ) -> Self {
        Self {
            element_type,
            action: action.into(),
            timestamp: Utc::now(),
            duration_secs: Some(duration_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_labels() {
        assert_eq!(ElementType::ViewController.label(), "ViewController");
        assert_eq!(ElementType::Button.label(), "Button");
        assert_eq!(ElementType::SegmentedControl.label(), "SegmentedControl");
        assert_eq!(ElementType::Other("UIStepper".to_string()).label(), "UIStepper");
    }

    #[test]
    fn test_record_creation() {
        let record = LogRecord::new(ElementType::Switch, "Switch Toggled - ON");
        assert_eq!(record.element_type, ElementType::Switch);
        assert_eq!(record.action, "Switch Toggled - ON");
        assert!(record.duration_secs.is_none());
    }

    #[test]
    fn test_record_with_duration() {
        let record = LogRecord::with_duration(
            ElementType::ViewController,
            "Screen Disappear - Login",
            1.25,
        );
        assert_eq!(record.duration_secs, Some(1.25));
    }
}

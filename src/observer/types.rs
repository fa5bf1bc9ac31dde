//! Interaction event types emitted by host UI wiring.
//!
//! A [`UiEvent`] is the capture-side description of one interaction, built
//! by the host's event listeners before it reaches the store. Each variant
//! classifies to exactly one [`ElementType`].

use crate::store::record::ElementType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One captured UI interaction, as reported by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UiEvent {
    /// A button was tapped
    ButtonClick { title: String },
    /// A switch changed state
    SwitchToggle { is_on: bool },
    /// A slider value changed
    SliderChange { value: f32 },
    /// A segmented control changed selection
    SegmentedControlChange { title: String, index: usize },
    /// A date picker value changed
    DatePickerChange { date: DateTime<Utc> },
    /// A table cell was selected
    TableCellSelection { table: String, row: usize },
    /// A screen became visible
    ScreenAppear { screen: String },
    /// A screen stopped being visible
    ScreenDisappear { screen: String },
    /// Any other control, identified by its runtime type name
    OtherControl { type_name: String, action: String },
}

impl UiEvent {
    /// Classify this event into its element-type label.
    pub fn element_type(&self) -> ElementType {
        match self {
            UiEvent::ButtonClick { .. } => ElementType::Button,
            UiEvent::SwitchToggle { .. } => ElementType::Switch,
            UiEvent::SliderChange { .. } => ElementType::Slider,
            UiEvent::SegmentedControlChange { .. } => ElementType::SegmentedControl,
            UiEvent::DatePickerChange { .. } => ElementType::DatePicker,
            UiEvent::TableCellSelection { .. } => ElementType::TableCell,
            UiEvent::ScreenAppear { .. } | UiEvent::ScreenDisappear { .. } => {
                ElementType::ViewController
            }
            UiEvent::OtherControl { type_name, .. } => ElementType::Other(type_name.clone()),
        }
    }

    /// Whether this event is a screen transition rather than a control
    /// interaction.
    pub fn is_screen_event(&self) -> bool {
        matches!(
            self,
            UiEvent::ScreenAppear { .. } | UiEvent::ScreenDisappear { .. }
        )
    }
}

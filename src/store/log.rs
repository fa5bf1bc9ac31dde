//! The in-memory event log store.
//!
//! [`EventLog`] owns the append-only record buffer and the open-span map
//! used to compute screen-visible durations. Every operation is an
//! immediate, infallible in-memory mutation or query; the store never
//! blocks and never persists anything.

use crate::display;
use crate::store::record::{ElementType, LogRecord};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

/// The event log store.
///
/// Created explicitly by the host (no global instance) and typically owned
/// for the process lifetime. Records accumulate in insertion order without
/// bound; [`clear`](EventLog::clear) returns the store to its initial empty
/// state.
#[derive(Debug, Default)]
pub struct EventLog {
    /// Logged records, in append order
    records: Vec<LogRecord>,
    /// Open screen-visibility spans, keyed by screen identifier
    open_spans: HashMap<String, DateTime<Utc>>,
}

impl EventLog {
    /// Create an empty event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generic interaction with no duration.
    pub fn record_interaction(&mut self, element_type: ElementType, action: impl Into<String>) {
        self.append(LogRecord::new(element_type, action));
    }

    /// Record that a screen became visible.
    ///
    /// Opens a visibility span for `screen`. A second appear for the same
    /// identifier overwrites the open timestamp; the earlier span is
    /// discarded and never surfaces as a duration.
    pub fn record_screen_appear(&mut self, screen: &str) {
        let now = Utc::now();
        if self.open_spans.insert(screen.to_string(), now).is_some() {
            debug!(screen, "open span overwritten by repeated appear");
        }
        self.append(LogRecord::new(
            ElementType::ViewController,
            format!("Screen Appear - {screen}"),
        ));
    }

    /// Record that a screen stopped being visible.
    ///
    /// If an open span exists for `screen`, the record carries the elapsed
    /// time since the span opened and the span is closed. A disappear with
    /// no matching appear is a normal outcome and records no duration.
    pub fn record_screen_disappear(&mut self, screen: &str) {
        let action = format!("Screen Disappear - {screen}");

        match self.open_spans.remove(screen) {
            Some(opened_at) => {
                let duration_secs =
                    (Utc::now() - opened_at).num_milliseconds() as f64 / 1000.0;
                debug!(screen, duration_secs, "screen span closed");
                self.append(LogRecord::with_duration(
                    ElementType::ViewController,
                    action,
                    duration_secs,
                ));
            }
            None => {
                self.append(LogRecord::new(ElementType::ViewController, action));
            }
        }
    }

    /// Record a button tap.
    pub fn log_button_click(&mut self, title: &str) {
        self.record_interaction(ElementType::Button, format!("Button Click - {title}"));
    }

    /// Record a switch toggle.
    pub fn log_switch_toggle(&mut self, is_on: bool) {
        let state = if is_on { "ON" } else { "OFF" };
        self.record_interaction(ElementType::Switch, format!("Switch Toggled - {state}"));
    }

    /// Record a slider value change.
    pub fn log_slider_change(&mut self, value: f32) {
        self.record_interaction(ElementType::Slider, format!("Slider Value Changed - {value}"));
    }

    /// Record a segmented-control selection change.
    pub fn log_segmented_control_change(&mut self, title: &str, index: usize) {
        self.record_interaction(
            ElementType::SegmentedControl,
            format!("Segmented Control Changed - {title} at index {index}"),
        );
    }

    /// Record a date-picker change.
    pub fn log_date_picker_change(&mut self, date: DateTime<Utc>) {
        let formatted = display::format_timestamp(date, &Tz::UTC);
        self.record_interaction(ElementType::DatePicker, format!("Date Picker Changed - {formatted}"));
    }

    /// Record a table-cell selection.
    pub fn log_table_cell_selection(&mut self, table: &str, row: usize) {
        self.record_interaction(
            ElementType::TableCell,
            format!("Cell Selected - {table} Row {row}"),
        );
    }

    /// Record an interaction with an unrecognized control.
    ///
    /// `type_name` is the runtime type name of the control as reported by
    /// the host; hosts conventionally pass "Tap" as the action.
    pub fn log_other_control(&mut self, type_name: &str, action: &str) {
        self.record_interaction(ElementType::Other(type_name.to_string()), action);
    }

    /// All logged records, in insertion order.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Number of logged records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of screens with an open visibility span.
    pub fn open_span_count(&self) -> usize {
        self.open_spans.len()
    }

    /// Empty the record buffer and the open-span map.
    pub fn clear(&mut self) {
        self.records.clear();
        self.open_spans.clear();
        debug!("event log cleared");
    }

    /// Render the full log as a human-readable listing (UTC timestamps).
    ///
    /// Pure formatting; see [`display::render_with_timezone`] for a
    /// timezone-aware variant.
    pub fn format_display(&self) -> String {
        display::render_with_timezone(&self.records, &Tz::UTC)
    }

    fn append(&mut self, record: LogRecord) {
        trace!(
            element = %record.element_type,
            action = %record.action,
            "interaction recorded"
        );
        self.records.push(record);
    }
}

/// Thread-safe shared event log for hosts with multiple recording contexts.
pub type SharedEventLog = Arc<Mutex<EventLog>>;

/// Create a new shared event log.
pub fn create_shared_log() -> SharedEventLog {
    Arc::new(Mutex::new(EventLog::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_record_interaction_appends_in_order() {
        let mut log = EventLog::new();
        log.record_interaction(ElementType::Button, "Button Click - A");
        log.record_interaction(ElementType::Switch, "Switch Toggled - OFF");

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].element_type, ElementType::Button);
        assert_eq!(log.records()[1].action, "Switch Toggled - OFF");
        assert!(log.records().iter().all(|r| r.duration_secs.is_none()));
    }

    #[test]
    fn test_screen_appear_opens_span() {
        let mut log = EventLog::new();
        log.record_screen_appear("Settings");

        assert_eq!(log.len(), 1);
        assert_eq!(log.open_span_count(), 1);

        let record = &log.records()[0];
        assert_eq!(record.element_type, ElementType::ViewController);
        assert_eq!(record.action, "Screen Appear - Settings");
        assert!(record.duration_secs.is_none());
    }

    #[test]
    fn test_screen_disappear_resolves_duration() {
        let mut log = EventLog::new();
        log.record_screen_appear("Settings");
        thread::sleep(Duration::from_millis(50));
        log.record_screen_disappear("Settings");

        assert_eq!(log.open_span_count(), 0);
        let record = log.records().last().unwrap();
        assert_eq!(record.action, "Screen Disappear - Settings");
        let duration = record.duration_secs.expect("span should resolve");
        assert!(duration >= 0.05);
        assert!(duration < 1.0);
    }

    #[test]
    fn test_disappear_without_appear_has_no_duration() {
        let mut log = EventLog::new();
        log.record_screen_disappear("NeverShown");

        let record = log.records().last().unwrap();
        assert_eq!(record.element_type, ElementType::ViewController);
        assert_eq!(record.action, "Screen Disappear - NeverShown");
        assert!(record.duration_secs.is_none());
    }

    // Documented quirk: a repeated appear replaces the open timestamp, so
    // the duration measures from the second appear and the first span is
    // silently lost.
    #[test]
    fn test_duplicate_appear_measures_from_second() {
        let mut log = EventLog::new();
        log.record_screen_appear("Feed");
        thread::sleep(Duration::from_millis(300));
        log.record_screen_appear("Feed");
        thread::sleep(Duration::from_millis(50));
        log.record_screen_disappear("Feed");

        let record = log.records().last().unwrap();
        let duration = record.duration_secs.expect("span should resolve");
        assert!(duration >= 0.05);
        assert!(duration < 0.3, "duration {duration} measured from first appear");
        // Only the second span ever produced a duration
        assert_eq!(
            log.records()
                .iter()
                .filter(|r| r.duration_secs.is_some())
                .count(),
            1
        );
    }

    #[test]
    fn test_clear_resets_records_and_spans() {
        let mut log = EventLog::new();
        log.record_screen_appear("Login");
        log.log_button_click("Save");
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.open_span_count(), 0);

        // A disappear after clear finds no span
        log.record_screen_disappear("Login");
        assert!(log.records()[0].duration_secs.is_none());
    }

    #[test]
    fn test_typed_helpers_action_strings() {
        let mut log = EventLog::new();
        log.log_button_click("Save");
        log.log_switch_toggle(true);
        log.log_switch_toggle(false);
        log.log_slider_change(0.5);
        log.log_segmented_control_change("Weekly", 1);
        log.log_table_cell_selection("Contacts", 7);
        log.log_other_control("UIStepper", "Tap");

        let actions: Vec<&str> = log.records().iter().map(|r| r.action.as_str()).collect();
        assert_eq!(
            actions,
            vec![
                "Button Click - Save",
                "Switch Toggled - ON",
                "Switch Toggled - OFF",
                "Slider Value Changed - 0.5",
                "Segmented Control Changed - Weekly at index 1",
                "Cell Selected - Contacts Row 7",
                "Tap",
            ]
        );
        assert_eq!(
            log.records()[6].element_type,
            ElementType::Other("UIStepper".to_string())
        );
    }

    #[test]
    fn test_date_picker_action_prefix() {
        let mut log = EventLog::new();
        log.log_date_picker_change(Utc::now());

        let record = &log.records()[0];
        assert_eq!(record.element_type, ElementType::DatePicker);
        assert!(record.action.starts_with("Date Picker Changed - "));
    }

    #[test]
    fn test_shared_log_handle() {
        let shared = create_shared_log();
        shared.lock().unwrap().log_button_click("Send");
        assert_eq!(shared.lock().unwrap().len(), 1);
    }
}

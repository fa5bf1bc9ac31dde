//! Host-wired observer: capture handle, bounded event queue, and dispatch
//! into the store.
//!
//! The host registers its native UI listeners once at setup time and points
//! them at a cloned [`ObserverHandle`]; each callback builds a [`UiEvent`]
//! and pushes it onto a bounded channel without ever blocking. The host's
//! main context periodically calls [`UiObserver::drain_into`] to apply
//! queued events to an [`EventLog`].

use crate::observer::types::UiEvent;
use crate::store::log::EventLog;
use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Configuration for which interaction sources to capture.
#[derive(Debug, Clone)]
pub struct ObserverConfig {
    /// Capture control interactions (buttons, switches, sliders, ...)
    pub capture_controls: bool,
    /// Capture screen appear/disappear transitions
    pub capture_screens: bool,
    /// Capacity of the pending-event queue
    pub queue_capacity: usize,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            capture_controls: true,
            capture_screens: true,
            queue_capacity: 10_000,
        }
    }
}

/// Errors that can occur when operating the observer.
#[derive(Debug)]
pub enum ObserverError {
    AlreadyRunning,
}

impl std::fmt::Display for ObserverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObserverError::AlreadyRunning => write!(f, "Observer is already running"),
        }
    }
}

impl std::error::Error for ObserverError {}

/// Apply one captured event to the store.
pub fn apply(event: UiEvent, log: &mut EventLog) {
    match event {
        UiEvent::ButtonClick { title } => log.log_button_click(&title),
        UiEvent::SwitchToggle { is_on } => log.log_switch_toggle(is_on),
        UiEvent::SliderChange { value } => log.log_slider_change(value),
        UiEvent::SegmentedControlChange { title, index } => {
            log.log_segmented_control_change(&title, index)
        }
        UiEvent::DatePickerChange { date } => log.log_date_picker_change(date),
        UiEvent::TableCellSelection { table, row } => log.log_table_cell_selection(&table, row),
        UiEvent::ScreenAppear { screen } => log.record_screen_appear(&screen),
        UiEvent::ScreenDisappear { screen } => log.record_screen_disappear(&screen),
        UiEvent::OtherControl { type_name, action } => {
            log.log_other_control(&type_name, &action)
        }
    }
}

/// The interaction observer.
///
/// Owns the pending-event queue between the host's UI listeners and the
/// store. Listeners hold [`ObserverHandle`] clones; the consumer side drains
/// with [`drain_into`](UiObserver::drain_into).
pub struct UiObserver {
    config: ObserverConfig,
    sender: Sender<UiEvent>,
    receiver: Receiver<UiEvent>,
    running: Arc<AtomicBool>,
}

impl UiObserver {
    /// Create a new observer with the given configuration.
    pub fn new(config: ObserverConfig) -> Self {
        // Bounded so a stalled drain loop cannot grow memory without limit
        let (sender, receiver) = bounded(config.queue_capacity);
        Self {
            config,
            sender,
            receiver,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start accepting events.
    ///
    /// Returns an error if the observer is already running.
    pub fn start(&mut self) -> Result<(), ObserverError> {
        if self.running.load(Ordering::SeqCst) {
            return Err(ObserverError::AlreadyRunning);
        }
        self.running.store(true, Ordering::SeqCst);
        debug!(
            controls = self.config.capture_controls,
            screens = self.config.capture_screens,
            "observer started"
        );
        Ok(())
    }

    /// Stop accepting events. Already-queued events stay drainable.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        debug!("observer stopped");
    }

    /// Check if the observer is currently accepting events.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Get a cheap, cloneable handle for host UI listeners.
    pub fn handle(&self) -> ObserverHandle {
        ObserverHandle {
            sender: self.sender.clone(),
            running: self.running.clone(),
            capture_controls: self.config.capture_controls,
            capture_screens: self.config.capture_screens,
        }
    }

    /// Try to receive one pending event without blocking.
    pub fn try_recv(&self) -> Option<UiEvent> {
        self.receiver.try_recv().ok()
    }

    /// Apply all pending events to the store, returning how many were
    /// applied.
    pub fn drain_into(&self, log: &mut EventLog) -> usize {
        let mut applied = 0;
        while let Some(event) = self.try_recv() {
            apply(event, log);
            applied += 1;
        }
        applied
    }
}

/// Capture-side handle held by host UI listeners.
///
/// All emit methods are non-blocking: events sent while the observer is
/// stopped, filtered out by configuration, or arriving on a full queue are
/// dropped.
#[derive(Debug, Clone)]
pub struct ObserverHandle {
    sender: Sender<UiEvent>,
    running: Arc<AtomicBool>,
    capture_controls: bool,
    capture_screens: bool,
}

impl ObserverHandle {
    /// Enqueue a captured event. Returns `false` if the event was dropped.
    pub fn emit(&self, event: UiEvent) -> bool {
        if !self.running.load(Ordering::SeqCst) {
            trace!("event dropped: observer not running");
            return false;
        }

        let captured = if event.is_screen_event() {
            self.capture_screens
        } else {
            self.capture_controls
        };
        if !captured {
            trace!("event dropped: source not captured");
            return false;
        }

        // Don't block a UI callback if the queue is full - just drop
        self.sender.try_send(event).is_ok()
    }

    pub fn button_clicked(&self, title: &str) -> bool {
        self.emit(UiEvent::ButtonClick {
            title: title.to_string(),
        })
    }

    pub fn switch_toggled(&self, is_on: bool) -> bool {
        self.emit(UiEvent::SwitchToggle { is_on })
    }

    pub fn slider_changed(&self, value: f32) -> bool {
        self.emit(UiEvent::SliderChange { value })
    }

    pub fn segment_changed(&self, title: &str, index: usize) -> bool {
        self.emit(UiEvent::SegmentedControlChange {
            title: title.to_string(),
            index,
        })
    }

    pub fn date_picked(&self, date: DateTime<Utc>) -> bool {
        self.emit(UiEvent::DatePickerChange { date })
    }

    pub fn cell_selected(&self, table: &str, row: usize) -> bool {
        self.emit(UiEvent::TableCellSelection {
            table: table.to_string(),
            row,
        })
    }

    pub fn screen_appeared(&self, screen: &str) -> bool {
        self.emit(UiEvent::ScreenAppear {
            screen: screen.to_string(),
        })
    }

    pub fn screen_disappeared(&self, screen: &str) -> bool {
        self.emit(UiEvent::ScreenDisappear {
            screen: screen.to_string(),
        })
    }

    /// Report an unrecognized control by its runtime type name.
    pub fn control_tapped(&self, type_name: &str) -> bool {
        self.emit(UiEvent::OtherControl {
            type_name: type_name.to_string(),
            action: "Tap".to_string(),
        })
    }
}

//! interaction-log - In-process event logger for mobile UI interactions.
//!
//! This library accumulates structured records of UI interactions (button
//! taps, switch toggles, slider changes, screen transitions) in an in-memory
//! buffer that can be queried, rendered as a debug listing, exported, and
//! cleared. Host applications wire their native UI event listeners to the
//! recording API at setup time; there is no runtime interposition and no
//! hidden global state.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       interaction-log                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐       │
//! │  │  Observer   │──▶│  Event Log  │──▶│   Display   │       │
//! │  │ (UI wiring) │   │   (store)   │   │  (listing)  │       │
//! │  └─────────────┘   └──────┬──────┘   └─────────────┘       │
//! │                           │                                 │
//! │                           ▼                                 │
//! │                    ┌─────────────┐                          │
//! │                    │   Export    │                          │
//! │                    │ (JSON dump) │                          │
//! │                    └─────────────┘                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use interaction_log::{EventLog, ObserverConfig, UiObserver};
//!
//! // Create the store and the observer the host wires its listeners to
//! let mut log = EventLog::new();
//! let mut observer = UiObserver::new(ObserverConfig::default());
//! observer.start().expect("Failed to start observer");
//!
//! // UI callbacks hold cheap handle clones
//! let handle = observer.handle();
//! handle.screen_appeared("Login");
//! handle.button_clicked("Sign In");
//! handle.screen_disappeared("Login");
//!
//! // The host's main context drains captured events into the store
//! observer.drain_into(&mut log);
//! println!("{}", log.format_display());
//! ```

pub mod config;
pub mod display;
pub mod export;
pub mod observer;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigError, SourceConfig};
pub use export::{ExportBuilder, ExportEnvelope, ExportError, ExportFormat};
pub use observer::{ObserverConfig, ObserverError, ObserverHandle, UiEvent, UiObserver};
pub use store::{create_shared_log, ElementType, EventLog, LogRecord, SharedEventLog};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Interaction capture for host UI frameworks.
//!
//! Hosts wire their native event listeners to an [`ObserverHandle`] at setup
//! time; captured events flow through a bounded queue and are applied to the
//! store by [`UiObserver::drain_into`]. There is no runtime interposition:
//! every capture path is an explicit listener registration.

pub mod dispatch;
pub mod types;

// Re-export commonly used types
pub use dispatch::{apply, ObserverConfig, ObserverError, ObserverHandle, UiObserver};
pub use types::UiEvent;

//! Demonstration of the interaction logger.
//!
//! This example shows how to:
//! 1. Create the event log store and the observer
//! 2. Wire simulated UI callbacks to an observer handle
//! 3. Drain captured events into the store
//! 4. Render the debug listing
//! 5. Export the buffer as a JSON dump
//!
//! Run with: cargo run --example logging_demo

use std::thread;
use std::time::Duration;

use interaction_log::{
    Config, EventLog, ExportBuilder, ExportFormat, ObserverConfig, UiObserver, VERSION,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interaction_log=debug".into()),
        )
        .init();

    println!("interaction-log v{VERSION} - Logging Demo");
    println!("=========================================");
    println!();

    let config = Config::load().unwrap_or_default();
    if let Err(e) = config.ensure_directories() {
        eprintln!("Warning: Could not create export directory: {e}");
    }

    // Create components
    let mut log = EventLog::new();
    let mut observer = UiObserver::new(ObserverConfig {
        capture_controls: config.sources.controls,
        capture_screens: config.sources.screens,
        queue_capacity: config.queue_capacity,
    });

    if let Err(e) = observer.start() {
        eprintln!("Error: {e}");
        return;
    }

    // In a real host this handle is captured by the UI framework's
    // listener registrations; here we drive it by hand.
    let handle = observer.handle();

    println!("Simulating a short session...");
    handle.screen_appeared("Login");
    handle.button_clicked("Sign In");
    thread::sleep(Duration::from_millis(400));
    handle.screen_disappeared("Login");

    handle.screen_appeared("Feed");
    handle.switch_toggled(true);
    handle.slider_changed(0.75);
    handle.segment_changed("Weekly", 1);
    handle.cell_selected("Stories", 4);
    handle.control_tapped("UIStepper");
    thread::sleep(Duration::from_millis(200));
    handle.screen_disappeared("Feed");

    let applied = observer.drain_into(&mut log);
    println!("Applied {applied} captured events");
    println!();

    // Render the listing in the configured timezone
    println!(
        "{}",
        interaction_log::display::render_with_timezone(log.records(), &config.display_tz())
    );

    // Export the buffer
    let builder = ExportBuilder::new();
    match builder.export_to(log.records(), &config.export_path, ExportFormat::Json) {
        Ok(path) => println!("Exported {} records to {}", log.len(), path.display()),
        Err(e) => eprintln!("Export failed: {e}"),
    }

    observer.stop();
}

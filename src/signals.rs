//! Signal handling for clean countdown shutdown.
//!
//! A dedicated thread translates process signals into messages on a channel
//! the tick loop sleeps on, so Ctrl+C interrupts a tick-length sleep
//! immediately instead of waiting out the remainder of the second. The
//! `running` flag is the loop condition; it is cleared on every shutdown
//! path so the terminal guard and final log marker always run.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    sync::mpsc::{Receiver, Sender, channel},
    thread,
};

/// Unified signal message type for signal-based communication
#[derive(Debug, Clone)]
pub enum SignalMessage {
    /// Shutdown signal (SIGTERM, SIGINT, SIGHUP)
    Shutdown,
}

/// Signal handling state shared between threads
pub struct SignalState {
    /// Atomic flag indicating if the application should keep running
    pub running: Arc<AtomicBool>,
    /// Channel receiver for signal messages; the tick loop sleeps on this
    pub signal_receiver: Receiver<SignalMessage>,
    /// Channel sender kept for components that need to request shutdown
    pub signal_sender: Sender<SignalMessage>,
}

/// Install the signal handler thread and return the shared state.
pub fn setup_signal_handler(debug_enabled: bool) -> Result<SignalState> {
    let running = Arc::new(AtomicBool::new(true));
    let (signal_sender, signal_receiver) = channel();

    let mut signals =
        Signals::new([SIGINT, SIGTERM, SIGHUP]).context("failed to register signal handlers")?;

    let thread_running = Arc::clone(&running);
    let thread_sender = signal_sender.clone();
    thread::spawn(move || {
        for signal in signals.forever() {
            if debug_enabled {
                log_pipe!();
                log_debug!("Received signal {signal}, shutting down");
            }
            thread_running.store(false, Ordering::SeqCst);
            // Receiver may already be gone during teardown
            let _ = thread_sender.send(SignalMessage::Shutdown);
            break;
        }
    });

    Ok(SignalState {
        running,
        signal_receiver,
        signal_sender,
    })
}

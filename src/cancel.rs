//! Cooperative cancellation of the temperature scan from the keyboard.

use crate::menu::Key;
use crate::term;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Shared flag that only ever goes from `false` to `true`.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Background thread that sets a [`CancelFlag`] when Escape is pressed.
///
/// The thread polls instead of blocking on input so that it can exit as soon
/// as the scan finishes; dropping the listener stops and joins it.
pub struct KeyListener {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl KeyListener {
    pub fn spawn(flag: CancelFlag) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            while !flag.is_cancelled() && !thread_stop.load(Ordering::SeqCst) {
                match term::poll_key(POLL_INTERVAL) {
                    Ok(Some(Key::Escape | Key::Interrupt)) => flag.cancel(),
                    Ok(_) => {}
                    Err(e) => {
                        log::debug!("key listener stopped: {}", e);
                        return;
                    }
                }
            }
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.shutdown();
    }
}

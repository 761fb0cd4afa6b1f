// Session clock: time source, elapsed formatting and the 1 s ticker

use chrono::{DateTime, Duration, Utc};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|err| err.into_inner());
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|err| err.into_inner())
    }
}

/// Format elapsed time as `MM:SS`.
/// Minutes grow past two digits when needed; negative durations show as 00:00.
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.num_milliseconds().max(0);
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Callback run on every tick. Returning false stops the ticker.
pub type TickCallback = Arc<dyn Fn() -> bool + Send + Sync>;

/// A repeating background timer.
///
/// At most one should be live per session. `cancel` stops it and waits for the
/// thread to exit; dropping the ticker cancels it as well.
pub struct Ticker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn(period: std::time::Duration, on_tick: TickCallback) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if !on_tick() {
                        break;
                    }
                }
                // Explicit stop or the owning Ticker went away
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Self {
            stop: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }

    pub fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Clock ticker thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker").field("running", &self.is_running()).finish()
    }
}

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, channel};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

const STOP_POLL: Duration = Duration::from_millis(50);

/// Recurring wall-clock sampler. Sends a fresh `Local::now()` over the
/// channel once per interval until dropped; dropping stops and joins the
/// worker so no recurring callback outlives its owner.
pub struct Ticker {
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
    ticks: Receiver<DateTime<Local>>,
}

impl Ticker {
    pub fn start(interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        let stop = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = channel();
        let stop_for_thread = Arc::clone(&stop);
        let join = thread::spawn(move || {
            let mut next_tick = Instant::now() + interval;
            while !stop_for_thread.load(Ordering::Relaxed) {
                let now = Instant::now();
                if now >= next_tick {
                    if sender.send(Local::now()).is_err() {
                        break;
                    }
                    while next_tick <= now {
                        next_tick += interval;
                    }
                }
                thread::sleep(STOP_POLL.min(next_tick.saturating_duration_since(now)));
            }
        });
        Self {
            stop,
            join: Some(join),
            ticks: receiver,
        }
    }

    pub fn ticks(&self) -> &Receiver<DateTime<Local>> {
        &self.ticks
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

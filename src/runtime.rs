use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};
use log::{error, warn};

/// How long the loop waits for input before redrawing anyway
pub const TICK_RATE_MS: u64 = 100;

/// What one step of the event loop saw
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    /// Nothing arrived within the tick interval
    Tick,
    /// The input source is gone; no further keys will ever arrive
    Closed,
}

/// Anything the loop can wait on for input
pub trait EventSource: Send + 'static {
    /// Wait at most `timeout`. Yields `Tick` when it expires and `Closed` once
    /// the source has shut down, without waiting.
    fn wait(&self, timeout: Duration) -> GameEvent;
}

/// Events delivered over an mpsc channel
pub struct ChannelEventSource {
    rx: Receiver<GameEvent>,
}

impl ChannelEventSource {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for ChannelEventSource {
    fn wait(&self, timeout: Duration) -> GameEvent {
        match self.rx.recv_timeout(timeout) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => GameEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => GameEvent::Closed,
        }
    }
}

/// Keys and resizes read from the terminal on a background thread
pub struct CrosstermEventSource {
    inner: ChannelEventSource,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || forward_terminal_events(tx));

        Self {
            inner: ChannelEventSource::new(rx),
        }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn wait(&self, timeout: Duration) -> GameEvent {
        self.inner.wait(timeout)
    }
}

fn forward_terminal_events(tx: Sender<GameEvent>) {
    loop {
        let ev = match event::read() {
            Ok(ev) => ev,
            Err(e) => {
                error!("terminal event reader stopped: {e}");
                // dropping `tx` is what tells the loop
                return;
            }
        };

        if let Some(ev) = translate(ev) {
            if tx.send(ev).is_err() {
                return;
            }
        }
    }
}

/// Terminal events the game reacts to; mouse, focus and paste are dropped
pub fn translate(ev: CtEvent) -> Option<GameEvent> {
    match ev {
        CtEvent::Key(key) => Some(GameEvent::Key(key)),
        CtEvent::Resize(_, _) => Some(GameEvent::Resize),
        _ => None,
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_RATE_MS))
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Hands the loop one event per step, at least once per tick interval
pub struct Runner<E: EventSource, T: Ticker> {
    events: E,
    ticker: T,
}

impl<E: EventSource, T: Ticker> Runner<E, T> {
    pub fn new(events: E, ticker: T) -> Self {
        Self { events, ticker }
    }

    pub fn step(&self) -> GameEvent {
        let ev = self.events.wait(self.ticker.interval());
        if ev == GameEvent::Closed {
            warn!("input source closed");
        }
        ev
    }
}

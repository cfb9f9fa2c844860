pub mod trigger_key;

pub use trigger_key::TriggerKey;

use crate::error::PasteError;
use crate::interrupt::InterruptFlag;
use rdev::EventType;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const ATTACH_GRACE: Duration = Duration::from_millis(250);

/// Blocking source of trigger-key presses.
pub trait TriggerEvents {
    /// Wait for the next press of the trigger key. Other keys never return.
    fn next_trigger(&mut self) -> Result<(), PasteError>;
}

enum ListenerSignal {
    Trigger,
    Failed(String),
}

/// System-wide keyboard hook forwarding trigger presses over a channel.
///
/// Dropping the listener detaches it: the hook stops forwarding and the
/// receiving end goes away.
pub struct GlobalKeyListener {
    trigger: TriggerKey,
    receiver: Receiver<ListenerSignal>,
    forwarding: Arc<AtomicBool>,
    interrupt: InterruptFlag,
    pending: usize,
}

impl GlobalKeyListener {
    pub fn attach(trigger: TriggerKey, interrupt: InterruptFlag) -> Result<Self, PasteError> {
        let (tx, receiver) = mpsc::channel();
        let forwarding = Arc::new(AtomicBool::new(true));

        let forward = Arc::clone(&forwarding);
        let target = trigger.key();
        let failure_tx = tx.clone();

        thread::Builder::new()
            .name("key-listener".to_string())
            .spawn(move || {
                let result = rdev::listen(move |event| {
                    if !forward.load(Ordering::SeqCst) {
                        return;
                    }
                    if let EventType::KeyPress(key) = event.event_type {
                        if key == target {
                            let _ = tx.send(ListenerSignal::Trigger);
                        }
                    }
                });
                if let Err(e) = result {
                    let _ = failure_tx.send(ListenerSignal::Failed(format!("{e:?}")));
                }
            })
            .map_err(|e| PasteError::ListenerAttach(e.to_string()))?;

        let mut listener = Self {
            trigger,
            receiver,
            forwarding,
            interrupt,
            pending: 0,
        };

        // A hook the platform refuses fails almost immediately.
        match listener.receiver.recv_timeout(ATTACH_GRACE) {
            Ok(ListenerSignal::Failed(reason)) => return Err(PasteError::ListenerAttach(reason)),
            Ok(ListenerSignal::Trigger) => listener.pending += 1,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(PasteError::ListenerAttach(
                    "listener thread exited".to_string(),
                ));
            }
        }

        info!(trigger = %listener.trigger, "keyboard listener attached");
        Ok(listener)
    }
}

impl TriggerEvents for GlobalKeyListener {
    fn next_trigger(&mut self) -> Result<(), PasteError> {
        if self.pending > 0 {
            self.pending -= 1;
            return Ok(());
        }

        loop {
            self.interrupt.check()?;
            match self.receiver.recv_timeout(POLL_INTERVAL) {
                Ok(ListenerSignal::Trigger) => {
                    debug!(trigger = %self.trigger, "trigger pressed");
                    return Ok(());
                }
                Ok(ListenerSignal::Failed(reason)) => {
                    warn!(%reason, "keyboard listener stopped");
                    return Err(PasteError::ListenerAttach(reason));
                }
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(PasteError::ListenerAttach(
                        "listener thread exited".to_string(),
                    ));
                }
            }
        }
    }
}

impl Drop for GlobalKeyListener {
    fn drop(&mut self) {
        self.forwarding.store(false, Ordering::SeqCst);
        debug!(trigger = %self.trigger, "keyboard listener detached");
    }
}

use crate::error::PasteError;
use anyhow::{Context, Result};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct InterruptState {
    raised: AtomicBool,
    armed: AtomicBool,
}

/// Shared Ctrl+C flag.
///
/// While a paste run is armed the signal only raises the flag and the run
/// unwinds at its next suspension point. Outside a run (at a prompt, for
/// instance) the signal ends the process right away.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    state: Arc<InterruptState>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the thread that waits for Ctrl+C for the rest of the process.
    pub fn install_ctrl_c_handler(&self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build signal runtime")?;
        let flag = self.clone();

        thread::Builder::new()
            .name("ctrl-c".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    while tokio::signal::ctrl_c().await.is_ok() {
                        flag.on_signal();
                    }
                });
            })
            .context("Failed to spawn signal thread")?;

        debug!("ctrl-c handler installed");
        Ok(())
    }

    fn on_signal(&self) {
        if self.state.armed.load(Ordering::SeqCst) {
            info!("interrupt received during run");
            self.raise();
        } else {
            println!("\n\nInterrupted by user. Exiting...");
            process::exit(PasteError::Interrupted.exit_code());
        }
    }

    pub fn raise(&self) {
        self.state.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.state.raised.load(Ordering::SeqCst)
    }

    /// `Err(Interrupted)` once the flag has been raised.
    pub fn check(&self) -> Result<(), PasteError> {
        if self.is_raised() {
            Err(PasteError::Interrupted)
        } else {
            Ok(())
        }
    }

    /// Route Ctrl+C to the flag until the returned guard is dropped.
    pub fn arm(&self) -> ArmedRun {
        self.state.armed.store(true, Ordering::SeqCst);
        ArmedRun { flag: self.clone() }
    }
}

pub struct ArmedRun {
    flag: InterruptFlag,
}

impl Drop for ArmedRun {
    fn drop(&mut self) {
        self.flag.state.armed.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_interrupt() {
        let flag = InterruptFlag::new();
        assert!(flag.check().is_ok());
        flag.clone().raise();
        assert_eq!(flag.check(), Err(PasteError::Interrupted));
    }

    #[test]
    fn test_arm_guard_disarms_on_drop() {
        let flag = InterruptFlag::new();
        {
            let _armed = flag.arm();
            assert!(flag.state.armed.load(Ordering::SeqCst));
        }
        assert!(!flag.state.armed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_signal_while_armed_only_raises() {
        let flag = InterruptFlag::new();
        let _armed = flag.arm();
        flag.on_signal();
        assert!(flag.is_raised());
    }
}

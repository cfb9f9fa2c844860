use thiserror::Error;

/// Failures the paste engine reports to the operator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasteError {
    #[error("clipboard is empty or does not hold tabular data: {0}")]
    SourceUnavailable(String),

    #[error("could not attach the global keyboard listener: {0}")]
    ListenerAttach(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("run interrupted by user")]
    Interrupted,

    #[error("synthetic key input failed: {0}")]
    Input(String),

    #[error("could not write to the clipboard: {0}")]
    Clipboard(String),

    #[error("terminal output failed: {0}")]
    Terminal(String),
}

impl PasteError {
    /// Process exit status used when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            PasteError::Interrupted => 130,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_exit_code() {
        assert_eq!(PasteError::Interrupted.exit_code(), 130);
        assert_eq!(PasteError::SourceUnavailable("empty".into()).exit_code(), 1);
    }

    #[test]
    fn test_messages_carry_cause() {
        let err = PasteError::ListenerAttach("accessibility permission denied".into());
        assert!(err.to_string().contains("accessibility permission denied"));
    }
}

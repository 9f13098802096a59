//! Error handling and exit codes.

use numseq_core::constants::exit_codes;
use numseq_core::NumError;

/// Errors raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Algorithms disagreed during evaluation.
    #[error("{0} algorithm disagreement(s) detected")]
    Mismatch(usize),
}

/// Map a core error to an exit code.
pub fn handle_error(err: &NumError) -> i32 {
    match err {
        NumError::NonPositiveIndex(_) | NumError::InvalidRange { .. } => {
            exit_codes::ERROR_INVALID_INPUT
        }
        NumError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Map any application error to an exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(num) = err.downcast_ref::<NumError>() {
        return handle_error(num);
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::Mismatch(_)) => exit_codes::ERROR_MISMATCH,
        None => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&NumError::NonPositiveIndex(0)), 2);
        assert_eq!(handle_error(&NumError::InvalidRange { begin: 1, end: 0 }), 2);
        assert_eq!(handle_error(&NumError::Config("bad".into())), 4);
    }

    #[test]
    fn anyhow_error_codes() {
        assert_eq!(exit_code(&NumError::NonPositiveIndex(-1).into()), 2);
        assert_eq!(exit_code(&AppError::Mismatch(3).into()), 3);
        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }
}

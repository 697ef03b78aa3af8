//! Error types for SteamCMD operations.

use crate::launcher::ExitStatus;

/// SteamCMD exit code for "no subscription" (the account does not own the
/// content it tried to update or download). Reported as a plain
/// [`SteamCmdError::RawCommand`]; use [`SteamCmdError::exit_code`] to check.
pub const EXIT_NO_SUBSCRIPTION: i32 = 8;

/// Errors produced by [`SteamCmd`](crate::SteamCmd).
#[derive(Debug, thiserror::Error)]
pub enum SteamCmdError {
    /// The executable could not be resolved on the search path.
    #[error(transparent)]
    NotInstalled(#[from] which::Error),

    /// The process could not be started or did not exit cleanly.
    #[error("raw command failed: {0}")]
    RawCommand(#[source] RunFailure),

    /// The operation is declared but has no implementation.
    #[error("not implemented")]
    NotImplemented,
}

impl SteamCmdError {
    /// Returns the process exit code when the error came from a non-zero exit.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            SteamCmdError::RawCommand(RunFailure::Exit(status)) => status.code(),
            _ => None,
        }
    }
}

/// Underlying cause of a [`SteamCmdError::RawCommand`].
#[derive(Debug, thiserror::Error)]
pub enum RunFailure {
    #[error("failed to launch: {0}")]
    Launch(#[from] std::io::Error),

    #[error("{0}")]
    Exit(ExitStatus),
}

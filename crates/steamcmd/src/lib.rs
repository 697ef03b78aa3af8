//! SteamCMD wrapper for dedicated game server hosting.
//!
//! Drives the external `steamcmd` executable to check logins, install or
//! update apps and download workshop items. All invocations on one
//! [`SteamCmd`] are serialized; SteamCMD's on-disk state is not coordinated
//! across instances or processes.
//!
//! # Argument grammar
//!
//! ```text
//! +login anonymous | +login <user> <pass>
//! [ +app_update <appid> | +workshop_download_item <appid> <itemid> ]
//! +quit
//! ```
//!
//! Any non-zero exit is reported as [`SteamCmdError::RawCommand`].

pub mod credentials;
pub mod error;
pub mod launcher;
pub mod runner;
pub mod settings;

// Re-export primary types.
pub use credentials::{ANONYMOUS_USER, Credentials};
pub use error::{EXIT_NO_SUBSCRIPTION, RunFailure, SteamCmdError};
pub use launcher::{ExitStatus, Launcher, SystemLauncher};
pub use runner::{SteamCmd, build_args, version_or_zero};
pub use settings::{STEAMCMD_BIN, SteamCmdSettings};

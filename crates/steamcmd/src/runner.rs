//! The SteamCMD command runner.
//!
//! Every operation that reaches SteamCMD goes through one private `run` primitive,
//! which assembles `+login ... <operation> +quit` and executes it under a
//! per-instance lock, so invocations on one instance never overlap.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::credentials::Credentials;
use crate::error::{RunFailure, SteamCmdError};
use crate::launcher::{Launcher, SystemLauncher};
use crate::settings::SteamCmdSettings;

/// Placeholder that replaces the password in logged argument vectors.
const REDACTED: &str = "***";

/// Serializing wrapper around the SteamCMD executable.
pub struct SteamCmd<L: Launcher = SystemLauncher> {
    settings: SteamCmdSettings,
    credentials: Credentials,
    launcher: L,
    lock: Mutex<()>,
}

impl SteamCmd {
    /// Creates a runner with default settings.
    ///
    /// If `user` or `pass` is empty, the runner logs in anonymously.
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self::with_settings(user, pass, SteamCmdSettings::default())
    }

    /// Creates a runner with explicit settings.
    pub fn with_settings(
        user: impl Into<String>,
        pass: impl Into<String>,
        settings: SteamCmdSettings,
    ) -> Self {
        Self::with_launcher(user, pass, settings, SystemLauncher)
    }
}

impl<L: Launcher> SteamCmd<L> {
    /// Creates a runner that launches processes through `launcher`.
    pub fn with_launcher(
        user: impl Into<String>,
        pass: impl Into<String>,
        settings: SteamCmdSettings,
        launcher: L,
    ) -> Self {
        Self {
            settings,
            credentials: Credentials::new(user, pass),
            launcher,
            lock: Mutex::new(()),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.settings.debug = debug;
        self
    }

    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings.install_dir = dir.into();
        self
    }

    pub fn with_app_base_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings.app_base_path = dir.into();
        self
    }

    /// Overrides the executable. A bare name is resolved on `PATH`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.settings.program = program.into();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn login_user(&self) -> &str {
        self.credentials.user()
    }

    pub fn login_pass(&self) -> &str {
        self.credentials.pass()
    }

    pub fn install_dir(&self) -> &Path {
        &self.settings.install_dir
    }

    pub fn app_base_path(&self) -> &Path {
        &self.settings.app_base_path
    }

    pub fn program(&self) -> &Path {
        &self.settings.program
    }

    pub fn is_debug(&self) -> bool {
        self.settings.debug
    }

    /// Checks that the credentials can log in.
    pub async fn check_login(&self) -> Result<(), SteamCmdError> {
        self.run(&[]).await
    }

    /// Checks that the SteamCMD executable can be found.
    ///
    /// Only existence is verified. SteamCMD itself additionally needs curl,
    /// bzip2, tar and 32-bit libgcc on Linux.
    pub fn ensure_installed(&self) -> Result<PathBuf, SteamCmdError> {
        let path = which::which(&self.settings.program)?;
        debug!(path = %path.display(), "steamcmd found");
        Ok(path)
    }

    /// Returns the directory an app would be installed into.
    pub fn app_path(&self, id: u32) -> PathBuf {
        self.settings.app_base_path.join(id.to_string())
    }

    /// Installs or updates an app.
    pub async fn install_update_app(&self, id: u32) -> Result<(), SteamCmdError> {
        info!(app_id = id, "installing/updating app");
        self.run(&["+app_update".into(), id.to_string()]).await?;
        info!(app_id = id, "app up to date");
        Ok(())
    }

    /// Returns the installed build ID of an app. Not implemented yet.
    pub async fn app_installed_version(&self, _id: u32) -> Result<u32, SteamCmdError> {
        Err(SteamCmdError::NotImplemented)
    }

    /// Returns the latest public-branch build ID of an app. Not implemented yet.
    pub async fn app_available_version(&self, _id: u32) -> Result<u32, SteamCmdError> {
        Err(SteamCmdError::NotImplemented)
    }

    /// Downloads a workshop item of an app.
    pub async fn download_workshop_mod(
        &self,
        app_id: u32,
        item_id: u64,
    ) -> Result<(), SteamCmdError> {
        info!(app_id, item_id, "downloading workshop item");
        self.run(&[
            "+workshop_download_item".into(),
            app_id.to_string(),
            item_id.to_string(),
        ])
        .await?;
        info!(app_id, item_id, "workshop item downloaded");
        Ok(())
    }

    // Exit status 8 means "no subscription"; it is not special-cased.
    async fn run(&self, params: &[String]) -> Result<(), SteamCmdError> {
        let args = build_args(&self.credentials, params);

        let _guard = self.lock.lock().await;

        debug!(
            program = %self.settings.program.display(),
            args = ?redact(&args, &self.credentials),
            passthrough = self.settings.debug,
            "launching steamcmd"
        );

        let status = self
            .launcher
            .launch(&self.settings.program, &args, self.settings.debug)
            .await
            .map_err(|e| {
                warn!(error = %e, "failed to launch steamcmd");
                SteamCmdError::RawCommand(RunFailure::Launch(e))
            })?;

        if !status.success() {
            warn!(exit_code = ?status.code(), "steamcmd failed");
            return Err(SteamCmdError::RawCommand(RunFailure::Exit(status)));
        }

        Ok(())
    }
}

/// Builds the full argument vector: login clause, `params`, then `+quit`.
pub fn build_args(credentials: &Credentials, params: &[String]) -> Vec<String> {
    let mut args = credentials.login_args();
    args.extend_from_slice(params);
    args.push("+quit".into());
    args
}

/// Converts a version query result into a `(version, error)` pair with a
/// zero version on failure.
pub fn version_or_zero(result: Result<u32, SteamCmdError>) -> (u32, Option<SteamCmdError>) {
    match result {
        Ok(version) => (version, None),
        Err(e) => (0, Some(e)),
    }
}

fn redact(args: &[String], credentials: &Credentials) -> Vec<String> {
    if credentials.is_anonymous() {
        return args.to_vec();
    }
    // Password is the third token of `+login <user> <pass>`.
    args.iter()
        .enumerate()
        .map(|(i, a)| if i == 2 { REDACTED.to_string() } else { a.clone() })
        .collect()
}

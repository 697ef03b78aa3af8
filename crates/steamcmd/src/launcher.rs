//! Process launching seam.
//!
//! [`SteamCmd`](crate::SteamCmd) never spawns processes itself; it hands the
//! assembled argument vector to a [`Launcher`]. [`SystemLauncher`] is the
//! real implementation; tests substitute fakes that record invocations.

use std::fmt;
use std::future::Future;
use std::io;
use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;

/// Exit status of a launched process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: Option<i32>,
}

impl ExitStatus {
    /// Status for a process that exited with `code`.
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Status for a process terminated without an exit code (e.g. by a signal).
    pub fn terminated() -> Self {
        Self { code: None }
    }

    /// Returns `true` on a zero exit code.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs an external program to completion.
pub trait Launcher: Send + Sync {
    /// Launches `program` with `args` and waits for it to exit.
    ///
    /// When `passthrough` is set, the child's stdout/stderr are connected to
    /// the caller's; otherwise they are discarded.
    fn launch<'a>(
        &'a self,
        program: &'a Path,
        args: &'a [String],
        passthrough: bool,
    ) -> Pin<Box<dyn Future<Output = io::Result<ExitStatus>> + Send + 'a>>;
}

/// Launches real processes via `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch<'a>(
        &'a self,
        program: &'a Path,
        args: &'a [String],
        passthrough: bool,
    ) -> Pin<Box<dyn Future<Output = io::Result<ExitStatus>> + Send + 'a>> {
        Box::pin(async move {
            let (stdout, stderr) = if passthrough {
                (Stdio::inherit(), Stdio::inherit())
            } else {
                (Stdio::null(), Stdio::null())
            };

            let status = tokio::process::Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .stdout(stdout)
                .stderr(stderr)
                .status()
                .await?;

            Ok::<_, io::Error>(status.into())
        })
    }
}

use std::path::PathBuf;

/// Executable name looked up on the search path.
pub const STEAMCMD_BIN: &str = "steamcmd";

/// Paths and flags for a [`SteamCmd`](crate::SteamCmd) instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamCmdSettings {
    /// Where SteamCMD keeps its own state.
    pub install_dir: PathBuf,
    /// Parent directory of per-app installation directories.
    pub app_base_path: PathBuf,
    /// Executable name or path.
    pub program: PathBuf,
    /// Pass SteamCMD's stdout/stderr through to ours.
    pub debug: bool,
}

impl SteamCmdSettings {
    /// Settings rooted at `install_dir`, with apps under
    /// `install_dir/steamapps/common`.
    pub fn with_install_dir(install_dir: impl Into<PathBuf>) -> Self {
        let install_dir = install_dir.into();
        Self {
            app_base_path: install_dir.join("steamapps").join("common"),
            install_dir,
            program: PathBuf::from(STEAMCMD_BIN),
            debug: false,
        }
    }
}

impl Default for SteamCmdSettings {
    fn default() -> Self {
        Self::with_install_dir(std::env::temp_dir().join("steamcmd"))
    }
}

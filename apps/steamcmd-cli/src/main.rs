//! Command-line front end for the SteamCMD runner.

mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use steamcmd::SteamCmd;
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "steamcmd-cli")]
#[command(about = "Install and update dedicated server content through SteamCMD")]
#[command(version)]
struct Args {
    /// Steam account name (anonymous when omitted)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Steam account password
    #[arg(long, global = true)]
    pass: Option<String>,

    /// Directory where SteamCMD keeps its state
    #[arg(long, global = true)]
    install_dir: Option<PathBuf>,

    /// Parent directory of per-app installations
    #[arg(long, global = true)]
    app_base_path: Option<PathBuf>,

    /// Show SteamCMD's own output
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (defaults to ~/.config/steamcmd-runner/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the credentials can log in
    CheckLogin,
    /// Check that steamcmd is on the search path
    EnsureInstalled,
    /// Print the directory an app would be installed into
    AppPath { id: u32 },
    /// Install or update an app
    Install { id: u32 },
    /// Download a workshop item
    Workshop { app_id: u32, item_id: u64 },
    /// Print the installed build ID of an app
    InstalledVersion { id: u32 },
    /// Print the latest available build ID of an app
    AvailableVersion { id: u32 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => config::config_file_path()?,
    };
    let config = merge(CliConfig::load(&config_path)?, &args);

    let scmd = SteamCmd::with_settings(&config.user, &config.pass, config.settings());
    tracing::debug!(
        user = scmd.login_user(),
        install_dir = %scmd.install_dir().display(),
        "steamcmd runner ready"
    );

    match args.command {
        Command::CheckLogin => {
            scmd.check_login().await?;
            println!("login ok ({})", scmd.login_user());
        }
        Command::EnsureInstalled => {
            let path = scmd.ensure_installed()?;
            println!("{}", path.display());
        }
        Command::AppPath { id } => println!("{}", scmd.app_path(id).display()),
        Command::Install { id } => scmd.install_update_app(id).await?,
        Command::Workshop { app_id, item_id } => {
            scmd.download_workshop_mod(app_id, item_id).await?
        }
        Command::InstalledVersion { id } => {
            println!("{}", scmd.app_installed_version(id).await?)
        }
        Command::AvailableVersion { id } => {
            println!("{}", scmd.app_available_version(id).await?)
        }
    }

    Ok(())
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Applies command-line overrides on top of the file config.
fn merge(mut config: CliConfig, args: &Args) -> CliConfig {
    if let Some(user) = &args.user {
        config.user = user.clone();
    }
    if let Some(pass) = &args.pass {
        config.pass = pass.clone();
    }
    if let Some(dir) = &args.install_dir {
        config.install_dir = Some(dir.clone());
    }
    if let Some(dir) = &args.app_base_path {
        config.app_base_path = Some(dir.clone());
    }
    config.debug |= args.debug;
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_config() {
        let file = CliConfig {
            user: "bob".into(),
            pass: "hunter2".into(),
            install_dir: Some(PathBuf::from("/srv/steamcmd")),
            ..Default::default()
        };
        let args = Args::parse_from([
            "steamcmd-cli",
            "--user",
            "alice",
            "--app-base-path",
            "/games",
            "install",
            "440",
        ]);

        let merged = merge(file, &args);
        assert_eq!(merged.user, "alice");
        assert_eq!(merged.pass, "hunter2");
        assert_eq!(merged.install_dir, Some(PathBuf::from("/srv/steamcmd")));
        assert_eq!(merged.app_base_path, Some(PathBuf::from("/games")));
        assert!(!merged.debug);
    }

    #[test]
    fn parses_workshop_subcommand() {
        let args = Args::parse_from(["steamcmd-cli", "workshop", "107410", "180077636", "--debug"]);
        assert!(args.debug);
        assert!(matches!(
            args.command,
            Command::Workshop {
                app_id: 107410,
                item_id: 180077636
            }
        ));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

use std::fs::File;
use std::io;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use waresys::RadioMode;
use waresys::core::config::{self, EnvOverrides, ResolvedConfig};
use waresys::core::session::{self, Role, Session};
use waresys::tui;

#[derive(Parser)]
#[command(name = "waresys", about = "Warehouse inventory client")]
struct Args {
    /// Short-range radio (NFC) detection
    #[arg(long, value_enum)]
    nfc: Option<RadioMode>,

    /// Start on the default section instead of the one shown at last exit
    #[arg(long)]
    fresh: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Store the account to sign in with
    Login {
        name: String,
        /// Sign in with the administrator role
        #[arg(long)]
        admin: bool,
    },
    /// Forget the stored account
    Logout,
}

fn login(config: &ResolvedConfig, name: String, admin: bool) -> io::Result<()> {
    let role = if admin { Role::Admin } else { Role::Standard };
    let account = Session::new(name, role);
    session::save_account(&config.account_path, &account).map_err(io::Error::other)?;
    println!("Signed in as {} ({})", account.identity, role.label());
    Ok(())
}

fn logout(config: &ResolvedConfig) -> io::Result<()> {
    if session::clear_account(&config.account_path).map_err(io::Error::other)? {
        println!("Signed out");
    } else {
        println!("Nobody was signed in");
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to waresys.log in current directory.
    // Trace until the config has picked a level.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("waresys.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = config::load_config()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let config = config::resolve(&file_config, &EnvOverrides::from_env(), args.nfc, args.fresh);
    log::set_max_level(config.log_level);

    log::info!("Waresys starting up, radio mode: {:?}", config.radio);

    match args.command {
        Some(Command::Login { name, admin }) => login(&config, name, admin),
        Some(Command::Logout) => logout(&config),
        None => tui::run(config),
    }
}

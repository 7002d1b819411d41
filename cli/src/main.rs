use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use session::SessionStore;
use session::api::AccessFilters;
use smartcar_cli::commands::{self, GetTarget};
use smartcar_cli::{Backend, CliError, FileStorage};
use tracing_subscriber::EnvFilter;


#[derive(Parser, Debug)]
#[command(name = "smartcar", about = "SmartCar vehicle-access panel CLI")]
struct Cli {
    #[arg(long, env = "SMARTCAR_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[arg(long, env = "SMARTCAR_SESSION_FILE", default_value = ".smartcar-session.json")]
    session_file: PathBuf,

    #[arg(long, env = "SMARTCAR_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and store the session.
    Login {
        #[arg(long)]
        usuario: String,
        #[arg(long, env = "SMARTCAR_CLAVE", hide_env_values = true)]
        clave: String,
        /// Administrador or Vigilante.
        #[arg(long)]
        rol: Option<String>,
    },
    /// Forget the stored session.
    Logout,
    /// Show the stored session.
    Whoami,
    /// Fetch a resource, or `placa <PLACA>` for a plate lookup.
    Get(GetArgs),
}

#[derive(Args, Debug)]
struct GetArgs {
    resource: String,

    /// Plate to look up when the resource is `placa`.
    plate: Option<String>,

    #[arg(long)]
    placa: Option<String>,
    #[arg(long)]
    tipo: Option<String>,
    #[arg(long)]
    desde: Option<String>,
    #[arg(long)]
    hasta: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = SessionStore::new(FileStorage::new(&cli.session_file));

    match cli.command {
        Command::Login { usuario, clave, rol } => {
            let backend = Backend::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
            let rol = commands::parse_role(rol.as_deref())?;
            let landing = commands::login(&backend, &store, &usuario, &clave, rol).await?;
            println!("{}", session::auth::LOGIN_SUCCESS_MESSAGE);
            println!("{landing}");
        }
        Command::Logout => {
            println!("{}", commands::logout(&store));
        }
        Command::Whoami => {
            let current = commands::whoami(&store)?;
            println!("{} ({})", current.user.nombre, current.user.rol);
            println!("{}", session::routes::landing_path(current.user.rol));
        }
        Command::Get(args) => {
            let backend = Backend::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
            let filters = AccessFilters { placa: args.placa, tipo: args.tipo, desde: args.desde, hasta: args.hasta };
            let target = GetTarget::parse(&args.resource, args.plate.as_deref(), filters)?;
            match commands::get(&backend, &store, &target).await {
                Ok(value) => print_json(&value)?,
                Err(e) => {
                    if e.is_session_invalid() {
                        eprintln!("session expired; run `smartcar login` again");
                    }
                    return Err(e);
                }
            }
        }
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

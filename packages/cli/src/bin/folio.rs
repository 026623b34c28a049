use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::*;
use folio_cli::{logging::init_logging, run_server, Config};
use folio_projects::DbState;

mod cli;

use cli::users::{handle_user_command, UserCommands};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - portfolio projects backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
        /// SQLite database file (overrides DATABASE_PATH)
        #[arg(long)]
        database: Option<PathBuf>,
        /// Directory holding uploaded images (overrides IMAGES_STATIC_PATH)
        #[arg(long)]
        images: Option<PathBuf>,
    },
    /// Manage users
    #[command(subcommand)]
    User(UserCommands),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;

    match command {
        Commands::Serve {
            port,
            database,
            images,
        } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(database) = database {
                config.database_path = database;
            }
            if let Some(images) = images {
                config.images_dir = images;
            }

            init_logging();
            run_server(config).await
        }
        Commands::User(user_command) => {
            let db = DbState::init(
                config.database_path,
                config.images_dir,
                config.token_validity_secs,
            )
            .await?;
            handle_user_command(user_command, &db).await
        }
    }
}

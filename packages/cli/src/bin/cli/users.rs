use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use folio_projects::DbState;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a user that can log in
    Create {
        /// Login name
        #[arg(short, long)]
        login: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    List,
}

pub async fn handle_user_command(command: UserCommands, db: &DbState) -> anyhow::Result<()> {
    match command {
        UserCommands::Create { login, password } => create_user(db, &login, &password).await,
        UserCommands::List => list_users(db).await,
    }
}

async fn create_user(db: &DbState, login: &str, password: &str) -> anyhow::Result<()> {
    let user = db.user_storage.create_user(login, password).await?;
    println!(
        "{} Created user {} (id {})",
        "✓".green().bold(),
        user.login.cyan(),
        user.id
    );
    Ok(())
}

async fn list_users(db: &DbState) -> anyhow::Result<()> {
    let users = db.user_storage.list_users().await?;

    if users.is_empty() {
        println!("{}", "No users found.".yellow());
        println!("Create one with: folio user create --login <LOGIN> --password <PASSWORD>");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Login", "Created"]);

    for user in users {
        table.add_row(vec![
            user.id.to_string(),
            user.login,
            user.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}

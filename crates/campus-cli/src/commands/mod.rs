//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

/// Campus - university CRUD backend
#[derive(Parser)]
#[command(name = "campus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long, env = "CAMPUS_DB", default_value = "campus.db", global = true)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and bring the schema up to date
    Init,

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "CAMPUS_PORT", default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Init => init(&self.db),
            Commands::Serve(args) => serve(&self.db, args).await,
        }
    }
}

fn init(db_path: &std::path::Path) -> Result<()> {
    campus_db::init_pool(db_path)?;
    println!("{} database ready at {}", "✓".green(), db_path.display());
    Ok(())
}

async fn serve(db_path: &std::path::Path, args: ServeArgs) -> Result<()> {
    let pool = Arc::new(campus_db::init_pool(db_path)?);

    println!();
    println!("  {} {}", "Campus".cyan().bold(), "Web Server".bold());
    println!("  db: {}", db_path.display());
    println!();

    campus_web::run_server(pool, &args.host, args.port).await
}

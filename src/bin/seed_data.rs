//! Seed data script - populates a banking database with fixture owners and accounts
//!
//! Run with: cargo run --bin seed-data -- --database-url sqlite://banking.db?mode=rwc
//!
//! This creates:
//! - 4 owners (two named Mustermann, two born in the 1960s)
//! - 6 accounts linked to them

use clap::Parser;
use std::sync::Arc;
use tracing::info;

use banking_api::{
    db::{establish_connection_with_config, run_migrations, DbConfig},
    seed,
};

#[derive(Parser)]
#[command(name = "seed-data", about = "Populate a banking database with fixture data", version)]
struct Cli {
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://banking.db?mode=rwc",
        help = "Database to seed"
    )]
    database_url: String,

    #[arg(long, help = "Skip running migrations before inserting")]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    info!("=== Banking API Seed Data ===");

    let config = DbConfig {
        url: cli.database_url.clone(),
        max_connections: 5,
        ..Default::default()
    };

    info!("Connecting to database: {}", cli.database_url);
    let db = establish_connection_with_config(&config).await?;
    info!("Connected!");

    if !cli.skip_migrations {
        run_migrations(&db).await?;
    }

    let rows = seed::insert_seed(Arc::new(db)).await?;
    info!("  Inserted {} rows", rows);

    info!("=== Seed Data Complete ===");
    info!("Try these API calls:");
    info!("  curl http://localhost:8080/banking/owners");
    info!("  curl 'http://localhost:8080/banking/owners/birthdate?from=1960-01-01&to=1969-12-31'");
    info!("  curl http://localhost:8080/banking/owners/10000000-0000-0000-0000-000000000000/accounts");
    info!("");
    info!("Or explore interactively at: http://localhost:8080/swagger-ui");

    Ok(())
}

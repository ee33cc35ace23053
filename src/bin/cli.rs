use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use schoolhouse::cli::seed_schools;
use schoolhouse::modules::schools::{PgSchoolRepository, SchoolServiceImpl};
use schoolhouse::schoolhouse_auth::create_access_token;
use schoolhouse::schoolhouse_config::{DatabaseConfig, JwtConfig};
use schoolhouse::schoolhouse_db::{PgPool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "schoolhouse-cli")]
#[command(about = "Schoolhouse CLI - Administrative tools for Schoolhouse", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue an access token for the mutating school endpoints
    IssueToken {
        /// Identity recorded in the token subject
        #[arg(short = 's', long)]
        subject: String,

        /// Display name recorded in the token
        #[arg(short = 'n', long, default_value = "")]
        name: String,
    },
    /// Apply pending database migrations
    Migrate,
    /// Seed the database with fake schools
    Seed {
        /// Number of schools to create
        #[arg(short = 'c', long, default_value = "20")]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schoolhouse=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::IssueToken { subject, name } => {
            let token = create_access_token(&subject, &name, &JwtConfig::from_env())
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("{}", token);
        }
        Commands::Migrate => {
            let pool = connect().await?;
            run_migrations(&pool)
                .await
                .context("Failed to apply migrations")?;
            println!("✅ Migrations applied");
        }
        Commands::Seed { count } => {
            let pool = connect().await?;
            let service = SchoolServiceImpl::new(Arc::new(PgSchoolRepository::new(pool)));
            let schools = seed_schools(&service, count)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("✅ Seeded {} schools", schools.len());
        }
    }

    Ok(())
}

async fn connect() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env()?;
    init_db_pool(&config)
        .await
        .context("Failed to connect to database")
}

//! Load the demo accounts and welcome page into the configured database.
//!
//! Safe to run repeatedly: existing rows are left untouched.

use anyhow::Context;
use teamwiki_core::roles::Role;
use teamwiki_db::seed::{seed_demo, SeedAccount};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teamwiki_api::auth::password::hash_password;

/// `(name, email, role, password)` for each demo account.
const DEMO_ACCOUNTS: [(&str, &str, Role, &str); 3] = [
    ("Admin", "admin@example.com", Role::Admin, "admin123"),
    ("Editor", "editor@example.com", Role::Editor, "editor123"),
    ("Viewer", "viewer@example.com", Role::Viewer, "viewer123"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teamwiki_db=info,teamwiki_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = teamwiki_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    teamwiki_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let mut accounts = Vec::with_capacity(DEMO_ACCOUNTS.len());
    for (name, email, role, password) in DEMO_ACCOUNTS {
        let password_hash = hash_password(password)
            .map_err(|e| anyhow::anyhow!("Failed to hash password for {email}: {e}"))?;
        accounts.push(SeedAccount {
            name,
            email,
            role,
            password_hash,
        });
    }

    let report = seed_demo(&pool, &accounts)
        .await
        .context("Failed to seed demo data")?;

    tracing::info!(
        users_created = report.users_created,
        page_id = report.page_id,
        "Seed finished"
    );
    pool.close().await;
    Ok(())
}

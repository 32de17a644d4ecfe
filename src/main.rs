use acct_store::config::Config;
use acct_store::{AccountTypeRepository, UserRepository};
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_path = %cfg.database_path.display(),
        loglevel = %cfg.loglevel
    );

    acct_store::db::provision(&cfg.database_path).await?;

    let account_types = AccountTypeRepository::new(&cfg.database_path).list_all().await?;
    let users = UserRepository::new(&cfg.database_path).list_all().await?;

    info!(
        account_types = account_types.len(),
        users = users.len(),
        "database ready"
    );
    Ok(())
}

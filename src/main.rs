use anyhow::Result;
use clap::Parser;

mod cfg;

#[derive(Debug, Parser)]
#[command(name = "geoaddr", version, about = "Address directory with geo-radius filtering")]
struct Args {
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = cfg::Cfg::from_env_or_default();
    if let Some(db_url) = args.db_url {
        cfg.db_url = db_url;
    }

    log::info!("Opening database {}", cfg.db_url);
    let connections =
        geoaddr_db_sqlite::Connections::init(&cfg.db_url, cfg.db_connection_pool_size)?;
    geoaddr_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    geoaddr_webserver::run(connections, args.enable_cors, env!("CARGO_PKG_VERSION")).await;
    Ok(())
}

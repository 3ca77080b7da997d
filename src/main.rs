use std::process::ExitCode;

use clap::Parser;
use config::{Config, Environment, File};
use deals_catalog::forms::catalog::CatalogQueryForm;
use deals_catalog::models::config::CatalogConfig;
use deals_catalog::repository::DieselRepository;
use deals_catalog::services::catalog::show_catalog;
use pushkind_common::db::establish_connection_pool;

/// Print the filtered and sorted deals listing as JSON.
#[derive(Debug, Parser)]
#[command(name = "deals-catalog", version)]
struct Args {
    /// Free text matched against title, description and category.
    #[arg(short, long)]
    search: Option<String>,
    /// Category slug to filter by; roots include their subcategories.
    #[arg(short, long)]
    category: Option<String>,
    /// One of `hottest`, `newest`, `commented`.
    #[arg(long)]
    sort: Option<String>,
    /// Base name of the configuration file (YAML).
    #[arg(long, env = "APP_CONFIG", default_value = "config/default")]
    config: String,
}

fn load_config(base: &str) -> Result<CatalogConfig, config::ConfigError> {
    Config::builder()
        .add_source(File::with_name(base))
        .add_source(File::with_name("config/local").required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();

    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let repo = DieselRepository::new(pool);

    let form = CatalogQueryForm {
        q: args.search,
        category: args.category,
        sort: args.sort,
    };
    let payload = match form.into_payload(config.default_sort) {
        Ok(payload) => payload,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let view = match show_catalog(payload, &repo) {
        Ok(view) => view,
        Err(e) => {
            log::error!("Failed to build catalog listing: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&view) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize catalog listing: {e}");
            ExitCode::FAILURE
        }
    }
}

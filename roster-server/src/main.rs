use clap::{Parser, Subcommand};
use roster::{ElasticClient, EngineConfig, IndexClient};
use roster_http::server::{init_tracing, DEFAULT_BIND_ADDR};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "roster")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Overrides ELASTIC_SEARCH_BASE_URL / ELASTIC_SEARCH.BASE_URL
    #[arg(long)]
    engine_url: Option<String>,
    #[arg(long, env = "ROSTER_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind_addr: String,
}

#[derive(Subcommand)]
enum Command {
    /// Insert synthetic employees with ids in [start, end)
    Seed {
        #[arg(long, default_value_t = 1)]
        start: i64,
        #[arg(long)]
        end: i64,
    },
}

fn engine_config(cli: &Cli) -> roster::Result<EngineConfig> {
    match &cli.engine_url {
        Some(url) => {
            let timeout = EngineConfig::timeout_from_env()?;
            Ok(EngineConfig::new(url.clone())?.with_timeout(timeout))
        }
        None => EngineConfig::from_env(),
    }
}

async fn run_seed(
    engine: &EngineConfig,
    start: i64,
    end: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let client: Arc<dyn IndexClient> = Arc::new(ElasticClient::new(engine));
    let services = roster_http::bootstrap(client).await?;
    services.sync.seed_employees(start, end).await?;
    tracing::info!(start, end, "Seeded employees");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; the variables may come from the environment.
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let engine = match engine_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Some(Command::Seed { start, end }) => run_seed(&engine, start, end).await,
        None => roster_http::serve(&engine, &cli.bind_addr)
            .await
            .map_err(Into::into),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;

    #[test]
    #[serial]
    fn test_engine_url_flag_keeps_env_timeout() {
        std::env::remove_var("ELASTIC_SEARCH_BASE_URL");
        std::env::set_var("ENGINE_TIMEOUT_SECS", "5");

        let cli = Cli::parse_from(["roster", "--engine-url", "http://es:9200/"]);
        let config = engine_config(&cli).unwrap();
        assert_eq!(config.base_url, "http://es:9200");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));

        std::env::set_var("ENGINE_TIMEOUT_SECS", "never");
        assert!(engine_config(&cli).is_err());

        std::env::remove_var("ENGINE_TIMEOUT_SECS");
        assert_eq!(engine_config(&cli).unwrap().timeout, None);
    }

    #[test]
    #[serial]
    fn test_engine_url_flag_overrides_env_url() {
        std::env::set_var("ELASTIC_SEARCH_BASE_URL", "http://from-env:9200");
        std::env::remove_var("ENGINE_TIMEOUT_SECS");

        let cli = Cli::parse_from([
            "roster",
            "--engine-url",
            "http://flag:9200",
            "seed",
            "--end",
            "3",
        ]);
        assert_eq!(engine_config(&cli).unwrap().base_url, "http://flag:9200");

        std::env::remove_var("ELASTIC_SEARCH_BASE_URL");
    }
}

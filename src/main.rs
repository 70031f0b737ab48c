use chrono::Utc;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use clementine_helpers::{format_date, format_time, AppConfig, DataClient};

const USAGE: &str = "usage: clementine-fetch <endpoint>...";

fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    for directive in ["clementine_helpers=info", "clementine_fetch=info", "reqwest=warn"] {
        match directive.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("Ignoring log directive {}: {}", directive, e),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_tracing();

    let endpoints: Vec<String> = std::env::args().skip(1).collect();
    if endpoints.is_empty() {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    }

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::from(2);
        }
    };
    debug!("Loaded configuration: {:?}", config);

    let client = match DataClient::from_config(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return ExitCode::from(2);
        }
    };

    let started = Utc::now();
    info!(
        "Fetching {} endpoint(s) from {} on {} at {}",
        endpoints.len(),
        config.api_url,
        format_date(started),
        format_time(started)
    );

    let mut missing = 0usize;
    for endpoint in &endpoints {
        match client.fetch_json(endpoint).await {
            Some(data) => match serde_json::to_string_pretty(&data) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    error!("Failed to render {}: {}", endpoint, e);
                    missing += 1;
                }
            },
            None => {
                println!("null");
                missing += 1;
            }
        }
    }

    if missing > 0 {
        warn!("{} of {} endpoint(s) returned no data", missing, endpoints.len());
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

use string_analyzer::config::{self, Config};
use string_analyzer::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// Initializes the tracing subscriber from the loaded configuration.
///
/// `RUST_LOG` directives are honored verbatim (e.g. `info,sqlx=warn`);
/// `LOG_FORMAT=json` switches to newline-delimited JSON output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::new(&config.log_level);

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

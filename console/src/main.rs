use std::time::Duration;

use crm_console::{Config, CustomerApi, Session, UreqTransport};

/// Bound on every HTTP round-trip; exceeding it reads as a transport error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(base_url = config.base_url(), "starting customer admin console");

    let transport = UreqTransport::new(REQUEST_TIMEOUT);
    let api = CustomerApi::new(config.base_url(), transport);

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut session = Session::new(api, stdin, stdout);
    session.run()?;
    Ok(())
}

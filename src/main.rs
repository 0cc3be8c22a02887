use std::error::Error;

use tracing::{debug, info};

mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env before anything reads them.
    // A missing file is fine: plain environment variables work too.
    let dotenv = dotenvy::dotenv();

    telemetry::init()?;

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) => debug!(error = %err, "no .env loaded"),
    }

    info!(version = env!("CARGO_PKG_VERSION"), "starting search gateway");
    api::start().await?;

    Ok(())
}

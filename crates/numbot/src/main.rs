use std::sync::Arc;

use numbot_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), numbot_core::Error> {
    numbot_core::logging::init("numbot")?;

    let cfg = Arc::new(Config::load()?);
    tracing::debug!(safe_limit = cfg.telegram_safe_limit, "config loaded");

    numbot_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| numbot_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}

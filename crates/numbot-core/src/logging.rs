use tracing_subscriber::{fmt, EnvFilter};

use crate::{errors::Error, Result};

/// Initialize tracing for the bot.
///
/// Default: info for our crates, warn for everything else.
/// Can be overridden with `RUST_LOG`.
pub fn init(service_name: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(service_name)));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialized: {e}")))
}

fn default_directives(service_name: &str) -> String {
    let service = service_name.replace('-', "_");
    format!("warn,numbot_core=info,numbot_telegram=info,{service}=info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_use_crate_target_names() {
        let d = default_directives("numbot-dev");
        assert!(d.starts_with("warn,"));
        assert!(d.contains("numbot_dev=info"));
        assert!(EnvFilter::try_new(&d).is_ok());
    }
}

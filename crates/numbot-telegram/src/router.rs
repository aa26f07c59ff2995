use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use numbot_core::{config::Config, messaging::port::MessagingPort};

use crate::handlers;
use crate::TelegramMessenger;

/// Shared, immutable state handed to every handler.
///
/// Nothing here changes per user; each update is answered on its own.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub messenger: Arc<dyn MessagingPort>,
}

pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    match bot.get_me().await {
        Ok(me) => tracing::info!(username = %me.username(), "numbot started"),
        Err(e) => tracing::warn!(error = %e, "could not fetch bot identity"),
    }
    if cfg.telegram_allowed_users.is_empty() {
        tracing::info!("no allowlist configured, bot is public");
    } else {
        tracing::info!(users = cfg.telegram_allowed_users.len(), "allowlist enabled");
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState { cfg, messenger });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    tracing::info!("numbot stopped");
    Ok(())
}

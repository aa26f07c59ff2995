//! Telegram update handlers.
//!
//! Each teloxide endpoint converts the raw update into the cross-messenger
//! [`IncomingUpdate`] model and hands it to [`dispatch`], which:
//! - checks the allowlist
//! - routes commands, dates and button presses
//! - replies through the messaging port

use std::sync::Arc;

use teloxide::prelude::*;

use numbot_core::{
    domain::{ChatId, UserId},
    formatting::split_message,
    messaging::types::{CallbackQuery, Command, IncomingUpdate, TextMessage},
    security::is_authorized,
    Result,
};

use crate::router::AppState;
use crate::templates;

mod callback;
mod commands;
mod text;

pub async fn handle_callback(
    q: teloxide::types::CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let Some(message) = q.message.as_ref() else {
        // Inline-mode callbacks carry no chat; nothing to reply to.
        answer_callback(&state, &q.id, None).await;
        return Ok(());
    };

    let chat_id = ChatId(message.chat.id.0);
    let update = IncomingUpdate::Callback(CallbackQuery {
        chat_id,
        user_id: UserId(q.from.id.0 as i64),
        callback_id: q.id.clone(),
        data: q.data.clone().unwrap_or_default(),
    });

    if let Err(e) = dispatch(&state, update).await {
        tracing::error!(chat_id = chat_id.0, error = %e, "callback handling failed");
    }
    Ok(())
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let update = update_from_message(&msg);
    if let Err(e) = dispatch(&state, update).await {
        tracing::error!(chat_id = msg.chat.id.0, error = %e, "message handling failed");
    }
    Ok(())
}

fn update_from_message(msg: &Message) -> IncomingUpdate {
    let chat_id = ChatId(msg.chat.id.0);
    let user_id = msg.from().map(|u| UserId(u.id.0 as i64));

    match (msg.text(), user_id) {
        (Some(text), Some(user_id)) if text.starts_with('/') => {
            IncomingUpdate::Command(Command::parse(chat_id, user_id, text))
        }
        (Some(text), Some(user_id)) => IncomingUpdate::Text(TextMessage {
            chat_id,
            user_id,
            text: text.to_string(),
        }),
        _ => IncomingUpdate::Other { chat_id, user_id },
    }
}

/// Route one update. Stateless: the reply depends only on the update itself.
pub async fn dispatch(state: &AppState, update: IncomingUpdate) -> Result<()> {
    if !is_authorized(update.user_id(), &state.cfg.telegram_allowed_users) {
        tracing::warn!(
            chat_id = update.chat_id().0,
            user_id = ?update.user_id().map(|u| u.0),
            "unauthorized update"
        );
        return match update {
            IncomingUpdate::Callback(q) => {
                answer_callback(state, &q.callback_id, Some("Unauthorized")).await;
                Ok(())
            }
            other => send_html_split(state, other.chat_id(), &templates::unauthorized()).await,
        };
    }

    match update {
        IncomingUpdate::Command(cmd) => commands::handle_command(state, cmd).await,
        IncomingUpdate::Text(msg) => text::handle_text(state, msg).await,
        IncomingUpdate::Callback(q) => callback::handle_callback(state, q).await,
        IncomingUpdate::Other { chat_id, .. } => {
            send_html_split(state, chat_id, &templates::date_prompt()).await
        }
    }
}

/// Stop the client's button spinner. A failed answer is logged, not fatal.
async fn answer_callback(state: &AppState, callback_id: &str, text: Option<&str>) {
    if let Err(e) = state
        .messenger
        .answer_callback_query(callback_id, text)
        .await
    {
        tracing::warn!(callback_id, error = %e, "failed to answer callback query");
    }
}

/// Send HTML, split into several messages when over the configured limit.
async fn send_html_split(state: &AppState, chat_id: ChatId, html: &str) -> Result<()> {
    let limit = state
        .cfg
        .telegram_safe_limit
        .min(state.messenger.capabilities().max_message_len);
    for chunk in split_message(html, limit) {
        state.messenger.send_html(chat_id, &chunk).await?;
    }
    Ok(())
}

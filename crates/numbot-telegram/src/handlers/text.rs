use numbot_core::{
    compute, domain::ChatId, messaging::types::TextMessage, NumerologyResult, Result,
};

use crate::router::AppState;
use crate::templates;

use super::send_html_split;

/// Plain text is treated as a birth date.
pub async fn handle_text(state: &AppState, msg: TextMessage) -> Result<()> {
    let text = msg.text.trim();
    if text.is_empty() {
        return Ok(());
    }

    if text.chars().count() != 10 {
        return send_html_split(state, msg.chat_id, &templates::wrong_length()).await;
    }

    match compute(text) {
        Ok(result) => send_numbers(state, msg.chat_id, text, &result).await,
        Err(e) => {
            tracing::debug!(chat_id = msg.chat_id.0, error = %e, "rejected date");
            send_html_split(state, msg.chat_id, &templates::date_error(&e)).await
        }
    }
}

async fn send_numbers(
    state: &AppState,
    chat_id: ChatId,
    date: &str,
    result: &NumerologyResult,
) -> Result<()> {
    tracing::info!(
        chat_id = chat_id.0,
        soul = result.soul,
        destiny = result.destiny,
        purpose = result.purpose,
        "computed numbers"
    );

    for html in templates::numbers(date, result) {
        send_html_split(state, chat_id, &html).await?;
    }
    Ok(())
}

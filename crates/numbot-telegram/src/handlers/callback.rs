use numbot_core::{messaging::types::CallbackQuery, Result};

use crate::router::AppState;
use crate::templates;

use super::{answer_callback, send_html_split};

pub async fn handle_callback(state: &AppState, q: CallbackQuery) -> Result<()> {
    if q.data != templates::VEDIC_CALLBACK {
        tracing::debug!(data = %q.data, "unknown callback data");
        answer_callback(state, &q.callback_id, Some("Unknown action")).await;
        return Ok(());
    }

    // Answer first so the client stops its spinner.
    answer_callback(state, &q.callback_id, None).await;
    send_html_split(state, q.chat_id, &templates::vedic_prompt()).await
}

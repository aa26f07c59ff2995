use numbot_core::{
    messaging::types::{Command, InlineKeyboard},
    Result, VedicForecast,
};

use crate::router::AppState;
use crate::{pdf, templates};

use super::send_html_split;

pub async fn handle_command(state: &AppState, cmd: Command) -> Result<()> {
    match cmd.name.as_str() {
        "start" => handle_start(state, &cmd).await,
        "help" => send_html_split(state, cmd.chat_id, &templates::help()).await,
        "vedic" => handle_vedic(state, &cmd).await,
        other => {
            tracing::debug!(command = other, "unknown command");
            send_html_split(state, cmd.chat_id, &templates::unknown_command(other)).await
        }
    }
}

async fn handle_start(state: &AppState, cmd: &Command) -> Result<()> {
    let greeting = templates::greeting();
    let caps = state.messenger.capabilities();

    let photo_sent = match state.cfg.start_photo_path.as_deref() {
        Some(_) if !caps.supports_photos => false,
        Some(path) if path.is_file() => {
            match state.messenger.send_photo(cmd.chat_id, path, &greeting).await {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "start photo failed");
                    false
                }
            }
        }
        Some(path) => {
            tracing::warn!(path = %path.display(), "start photo not found");
            false
        }
        None => false,
    };
    if !photo_sent {
        state.messenger.send_html(cmd.chat_id, &greeting).await?;
    }

    if !caps.supports_inline_keyboards {
        return send_html_split(state, cmd.chat_id, &templates::date_prompt()).await;
    }
    state
        .messenger
        .send_inline_keyboard(
            cmd.chat_id,
            &templates::date_prompt(),
            InlineKeyboard::single(templates::VEDIC_BUTTON, templates::VEDIC_CALLBACK),
        )
        .await?;
    Ok(())
}

async fn handle_vedic(state: &AppState, cmd: &Command) -> Result<()> {
    if cmd.args.is_empty() {
        return send_html_split(state, cmd.chat_id, &templates::vedic_prompt()).await;
    }

    let f = match VedicForecast::parse(&cmd.args) {
        Ok(f) => f,
        Err(e) => return send_html_split(state, cmd.chat_id, &templates::vedic_error(&e)).await,
    };
    tracing::info!(chat_id = cmd.chat_id.0, year = f.year, reduced = f.reduced, "vedic forecast");

    if state.messenger.capabilities().supports_documents {
        match send_vedic_pdf(state, cmd, &f).await {
            Ok(()) => return Ok(()),
            Err(e) => tracing::warn!(error = %e, "vedic pdf failed, sending text"),
        }
    }
    send_html_split(state, cmd.chat_id, &templates::vedic(&f)).await
}

async fn send_vedic_pdf(state: &AppState, cmd: &Command, f: &VedicForecast) -> Result<()> {
    let bytes = pdf::vedic_report(f)?;
    state
        .messenger
        .send_document(
            cmd.chat_id,
            &pdf::file_name(f.year),
            bytes,
            &templates::vedic_caption(f),
        )
        .await?;
    Ok(())
}

use crate::domain::{ChatId, UserId};

/// Cross-messenger incoming update model.
///
/// Telegram-specific fields live in the Telegram adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncomingUpdate {
    Command(Command),
    Text(TextMessage),
    Callback(CallbackQuery),
    /// Anything without text (stickers, photos, ...).
    Other { chat_id: ChatId, user_id: Option<UserId> },
}

impl IncomingUpdate {
    pub fn chat_id(&self) -> ChatId {
        match self {
            Self::Command(c) => c.chat_id,
            Self::Text(t) => t.chat_id,
            Self::Callback(q) => q.chat_id,
            Self::Other { chat_id, .. } => *chat_id,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Command(c) => Some(c.user_id),
            Self::Text(t) => Some(t.user_id),
            Self::Callback(q) => Some(q.user_id),
            Self::Other { user_id, .. } => *user_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub name: String,
    pub args: String,
}

impl Command {
    /// Parse `/cmd@botname arg1 ...` into a lowercase name and the trimmed rest.
    pub fn parse(chat_id: ChatId, user_id: UserId, text: &str) -> Self {
        let mut parts = text.trim().splitn(2, char::is_whitespace);
        let first = parts.next().unwrap_or("").trim();
        let args = parts.next().unwrap_or("").trim().to_string();

        let name = first
            .trim_start_matches('/')
            .split('@')
            .next()
            .unwrap_or("")
            .to_lowercase();

        Self {
            chat_id,
            user_id,
            name,
            args,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMessage {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackQuery {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub callback_id: String,
    pub data: String,
}

/// Inline keyboard (buttons), one button per row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub buttons: Vec<InlineButton>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineKeyboard {
    pub fn single(label: &str, callback_data: &str) -> Self {
        Self {
            buttons: vec![InlineButton {
                label: label.to_string(),
                callback_data: callback_data.to_string(),
            }],
        }
    }
}

/// Capabilities / feature flags of a messenger implementation.
///
/// Text is always HTML. Handlers fall back to plain messages when a richer
/// kind of reply is unsupported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessagingCapabilities {
    pub supports_photos: bool,
    pub supports_inline_keyboards: bool,
    pub supports_documents: bool,
    pub max_message_len: usize,
}

impl MessagingCapabilities {
    /// Text messages only.
    pub fn text_only(max_message_len: usize) -> Self {
        Self {
            supports_photos: false,
            supports_inline_keyboards: false,
            supports_documents: false,
            max_message_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_with_bot_suffix() {
        let c = Command::parse(ChatId(1), UserId(2), "/Vedic@numbot  12.05.2021 ");
        assert_eq!(c.name, "vedic");
        assert_eq!(c.args, "12.05.2021");
    }

    #[test]
    fn bare_command_has_empty_args() {
        let c = Command::parse(ChatId(1), UserId(2), "/start");
        assert_eq!(c.name, "start");
        assert!(c.args.is_empty());
    }

    #[test]
    fn text_only_disables_rich_replies() {
        let caps = MessagingCapabilities::text_only(4096);
        assert!(!caps.supports_photos);
        assert!(!caps.supports_inline_keyboards);
        assert!(!caps.supports_documents);
        assert_eq!(caps.max_message_len, 4096);
    }
}

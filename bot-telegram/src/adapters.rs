//! Adapters from Telegram (teloxide) types to bot_core types.

use bot_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
/// Channel posts have no sender; they map to user id 0.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        let user = match &self.0.from {
            Some(from) => TelegramUserWrapper(from).to_core(),
            None => User {
                id: 0,
                username: None,
            },
        };
        Message {
            id: self.0.id.to_string(),
            user,
            chat: Chat {
                id: self.0.chat.id.0,
            },
            content: self.0.text().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telegram_user(username: Option<&str>) -> teloxide::types::User {
        teloxide::types::User {
            id: teloxide::types::UserId(4242),
            is_bot: false,
            first_name: "Student".to_string(),
            last_name: None,
            username: username.map(str::to_string),
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    #[test]
    fn test_user_wrapper_keeps_id_and_username() {
        let user = telegram_user(Some("sv2121"));
        assert_eq!(
            TelegramUserWrapper(&user).to_core(),
            User {
                id: 4242,
                username: Some("sv2121".to_string()),
            }
        );
    }

    #[test]
    fn test_user_wrapper_without_username() {
        let user = telegram_user(None);
        assert!(TelegramUserWrapper(&user).to_core().username.is_none());
    }
}

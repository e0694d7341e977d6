//! Adapters from Telegram (teloxide) types to pdfbot_core types.
//! Depends only on teloxide and pdfbot_core type definitions.

use pdfbot_core::{Chat, ToCoreUpdate, ToCoreUser, Update, UpdateKind, User};
use teloxide::utils::command::parse_command;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn unknown_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

/// Classifies message text. Commands addressed to another bot (`/start@other_bot`) yield `None`.
pub fn classify_text(text: &str, bot_username: Option<&str>) -> Option<UpdateKind> {
    if !text.starts_with('/') {
        return Some(UpdateKind::Text(text.to_string()));
    }
    let (name, args) = parse_command(text, bot_username.unwrap_or_default())?;
    Some(UpdateKind::Command {
        name: name.to_lowercase(),
        args: args.into_iter().map(str::to_string).collect(),
    })
}

/// Wraps a teloxide Message (plus this bot's username for command addressing).
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message, pub Option<&'a str>);

impl<'a> ToCoreUpdate for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Option<Update> {
        let msg = self.0;
        let kind = classify_text(msg.text()?, self.1)?;
        Some(Update {
            id: msg.id.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(unknown_user),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: format!("{:?}", msg.chat.kind),
            },
            kind,
            received_at: chrono::Utc::now(),
        })
    }
}

/// Wraps a teloxide CallbackQuery (inline button press).
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreUpdate for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Option<Update> {
        let q = self.0;
        let data = q.data.clone()?;
        // Replies go to the chat that showed the keyboard; fall back to the presser's private chat.
        let chat = match q.message.as_ref() {
            Some(m) => Chat {
                id: m.chat().id.0,
                chat_type: format!("{:?}", m.chat().kind),
            },
            None => Chat {
                id: q.from.id.0 as i64,
                chat_type: "private".to_string(),
            },
        };
        Some(Update {
            id: format!("cb:{}", q.id.0),
            user: TelegramUserWrapper(&q.from).to_core(),
            chat,
            kind: UpdateKind::Callback {
                query_id: q.id.0.clone(),
                data,
            },
            received_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    #[test]
    fn test_classify_plain_text() {
        assert_eq!(
            classify_text("algebra", Some("pdf_bot")),
            Some(UpdateKind::Text("algebra".to_string()))
        );
    }

    #[test]
    fn test_classify_command_with_and_without_mention() {
        let expected = Some(UpdateKind::Command {
            name: "start".to_string(),
            args: vec![],
        });
        assert_eq!(classify_text("/start", Some("pdf_bot")), expected);
        assert_eq!(classify_text("/start@pdf_bot", Some("pdf_bot")), expected);
        assert_eq!(classify_text("/start", None), expected);
    }

    #[test]
    fn test_classify_command_for_other_bot_is_dropped() {
        assert_eq!(classify_text("/start@other_bot", Some("pdf_bot")), None);
    }

    #[test]
    fn test_classify_command_args() {
        assert_eq!(
            classify_text("/search algebra notes", None),
            Some(UpdateKind::Command {
                name: "search".to_string(),
                args: vec!["algebra".to_string(), "notes".to_string()],
            })
        );
    }
}

use std::time::Duration;

/// Inline keyboards beyond this size are rejected by Telegram.
pub const DEFAULT_MENU_MAX_BUTTONS: usize = 100;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(600);

/// Knobs shared by the router's handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Result menus keep at most this many buttons; 0 disables truncation.
    pub menu_max_buttons: usize,
    /// Reply with a notice when a selected document no longer exists, instead of staying silent.
    pub notify_missing_document: bool,
    /// Idle time after which a pending search is forgotten; `None` never expires.
    pub session_ttl: Option<Duration>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            menu_max_buttons: DEFAULT_MENU_MAX_BUTTONS,
            notify_missing_document: false,
            session_ttl: Some(DEFAULT_SESSION_TTL),
        }
    }
}

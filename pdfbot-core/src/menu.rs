//! Menu renderer: ordered button lists built from static choices or query results.

use crate::callback::CallbackToken;

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub label: String,
    pub token: CallbackToken,
}

/// Single-column button list. Transient: built per response and dropped after sending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    buttons: Vec<MenuButton>,
    /// Item count before truncation, if any buttons were dropped.
    total: Option<usize>,
}

/// One button per item, input order preserved.
pub fn render<I, L>(items: I) -> Menu
where
    I: IntoIterator<Item = (L, CallbackToken)>,
    L: Into<String>,
{
    Menu {
        buttons: items
            .into_iter()
            .map(|(label, token)| MenuButton {
                label: label.into(),
                token,
            })
            .collect(),
        total: None,
    }
}

impl Menu {
    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Keeps the first `max` buttons. `max == 0` means unbounded.
    pub fn truncate(mut self, max: usize) -> Self {
        if max > 0 && self.buttons.len() > max {
            self.total = Some(self.buttons.len());
            self.buttons.truncate(max);
        }
        self
    }

    /// Original item count when [`Menu::truncate`] dropped buttons.
    pub fn truncated_from(&self) -> Option<usize> {
        self.total
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.buttons.iter().map(|b| b.label.as_str()).collect()
    }
}

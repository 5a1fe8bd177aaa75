use crate::model::{Category, List};

pub mod add_product;
pub mod archive;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod purchase;
pub mod remove_product;
pub mod rename;
pub mod update_product;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the caller: the lists it touched or
/// listed, plus user-facing messages for the UI layer to surface.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub lists: Vec<List>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_lists(mut self, lists: Vec<List>) -> Self {
        self.lists = lists;
        self
    }
}

/// A partial update for one product. Presence is encoded by `Option`:
/// `Some(0)` or `Some("")` is a provided value and gets applied, `None`
/// leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub quantity: Option<u32>,
    pub unit: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.unit.is_none()
    }
}

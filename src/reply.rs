//! Chat reply payloads derived from entries and sections.

use serde::Serialize;

use crate::entries::Entry;
use crate::section::Section;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

/// A single-column button grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl ReplyMarkup {
    /// Buttons in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &InlineKeyboardButton> {
        self.inline_keyboard.iter().flatten()
    }
}

/// Menu for a section: `Back` to the parent first, then the children, or
/// the siblings when there are no children. `None` when there is nothing
/// to navigate to.
pub fn reply_markup_for_section(section: &Section) -> Option<ReplyMarkup> {
    let mut buttons = Vec::new();
    if let Some(parent) = &section.parent {
        buttons.push(InlineKeyboardButton {
            text: "Back".to_string(),
            callback_data: parent.path.clone(),
        });
    }
    let links = if section.children.is_empty() {
        &section.siblings
    } else {
        &section.children
    };
    buttons.extend(links.iter().map(|link| InlineKeyboardButton {
        text: link.name.clone(),
        callback_data: link.path.clone(),
    }));

    if buttons.is_empty() {
        return None;
    }
    Some(ReplyMarkup {
        inline_keyboard: buttons.into_iter().map(|button| vec![button]).collect(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMessageContent {
    pub message_text: String,
    pub parse_mode: String,
}

/// One article in an inline query answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineQueryResult {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub title: String,
    pub description: String,
    pub input_message_content: InputMessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

pub fn inline_result_for_entry(entry: &dyn Entry) -> InlineQueryResult {
    let default_section = entry.default_section();
    InlineQueryResult {
        kind: "article".to_string(),
        id: entry.slug(),
        title: entry.title(),
        description: entry.description(),
        reply_markup: reply_markup_for_section(&default_section),
        input_message_content: InputMessageContent {
            message_text: default_section.content,
            parse_mode: "Markdown".to_string(),
        },
        thumb_url: entry.thumbnail(),
    }
}

/// Text plus optional menu, for plain messages and navigation edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            reply_markup: None,
        }
    }

    pub fn from_section(section: Section) -> Self {
        let reply_markup = reply_markup_for_section(&section);
        Reply {
            text: section.content,
            reply_markup,
        }
    }
}

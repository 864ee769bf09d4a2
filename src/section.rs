//! One navigable screen of rendered content plus its menu-tree links.

use serde::Serialize;

/// A labelled link to another section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SectionReference {
    pub name: String,
    pub path: String,
}

impl SectionReference {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        SectionReference {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Pre-rendered content with optional parent, sibling and child links.
///
/// `content` is final markdown-flavoured text. When `children` is non-empty
/// the menu ignores `siblings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    pub content: String,
    pub parent: Option<SectionReference>,
    pub siblings: Vec<SectionReference>,
    pub children: Vec<SectionReference>,
}

impl Section {
    pub fn new(content: impl Into<String>) -> Self {
        Section {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_parent(mut self, parent: SectionReference) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_siblings(mut self, siblings: Vec<SectionReference>) -> Self {
        self.siblings = siblings;
        self
    }

    pub fn with_children(mut self, children: Vec<SectionReference>) -> Self {
        self.children = children;
        self
    }
}

use schema::Item;

use super::Entry;
use crate::section::Section;

pub struct ItemEntry<'a> {
    item: &'a Item,
}

impl<'a> ItemEntry<'a> {
    pub fn new(item: &'a Item) -> Self {
        ItemEntry { item }
    }

    pub fn item(&self) -> &'a Item {
        self.item
    }

    pub fn summary(&self) -> String {
        format!("*{}* (item)\n{}", self.item.name, self.item.effect)
    }
}

impl Entry for ItemEntry<'_> {
    fn slug(&self) -> String {
        format!("item/{}", self.item.id)
    }

    fn title(&self) -> String {
        format!("{} (item)", self.item.name)
    }

    fn description(&self) -> String {
        self.item.short_effect.clone()
    }

    fn thumbnail(&self) -> Option<String> {
        None
    }

    fn default_section(&self) -> Section {
        Section::new(self.summary())
    }

    // Items have no sub-sections.
    fn section(&self, path: &str) -> Option<Section> {
        match path {
            "" => Some(self.default_section()),
            _ => None,
        }
    }
}

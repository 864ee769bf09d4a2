use schema::MoveData;

use super::Entry;
use crate::section::Section;
use crate::store::DataStore;

pub struct MoveEntry<'a> {
    store: &'a dyn DataStore,
    move_: &'a MoveData,
}

impl<'a> MoveEntry<'a> {
    pub fn new(store: &'a dyn DataStore, move_: &'a MoveData) -> Self {
        MoveEntry { store, move_ }
    }

    pub fn move_data(&self) -> &'a MoveData {
        self.move_
    }

    /// Type, power, accuracy and PP followed by the long effect text.
    /// Missing power or accuracy is shown as `None`.
    pub fn summary(&self) -> String {
        let type_name = self
            .store
            .get_type(self.move_.type_id)
            .map(|t| t.name.as_str())
            .unwrap_or("None");
        format!(
            "*{}* (move)\nType: {}\nPower: {}\nAccuracy: {}\nPP: {}\n{}",
            self.move_.name,
            type_name,
            display_or_none(self.move_.power),
            display_or_none(self.move_.accuracy),
            self.move_.pp,
            self.move_.effect
        )
    }
}

fn display_or_none<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

impl Entry for MoveEntry<'_> {
    fn slug(&self) -> String {
        format!("move/{}", self.move_.id)
    }

    fn title(&self) -> String {
        format!("{} (move)", self.move_.name)
    }

    fn description(&self) -> String {
        self.move_.short_effect.clone()
    }

    fn thumbnail(&self) -> Option<String> {
        None
    }

    fn default_section(&self) -> Section {
        Section::new(self.summary())
    }

    fn section(&self, path: &str) -> Option<Section> {
        match path {
            "" => Some(self.default_section()),
            _ => None,
        }
    }
}

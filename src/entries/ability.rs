use schema::Ability;

use super::Entry;
use crate::section::Section;

pub struct AbilityEntry<'a> {
    ability: &'a Ability,
}

impl<'a> AbilityEntry<'a> {
    pub fn new(ability: &'a Ability) -> Self {
        AbilityEntry { ability }
    }

    pub fn ability(&self) -> &'a Ability {
        self.ability
    }

    pub fn summary(&self) -> String {
        format!("*{}* (ability)\n{}", self.ability.name, self.ability.effect)
    }
}

impl Entry for AbilityEntry<'_> {
    fn slug(&self) -> String {
        format!("ability/{}", self.ability.id)
    }

    fn title(&self) -> String {
        format!("{} (ability)", self.ability.name)
    }

    fn description(&self) -> String {
        self.ability.short_effect.clone()
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

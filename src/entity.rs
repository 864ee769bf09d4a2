//! Tagged domain entities as handed over by the lookup service.

use schema::{Ability, Item, MoveData, PokemonForm, PokemonSpecies};

/// A resolved dataset record of one of the searchable kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity<'a> {
    Species(&'a PokemonSpecies),
    Form(&'a PokemonForm),
    Item(&'a Item),
    Ability(&'a Ability),
    Move(&'a MoveData),
}

impl<'a> Entity<'a> {
    /// Display name the entity is searched by.
    pub fn name(&self) -> &'a str {
        match self {
            Entity::Species(species) => &species.name,
            Entity::Form(form) => &form.name,
            Entity::Item(item) => &item.name,
            Entity::Ability(ability) => &ability.name,
            Entity::Move(move_) => &move_.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Entity::Species(_) => "species",
            Entity::Form(_) => "form",
            Entity::Item(_) => "item",
            Entity::Ability(_) => "ability",
            Entity::Move(_) => "move",
        }
    }

    /// Tie-break order between kinds sharing a name.
    pub fn kind_rank(&self) -> u8 {
        match self {
            Entity::Species(_) => 0,
            Entity::Form(_) => 1,
            Entity::Move(_) => 2,
            Entity::Item(_) => 3,
            Entity::Ability(_) => 4,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Entity::Species(species) => species.id,
            Entity::Form(form) => form.id,
            Entity::Item(item) => item.id,
            Entity::Ability(ability) => ability.id,
            Entity::Move(move_) => move_.id,
        }
    }
}

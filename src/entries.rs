//! Rendering wrappers around resolved dataset records.
//!
//! Every searchable kind has its own [`Entry`] implementation. An entry is
//! built per request from a record the lookup service already resolved, and
//! turns it into a default section plus any number of addressable
//! sub-sections.

pub mod ability;
pub mod item;
pub mod move_entry;
pub mod pokemon;

pub use ability::AbilityEntry;
pub use item::ItemEntry;
pub use move_entry::MoveEntry;
pub use pokemon::PokemonEntry;

use crate::entity::Entity;
use crate::section::Section;
use crate::store::DataStore;

/// Capabilities shared by every entry kind.
pub trait Entry {
    /// Stable `"{kind}/{id}"` identifier.
    fn slug(&self) -> String;
    fn title(&self) -> String;
    fn description(&self) -> String;
    fn thumbnail(&self) -> Option<String>;
    /// The section addressed by the empty path.
    fn default_section(&self) -> Section;
    /// The section at `path` relative to the slug, or `None` if this entry
    /// has no such section.
    fn section(&self, path: &str) -> Option<Section>;
}

/// Resolve a looked-up entity to its entry.
///
/// Species render their default variety and forms render the variety they
/// belong to. `None` only when the dataset lacks that variety.
pub fn entry_for_entity<'a>(
    store: &'a dyn DataStore,
    entity: Entity<'a>,
) -> Option<Box<dyn Entry + 'a>> {
    match entity {
        Entity::Species(species) => {
            let pokemon = store.default_pokemon(species.id)?;
            Some(Box::new(PokemonEntry::new(store, pokemon)))
        }
        Entity::Form(form) => {
            let pokemon = store.get_pokemon(form.pokemon_id)?;
            Some(Box::new(PokemonEntry::new(store, pokemon)))
        }
        Entity::Item(item) => Some(Box::new(ItemEntry::new(item))),
        Entity::Ability(ability) => Some(Box::new(AbilityEntry::new(ability))),
        Entity::Move(move_) => Some(Box::new(MoveEntry::new(store, move_))),
    }
}

/// Resolve the `kind` and `id` halves of a slug back to an entry.
pub fn entry_for_slug<'a>(
    store: &'a dyn DataStore,
    kind: &str,
    id: u32,
) -> Option<Box<dyn Entry + 'a>> {
    let entry: Box<dyn Entry + 'a> = match kind {
        "pokemon" => Box::new(PokemonEntry::from_pokemon_id(store, id)?),
        "item" => Box::new(ItemEntry::new(store.get_item(id)?)),
        "ability" => Box::new(AbilityEntry::new(store.get_ability(id)?)),
        "move" => Box::new(MoveEntry::new(store, store.get_move(id)?)),
        _ => return None,
    };
    Some(entry)
}

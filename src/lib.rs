//! Rotom: a Pokédex lookup and rendering core for chat front-ends.
//!
//! A free-text query is resolved to a dataset record, wrapped in an
//! [`Entry`](entries::Entry) and rendered as a navigable [`Section`] with a
//! button menu. Transports call into [`interface`] and get finished replies
//! back.

pub mod config;
pub mod entity;
pub mod entries;
pub mod errors;
pub mod format;
pub mod interface;
pub mod logging;
pub mod lookup;
pub mod reply;
pub mod section;
pub mod store;
pub mod type_efficacy;

#[cfg(test)]
mod tests;

pub use config::{Config, LoggingConfig};
pub use entity::Entity;
pub use entries::{entry_for_entity, entry_for_slug, Entry};
pub use errors::{ConfigError, ConfigResult, DataError, DataResult};
pub use lookup::{Lookup, LookupHit, NameLookup};
pub use reply::{reply_markup_for_section, InlineQueryResult, Reply, ReplyMarkup};
pub use section::{Section, SectionReference};
pub use store::{DataStore, Pokedex};

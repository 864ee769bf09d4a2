// Rotom Schema - Shared record definitions
// This crate contains the plain records that make up the Pokédex dataset.
// They are shared between the rendering crate and anything that produces
// or inspects the RON dataset on disk.

// Re-export the main types
pub use dataset::*;
pub use encounter_data::*;
pub use move_data::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod dataset;
pub mod encounter_data;
pub mod move_data;
pub mod pokemon_types;
pub mod species_data;

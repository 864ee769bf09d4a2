use crate::{
    Ability, Encounter, Evolution, Item, Location, LocationArea, MoveData, Pokemon, PokemonForm,
    PokemonMove, PokemonSpecies, PokemonType, TypeEfficacy, Version, VersionGroup,
};
use serde::{Deserialize, Serialize};

/// The whole dataset as it is stored on disk (one RON document).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokedexData {
    pub types: Vec<PokemonType>,
    pub type_efficacy: Vec<TypeEfficacy>,
    pub species: Vec<PokemonSpecies>,
    pub pokemon: Vec<Pokemon>,
    pub forms: Vec<PokemonForm>,
    pub evolutions: Vec<Evolution>,
    pub items: Vec<Item>,
    pub abilities: Vec<Ability>,
    pub moves: Vec<MoveData>,
    pub pokemon_moves: Vec<PokemonMove>,
    pub versions: Vec<Version>,
    pub version_groups: Vec<VersionGroup>,
    pub locations: Vec<Location>,
    pub location_areas: Vec<LocationArea>,
    pub encounters: Vec<Encounter>,
}

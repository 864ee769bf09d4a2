//! Read-only access to the Pokédex dataset.
//!
//! Rendering code only ever sees the [`DataStore`] trait; [`Pokedex`] is the
//! in-memory implementation loaded from a RON document at startup and then
//! shared (immutably) between requests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use schema::{
    Ability, Encounter, Evolution, Item, Location, LocationArea, MoveData, Pokemon, PokemonForm,
    PokemonMove, PokemonSpecies, PokemonType, PokedexData, TypeEfficacy, Version, VersionGroup,
};
use tracing::{debug, info};

use crate::entity::Entity;
use crate::errors::{DataError, DataResult};

/// Synchronous, read-only accessors over the dataset.
///
/// Every accessor yields either a value or absence; implementations must be
/// safe to share between concurrently running requests.
pub trait DataStore: Send + Sync {
    fn get_pokemon(&self, id: u32) -> Option<&Pokemon>;
    fn get_species(&self, id: u32) -> Option<&PokemonSpecies>;
    fn get_form(&self, id: u32) -> Option<&PokemonForm>;
    fn get_item(&self, id: u32) -> Option<&Item>;
    fn get_ability(&self, id: u32) -> Option<&Ability>;
    fn get_move(&self, id: u32) -> Option<&MoveData>;
    fn get_type(&self, id: u32) -> Option<&PokemonType>;
    fn get_version(&self, id: u32) -> Option<&Version>;
    fn get_version_group(&self, id: u32) -> Option<&VersionGroup>;
    fn get_location(&self, id: u32) -> Option<&Location>;
    fn get_location_area(&self, id: u32) -> Option<&LocationArea>;

    /// The default variety of a species.
    fn default_pokemon(&self, species_id: u32) -> Option<&Pokemon>;
    /// The default form of a creature.
    fn default_form(&self, pokemon_id: u32) -> Option<&PokemonForm>;

    /// All species of an evolution chain, ordered by family order then id.
    fn chain_species(&self, chain_id: u32) -> Vec<&PokemonSpecies>;
    /// Species that evolve directly from `species_id`.
    fn child_species(&self, species_id: u32) -> Vec<&PokemonSpecies>;
    /// Evolution edges leading into `species_id`.
    fn evolutions_into(&self, species_id: u32) -> Vec<&Evolution>;

    fn encounters(&self, pokemon_id: u32) -> Vec<&Encounter>;
    fn pokemon_moves(&self, pokemon_id: u32) -> Vec<&PokemonMove>;
    /// Type chart cells whose defending type is `target_type_id`, ordered by attacking type.
    fn type_efficacies(&self, target_type_id: u32) -> Vec<&TypeEfficacy>;

    /// Every searchable entity, used by the lookup service.
    fn entities(&self) -> Vec<Entity<'_>>;
}

/// In-memory dataset with id indexes.
#[derive(Debug, Default)]
pub struct Pokedex {
    types: HashMap<u32, PokemonType>,
    species: HashMap<u32, PokemonSpecies>,
    pokemon: HashMap<u32, Pokemon>,
    forms: HashMap<u32, PokemonForm>,
    items: HashMap<u32, Item>,
    abilities: HashMap<u32, Ability>,
    moves: HashMap<u32, MoveData>,
    versions: HashMap<u32, Version>,
    version_groups: HashMap<u32, VersionGroup>,
    locations: HashMap<u32, Location>,
    location_areas: HashMap<u32, LocationArea>,

    chains: HashMap<u32, Vec<u32>>,
    children: HashMap<u32, Vec<u32>>,
    evolutions_by_species: HashMap<u32, Vec<Evolution>>,
    encounters_by_pokemon: HashMap<u32, Vec<Encounter>>,
    moves_by_pokemon: HashMap<u32, Vec<PokemonMove>>,
    efficacy_by_target: HashMap<u32, Vec<TypeEfficacy>>,
}

impl Pokedex {
    /// Load the dataset from a RON file.
    pub fn load(path: &Path) -> DataResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pokedex = Self::from_ron_str(&content)?;
        info!(
            path = %path.display(),
            species = pokedex.species.len(),
            pokemon = pokedex.pokemon.len(),
            moves = pokedex.moves.len(),
            "loaded pokedex"
        );
        Ok(pokedex)
    }

    pub fn from_ron_str(content: &str) -> DataResult<Self> {
        let data: PokedexData = ron::from_str(content)?;
        Self::from_data(data)
    }

    /// Index the raw records, rejecting duplicate ids and dangling references.
    pub fn from_data(data: PokedexData) -> DataResult<Self> {
        let mut pokedex = Pokedex {
            types: index_by_id("type", data.types, |t| t.id)?,
            species: index_by_id("species", data.species, |s| s.id)?,
            pokemon: index_by_id("pokemon", data.pokemon, |p| p.id)?,
            forms: index_by_id("form", data.forms, |f| f.id)?,
            items: index_by_id("item", data.items, |i| i.id)?,
            abilities: index_by_id("ability", data.abilities, |a| a.id)?,
            moves: index_by_id("move", data.moves, |m| m.id)?,
            versions: index_by_id("version", data.versions, |v| v.id)?,
            version_groups: index_by_id("version group", data.version_groups, |g| g.id)?,
            locations: index_by_id("location", data.locations, |l| l.id)?,
            location_areas: index_by_id("location area", data.location_areas, |a| a.id)?,
            ..Default::default()
        };
        pokedex.validate_records()?;

        for evolution in &data.evolutions {
            pokedex.require_species("evolution", evolution.id, evolution.evolved_species_id)?;
            for item_id in [evolution.trigger_item_id, evolution.held_item_id]
                .into_iter()
                .flatten()
            {
                pokedex.require("evolution", evolution.id, "item", item_id, |p| {
                    p.items.contains_key(&item_id)
                })?;
            }
        }
        for encounter in &data.encounters {
            pokedex.require_pokemon("encounter", encounter.id, encounter.pokemon_id)?;
            pokedex.require("encounter", encounter.id, "version", encounter.version_id, |p| {
                p.versions.contains_key(&encounter.version_id)
            })?;
            pokedex.require(
                "encounter",
                encounter.id,
                "location area",
                encounter.location_area_id,
                |p| p.location_areas.contains_key(&encounter.location_area_id),
            )?;
        }
        for row in &data.pokemon_moves {
            pokedex.require_pokemon("learnset move", row.move_id, row.pokemon_id)?;
            pokedex.require("learnset of pokemon", row.pokemon_id, "move", row.move_id, |p| {
                p.moves.contains_key(&row.move_id)
            })?;
            pokedex.require(
                "learnset of pokemon",
                row.pokemon_id,
                "version group",
                row.version_group_id,
                |p| p.version_groups.contains_key(&row.version_group_id),
            )?;
        }

        let mut chains: HashMap<u32, Vec<u32>> = HashMap::new();
        let mut children: HashMap<u32, Vec<u32>> = HashMap::new();
        let mut ordered_species: Vec<&PokemonSpecies> = pokedex.species.values().collect();
        ordered_species.sort_by_key(|s| (s.order, s.id));
        for species in ordered_species {
            chains
                .entry(species.evolution_chain_id)
                .or_default()
                .push(species.id);
            if let Some(parent_id) = species.parent_species_id {
                children.entry(parent_id).or_default().push(species.id);
            }
        }
        pokedex.chains = chains;
        pokedex.children = children;

        pokedex.evolutions_by_species = group_by(data.evolutions, |e| e.evolved_species_id);
        for edges in pokedex.evolutions_by_species.values_mut() {
            edges.sort_by_key(|e| e.id);
        }
        pokedex.encounters_by_pokemon = group_by(data.encounters, |e| e.pokemon_id);
        for rows in pokedex.encounters_by_pokemon.values_mut() {
            rows.sort_by_key(|e| e.id);
        }
        pokedex.moves_by_pokemon = group_by(data.pokemon_moves, |m| m.pokemon_id);
        pokedex.efficacy_by_target = group_by(data.type_efficacy, |e| e.target_type_id);
        for cells in pokedex.efficacy_by_target.values_mut() {
            cells.sort_by_key(|e| e.damage_type_id);
        }

        debug!(
            chains = pokedex.chains.len(),
            encounters = pokedex.encounters_by_pokemon.len(),
            "indexed pokedex relations"
        );
        Ok(pokedex)
    }

    fn validate_records(&self) -> DataResult<()> {
        for species in self.species.values() {
            if let Some(parent_id) = species.parent_species_id {
                self.require_species("species", species.id, parent_id)?;
            }
        }
        for pokemon in self.pokemon.values() {
            self.require_species("pokemon", pokemon.id, pokemon.species_id)?;
            for &type_id in &pokemon.type_ids {
                self.require("pokemon", pokemon.id, "type", type_id, |p| {
                    p.types.contains_key(&type_id)
                })?;
            }
            for ability_id in pokemon.ability_ids.iter().chain(&pokemon.hidden_ability_id) {
                self.require("pokemon", pokemon.id, "ability", *ability_id, |p| {
                    p.abilities.contains_key(ability_id)
                })?;
            }
        }
        for form in self.forms.values() {
            self.require_pokemon("form", form.id, form.pokemon_id)?;
        }
        for move_ in self.moves.values() {
            self.require("move", move_.id, "type", move_.type_id, |p| {
                p.types.contains_key(&move_.type_id)
            })?;
        }
        for version in self.versions.values() {
            self.require("version", version.id, "version group", version.version_group_id, |p| {
                p.version_groups.contains_key(&version.version_group_id)
            })?;
        }
        for area in self.location_areas.values() {
            self.require("location area", area.id, "location", area.location_id, |p| {
                p.locations.contains_key(&area.location_id)
            })?;
        }
        Ok(())
    }

    fn require(
        &self,
        kind: &'static str,
        id: u32,
        target: &'static str,
        target_id: u32,
        exists: impl Fn(&Self) -> bool,
    ) -> DataResult<()> {
        if exists(self) {
            Ok(())
        } else {
            Err(DataError::DanglingReference {
                kind,
                id,
                target,
                target_id,
            })
        }
    }

    fn require_species(&self, kind: &'static str, id: u32, species_id: u32) -> DataResult<()> {
        self.require(kind, id, "species", species_id, |p| {
            p.species.contains_key(&species_id)
        })
    }

    fn require_pokemon(&self, kind: &'static str, id: u32, pokemon_id: u32) -> DataResult<()> {
        self.require(kind, id, "pokemon", pokemon_id, |p| {
            p.pokemon.contains_key(&pokemon_id)
        })
    }
}

fn index_by_id<T>(
    kind: &'static str,
    records: Vec<T>,
    id: impl Fn(&T) -> u32,
) -> DataResult<HashMap<u32, T>> {
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        let key = id(&record);
        if map.insert(key, record).is_some() {
            return Err(DataError::DuplicateId { kind, id: key });
        }
    }
    Ok(map)
}

fn group_by<T>(records: Vec<T>, key: impl Fn(&T) -> u32) -> HashMap<u32, Vec<T>> {
    let mut map: HashMap<u32, Vec<T>> = HashMap::new();
    for record in records {
        map.entry(key(&record)).or_default().push(record);
    }
    map
}

impl DataStore for Pokedex {
    fn get_pokemon(&self, id: u32) -> Option<&Pokemon> {
        self.pokemon.get(&id)
    }

    fn get_species(&self, id: u32) -> Option<&PokemonSpecies> {
        self.species.get(&id)
    }

    fn get_form(&self, id: u32) -> Option<&PokemonForm> {
        self.forms.get(&id)
    }

    fn get_item(&self, id: u32) -> Option<&Item> {
        self.items.get(&id)
    }

    fn get_ability(&self, id: u32) -> Option<&Ability> {
        self.abilities.get(&id)
    }

    fn get_move(&self, id: u32) -> Option<&MoveData> {
        self.moves.get(&id)
    }

    fn get_type(&self, id: u32) -> Option<&PokemonType> {
        self.types.get(&id)
    }

    fn get_version(&self, id: u32) -> Option<&Version> {
        self.versions.get(&id)
    }

    fn get_version_group(&self, id: u32) -> Option<&VersionGroup> {
        self.version_groups.get(&id)
    }

    fn get_location(&self, id: u32) -> Option<&Location> {
        self.locations.get(&id)
    }

    fn get_location_area(&self, id: u32) -> Option<&LocationArea> {
        self.location_areas.get(&id)
    }

    fn default_pokemon(&self, species_id: u32) -> Option<&Pokemon> {
        self.pokemon
            .values()
            .filter(|p| p.species_id == species_id && p.is_default)
            .min_by_key(|p| p.id)
    }

    fn default_form(&self, pokemon_id: u32) -> Option<&PokemonForm> {
        self.forms
            .values()
            .filter(|f| f.pokemon_id == pokemon_id && f.is_default)
            .min_by_key(|f| f.id)
    }

    fn chain_species(&self, chain_id: u32) -> Vec<&PokemonSpecies> {
        self.chains
            .get(&chain_id)
            .map(|ids| ids.iter().filter_map(|id| self.species.get(id)).collect())
            .unwrap_or_default()
    }

    fn child_species(&self, species_id: u32) -> Vec<&PokemonSpecies> {
        self.children
            .get(&species_id)
            .map(|ids| ids.iter().filter_map(|id| self.species.get(id)).collect())
            .unwrap_or_default()
    }

    fn evolutions_into(&self, species_id: u32) -> Vec<&Evolution> {
        self.evolutions_by_species
            .get(&species_id)
            .map(|edges| edges.iter().collect())
            .unwrap_or_default()
    }

    fn encounters(&self, pokemon_id: u32) -> Vec<&Encounter> {
        self.encounters_by_pokemon
            .get(&pokemon_id)
            .map(|rows| rows.iter().collect())
            .unwrap_or_default()
    }

    fn pokemon_moves(&self, pokemon_id: u32) -> Vec<&PokemonMove> {
        self.moves_by_pokemon
            .get(&pokemon_id)
            .map(|rows| rows.iter().collect())
            .unwrap_or_default()
    }

    fn type_efficacies(&self, target_type_id: u32) -> Vec<&TypeEfficacy> {
        self.efficacy_by_target
            .get(&target_type_id)
            .map(|cells| cells.iter().collect())
            .unwrap_or_default()
    }

    fn entities(&self) -> Vec<Entity<'_>> {
        let mut entities: Vec<Entity<'_>> = Vec::new();
        entities.extend(self.species.values().map(Entity::Species));
        // Default forms of default varieties are reached through their species.
        entities.extend(
            self.forms
                .values()
                .filter(|f| {
                    !f.is_default
                        || self
                            .pokemon
                            .get(&f.pokemon_id)
                            .is_some_and(|p| !p.is_default)
                })
                .map(Entity::Form),
        );
        entities.extend(self.items.values().map(Entity::Item));
        entities.extend(self.abilities.values().map(Entity::Ability));
        entities.extend(self.moves.values().map(Entity::Move));
        entities.sort_by_key(|e| (e.kind_rank(), e.id()));
        entities
    }
}

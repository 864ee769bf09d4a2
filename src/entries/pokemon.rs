use std::collections::HashSet;

use schema::{LearnMethod, Pokemon, PokemonSpecies};

use super::Entry;
use crate::format::{
    evolution_method, format_base_stats, format_location_groups, format_type_effectiveness,
    group_locations, pokemon_label, tenths,
};
use crate::section::{Section, SectionReference};
use crate::store::DataStore;
use crate::type_efficacy::type_effectiveness;

const FULL_IMAGE_BASE: &str = "https://assets.pokemon.com/assets/cms2/img/pokedex/full/";
const DETAIL_IMAGE_BASE: &str = "https://assets.pokemon.com/assets/cms2/img/pokedex/detail/";

/// Ids at or above this denote special forms (megas, regional variants...).
pub const SPECIAL_FORM_ID_THRESHOLD: u32 = 10000;

/// Generation whose level-up moves make up the learnset.
pub const LEARNSET_GENERATION: u8 = 5;

const SUBSECTIONS: [(&str, &str); 3] = [
    ("Base stats", "base_stats"),
    ("Evolutions", "evolutions"),
    ("Locations", "locations"),
];

/// A creature variety with summary, base stats, evolutions and locations.
pub struct PokemonEntry<'a> {
    store: &'a dyn DataStore,
    pokemon: &'a Pokemon,
}

impl<'a> PokemonEntry<'a> {
    pub fn new(store: &'a dyn DataStore, pokemon: &'a Pokemon) -> Self {
        PokemonEntry { store, pokemon }
    }

    pub fn from_pokemon_id(store: &'a dyn DataStore, id: u32) -> Option<Self> {
        store.get_pokemon(id).map(|pokemon| PokemonEntry::new(store, pokemon))
    }

    pub fn pokemon(&self) -> &'a Pokemon {
        self.pokemon
    }

    fn species(&self) -> Option<&'a PokemonSpecies> {
        self.store.get_species(self.pokemon.species_id)
    }

    fn type_names(&self) -> Vec<&'a str> {
        self.pokemon
            .type_ids
            .iter()
            .filter_map(|&id| self.store.get_type(id))
            .map(|t| t.name.as_str())
            .collect()
    }

    fn is_special_form(&self) -> bool {
        self.pokemon.id >= SPECIAL_FORM_ID_THRESHOLD
    }

    /// Artwork URL. Special forms point at the species artwork with the
    /// form suffix of their default form.
    pub fn image_url(&self) -> String {
        if !self.is_special_form() {
            return format!("{}{:03}.png", FULL_IMAGE_BASE, self.pokemon.id);
        }
        let form_order = self
            .store
            .default_form(self.pokemon.id)
            .map_or(1, |form| form.form_order);
        format!(
            "{}{:03}_f{}.png",
            FULL_IMAGE_BASE, self.pokemon.species_id, form_order
        )
    }

    fn reference(&self, name: &str, subpath: &str) -> SectionReference {
        SectionReference::new(name, format!("{}/{}", self.slug(), subpath))
    }

    /// References to every sub-section except `current`.
    fn references_except(&self, current: &str) -> Vec<SectionReference> {
        SUBSECTIONS
            .iter()
            .filter(|(_, subpath)| *subpath != current)
            .map(|(name, subpath)| self.reference(name, subpath))
            .collect()
    }

    pub fn summary(&self) -> String {
        let genus = self.species().map(|s| s.genus.as_str()).unwrap_or_default();
        let effectiveness = format_type_effectiveness(&type_effectiveness(self.store, self.pokemon));
        let abilities = self
            .pokemon
            .ability_ids
            .iter()
            .filter_map(|&id| self.store.get_ability(id))
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let hidden_ability = self
            .pokemon
            .hidden_ability_id
            .and_then(|id| self.store.get_ability(id))
            .map_or("None", |a| a.name.as_str());

        let mut lines = vec![
            format!("*{}*", self.title()),
            genus.to_string(),
            format!("Type: {}", self.description()),
        ];
        if !effectiveness.is_empty() {
            lines.push(effectiveness);
        }
        lines.push(format!("Abilities: {}", abilities));
        lines.push(format!("Hidden ability: {}", hidden_ability));
        lines.push(format!("Height: {} m", tenths(self.pokemon.height)));
        lines.push(format!("Weight: {} kg", tenths(self.pokemon.weight)));
        lines.push(format!("[Image]({})", self.image_url()));
        lines.join("\n")
    }

    pub fn base_stats(&self) -> String {
        format!(
            "*{}*\n```\n{}\n```",
            self.title(),
            format_base_stats(&self.pokemon.base_stats)
        )
    }

    /// The whole evolution family as an indented tree, the current species
    /// in bold, with links to every other member.
    pub fn evolutions_section(&self) -> Section {
        let parent = SectionReference::new("", format!("pokemon/{}/", self.pokemon.id));
        let Some(species) = self.species() else {
            return Section::new(String::new()).with_parent(parent);
        };
        let chain = self.store.chain_species(species.evolution_chain_id);
        let content = chain
            .iter()
            .copied()
            .find(|s| s.parent_species_id.is_none())
            .map(|root| self.evolution_tree(root))
            .unwrap_or_default();

        let children = chain
            .iter()
            .filter(|s| s.id != species.id)
            .map(|s| SectionReference::new(pokemon_label(&s.name, s.id), format!("pokemon/{}/", s.id)))
            .collect();
        Section::new(content)
            .with_parent(parent)
            .with_children(children)
    }

    fn evolution_tree(&self, root: &'a PokemonSpecies) -> String {
        let mut lines = Vec::new();
        let mut stack = vec![(root, 0usize)];
        while let Some((species, depth)) = stack.pop() {
            let prefix = match depth {
                0 => String::new(),
                _ => format!("`{}└` ", " ".repeat((depth - 1) * 2)),
            };
            let label = pokemon_label(&species.name, species.id);
            let label = if species.id == self.pokemon.species_id {
                format!("*{}*", label)
            } else {
                label
            };
            let method = self
                .store
                .evolutions_into(species.id)
                .first()
                .map(|evolution| evolution_method(self.store, evolution))
                .unwrap_or_default();
            lines.push(format!("{}{}{}", prefix, label, method));

            // Highest id pushed first so siblings pop in ascending order.
            let mut children = self.store.child_species(species.id);
            children.sort_by(|a, b| b.id.cmp(&a.id));
            stack.extend(children.into_iter().map(|child| (child, depth + 1)));
        }
        lines.join("\n")
    }

    pub fn locations(&self) -> String {
        let mut encounters: Vec<(u32, u32, &str, &str)> = self
            .store
            .encounters(self.pokemon.id)
            .into_iter()
            .filter_map(|encounter| {
                let version = self.store.get_version(encounter.version_id)?;
                let area = self.store.get_location_area(encounter.location_area_id)?;
                let location = self.store.get_location(area.location_id)?;
                Some((version.id, location.id, version.name.as_str(), location.name.as_str()))
            })
            .collect();
        encounters.sort_by_key(|&(version_id, location_id, _, _)| (version_id, location_id));
        encounters.dedup_by_key(|&mut (version_id, location_id, _, _)| (version_id, location_id));

        let groups = group_locations(
            encounters
                .into_iter()
                .map(|(_, _, version, location)| (version.to_string(), location.to_string()))
                .collect(),
        );
        let body = if groups.is_empty() {
            "Not found in the wild".to_string()
        } else {
            format_location_groups(&groups)
        };
        format!("*{}*\nLocations\n\n{}", self.title(), body)
    }

    /// Level-up moves of [`LEARNSET_GENERATION`] as a CSV table.
    pub fn learnset(&self) -> String {
        let mut rows: Vec<_> = self
            .store
            .pokemon_moves(self.pokemon.id)
            .into_iter()
            .filter(|row| row.method == LearnMethod::LevelUp)
            .filter(|row| {
                self.store
                    .get_version_group(row.version_group_id)
                    .is_some_and(|vg| vg.generation_id == LEARNSET_GENERATION)
            })
            .collect();
        rows.sort_by_key(|row| (row.level, row.order, row.version_group_id));

        let mut seen = HashSet::new();
        rows.retain(|row| seen.insert(row.move_id));

        let mut table = vec!["Level,Move,Type,Cat.,Pwr.,Acc.,PP".to_string()];
        for row in rows {
            let Some(move_) = self.store.get_move(row.move_id) else {
                continue;
            };
            let type_name = self
                .store
                .get_type(move_.type_id)
                .map_or("-", |t| t.name.as_str());
            let power = move_.power.map_or_else(|| "-".to_string(), |p| p.to_string());
            let accuracy = move_.accuracy.map_or_else(|| "-".to_string(), |a| a.to_string());
            table.push(format!(
                "{},{},{},{},{},{}%,{}",
                row.level, move_.name, type_name, move_.damage_class, power, accuracy, move_.pp
            ));
        }
        format!("```\n{}\n```", table.join("\n"))
    }
}

impl Entry for PokemonEntry<'_> {
    fn slug(&self) -> String {
        format!("pokemon/{}", self.pokemon.id)
    }

    fn title(&self) -> String {
        pokemon_label(&self.pokemon.name, self.pokemon.id)
    }

    fn description(&self) -> String {
        self.type_names().join("/")
    }

    fn thumbnail(&self) -> Option<String> {
        if self.is_special_form() {
            return None;
        }
        Some(format!("{}{:03}.png", DETAIL_IMAGE_BASE, self.pokemon.id))
    }

    fn default_section(&self) -> Section {
        Section::new(self.summary()).with_children(self.references_except(""))
    }

    fn section(&self, path: &str) -> Option<Section> {
        let parent = SectionReference::new("", format!("{}/", self.slug()));
        match path {
            "" => Some(self.default_section()),
            "base_stats" => Some(
                Section::new(self.base_stats())
                    .with_parent(parent)
                    .with_siblings(self.references_except("base_stats")),
            ),
            "evolutions" => Some(self.evolutions_section()),
            "locations" => Some(
                Section::new(self.locations())
                    .with_parent(parent)
                    .with_siblings(self.references_except("locations")),
            ),
            _ => None,
        }
    }
}

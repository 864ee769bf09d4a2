use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    /// Stats in display order: HP, Attack, Defense, Sp. Atk, Sp. Def, Speed.
    pub fn as_array(&self) -> [u16; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
            self.speed,
        ]
    }

    pub fn total(&self) -> u32 {
        self.as_array().iter().map(|&s| u32::from(s)).sum()
    }
}

/// A species groups every form and variety of one Pokédex number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    pub genus: String,
    /// Position used to order members of an evolution family.
    pub order: u32,
    pub evolution_chain_id: u32,
    pub parent_species_id: Option<u32>,
}

/// A concrete creature: the default variety of a species or a special
/// variety such as a Mega Evolution (ids at or above 10000).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub species_id: u32,
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub type_ids: Vec<u32>,
    pub ability_ids: Vec<u32>,
    pub hidden_ability_id: Option<u32>,
    pub base_stats: BaseStats,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonForm {
    pub id: u32,
    pub pokemon_id: u32,
    pub name: String,
    pub form_order: u32,
    pub is_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum EvolutionTrigger {
    LevelUp,
    Trade,
    UseItem,
    Shed,
    Other,
}

/// An evolution edge, stored on the species it evolves *into*.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    pub id: u32,
    pub evolved_species_id: u32,
    pub trigger: EvolutionTrigger,
    pub trigger_item_id: Option<u32>,
    pub minimum_level: Option<u8>,
    pub held_item_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub short_effect: String,
    pub effect: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: u32,
    pub name: String,
    pub short_effect: String,
    pub effect: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_stats_order_and_total() {
        let stats = BaseStats {
            hp: 45,
            attack: 49,
            defense: 49,
            sp_attack: 65,
            sp_defense: 65,
            speed: 45,
        };
        assert_eq!(stats.as_array(), [45, 49, 49, 65, 65, 45]);
        assert_eq!(stats.total(), 318);
    }
}

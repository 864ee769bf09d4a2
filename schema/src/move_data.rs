use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum DamageClass {
    Physical,
    Special,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: u32,
    pub name: String,
    pub type_id: u32,
    pub damage_class: DamageClass,
    pub power: Option<u16>,
    pub accuracy: Option<u8>,
    pub pp: u8,
    pub short_effect: String,
    pub effect: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum LearnMethod {
    LevelUp,
    Egg,
    Tutor,
    Machine,
    Other,
}

/// A row of a creature's learnset for one version group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMove {
    pub pokemon_id: u32,
    pub version_group_id: u32,
    pub move_id: u32,
    pub method: LearnMethod,
    pub level: u8,
    pub order: Option<u8>,
}

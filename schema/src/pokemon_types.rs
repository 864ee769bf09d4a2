use serde::{Deserialize, Serialize};
use std::fmt;

/// An elemental type such as Grass or Poison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub id: u32,
    pub name: String,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One cell of the type chart.
///
/// `damage_factor` is an integer percentage: 200 = super effective,
/// 50 = not very effective, 0 = no effect. Cells at 100 may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEfficacy {
    pub damage_type_id: u32,
    pub target_type_id: u32,
    pub damage_factor: u16,
}

impl TypeEfficacy {
    /// The factor as a plain multiplier.
    pub fn multiplier(&self) -> f64 {
        f64::from(self.damage_factor) / 100.0
    }
}

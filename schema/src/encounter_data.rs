use serde::{Deserialize, Serialize};

/// A single game release, e.g. Red or Emerald.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: u32,
    pub name: String,
    pub version_group_id: u32,
}

/// Releases sharing one ruleset, e.g. Black and White.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroup {
    pub id: u32,
    pub identifier: String,
    pub generation_id: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub location_id: u32,
}

/// A wild encounter slot. Several rows may share a version and area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub id: u32,
    pub pokemon_id: u32,
    pub version_id: u32,
    pub location_area_id: u32,
}

use rstest::fixture;

use crate::section::{Section, SectionReference};
use crate::store::Pokedex;

/// The sample dataset shipped with the crate.
pub const SAMPLE_DATASET: &str = include_str!("../../data/pokedex.ron");

#[fixture]
pub fn pokedex() -> Pokedex {
    match Pokedex::from_ron_str(SAMPLE_DATASET) {
        Ok(dex) => dex,
        Err(err) => panic!("sample dataset failed to load: {}", err),
    }
}

pub fn reference(name: &str, path: &str) -> SectionReference {
    SectionReference::new(name, path)
}

/// A content-less section with the given links, for menu tests.
pub fn linked_section(
    parent: Option<(&str, &str)>,
    siblings: &[(&str, &str)],
    children: &[(&str, &str)],
) -> Section {
    let links = |pairs: &[(&str, &str)]| {
        pairs
            .iter()
            .map(|(name, path)| reference(name, path))
            .collect::<Vec<_>>()
    };
    let mut section = Section::new("")
        .with_siblings(links(siblings))
        .with_children(links(children));
    if let Some((name, path)) = parent {
        section = section.with_parent(reference(name, path));
    }
    section
}

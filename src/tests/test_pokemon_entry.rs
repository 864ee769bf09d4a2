use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::entries::{Entry, PokemonEntry};
use crate::section::Section;
use crate::store::Pokedex;
use crate::tests::common::{pokedex, reference};

const BULBASAUR_SUMMARY: &str = "*Bulbasaur (#001)*
Seed Pokémon
Type: Grass/Poison
Weaknesses: Flying (2x), Fire (2x), Psychic (2x), Ice (2x)
Resistances: Fighting (0.5x), Water (0.5x), Grass (0.25x), Electric (0.5x), Fairy (0.5x)
Abilities: Overgrow
Hidden ability: Chlorophyll
Height: 0.7 m
Weight: 6.9 kg
[Image](https://assets.pokemon.com/assets/cms2/img/pokedex/full/001.png)";

fn entry(dex: &Pokedex, pokemon_id: u32) -> PokemonEntry<'_> {
    PokemonEntry::from_pokemon_id(dex, pokemon_id).expect("pokemon should exist")
}

#[rstest]
fn test_identity(pokedex: Pokedex) {
    let bulbasaur = entry(&pokedex, 1);
    assert_eq!(bulbasaur.slug(), "pokemon/1");
    assert_eq!(bulbasaur.title(), "Bulbasaur (#001)");
    assert_eq!(bulbasaur.description(), "Grass/Poison");
    assert_eq!(
        bulbasaur.thumbnail().as_deref(),
        Some("https://assets.pokemon.com/assets/cms2/img/pokedex/detail/001.png")
    );
    assert_eq!(
        bulbasaur.image_url(),
        "https://assets.pokemon.com/assets/cms2/img/pokedex/full/001.png"
    );
}

#[rstest]
fn test_special_form_images(pokedex: Pokedex) {
    let mega = entry(&pokedex, 10070);
    assert_eq!(mega.title(), "Mega Sharpedo (#10070)");
    assert_eq!(
        mega.image_url(),
        "https://assets.pokemon.com/assets/cms2/img/pokedex/full/319_f2.png"
    );
    assert_eq!(mega.thumbnail(), None);
}

#[rstest]
fn test_from_unknown_pokemon_id(pokedex: Pokedex) {
    assert!(PokemonEntry::from_pokemon_id(&pokedex, 9999).is_none());
}

#[rstest]
fn test_default_section(pokedex: Pokedex) {
    let expected = Section::new(BULBASAUR_SUMMARY).with_children(vec![
        reference("Base stats", "pokemon/1/base_stats"),
        reference("Evolutions", "pokemon/1/evolutions"),
        reference("Locations", "pokemon/1/locations"),
    ]);
    assert_eq!(entry(&pokedex, 1).default_section(), expected);
}

#[rstest]
fn test_summary_with_immunity_and_no_hidden_ability(pokedex: Pokedex) {
    let expected = "*Mega Sharpedo (#10070)*
Brutal Pokémon
Type: Water/Dark
Weaknesses: Fighting (2x), Bug (2x), Grass (2x), Electric (2x), Fairy (2x)
Resistances: Ghost (0.5x), Steel (0.5x), Fire (0.5x), Water (0.5x), Ice (0.5x), Dark (0.5x)
Immunities: Psychic (0x)
Abilities: Strong Jaw
Hidden ability: None
Height: 2.5 m
Weight: 130.3 kg
[Image](https://assets.pokemon.com/assets/cms2/img/pokedex/full/319_f2.png)";
    assert_eq!(entry(&pokedex, 10070).summary(), expected);
}

#[rstest]
fn test_summary_without_type_chart_rows_has_no_effectiveness_line(pokedex: Pokedex) {
    let summary = entry(&pokedex, 68).summary();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[2], "Type: Fighting");
    assert!(lines[3].starts_with("Abilities: "));
    assert!(!summary.contains("\n\n"));
}

#[rstest]
fn test_base_stats_section(pokedex: Pokedex) {
    let expected = Section::new(
        "*Bulbasaur (#001)*
```
HP:       45 ======
Attack:   49 =======
Defense:  49 =======
Sp. Atk:  65 ==========
Sp. Def:  65 ==========
Speed:    45 ======
Total:   318
```",
    )
    .with_parent(reference("", "pokemon/1/"))
    .with_siblings(vec![
        reference("Evolutions", "pokemon/1/evolutions"),
        reference("Locations", "pokemon/1/locations"),
    ]);
    assert_eq!(entry(&pokedex, 1).section("base_stats"), Some(expected));
}

#[rstest]
fn test_branching_evolutions(pokedex: Pokedex) {
    let expected = Section::new(
        "Oddish (#043)
`└` *Gloom (#044)* at level 21
`  └` Vileplume (#045) using a Leaf Stone
`  └` Bellossom (#182) using a Sun Stone",
    )
    .with_parent(reference("", "pokemon/44/"))
    .with_children(vec![
        reference("Oddish (#043)", "pokemon/43/"),
        reference("Vileplume (#045)", "pokemon/45/"),
        reference("Bellossom (#182)", "pokemon/182/"),
    ]);
    assert_eq!(entry(&pokedex, 44).section("evolutions"), Some(expected));
}

#[rstest]
fn test_trade_evolutions(pokedex: Pokedex) {
    let expected = Section::new(
        "Machop (#066)
`└` Machoke (#067) at level 28
`  └` *Machamp (#068)* when traded",
    )
    .with_parent(reference("", "pokemon/68/"))
    .with_children(vec![
        reference("Machop (#066)", "pokemon/66/"),
        reference("Machoke (#067)", "pokemon/67/"),
    ]);
    assert_eq!(entry(&pokedex, 68).section("evolutions"), Some(expected));

    let expected = Section::new(
        "Scyther (#123)
`└` *Scizor (#212)* when traded holding a Metal Coat",
    )
    .with_parent(reference("", "pokemon/212/"))
    .with_children(vec![reference("Scyther (#123)", "pokemon/123/")]);
    assert_eq!(entry(&pokedex, 212).section("evolutions"), Some(expected));
}

#[rstest]
fn test_special_form_evolutions_bold_their_species(pokedex: Pokedex) {
    let section = entry(&pokedex, 10070)
        .section("evolutions")
        .expect("evolutions section");
    assert_eq!(
        section.content,
        "Carvanha (#318)\n`└` *Sharpedo (#319)* at level 30"
    );
    assert_eq!(section.parent, Some(reference("", "pokemon/10070/")));
    assert_eq!(section.children, vec![reference("Carvanha (#318)", "pokemon/318/")]);
}

#[rstest]
fn test_single_stage_evolutions(pokedex: Pokedex) {
    let section = entry(&pokedex, 1).evolutions_section();
    assert_eq!(section.content, "*Bulbasaur (#001)*");
    assert!(section.children.is_empty());
}

#[rstest]
fn test_locations_grouped_by_version(pokedex: Pokedex) {
    let expected = Section::new(
        "*Pikachu (#025)*
Locations

*Red, Blue:* Viridian Forest, Power Plant
*Yellow:* Viridian Forest
*Ruby, Sapphire, Emerald:* Safari Zone
*FireRed, LeafGreen:* Viridian Forest, Power Plant",
    )
    .with_parent(reference("", "pokemon/25/"))
    .with_siblings(vec![
        reference("Base stats", "pokemon/25/base_stats"),
        reference("Evolutions", "pokemon/25/evolutions"),
    ]);
    assert_eq!(entry(&pokedex, 25).section("locations"), Some(expected));

    assert_eq!(
        entry(&pokedex, 43).locations(),
        "*Oddish (#043)*\nLocations\n\n*Red, Blue:* Viridian Forest\n*Black, White:* Pinwheel Forest"
    );
}

#[rstest]
fn test_locations_not_found_in_the_wild(pokedex: Pokedex) {
    let expected = Section::new("*Scizor (#212)*\nLocations\n\nNot found in the wild")
        .with_parent(reference("", "pokemon/212/"))
        .with_siblings(vec![
            reference("Base stats", "pokemon/212/base_stats"),
            reference("Evolutions", "pokemon/212/evolutions"),
        ]);
    assert_eq!(entry(&pokedex, 212).section("locations"), Some(expected));
}

#[rstest]
fn test_learnset(pokedex: Pokedex) {
    let expected = "```
Level,Move,Type,Cat.,Pwr.,Acc.,PP
1,Growl,Normal,Status,-,100%,40
1,Thunder Shock,Electric,Special,40,100%,30
5,Tail Whip,Normal,Status,-,100%,30
10,Thunder Wave,Electric,Status,-,90%,20
13,Quick Attack,Normal,Physical,40,100%,30
21,Double Team,Normal,Status,-,-%,15
26,Slam,Normal,Physical,80,75%,20
29,Thunderbolt,Electric,Special,90,100%,15
50,Thunder,Electric,Special,110,70%,10
```";
    assert_eq!(entry(&pokedex, 25).learnset(), expected);
}

#[rstest]
fn test_empty_learnset_keeps_header(pokedex: Pokedex) {
    assert_eq!(
        entry(&pokedex, 1).learnset(),
        "```\nLevel,Move,Type,Cat.,Pwr.,Acc.,PP\n```"
    );
}

#[rstest]
#[case("")]
#[case("base_stats")]
#[case("evolutions")]
#[case("locations")]
fn test_known_sections(pokedex: Pokedex, #[case] path: &str) {
    assert!(entry(&pokedex, 25).section(path).is_some());
}

#[rstest]
#[case("nonexistent")]
#[case("learnset")]
#[case("base_stats/")]
#[case("Base stats")]
fn test_unknown_sections(pokedex: Pokedex, #[case] path: &str) {
    assert_eq!(entry(&pokedex, 1).section(path), None);
}

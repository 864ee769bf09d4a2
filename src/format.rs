//! Pure helpers turning raw numbers and relations into display fragments.

use schema::{BaseStats, Evolution, EvolutionTrigger};

use crate::store::DataStore;

pub const STAT_NAMES: [&str; 6] = ["HP", "Attack", "Defense", "Sp. Atk", "Sp. Def", "Speed"];

/// `"{name} (#{id:03})"`, the label used for creatures everywhere.
pub fn pokemon_label(name: &str, id: u32) -> String {
    format!("{} (#{:03})", name, id)
}

/// Render a stored tenth-unit value (decimetres, hectograms) in whole units.
pub fn tenths(value: u32) -> String {
    format!("{}.{}", value / 10, value % 10)
}

/// Format `value` with `precision` significant digits, `%g` style:
/// trailing zeros are dropped and very large or small magnitudes switch
/// to exponent notation.
pub fn format_general(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Weaknesses, resistances and immunities, one line per non-empty bucket.
pub fn format_type_effectiveness(effectiveness: &[(String, f64)]) -> String {
    let bucket = |keep: fn(f64) -> bool| {
        effectiveness
            .iter()
            .filter(|(_, multiplier)| keep(*multiplier))
            .map(|(name, multiplier)| format!("{} ({}x)", name, format_general(*multiplier, 2)))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let weaknesses = bucket(|m| m > 1.0);
    let resistances = bucket(|m| m > 0.0 && m < 1.0);
    let immunities = bucket(|m| m == 0.0);

    [
        ("Weaknesses", weaknesses),
        ("Resistances", resistances),
        ("Immunities", immunities),
    ]
    .into_iter()
    .filter(|(_, names)| !names.is_empty())
    .map(|(label, names)| format!("{}: {}", label, names))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Bar length per stat: `floor(value / (highest / 10))`.
pub fn stat_bar_lengths(stats: &[u16; 6]) -> [usize; 6] {
    let highest = u32::from(stats.iter().copied().max().unwrap_or(0));
    let mut bars = [0; 6];
    if highest == 0 {
        return bars;
    }
    for (bar, &value) in bars.iter_mut().zip(stats) {
        *bar = (u32::from(value) * 10 / highest) as usize;
    }
    bars
}

/// The stat rows and total, without the surrounding code block.
pub fn format_base_stats(stats: &BaseStats) -> String {
    let values = stats.as_array();
    let bars = stat_bar_lengths(&values);
    let mut rows: Vec<String> = STAT_NAMES
        .iter()
        .zip(values.iter().zip(bars))
        .map(|(name, (value, bar))| {
            format!("{:8} {:3} {}", format!("{}:", name), value, "=".repeat(bar))
        })
        .collect();
    rows.push(format!("{:8} {}", "Total:", stats.total()));
    rows.join("\n")
}

/// How a species is reached from its parent, e.g. `" at level 21"`.
pub fn evolution_method(store: &dyn DataStore, evolution: &Evolution) -> String {
    let item_name = |id: Option<u32>| id.and_then(|id| store.get_item(id)).map(|i| i.name.as_str());

    match evolution.trigger {
        EvolutionTrigger::LevelUp => match evolution.minimum_level {
            Some(level) if level > 0 => format!(" at level {}", level),
            _ => String::new(),
        },
        EvolutionTrigger::UseItem => match item_name(evolution.trigger_item_id) {
            Some(name) => format!(" using a {}", name),
            None => String::new(),
        },
        EvolutionTrigger::Trade => {
            let mut method = String::from(" when traded");
            if let Some(name) = item_name(evolution.held_item_id) {
                method.push_str(&format!(" holding a {}", name));
            }
            method
        }
        EvolutionTrigger::Shed | EvolutionTrigger::Other => String::new(),
    }
}

/// Consecutive versions sharing one set of wild locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup {
    pub versions: Vec<String>,
    pub locations: Vec<String>,
}

/// Group `(version, location)` pairs, already in version order, first by
/// version and then by identical location lists across adjacent versions.
pub fn group_locations(encounters: Vec<(String, String)>) -> Vec<LocationGroup> {
    let mut by_version: Vec<(String, Vec<String>)> = Vec::new();
    for (version, location) in encounters {
        match by_version.last_mut() {
            Some((current, locations)) if *current == version => locations.push(location),
            _ => by_version.push((version, vec![location])),
        }
    }

    let mut groups: Vec<LocationGroup> = Vec::new();
    for (version, locations) in by_version {
        match groups.last_mut() {
            Some(group) if group.locations == locations => group.versions.push(version),
            _ => groups.push(LocationGroup {
                versions: vec![version],
                locations,
            }),
        }
    }
    groups
}

/// `"*Red, Blue:* Viridian Forest, Power Plant"`, one line per group.
pub fn format_location_groups(groups: &[LocationGroup]) -> String {
    groups
        .iter()
        .map(|group| {
            format!(
                "*{}:* {}",
                group.versions.join(", "),
                group.locations.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::pokedex;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, "2")]
    #[case(4.0, "4")]
    #[case(0.5, "0.5")]
    #[case(0.25, "0.25")]
    #[case(0.0, "0")]
    #[case(16.0, "16")]
    #[case(1.5, "1.5")]
    #[case(9.96, "10")]
    #[case(250.0, "2.5e+02")]
    #[case(0.00001, "1e-05")]
    fn test_format_general_two_significant_digits(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_general(value, 2), expected);
    }

    #[test]
    fn test_type_effectiveness_buckets() {
        let effectiveness = vec![
            ("Fire".to_string(), 2.0),
            ("Water".to_string(), 0.5),
            ("Electric".to_string(), 0.0),
            ("Normal".to_string(), 1.0),
        ];
        assert_eq!(
            format_type_effectiveness(&effectiveness),
            "Weaknesses: Fire (2x)\nResistances: Water (0.5x)\nImmunities: Electric (0x)"
        );
    }

    #[test]
    fn test_type_effectiveness_omits_empty_buckets() {
        let effectiveness = vec![("Ground".to_string(), 4.0), ("Rock".to_string(), 1.0)];
        assert_eq!(
            format_type_effectiveness(&effectiveness),
            "Weaknesses: Ground (4x)"
        );
        assert_eq!(format_type_effectiveness(&[]), "");
        assert_eq!(
            format_type_effectiveness(&[("Normal".to_string(), 1.0)]),
            ""
        );
    }

    #[test]
    fn test_stat_bars_scale_to_highest_stat() {
        assert_eq!(
            stat_bar_lengths(&[45, 49, 49, 65, 65, 45]),
            [6, 7, 7, 10, 10, 6]
        );
        assert_eq!(stat_bar_lengths(&[0; 6]), [0; 6]);
    }

    #[test]
    fn test_base_stats_rows() {
        let stats = BaseStats {
            hp: 45,
            attack: 49,
            defense: 49,
            sp_attack: 65,
            sp_defense: 65,
            speed: 45,
        };
        let expected = "HP:       45 ======
Attack:   49 =======
Defense:  49 =======
Sp. Atk:  65 ==========
Sp. Def:  65 ==========
Speed:    45 ======
Total:   318";
        assert_eq!(format_base_stats(&stats), expected);
    }

    #[rstest]
    #[case(7, "0.7")]
    #[case(69, "6.9")]
    #[case(3100, "310.0")]
    #[case(1303, "130.3")]
    fn test_tenths(#[case] value: u32, #[case] expected: &str) {
        assert_eq!(tenths(value), expected);
    }

    #[rstest]
    #[case(EvolutionTrigger::LevelUp, None, Some(21), None, " at level 21")]
    #[case(EvolutionTrigger::LevelUp, None, None, None, "")]
    #[case(EvolutionTrigger::UseItem, Some(85), None, None, " using a Leaf Stone")]
    #[case(EvolutionTrigger::Trade, None, None, None, " when traded")]
    #[case(
        EvolutionTrigger::Trade,
        None,
        None,
        Some(233),
        " when traded holding a Metal Coat"
    )]
    #[case(EvolutionTrigger::Shed, None, Some(20), None, "")]
    fn test_evolution_method(
        #[case] trigger: EvolutionTrigger,
        #[case] trigger_item_id: Option<u32>,
        #[case] minimum_level: Option<u8>,
        #[case] held_item_id: Option<u32>,
        #[case] expected: &str,
    ) {
        let dex = pokedex();
        let evolution = Evolution {
            id: 99,
            evolved_species_id: 44,
            trigger,
            trigger_item_id,
            minimum_level,
            held_item_id,
        };
        assert_eq!(evolution_method(&dex, &evolution), expected);
    }

    #[test]
    fn test_adjacent_versions_with_same_locations_merge() {
        let pairs = |rows: &[(&str, &str)]| {
            rows.iter()
                .map(|(v, l)| (v.to_string(), l.to_string()))
                .collect::<Vec<_>>()
        };
        let groups = group_locations(pairs(&[
            ("Red", "Viridian Forest"),
            ("Red", "Power Plant"),
            ("Blue", "Viridian Forest"),
            ("Blue", "Power Plant"),
            ("Yellow", "Viridian Forest"),
            ("Gold", "Viridian Forest"),
            ("FireRed", "Viridian Forest"),
            ("FireRed", "Power Plant"),
        ]));
        assert_eq!(
            format_location_groups(&groups),
            "*Red, Blue:* Viridian Forest, Power Plant
*Yellow, Gold:* Viridian Forest
*FireRed:* Viridian Forest, Power Plant"
        );
        assert!(group_locations(Vec::new()).is_empty());
    }
}

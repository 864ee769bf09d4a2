use schema::Pokemon;

use crate::store::DataStore;

/// Damage multiplier of every attacking type against `pokemon`.
///
/// Each type chart cell that targets one of the creature's types is folded
/// into the attacking type's running product. Entries are ordered by
/// attacking type id; attacking types with no cell against any of the
/// creature's types are absent (they are neutral).
pub fn type_effectiveness(store: &dyn DataStore, pokemon: &Pokemon) -> Vec<(String, f64)> {
    let mut multipliers: Vec<(u32, f64)> = Vec::new();
    for &target_type_id in &pokemon.type_ids {
        for efficacy in store.type_efficacies(target_type_id) {
            match multipliers
                .iter_mut()
                .find(|(type_id, _)| *type_id == efficacy.damage_type_id)
            {
                Some((_, product)) => *product *= efficacy.multiplier(),
                None => multipliers.push((efficacy.damage_type_id, efficacy.multiplier())),
            }
        }
    }
    multipliers.sort_by_key(|(type_id, _)| *type_id);

    multipliers
        .into_iter()
        .filter_map(|(type_id, product)| {
            store
                .get_type(type_id)
                .map(|attacking| (attacking.name.clone(), product))
        })
        .collect()
}

pub mod common;

#[cfg(test)]
mod test_pokemon_entry;

//! Request handlers sitting between a chat transport and the entries.
//!
//! A transport adapter (the CLI, the MCP server, a webhook) hands over the
//! raw query or callback path and gets a finished [`Reply`] or list of
//! inline results back. Nothing here fails: unknown queries and stale
//! navigation targets turn into fixed user-facing messages.

use tracing::info;

use crate::entries::{entry_for_entity, entry_for_slug, Entry, PokemonEntry};
use crate::lookup::Lookup;
use crate::reply::{inline_result_for_entry, InlineQueryResult, Reply};
use crate::store::DataStore;

/// Queries are cut to this many characters before lookup.
pub const MAX_QUERY_LENGTH: usize = 40;

pub const NO_RESULTS: &str = "No results!";
pub const INVALID_NAVIGATION: &str = "Invalid navigation target";

/// `query` cut to at most `max_len` characters.
pub fn truncate_query(query: &str, max_len: usize) -> &str {
    match query.char_indices().nth(max_len) {
        Some((end, _)) => &query[..end],
        None => query,
    }
}

/// Answer a plain text message with the best match's default section.
pub fn handle_text_query(
    store: &dyn DataStore,
    lookup: &dyn Lookup,
    query: &str,
    max_len: usize,
) -> Reply {
    let query = truncate_query(query, max_len);
    let hits = lookup.lookup(store, query);
    info!(query, hits = hits.len(), "text query");

    hits.into_iter()
        .next()
        .and_then(|hit| entry_for_entity(store, hit.entity))
        .map(|entry| Reply::from_section(entry.default_section()))
        .unwrap_or_else(|| Reply::plain(NO_RESULTS))
}

/// One inline article per hit that resolves to an entry, in rank order.
pub fn handle_inline_query(
    store: &dyn DataStore,
    lookup: &dyn Lookup,
    query: &str,
    max_len: usize,
) -> Vec<InlineQueryResult> {
    let query = truncate_query(query, max_len);
    if query.trim().is_empty() {
        return Vec::new();
    }
    let hits = lookup.lookup(store, query);
    info!(query, hits = hits.len(), "inline query");

    hits.into_iter()
        .filter_map(|hit| entry_for_entity(store, hit.entity))
        .map(|entry| inline_result_for_entry(entry.as_ref()))
        .collect()
}

/// A navigation target split into slug kind, id and sub-section path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPath<'p> {
    pub kind: &'p str,
    pub id: u32,
    pub subpath: &'p str,
}

/// Parse `"{kind}/{id}"`, `"{kind}/{id}/"` or `"{kind}/{id}/{subpath}"`.
pub fn parse_section_path(path: &str) -> Option<SectionPath<'_>> {
    let mut parts = path.splitn(3, '/');
    let kind = parts.next().filter(|kind| !kind.is_empty())?;
    let id = parts.next()?.parse().ok()?;
    let subpath = parts.next().unwrap_or_default();
    Some(SectionPath { kind, id, subpath })
}

/// Follow a menu button back to the section it points at.
pub fn handle_navigation(store: &dyn DataStore, path: &str) -> Reply {
    let section = parse_section_path(path).and_then(|target| {
        entry_for_slug(store, target.kind, target.id)?.section(target.subpath)
    });
    info!(path, found = section.is_some(), "navigation");

    match section {
        Some(section) => Reply::from_section(section),
        None => Reply::plain(INVALID_NAVIGATION),
    }
}

/// Reply text followed by one `[label] -> target` line per menu button.
pub fn render_reply(reply: &Reply) -> String {
    let mut output = reply.text.clone();
    if let Some(markup) = &reply.reply_markup {
        output.push('\n');
        for button in markup.buttons() {
            output.push_str(&format!("\n[{}] -> {}", button.text, button.callback_data));
        }
    }
    output
}

/// The level-up learnset table of one pokemon variety.
pub fn handle_learnset(store: &dyn DataStore, pokemon_id: u32) -> Reply {
    let entry = PokemonEntry::from_pokemon_id(store, pokemon_id);
    info!(pokemon_id, found = entry.is_some(), "learnset");

    match entry {
        Some(entry) => Reply::plain(format!("*{}*\n{}", entry.title(), entry.learnset())),
        None => Reply::plain(NO_RESULTS),
    }
}

//! Rotom MCP Server
//!
//! Exposes Pokédex lookup and section navigation over the Model Context
//! Protocol on stdio.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use rotom::interface::{handle_learnset, handle_navigation, handle_text_query, render_reply};
use rotom::{logging, Config, NameLookup, Pokedex};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::info;

#[derive(Debug, Clone)]
pub struct RotomService {
    tool_router: ToolRouter<RotomService>,
    store: Arc<Pokedex>,
    max_query_length: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupRequest {
    #[schemars(description = "Name of a Pokémon, item, ability or move")]
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NavigateRequest {
    #[schemars(description = "Section path from a menu button, e.g. 'pokemon/25/evolutions'")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LearnsetRequest {
    #[schemars(description = "Pokémon id, as shown in entry titles")]
    pub pokemon_id: u32,
}

#[tool_router]
impl RotomService {
    pub fn new(store: Arc<Pokedex>, max_query_length: usize) -> Self {
        Self {
            tool_router: Self::tool_router(),
            store,
            max_query_length,
        }
    }

    #[tool(description = "Look up the Pokédex entry best matching a name")]
    async fn lookup(
        &self,
        Parameters(request): Parameters<LookupRequest>,
    ) -> Result<CallToolResult, McpError> {
        let reply = handle_text_query(
            self.store.as_ref(),
            &NameLookup,
            &request.query,
            self.max_query_length,
        );
        Ok(CallToolResult::success(vec![Content::text(render_reply(&reply))]))
    }

    #[tool(description = "Open a section of an entry by its path")]
    async fn navigate(
        &self,
        Parameters(request): Parameters<NavigateRequest>,
    ) -> Result<CallToolResult, McpError> {
        let reply = handle_navigation(self.store.as_ref(), &request.path);
        Ok(CallToolResult::success(vec![Content::text(render_reply(&reply))]))
    }

    #[tool(description = "List the level-up moves of a Pokémon")]
    async fn learnset(
        &self,
        Parameters(request): Parameters<LearnsetRequest>,
    ) -> Result<CallToolResult, McpError> {
        let reply = handle_learnset(self.store.as_ref(), request.pokemon_id);
        Ok(CallToolResult::success(vec![Content::text(render_reply(&reply))]))
    }
}

#[tool_handler]
impl ServerHandler for RotomService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(None)?;
    logging::init(&config.logging);

    let store = Arc::new(Pokedex::load(&config.data_path)?);
    let service = RotomService::new(store, config.max_query_length);

    info!("starting MCP server on stdio");
    let server = service.serve((stdin(), stdout())).await?;
    let quit_reason = server.waiting().await?;

    info!(?quit_reason, "MCP server exiting");
    Ok(())
}

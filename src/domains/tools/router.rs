//! Tool Router - builds the rmcp ToolRouter from the catalog.
//!
//! Every tool advertised in the catalog must have a handler registered here.
//! The pairing is checked when the router is built, at startup, so a catalog
//! entry without a handler aborts the server instead of failing on the first
//! call to the orphaned tool.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rmcp::handler::server::tool::{ToolRoute, ToolRouter};

use super::ToolError;
use super::catalog::{ToolDescriptor, catalog};
use super::definitions::MobyTool;
use crate::domains::moby::MobyClient;

/// Factory producing the dispatch route for one named tool.
type HandlerFactory<S> = fn(Arc<MobyClient>) -> ToolRoute<S>;

/// Handlers keyed by tool name. Must stay in lockstep with the catalog.
fn handler_table<S>() -> HashMap<&'static str, HandlerFactory<S>>
where
    S: Send + Sync + 'static,
{
    let mut table: HashMap<&'static str, HandlerFactory<S>> = HashMap::new();
    table.insert(MobyTool::NAME, MobyTool::create_route);
    table
}

/// Build the tool router with all cataloged tools.
pub fn build_tool_router<S>(client: Arc<MobyClient>) -> Result<ToolRouter<S>, ToolError>
where
    S: Send + Sync + 'static,
{
    router_for_catalog(&catalog(), client)
}

/// Pair each catalog entry with its handler, rejecting gaps and duplicates.
fn router_for_catalog<S>(
    descriptors: &[ToolDescriptor],
    client: Arc<MobyClient>,
) -> Result<ToolRouter<S>, ToolError>
where
    S: Send + Sync + 'static,
{
    let handlers = handler_table::<S>();
    let mut seen = HashSet::new();
    let mut router = ToolRouter::new();

    for descriptor in descriptors {
        if !seen.insert(descriptor.name) {
            return Err(ToolError::duplicate(descriptor.name));
        }
        let factory = handlers
            .get(descriptor.name)
            .ok_or_else(|| ToolError::missing_handler(descriptor.name))?;
        router = router.with_route(factory(client.clone()));
    }

    Ok(router)
}

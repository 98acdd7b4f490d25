//! Flat tool table across every domain server

use std::collections::HashMap;
use std::sync::Arc;

use mcp_common::{EmbeddableMcp, Tool};

use crate::gate::Domain;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Tool '{tool}' is declared by both the {first} and {second} domains")]
    DuplicateTool {
        tool: String,
        first: Domain,
        second: Domain,
    },
}

/// One catalog entry and the domain that owns it
#[derive(Clone)]
pub struct Route {
    pub domain: Domain,
    pub tool: Tool,
    server: Arc<dyn EmbeddableMcp>,
}

impl Route {
    pub fn server(&self) -> &dyn EmbeddableMcp {
        self.server.as_ref()
    }
}

/// Every registered tool, in registration order, indexed by name
#[derive(Clone, Default)]
pub struct ToolRegistry {
    routes: Vec<Route>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every tool of `server` under `domain`
    pub fn register<S: EmbeddableMcp + 'static>(
        &mut self,
        domain: Domain,
        server: S,
    ) -> Result<(), RegistryError> {
        self.register_arc(domain, Arc::new(server))
    }

    pub fn register_arc(
        &mut self,
        domain: Domain,
        server: Arc<dyn EmbeddableMcp>,
    ) -> Result<(), RegistryError> {
        for tool in server.list_tools() {
            let name = tool.name.to_string();
            if let Some(&existing) = self.by_name.get(&name) {
                return Err(RegistryError::DuplicateTool {
                    tool: name,
                    first: self.routes[existing].domain,
                    second: domain,
                });
            }
            self.by_name.insert(name, self.routes.len());
            self.routes.push(Route {
                domain,
                tool,
                server: Arc::clone(&server),
            });
        }

        tracing::debug!(
            domain = %domain,
            server = server.server_name(),
            total = self.routes.len(),
            "registered domain tools"
        );
        Ok(())
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Catalog entries of the domains accepted by `enabled`
    pub fn tools(&self, enabled: impl Fn(Domain) -> bool) -> Vec<Tool> {
        self.routes
            .iter()
            .filter(|route| enabled(route.domain))
            .map(|route| route.tool.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

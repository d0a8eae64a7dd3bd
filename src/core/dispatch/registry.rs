use crate::core::dispatch::handler::Handler;
use crate::domain::error::{ChromactlError, ChromactlResult};
use std::collections::HashMap;

/// Name and description of a registered command
#[derive(Debug, Clone)]
pub struct CommandSummary {
    pub name: String,
    pub about: String,
}

/// Resolves a command name to a registered handler and invokes it.
///
/// Lookup is an exact, case-sensitive match. Listing order is insertion
/// order; re-registering a name replaces the handler without moving the
/// name in the listing.
pub struct Dispatcher {
    handlers: HashMap<String, Box<dyn Handler>>,
    order: Vec<String>,
}

impl Dispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a handler under the name it reports.
    ///
    /// The empty string is rejected, so an empty command can never match.
    pub fn register<H>(&mut self, handler: H) -> ChromactlResult<()>
    where
        H: Handler + 'static,
    {
        let name = handler.name().to_string();
        if name.is_empty() {
            return Err(ChromactlError::InvalidInput(
                "command name must not be empty".to_string(),
            ));
        }

        if self.handlers.insert(name.clone(), Box::new(handler)).is_none() {
            self.order.push(name);
        }
        Ok(())
    }

    /// Resolve `cmd` and invoke its handler with `args`.
    ///
    /// An unregistered name invokes nothing and reports the offending name
    /// together with every supported command.
    pub fn dispatch(&self, cmd: &str, args: &[String]) -> ChromactlResult<()> {
        match self.handlers.get(cmd) {
            Some(handler) => {
                tracing::debug!(command = cmd, args = args.len(), "dispatching");
                handler.run(args).map_err(|source| ChromactlError::Handler {
                    command: cmd.to_string(),
                    source,
                })
            }
            None => Err(ChromactlError::UnknownCommand {
                name: cmd.to_string(),
                available: self.command_names(),
            }),
        }
    }

    /// Registered command names in insertion order
    pub fn command_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Registered commands with their descriptions, in insertion order
    pub fn command_summaries(&self) -> Vec<CommandSummary> {
        self.order
            .iter()
            .filter_map(|name| {
                self.handlers.get(name).map(|handler| CommandSummary {
                    name: name.clone(),
                    about: handler.about().to_string(),
                })
            })
            .collect()
    }

    /// Whether `cmd` has a registered handler
    pub fn contains(&self, cmd: &str) -> bool {
        self.handlers.contains_key(cmd)
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

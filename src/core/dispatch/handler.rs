use anyhow::Result;

/// Unit of behavior bound to a command name.
///
/// Handlers receive the argument tokens exactly as the caller supplied
/// them and run to completion before control returns to the dispatcher.
pub trait Handler {
    /// Registry key for this handler. Must be non-empty.
    fn name(&self) -> &str;

    /// One-line description shown in command listings.
    fn about(&self) -> &str;

    /// Invoke the handler with the remaining command line tokens.
    fn run(&self, args: &[String]) -> Result<()>;
}

/// Extension point for the engine build pipeline.
pub struct BuildCommand;

impl Handler for BuildCommand {
    fn name(&self) -> &str {
        "build"
    }

    fn about(&self) -> &str {
        "Build the engine and its components"
    }

    fn run(&self, args: &[String]) -> Result<()> {
        tracing::debug!(command = "build", args = args.len(), "handler invoked");
        Ok(())
    }
}

/// Extension point for launching the demo scene.
pub struct DemoCommand;

impl Handler for DemoCommand {
    fn name(&self) -> &str {
        "demo"
    }

    fn about(&self) -> &str {
        "Run the engine demo scene"
    }

    fn run(&self, args: &[String]) -> Result<()> {
        tracing::debug!(command = "demo", args = args.len(), "handler invoked");
        Ok(())
    }
}

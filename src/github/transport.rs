use std::io;
use std::process::Output;

use async_trait::async_trait;
use tracing::debug;

/// Name of the GitHub CLI binary, resolved through `PATH`.
pub const GH_BIN: &str = "gh";

/// Runs one `gh` invocation to completion and hands back the raw output.
///
/// This trait exists so tests can substitute a scripted runner; it is not
/// an abstraction over different transports. Production code always goes
/// through [`GhRunner`].
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[String]) -> io::Result<Output>;
}

/// Spawns the real `gh` binary and waits for it to exit.
#[derive(Debug, Default)]
pub struct GhRunner;

#[async_trait]
impl CommandRunner for GhRunner {
    async fn run(&self, args: &[String]) -> io::Result<Output> {
        debug!("running {} {}", GH_BIN, args.join(" "));
        tokio::process::Command::new(GH_BIN)
            .args(args)
            .output()
            .await
    }
}

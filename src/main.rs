use clap::Parser;
use tracing_subscriber::EnvFilter;

mod assign;
mod checks;
mod cli;
mod github;
mod messages;
mod plan;
mod repository;

use cli::{Cli, Commands};
use github::transport::GhRunner;
use github::Github;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Setup tracing subscriber
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("roadmap=info"))
                .unwrap(),
        )
        .compact()
        .init();

    let cli = Cli::parse();
    let mut out = std::io::stdout();

    match cli.command {
        Commands::Assign { repo } => {
            let github = Github::new(GhRunner, repo);
            let plan = plan::builtin()?;

            // Failures land in the printed summary, not the exit status.
            assign::Runner::new(&github, &plan).run(&mut out).await?;
        }
        Commands::Checks { repo, ruleset } => {
            let github = Github::new(GhRunner, repo);

            let present = checks::verify(&github, ruleset, &mut out).await?;
            if !present {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

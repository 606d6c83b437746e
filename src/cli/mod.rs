use clap::{Parser, Subcommand};

use crate::checks;
use crate::repository::Repository;

#[derive(Parser)]
#[command(version, about, long_about = None, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add issues to their project boards, milestones, and due dates
    Assign {
        /// Repository in format owner/repo
        #[arg(
            short,
            long,
            default_value = "RdHamilton/MTGA-Companion",
            value_parser = parse_repository,
        )]
        repo: Repository,
    },
    /// Verify the branch ruleset requires the CI status checks
    Checks {
        /// Repository in format owner/repo
        #[arg(
            short,
            long,
            default_value = "RdHamilton/MTGA-Companion",
            value_parser = parse_repository,
        )]
        repo: Repository,
        /// Ruleset id to inspect
        #[arg(long, default_value_t = checks::RULESET_ID)]
        ruleset: u64,
    },
}

fn parse_repository(value: &str) -> Result<Repository, String> {
    Repository::parse(value).ok_or_else(|| format!("expected owner/repo, got {value:?}"))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_assign_defaults() {
        let cli = Cli::try_parse_from(["roadmap", "assign"]).unwrap();
        match cli.command {
            Commands::Assign { repo } => {
                assert_eq!(repo.full_name(), "RdHamilton/MTGA-Companion");
            }
            _ => panic!("expected assign"),
        }
    }

    #[test]
    fn test_checks_overrides() {
        let cli = Cli::try_parse_from([
            "roadmap",
            "checks",
            "--repo",
            "octocat/Hello-World",
            "--ruleset",
            "42",
        ])
        .unwrap();
        match cli.command {
            Commands::Checks { repo, ruleset } => {
                assert_eq!(repo.owner(), "octocat");
                assert_eq!(ruleset, 42);
            }
            _ => panic!("expected checks"),
        }
    }

    #[test]
    fn test_parse_repository_rejects_malformed_values() {
        assert!(parse_repository("octocat/Hello-World").is_ok());
        assert!(parse_repository("no-slash").is_err());
        assert!(parse_repository("owner/").is_err());
    }
}

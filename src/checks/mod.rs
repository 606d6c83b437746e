//! Verification of required status checks on the repository ruleset.

use std::io::Write;

use anyhow::Result;

use crate::github::transport::CommandRunner;
use crate::github::Github;
use crate::messages;

/// Ruleset protecting the main branch.
pub const RULESET_ID: u64 = 9523549;

/// CI jobs that must pass before a pull request can merge.
pub const REQUIRED_CHECKS: &[&str] = &["Test (Linux)", "Lint", "Format Check"];

const REQUIRED_STATUS_CHECKS_RULE: &str = "required_status_checks";

/// Reports whether the ruleset already carries a required-status-checks
/// rule. When it does not, prints step-by-step instructions for adding one
/// and returns `false`.
pub async fn verify<R: CommandRunner, W: Write>(
    github: &Github<R>,
    ruleset_id: u64,
    out: &mut W,
) -> Result<bool> {
    let ruleset = github.ruleset(ruleset_id).await?;

    writeln!(out, "Current ruleset: {}", ruleset.name)?;
    writeln!(out, "Current rules: {:?}", ruleset.rule_types())?;

    if ruleset.has_rule(REQUIRED_STATUS_CHECKS_RULE) {
        writeln!(out, "Required status checks rule already exists in ruleset")?;
        return Ok(true);
    }

    writeln!(out)?;
    write!(
        out,
        "{}",
        messages::remediation_instructions(
            &github.repository().full_name(),
            ruleset_id,
            REQUIRED_CHECKS,
        )
    )?;

    Ok(false)
}

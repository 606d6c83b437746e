//! Formatted user-facing text for console output.
//!
//! Everything the tool prints beyond bare progress segments is built here,
//! so the exact wording lives in one place.

/// Header printed before a project's issues are processed.
pub fn processing_group(project: &str, count: usize) -> String {
    format!("Processing {project} ({count} issues)...")
}

/// Final tally of the assignment run.
pub fn summary(processed: usize, total: usize) -> String {
    format!("Completed: {processed}/{total} issues processed")
}

/// Header of the failure listing.
pub fn errors_header(count: usize) -> String {
    format!("Errors ({count}):")
}

/// One failure entry of the listing.
pub fn error_line(issue: u64, message: &str) -> String {
    format!("  Issue #{issue}: {message}")
}

/// Step-by-step instructions for adding required status checks when the
/// ruleset does not carry the rule yet. Covers both the ruleset UI and the
/// classic branch-protection route.
pub fn remediation_instructions(repo: &str, ruleset_id: u64, checks: &[&str]) -> String {
    let mut text = String::from("To add required status checks, you have two options:\n");

    text.push_str("\nOption 1: Update the ruleset via GitHub UI\n");
    text.push_str(&format!("1. Go to: https://github.com/{repo}/settings/rules\n"));
    text.push_str(&format!("2. Click on ruleset ID {ruleset_id}\n"));
    text.push_str("3. Click 'Add rule' and select 'Required status checks'\n");
    text.push_str("4. Add the following checks:\n");
    for check in checks {
        text.push_str(&format!("   - {check}\n"));
    }
    text.push_str("5. Save the changes\n");

    text.push_str("\nOption 2: Set up branch protection (Recommended)\n");
    text.push_str(&format!("1. Go to: https://github.com/{repo}/settings/branches\n"));
    text.push_str("2. Click 'Add rule' or edit existing rule for 'main' branch\n");
    text.push_str("3. Enable 'Require status checks to pass before merging'\n");
    text.push_str("4. Select the following required checks:\n");
    for check in checks {
        text.push_str(&format!("   - {check}\n"));
    }
    text.push_str("5. Optionally enable 'Require branches to be up to date before merging'\n");
    text.push_str("6. Save the changes\n");

    text.push_str("\nNote: Branch protection is more flexible and easier to manage.\n");
    text.push_str("Rulesets are newer but may have limitations.\n");

    text
}

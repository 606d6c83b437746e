use std::io::Write;

use tracing::{debug, warn};

use crate::github::transport::CommandRunner;
use crate::github::{Github, ProjectAttach};
use crate::messages;
use crate::plan::{Assignment, Plan, ProjectRef};

use super::errors::Error;

/// Accumulated result of one assignment run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub processed: usize,
    pub total: usize,
    /// One entry per recorded step failure, in encounter order.
    pub failures: Vec<(u64, String)>,
}

/// Applies the plan issue by issue, recording failures instead of stopping.
///
/// Steps for one issue run in a fixed order: resolve the node id, attach to
/// the board, set the milestone, append the due-date marker. The first two
/// must succeed for the later steps to run; milestone and due date are
/// independent mutations attempted regardless of each other. Every step is
/// add-if-absent, so re-running the whole plan after a partial run is safe.
pub struct Runner<'a, R: CommandRunner> {
    github: &'a Github<R>,
    plan: &'a Plan,
}

impl<'a, R: CommandRunner> Runner<'a, R> {
    pub fn new(github: &'a Github<R>, plan: &'a Plan) -> Self {
        Self { github, plan }
    }

    /// Runs the whole plan, streaming progress to `out`.
    ///
    /// Only writer errors propagate; `gh` failures land in the report. An
    /// issue counts as processed when none of its steps recorded a failure.
    pub async fn run<W: Write>(&self, out: &mut W) -> std::io::Result<RunReport> {
        let mut report = RunReport {
            total: self.plan.total_assignments(),
            ..RunReport::default()
        };

        for (number, rows) in self.plan.groups() {
            let Some(project) = self.plan.project_by_number(number) else {
                warn!("skipping project #{}: not in the project map", number);
                let message = Error::UnknownProject(number).to_string();
                for row in rows {
                    report.failures.push((row.issue, message.clone()));
                }
                continue;
            };

            writeln!(out)?;
            writeln!(
                out,
                "{}",
                messages::processing_group(project.name, rows.len())
            )?;

            for row in rows {
                write!(out, "  Issue #{}...", row.issue)?;
                out.flush()?;

                let failures = self.apply(project, row, out).await?;
                if failures.is_empty() {
                    writeln!(out, " ✓")?;
                    report.processed += 1;
                } else {
                    writeln!(out, " ✗ Error: {}", failures[0])?;
                    for message in failures {
                        report.failures.push((row.issue, message));
                    }
                }
            }
        }

        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "{}", messages::summary(report.processed, report.total))?;
        if !report.failures.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", messages::errors_header(report.failures.len()))?;
            for (issue, message) in &report.failures {
                writeln!(out, "{}", messages::error_line(*issue, message))?;
            }
        }

        Ok(report)
    }

    /// Applies one assignment, returning the failure messages it recorded.
    async fn apply<W: Write>(
        &self,
        project: &ProjectRef,
        row: &Assignment,
        out: &mut W,
    ) -> std::io::Result<Vec<String>> {
        debug!("issue #{} phase {:?} due {}", row.issue, row.phase, row.due);

        let mut failures = Vec::new();
        let mut first = true;

        let node_id = match self.github.issue_node_id(row.issue).await {
            Ok(id) => id,
            Err(e) => {
                failures.push(Error::from(e).to_string());
                return Ok(failures);
            }
        };

        match self.github.add_issue_to_project(project.id, &node_id).await {
            Ok(ProjectAttach::Added(_)) => segment(out, &mut first, "added to project")?,
            Ok(ProjectAttach::AlreadyPresent) => segment(out, &mut first, "already in project")?,
            Err(e) => {
                failures.push(Error::from(e).to_string());
                return Ok(failures);
            }
        }

        // Milestone and due date are independent; a milestone miss must not
        // block the due-date marker.
        match self.plan.milestone_number(row.milestone) {
            Some(milestone) => match self.github.set_issue_milestone(row.issue, milestone).await {
                Ok(()) => segment(out, &mut first, "milestone set")?,
                Err(e) => failures.push(Error::from(e).to_string()),
            },
            None => failures.push(Error::UnknownMilestone(row.milestone.to_string()).to_string()),
        }

        match self.apply_due_date(row).await {
            Ok(()) => segment(out, &mut first, "due date set")?,
            Err(e) => failures.push(Error::from(e).to_string()),
        }

        Ok(failures)
    }

    /// Appends the due-date marker to the issue body unless it is already
    /// there. A body that carries the marker is left untouched.
    async fn apply_due_date(&self, row: &Assignment) -> Result<(), crate::github::Error> {
        let marker = row.due_marker();
        let body = self.github.issue_body(row.issue).await?;
        if body.contains(&marker) {
            return Ok(());
        }

        let body = if body.is_empty() {
            marker
        } else {
            format!("{body}\n\n{marker}")
        };
        self.github.set_issue_body(row.issue, &body).await
    }
}

/// Writes one progress segment, comma-separated after the first.
fn segment<W: Write>(out: &mut W, first: &mut bool, text: &str) -> std::io::Result<()> {
    if *first {
        write!(out, " {text}")?;
    } else {
        write!(out, ", {text}")?;
    }
    *first = false;
    out.flush()
}

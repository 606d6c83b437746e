use std::io;
use std::process::Output;

use serde::de::DeserializeOwned;

use crate::repository::Repository;

pub mod errors;
pub mod transport;
pub mod types;

pub use errors::Error;
use transport::CommandRunner;

/// Outcome of attaching an issue to a project board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectAttach {
    /// A new item was created; carries the item id GitHub assigned.
    Added(String),
    /// The issue was already on the board. Not an error.
    AlreadyPresent,
}

/// Thin client over the `gh` CLI, scoped to one repository.
///
/// Every method issues exactly one `gh` invocation and decodes its JSON
/// output. Nothing is cached or retried.
pub struct Github<R: CommandRunner> {
    runner: R,
    repository: Repository,
}

impl<R: CommandRunner> Github<R> {
    pub fn new(runner: R, repository: Repository) -> Self {
        Self { runner, repository }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolves the GraphQL node id of an issue.
    ///
    /// A response without the issue node means the issue does not exist in
    /// the repository.
    pub async fn issue_node_id(&self, issue: u64) -> Result<String, Error> {
        let args = graphql_args(&issue_node_id_query(&self.repository, issue));
        let output = self.run(&args).await?;
        let response: types::issue::IssueNodeResponse = decode(&output.stdout)?;

        response
            .data
            .and_then(|d| d.repository)
            .and_then(|r| r.issue)
            .map(|i| i.id)
            .ok_or(Error::IssueNotFound(issue))
    }

    /// Attaches an issue to a Projects v2 board.
    ///
    /// An "already exists" response from GitHub is reported as
    /// [`ProjectAttach::AlreadyPresent`], not as an error.
    pub async fn add_issue_to_project(
        &self,
        project_id: &str,
        issue_node_id: &str,
    ) -> Result<ProjectAttach, Error> {
        let args = graphql_args(&add_item_mutation(project_id, issue_node_id));
        let output = self.run_raw(&args).await?;

        if !output.status.success() {
            let detail = output_detail(&output);
            if is_already_on_board(&detail) {
                return Ok(ProjectAttach::AlreadyPresent);
            }
            return Err(Error::CommandFailed {
                args: render_args(&args),
                detail,
            });
        }

        let response: types::project::AddItemResponse = decode(&output.stdout)?;
        if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
            let detail = join_graphql_errors(&errors);
            if is_already_on_board(&detail) {
                return Ok(ProjectAttach::AlreadyPresent);
            }
            return Err(Error::CommandFailed {
                args: render_args(&args),
                detail,
            });
        }

        response
            .data
            .and_then(|d| d.add_project_v2_item_by_id)
            .and_then(|a| a.item)
            .map(|item| ProjectAttach::Added(item.id))
            .ok_or(Error::Unexpected("addProjectV2ItemById returned no item"))
    }

    /// Sets the milestone field of an issue by milestone number.
    pub async fn set_issue_milestone(&self, issue: u64, milestone: u64) -> Result<(), Error> {
        let args = vec![
            "issue".to_string(),
            "edit".to_string(),
            issue.to_string(),
            "--milestone".to_string(),
            milestone.to_string(),
            "--repo".to_string(),
            self.repository.full_name(),
        ];
        self.run(&args).await.map(|_| ())
    }

    /// Fetches the free-text body of an issue. A missing body reads as "".
    pub async fn issue_body(&self, issue: u64) -> Result<String, Error> {
        let args = vec![
            "issue".to_string(),
            "view".to_string(),
            issue.to_string(),
            "--json".to_string(),
            "body".to_string(),
            "--repo".to_string(),
            self.repository.full_name(),
        ];
        let output = self.run(&args).await?;
        let payload: types::issue::IssueBody = decode(&output.stdout)?;
        Ok(payload.body.unwrap_or_default())
    }

    /// Replaces the free-text body of an issue.
    pub async fn set_issue_body(&self, issue: u64, body: &str) -> Result<(), Error> {
        let args = vec![
            "issue".to_string(),
            "edit".to_string(),
            issue.to_string(),
            "--body".to_string(),
            body.to_string(),
            "--repo".to_string(),
            self.repository.full_name(),
        ];
        self.run(&args).await.map(|_| ())
    }

    /// Fetches one repository ruleset by id through the REST endpoint.
    pub async fn ruleset(&self, ruleset_id: u64) -> Result<types::ruleset::Ruleset, Error> {
        let args = vec![
            "api".to_string(),
            format!("repos/{}/rulesets/{}", self.repository.full_name(), ruleset_id),
        ];
        let output = self.run(&args).await?;
        decode(&output.stdout)
    }

    /// Runs `gh`, mapping spawn failures but leaving the exit status to the
    /// caller.
    async fn run_raw(&self, args: &[String]) -> Result<Output, Error> {
        self.runner.run(args).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::GhMissing,
            _ => Error::Spawn(e),
        })
    }

    /// Runs `gh` and requires a zero exit status.
    async fn run(&self, args: &[String]) -> Result<Output, Error> {
        let output = self.run_raw(args).await?;
        if output.status.success() {
            return Ok(output);
        }
        Err(Error::CommandFailed {
            args: render_args(args),
            detail: output_detail(&output),
        })
    }
}

pub(crate) fn issue_node_id_query(repository: &Repository, issue: u64) -> String {
    format!(
        "{{ repository(owner: \"{}\", name: \"{}\") {{ issue(number: {}) {{ id }} }} }}",
        repository.owner, repository.name, issue
    )
}

pub(crate) fn add_item_mutation(project_id: &str, issue_node_id: &str) -> String {
    format!(
        "mutation {{ addProjectV2ItemById(input: {{ projectId: \"{project_id}\", contentId: \"{issue_node_id}\" }}) {{ item {{ id }} }} }}"
    )
}

pub(crate) fn graphql_args(query: &str) -> Vec<String> {
    vec![
        "api".to_string(),
        "graphql".to_string(),
        "-f".to_string(),
        format!("query={query}"),
    ]
}

/// GitHub's wording for a duplicate project item varies between API
/// versions; match the known phrasings loosely on the error text.
fn is_already_on_board(detail: &str) -> bool {
    let detail = detail.to_lowercase();
    detail.contains("already exists") || detail.contains("already added")
}

fn join_graphql_errors(errors: &[types::GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn render_args(args: &[String]) -> String {
    args.join(" ")
}

/// Best available failure detail: stderr, then stdout, then the bare status.
fn output_detail(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
    if !stderr.is_empty() {
        return stderr;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    if !stdout.is_empty() {
        return stdout;
    }

    format!("exit status {}", output.status)
}

fn decode<T: DeserializeOwned>(stdout: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice(stdout)?)
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("issue #{0} not found")]
    IssueNotFound(u64),
    #[error("`gh {args}` failed: {detail}")]
    CommandFailed { args: String, detail: String },
    #[error("gh was not found on PATH. Install it and authenticate with `gh auth login`")]
    GhMissing,
    #[error("failed to launch gh: {0}")]
    Spawn(std::io::Error),
    #[error("undecodable gh output: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unexpected gh response: {0}")]
    Unexpected(&'static str),
}

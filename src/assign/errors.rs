#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("project #{0} is not in the project map")]
    UnknownProject(u64),
    #[error("milestone {0:?} is not in the milestone map")]
    UnknownMilestone(String),
    #[error(transparent)]
    Github(#[from] crate::github::Error),
}

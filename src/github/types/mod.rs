use serde::{Deserialize, Serialize};

pub mod issue;
pub mod project;
pub mod ruleset;

#[derive(Deserialize, Serialize, Debug)]
pub struct GraphQLError {
    pub message: String,
}

use serde::{Deserialize, Serialize};

/// Envelope of the issue node-id GraphQL query.
#[derive(Deserialize, Serialize, Debug)]
pub struct IssueNodeResponse {
    pub data: Option<Data>,
    pub errors: Option<Vec<super::GraphQLError>>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Data {
    pub repository: Option<Repository>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Repository {
    pub issue: Option<IssueNode>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct IssueNode {
    pub id: String,
}

/// Payload of `gh issue view <n> --json body`.
#[derive(Deserialize, Serialize, Debug)]
pub struct IssueBody {
    #[serde(default)]
    pub body: Option<String>,
}

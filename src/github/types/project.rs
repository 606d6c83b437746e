use serde::{Deserialize, Serialize};

/// Envelope of the `addProjectV2ItemById` mutation.
#[derive(Deserialize, Serialize, Debug)]
pub struct AddItemResponse {
    pub data: Option<Data>,
    pub errors: Option<Vec<super::GraphQLError>>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Data {
    #[serde(rename = "addProjectV2ItemById")]
    pub add_project_v2_item_by_id: Option<AddItem>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct AddItem {
    pub item: Option<Item>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Item {
    pub id: String,
}

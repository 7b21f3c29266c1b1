use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Membro de uma família. Um novo registro é gravado a cada entrada.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub family_code: String,
    #[serde(default)]
    pub username: String,
}

impl User {
    pub fn new(family_code: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: None,
            family_code: family_code.into(),
            username: username.into(),
        }
    }
}

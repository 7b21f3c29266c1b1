use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Grupo familiar: código compartilhado + senha em texto plano
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Family {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub family_code: String,
    #[serde(default)]
    pub family_passcode: String,
}

impl Family {
    pub fn new(family_code: impl Into<String>, family_passcode: impl Into<String>) -> Self {
        Self {
            id: None,
            family_code: family_code.into(),
            family_passcode: family_passcode.into(),
        }
    }
}

/// Form body for both `/createFamily` and `/enterFamily`
#[derive(Debug, Deserialize)]
pub struct FamilyForm {
    pub fcode: String,
    pub fpasscode: String,
    #[serde(default)]
    pub fusername: Option<String>,
}

impl FamilyForm {
    /// Username submitted with the form, if any non-blank value was given
    pub fn username(&self) -> Option<&str> {
        self.fusername
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

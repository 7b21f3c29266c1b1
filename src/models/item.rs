use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Item da lista (compra ou tarefa), sempre ligado a uma família pelo `family_code`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub family_code: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub quantity: String,

    #[serde(default)]
    pub urgency: String,

    #[serde(default)]
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bought: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    /// Reset on every edit as well as on creation
    #[serde(default = "epoch")]
    pub created_at: DateTime,
}

fn epoch() -> DateTime {
    DateTime::from_millis(0)
}

impl Item {
    /// Builds a fresh document from a submitted form, stamped with `created_at`
    pub fn from_form(family_code: &str, form: ItemForm, created_at: DateTime) -> Self {
        Self {
            id: None,
            family_code: family_code.to_string(),
            name: form.fname,
            quantity: form.fquantity,
            urgency: form.furgent,
            location: form.flocation,
            bought: non_empty(form.fbought),
            deadline: non_empty(form.fdeadline),
            created_at,
        }
    }

    pub fn id_hex(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Form body for item create and edit
#[derive(Debug, Clone, Deserialize)]
pub struct ItemForm {
    pub fname: String,
    pub fquantity: String,
    pub furgent: String,
    pub flocation: String,
    #[serde(default)]
    pub fbought: Option<String>,
    #[serde(default)]
    pub fdeadline: Option<String>,
}

/// `?family_code=` carried by the edit and delete routes
#[derive(Debug, Deserialize)]
pub struct FamilyCodeQuery {
    #[serde(default)]
    pub family_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub search: String,
}

/// Filtro usado pelo store para listar itens
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    pub family_code: Option<String>,
    /// Case-insensitive substring matched against `name`
    pub name_contains: Option<String>,
    pub newest_first: bool,
}

impl ItemQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_family(family_code: &str) -> Self {
        Self {
            family_code: Some(family_code.to_string()),
            name_contains: None,
            newest_first: true,
        }
    }

    pub fn search(family_code: &str, term: &str) -> Self {
        Self {
            name_contains: Some(term.to_string()),
            ..Self::for_family(family_code)
        }
    }

    /// Same predicate the MongoDB filter expresses, for stores that filter in memory
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(code) = &self.family_code {
            if &item.family_code != code {
                return false;
            }
        }
        match &self.name_contains {
            Some(term) => item.name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        }
    }
}

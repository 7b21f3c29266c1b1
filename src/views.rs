use askama::Template;
use chrono::{DateTime, Utc};

use crate::models::{Family, Item, User};

/// Item pronto para o template (ids em hex, opcionais como string vazia)
#[derive(Debug, Clone)]
pub struct ItemRow {
    pub id: String,
    pub family_code: String,
    pub name: String,
    pub quantity: String,
    pub urgency: String,
    pub location: String,
    pub bought: String,
    pub deadline: String,
    pub created_at: String,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id_hex(),
            family_code: item.family_code.clone(),
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            urgency: item.urgency.clone(),
            location: item.location.clone(),
            bought: item.bought.clone().unwrap_or_default(),
            deadline: item.deadline.clone().unwrap_or_default(),
            created_at: format_timestamp(item.created_at.timestamp_millis()),
        }
    }
}

pub fn rows(items: &[Item]) -> Vec<ItemRow> {
    items.iter().map(ItemRow::from).collect()
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default()
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView<'a> {
    pub families: &'a [Family],
    pub items: Vec<ItemRow>,
    pub users: &'a [User],
}

#[derive(Template)]
#[template(path = "main.html")]
pub struct MainView<'a> {
    pub family_code: &'a str,
    pub items: Vec<ItemRow>,
    /// Set when the list is a search result
    pub search: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupView;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginView;

#[derive(Template)]
#[template(path = "members.html")]
pub struct MembersView<'a> {
    pub family_code: &'a str,
    pub users: &'a [User],
}

#[derive(Template)]
#[template(path = "add.html")]
pub struct AddView<'a> {
    pub family_code: &'a str,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditView<'a> {
    pub mongoid: &'a str,
    pub family_code: &'a str,
    pub item: ItemRow,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView<'a> {
    pub error: &'a str,
}

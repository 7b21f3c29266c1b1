mod mongo;

#[cfg(test)]
pub mod memory;

pub use mongo::MongoDB;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::{Family, Item, ItemQuery, User};
use crate::utils::AppError;

pub const FAMILIES: &str = "families";
pub const USERS: &str = "users";
pub const ITEMS: &str = "items";

/// Operações de documento usadas pelos handlers.
///
/// The handler layer only ever sees `web::Data<dyn FamilyStore>`, so the
/// MongoDB adapter and the in-memory test store are interchangeable.
#[async_trait]
pub trait FamilyStore: Send + Sync {
    async fn insert_family(&self, family: Family) -> Result<ObjectId, AppError>;

    async fn list_families(&self) -> Result<Vec<Family>, AppError>;

    /// Number of families whose code *and* passcode match exactly
    async fn count_families(&self, family_code: &str, family_passcode: &str) -> Result<u64, AppError>;

    async fn insert_user(&self, user: User) -> Result<ObjectId, AppError>;

    /// All users, or only those of one family
    async fn list_users(&self, family_code: Option<&str>) -> Result<Vec<User>, AppError>;

    async fn insert_item(&self, item: Item) -> Result<ObjectId, AppError>;

    async fn find_items(&self, query: &ItemQuery) -> Result<Vec<Item>, AppError>;

    async fn find_item(&self, id: &ObjectId) -> Result<Option<Item>, AppError>;

    /// Overwrites every non-id field. Returns the matched count.
    async fn replace_item(&self, id: &ObjectId, item: Item) -> Result<u64, AppError>;

    /// Returns the deleted count
    async fn delete_item(&self, id: &ObjectId) -> Result<u64, AppError>;
}

/// Converte o id hexadecimal da URL em `ObjectId`
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidId(raw.to_string()))
}

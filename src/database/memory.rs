use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::FamilyStore;
use crate::models::{Family, Item, ItemQuery, User};
use crate::utils::AppError;

#[derive(Default)]
struct Collections {
    families: Vec<Family>,
    users: Vec<User>,
    items: Vec<Item>,
}

/// Store em memória para testes de handlers sem MongoDB
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FamilyStore for MemoryStore {
    async fn insert_family(&self, mut family: Family) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        family.id = Some(id);
        self.inner.write().await.families.push(family);
        Ok(id)
    }

    async fn list_families(&self) -> Result<Vec<Family>, AppError> {
        Ok(self.inner.read().await.families.clone())
    }

    async fn count_families(&self, family_code: &str, family_passcode: &str) -> Result<u64, AppError> {
        let inner = self.inner.read().await;
        let count = inner
            .families
            .iter()
            .filter(|f| f.family_code == family_code && f.family_passcode == family_passcode)
            .count();
        Ok(count as u64)
    }

    async fn insert_user(&self, mut user: User) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        user.id = Some(id);
        self.inner.write().await.users.push(user);
        Ok(id)
    }

    async fn list_users(&self, family_code: Option<&str>) -> Result<Vec<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .iter()
            .filter(|u| family_code.map_or(true, |code| u.family_code == code))
            .cloned()
            .collect())
    }

    async fn insert_item(&self, mut item: Item) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        item.id = Some(id);
        self.inner.write().await.items.push(item);
        Ok(id)
    }

    async fn find_items(&self, query: &ItemQuery) -> Result<Vec<Item>, AppError> {
        let inner = self.inner.read().await;
        let mut items: Vec<Item> = inner
            .items
            .iter()
            .filter(|item| query.matches(item))
            .cloned()
            .collect();

        if query.newest_first {
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        }
        Ok(items)
    }

    async fn find_item(&self, id: &ObjectId) -> Result<Option<Item>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.items.iter().find(|item| item.id == Some(*id)).cloned())
    }

    async fn replace_item(&self, id: &ObjectId, mut item: Item) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;
        match inner.items.iter_mut().find(|existing| existing.id == Some(*id)) {
            Some(existing) => {
                item.id = Some(*id);
                *existing = item;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_item(&self, id: &ObjectId) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != Some(*id));
        Ok((before - inner.items.len()) as u64)
    }
}

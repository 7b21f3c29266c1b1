use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database, IndexModel};

use super::{FamilyStore, FAMILIES, ITEMS, USERS};
use crate::config::{Config, SERVER_SELECTION_TIMEOUT};
use crate::models::{Family, Item, ItemQuery, User};
use crate::utils::AppError;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Builds the client. The driver connects lazily, so this only fails on a malformed URI.
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.mongo_uri).await?;

        client_options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.mongo_dbname);

        Ok(Self { client, db })
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// Verifica a conexão e prepara índices/esquema.
    ///
    /// A failed ping is only logged: the server still starts and requests
    /// fail later at their first store access.
    pub async fn prepare(&self) {
        match self.ping().await {
            Ok(()) => {
                log::info!("✅ Connected to MongoDB database: {}", self.db.name());
                if let Err(e) = self.ensure_indexes().await {
                    log::warn!("⚠️  Index creation failed: {}", e);
                }
                if let Err(e) = self.normalize_items().await {
                    log::warn!("⚠️  Item normalisation failed: {}", e);
                }
            }
            Err(e) => {
                log::error!("❌ Failed to connect to MongoDB: {}", e);
            }
        }
    }

    async fn ensure_indexes(&self) -> Result<(), AppError> {
        log::info!("🔧 Creating database indexes...");

        let items_index = IndexModel::builder()
            .keys(doc! { "family_code": 1, "created_at": -1 })
            .build();

        match self.collection::<Document>(ITEMS).create_index(items_index).await {
            Ok(_) => log::info!("   ✅ Index created: items(family_code, created_at)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        let users_index = IndexModel::builder()
            .keys(doc! { "family_code": 1 })
            .build();

        match self.collection::<Document>(USERS).create_index(users_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(family_code)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        Ok(())
    }

    /// Backfills fields that older deployments never wrote, so every item has one shape
    async fn normalize_items(&self) -> Result<(), AppError> {
        let items = self.collection::<Document>(ITEMS);

        for field in ["quantity", "urgency", "location"] {
            let mut missing = Document::new();
            missing.insert(field, doc! { "$exists": false });
            let mut backfill = Document::new();
            backfill.insert(field, "");

            let result = items
                .update_many(missing, doc! { "$set": backfill })
                .await?;
            if result.modified_count > 0 {
                log::info!("   🩹 Backfilled items.{} on {} documents", field, result.modified_count);
            }
        }

        let result = items
            .update_many(
                doc! { "created_at": { "$exists": false } },
                doc! { "$set": { "created_at": DateTime::from_millis(0) } },
            )
            .await?;
        if result.modified_count > 0 {
            log::info!("   🩹 Backfilled items.created_at on {} documents", result.modified_count);
        }

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

fn inserted_id(result: mongodb::results::InsertOneResult) -> Result<ObjectId, AppError> {
    result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::DatabaseError("Inserted document has no ObjectId".to_string()))
}

fn item_filter(query: &ItemQuery) -> Document {
    let mut filter = Document::new();
    if let Some(code) = &query.family_code {
        filter.insert("family_code", code.as_str());
    }
    if let Some(term) = &query.name_contains {
        filter.insert(
            "name",
            doc! { "$regex": regex_lite::escape(term), "$options": "i" },
        );
    }
    filter
}

#[async_trait]
impl FamilyStore for MongoDB {
    async fn insert_family(&self, family: Family) -> Result<ObjectId, AppError> {
        let result = self.collection::<Family>(FAMILIES).insert_one(family).await?;
        inserted_id(result)
    }

    async fn list_families(&self) -> Result<Vec<Family>, AppError> {
        let cursor = self.collection::<Family>(FAMILIES).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count_families(&self, family_code: &str, family_passcode: &str) -> Result<u64, AppError> {
        let count = self
            .collection::<Family>(FAMILIES)
            .count_documents(doc! {
                "family_code": family_code,
                "family_passcode": family_passcode,
            })
            .await?;
        Ok(count)
    }

    async fn insert_user(&self, user: User) -> Result<ObjectId, AppError> {
        let result = self.collection::<User>(USERS).insert_one(user).await?;
        inserted_id(result)
    }

    async fn list_users(&self, family_code: Option<&str>) -> Result<Vec<User>, AppError> {
        let filter = match family_code {
            Some(code) => doc! { "family_code": code },
            None => doc! {},
        };
        let cursor = self.collection::<User>(USERS).find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_item(&self, item: Item) -> Result<ObjectId, AppError> {
        let result = self.collection::<Item>(ITEMS).insert_one(item).await?;
        inserted_id(result)
    }

    async fn find_items(&self, query: &ItemQuery) -> Result<Vec<Item>, AppError> {
        let items = self.collection::<Item>(ITEMS);
        let filter = item_filter(query);

        let cursor = if query.newest_first {
            items
                .find(filter)
                .sort(doc! { "created_at": -1, "_id": -1 })
                .await?
        } else {
            items.find(filter).await?
        };

        Ok(cursor.try_collect().await?)
    }

    async fn find_item(&self, id: &ObjectId) -> Result<Option<Item>, AppError> {
        Ok(self.collection::<Item>(ITEMS).find_one(doc! { "_id": *id }).await?)
    }

    async fn replace_item(&self, id: &ObjectId, mut item: Item) -> Result<u64, AppError> {
        item.id = None;
        let result = self
            .collection::<Item>(ITEMS)
            .replace_one(doc! { "_id": *id }, item)
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_item(&self, id: &ObjectId) -> Result<u64, AppError> {
        let result = self
            .collection::<Item>(ITEMS)
            .delete_one(doc! { "_id": *id })
            .await?;
        Ok(result.deleted_count)
    }
}

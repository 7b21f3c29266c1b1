// ==================== ITEMS ====================
// CRUD dos itens da lista de uma família

use crate::{
    database::{parse_object_id, FamilyStore},
    models::{Item, ItemForm, ItemQuery},
    utils::AppError,
};
use mongodb::bson::{oid::ObjectId, DateTime};

/// Itens da família, mais recentes primeiro
pub async fn list_family_items(store: &dyn FamilyStore, family_code: &str) -> Result<Vec<Item>, AppError> {
    store.find_items(&ItemQuery::for_family(family_code)).await
}

pub async fn search_items(
    store: &dyn FamilyStore,
    family_code: &str,
    term: &str,
) -> Result<Vec<Item>, AppError> {
    log::info!("🔍 Searching '{}' in family {}", term, family_code);
    store.find_items(&ItemQuery::search(family_code, term)).await
}

pub async fn create_item(
    store: &dyn FamilyStore,
    family_code: &str,
    form: ItemForm,
) -> Result<ObjectId, AppError> {
    let item = Item::from_form(family_code, form, DateTime::now());
    let id = store.insert_item(item).await?;

    log::info!("✅ Item {} created for family {}", id, family_code);
    Ok(id)
}

pub async fn get_item(store: &dyn FamilyStore, raw_id: &str) -> Result<Item, AppError> {
    let id = parse_object_id(raw_id)?;
    store
        .find_item(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {}", raw_id)))
}

/// Full overwrite of the item; `created_at` moves to now.
///
/// An unknown id matches nothing and is only logged.
pub async fn update_item(
    store: &dyn FamilyStore,
    raw_id: &str,
    family_code: &str,
    form: ItemForm,
) -> Result<(), AppError> {
    let id = parse_object_id(raw_id)?;
    let item = Item::from_form(family_code, form, DateTime::now());

    let matched = store.replace_item(&id, item).await?;
    if matched == 0 {
        log::warn!("⚠️ Update matched no item with id {}", raw_id);
    } else {
        log::info!("✅ Item {} updated", raw_id);
    }
    Ok(())
}

pub async fn delete_item(store: &dyn FamilyStore, raw_id: &str) -> Result<(), AppError> {
    let id = parse_object_id(raw_id)?;

    let deleted = store.delete_item(&id).await?;
    if deleted == 0 {
        log::warn!("⚠️ Delete matched no item with id {}", raw_id);
    } else {
        log::info!("🗑️  Item {} deleted", raw_id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;

    fn form(name: &str) -> ItemForm {
        ItemForm {
            fname: name.to_string(),
            fquantity: "2".to_string(),
            furgent: "high".to_string(),
            flocation: "pantry".to_string(),
            fbought: None,
            fdeadline: None,
        }
    }

    #[tokio::test]
    async fn test_item_is_scoped_to_its_family() {
        let store = MemoryStore::new();
        create_item(&store, "FAM1", form("Bread")).await.unwrap();

        let fam1 = list_family_items(&store, "FAM1").await.unwrap();
        assert_eq!(fam1.len(), 1);
        assert_eq!(fam1[0].name, "Bread");
        assert_eq!(fam1[0].quantity, "2");
        assert_eq!(fam1[0].urgency, "high");
        assert_eq!(fam1[0].location, "pantry");

        assert!(list_family_items(&store, "FAM2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_resets_created_at() {
        let store = MemoryStore::new();
        let id = create_item(&store, "FAM1", form("Bread")).await.unwrap();
        let original = get_item(&store, &id.to_hex()).await.unwrap();

        let edited = ItemForm {
            fname: "Rye bread".to_string(),
            fquantity: "1".to_string(),
            furgent: "low".to_string(),
            flocation: "bakery".to_string(),
            fbought: Some("yes".to_string()),
            fdeadline: Some("friday".to_string()),
        };
        update_item(&store, &id.to_hex(), "FAM1", edited).await.unwrap();

        let updated = get_item(&store, &id.to_hex()).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.family_code, "FAM1");
        assert_eq!(updated.name, "Rye bread");
        assert_eq!(updated.quantity, "1");
        assert_eq!(updated.urgency, "low");
        assert_eq!(updated.location, "bakery");
        assert_eq!(updated.bought.as_deref(), Some("yes"));
        assert_eq!(updated.deadline.as_deref(), Some("friday"));
        assert!(updated.created_at >= original.created_at);
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let store = MemoryStore::new();
        let id = create_item(&store, "FAM1", form("Bread")).await.unwrap();

        delete_item(&store, &id.to_hex()).await.unwrap();

        assert!(list_family_items(&store, "FAM1").await.unwrap().is_empty());
        assert!(matches!(get_item(&store, &id.to_hex()).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(get_item(&store, "xyz").await, Err(AppError::InvalidId(_))));
        assert!(matches!(delete_item(&store, "xyz").await, Err(AppError::InvalidId(_))));
        assert!(matches!(
            update_item(&store, "xyz", "FAM1", form("Bread")).await,
            Err(AppError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_newest_first() {
        let store = MemoryStore::new();
        create_item(&store, "ABC1", form("Milk")).await.unwrap();
        create_item(&store, "ABC1", form("Bread")).await.unwrap();
        create_item(&store, "ABC1", form("oat MILK")).await.unwrap();
        create_item(&store, "XYZ9", form("Milk")).await.unwrap();

        let found = search_items(&store, "ABC1", "milk").await.unwrap();
        let names: Vec<&str> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["oat MILK", "Milk"]);
        assert!(found.iter().all(|i| i.family_code == "ABC1"));
    }

    #[tokio::test]
    async fn test_search_term_is_literal() {
        let store = MemoryStore::new();
        create_item(&store, "ABC1", form("Milk")).await.unwrap();

        assert!(search_items(&store, "ABC1", "m.lk").await.unwrap().is_empty());
    }
}

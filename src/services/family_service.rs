// ==================== FAMILY MANAGEMENT ====================
// Criação e entrada em famílias. A senha é comparada em texto plano.

use crate::{
    database::FamilyStore,
    models::{Family, FamilyForm, Item, ItemQuery, User},
    utils::AppError,
};

/// Everything the home page lists
#[derive(Debug)]
pub struct Overview {
    pub families: Vec<Family>,
    pub items: Vec<Item>,
    pub users: Vec<User>,
}

pub async fn overview(store: &dyn FamilyStore) -> Result<Overview, AppError> {
    let families = store.list_families().await?;
    let items = store.find_items(&ItemQuery::all()).await?;
    let users = store.list_users(None).await?;

    Ok(Overview { families, items, users })
}

/// Grava a família e, se informado, o primeiro membro
pub async fn create_family(store: &dyn FamilyStore, form: &FamilyForm) -> Result<(), AppError> {
    log::info!("👪 Creating family {}", form.fcode);

    store
        .insert_family(Family::new(form.fcode.as_str(), form.fpasscode.as_str()))
        .await?;

    if let Some(username) = form.username() {
        store.insert_user(User::new(form.fcode.as_str(), username)).await?;
    }

    Ok(())
}

/// Returns whether the code/passcode pair matched at least one family.
///
/// On a match a user record is inserted for the submitted username, even
/// if the same name already joined before.
pub async fn enter_family(store: &dyn FamilyStore, form: &FamilyForm) -> Result<bool, AppError> {
    let matches = store.count_families(&form.fcode, &form.fpasscode).await?;

    if matches == 0 {
        log::warn!("⚠️ No family matches code {}", form.fcode);
        return Ok(false);
    }

    if let Some(username) = form.username() {
        store.insert_user(User::new(form.fcode.as_str(), username)).await?;
    }

    log::info!("✅ Entered family {}", form.fcode);
    Ok(true)
}

pub async fn list_members(store: &dyn FamilyStore, family_code: &str) -> Result<Vec<User>, AppError> {
    store.list_users(Some(family_code)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;

    fn form(code: &str, passcode: &str, username: Option<&str>) -> FamilyForm {
        FamilyForm {
            fcode: code.to_string(),
            fpasscode: passcode.to_string(),
            fusername: username.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_created_family_is_listed_verbatim() {
        let store = MemoryStore::new();
        create_family(&store, &form("FAM1", "1234", None)).await.unwrap();

        let overview = overview(&store).await.unwrap();
        assert_eq!(overview.families.len(), 1);
        assert_eq!(overview.families[0].family_code, "FAM1");
        assert_eq!(overview.families[0].family_passcode, "1234");
        assert!(overview.users.is_empty());
    }

    #[tokio::test]
    async fn test_enter_family_requires_matching_pair() {
        let store = MemoryStore::new();
        create_family(&store, &form("FAM1", "1234", Some("ana"))).await.unwrap();

        assert!(!enter_family(&store, &form("FAM1", "0000", Some("bob"))).await.unwrap());
        assert!(!enter_family(&store, &form("FAM2", "1234", Some("bob"))).await.unwrap());
        assert_eq!(list_members(&store, "FAM1").await.unwrap().len(), 1);

        assert!(enter_family(&store, &form("FAM1", "1234", Some("bob"))).await.unwrap());
        let names: Vec<String> = list_members(&store, "FAM1")
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["ana", "bob"]);
    }

    #[tokio::test]
    async fn test_repeated_entry_duplicates_user() {
        let store = MemoryStore::new();
        create_family(&store, &form("FAM1", "1234", None)).await.unwrap();

        for _ in 0..2 {
            assert!(enter_family(&store, &form("FAM1", "1234", Some("ana"))).await.unwrap());
        }
        assert_eq!(list_members(&store, "FAM1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_blank_username_is_not_stored() {
        let store = MemoryStore::new();
        create_family(&store, &form("FAM1", "1234", Some("   "))).await.unwrap();
        assert!(list_members(&store, "FAM1").await.unwrap().is_empty());
    }
}

use actix_web::{web, HttpResponse};

use super::{main_list_url, redirect, render};
use crate::database::FamilyStore;
use crate::models::{FamilyCodeQuery, ItemForm, SearchForm};
use crate::services::item_service;
use crate::utils::AppError;
use crate::views::{self, AddView, EditView, ItemRow, MainView};

fn family_code_of(query: &FamilyCodeQuery) -> Option<&str> {
    query
        .family_code
        .as_deref()
        .filter(|code| !code.trim().is_empty())
}

/// GET /main/{family_code} - lista da família, mais recentes primeiro
pub async fn main_list(
    store: web::Data<dyn FamilyStore>,
    family_code: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /main/{}", family_code);

    let items = item_service::list_family_items(store.get_ref(), &family_code).await?;

    render(&MainView {
        family_code: &family_code,
        items: views::rows(&items),
        search: None,
    })
}

/// GET /create/{family_code}
pub async fn add_form(family_code: web::Path<String>) -> Result<HttpResponse, AppError> {
    render(&AddView {
        family_code: &family_code,
    })
}

/// POST /create/{family_code}
pub async fn create_item(
    store: web::Data<dyn FamilyStore>,
    family_code: web::Path<String>,
    form: web::Form<ItemForm>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /create/{} - {}", family_code, form.fname);

    item_service::create_item(store.get_ref(), &family_code, form.into_inner()).await?;

    Ok(redirect(&main_list_url(&family_code)))
}

/// GET /edit/{mongoid}?family_code=
pub async fn edit_form(
    store: web::Data<dyn FamilyStore>,
    mongoid: web::Path<String>,
    query: web::Query<FamilyCodeQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("✏️  GET /edit/{}", mongoid);

    let item = item_service::get_item(store.get_ref(), &mongoid).await?;
    let family_code = family_code_of(&query)
        .unwrap_or(&item.family_code)
        .to_string();

    render(&EditView {
        mongoid: &mongoid,
        family_code: &family_code,
        item: ItemRow::from(&item),
    })
}

/// POST /edit/{mongoid}?family_code= - substitui todos os campos do item
pub async fn update_item(
    store: web::Data<dyn FamilyStore>,
    mongoid: web::Path<String>,
    query: web::Query<FamilyCodeQuery>,
    form: web::Form<ItemForm>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 POST /edit/{}", mongoid);

    let family_code = family_code_of(&query)
        .ok_or_else(|| AppError::InvalidRequest("family_code is required".to_string()))?;

    item_service::update_item(store.get_ref(), &mongoid, family_code, form.into_inner()).await?;

    Ok(redirect(&main_list_url(family_code)))
}

/// GET /delete/{mongoid}?family_code=
pub async fn delete_item(
    store: web::Data<dyn FamilyStore>,
    mongoid: web::Path<String>,
    query: web::Query<FamilyCodeQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  GET /delete/{}", mongoid);

    item_service::delete_item(store.get_ref(), &mongoid).await?;

    match family_code_of(&query) {
        Some(code) => Ok(redirect(&main_list_url(code))),
        None => Ok(redirect("/")),
    }
}

/// POST /search/{family_code}
pub async fn search(
    store: web::Data<dyn FamilyStore>,
    family_code: web::Path<String>,
    form: web::Form<SearchForm>,
) -> Result<HttpResponse, AppError> {
    let items = item_service::search_items(store.get_ref(), &family_code, &form.search).await?;

    render(&MainView {
        family_code: &family_code,
        items: views::rows(&items),
        search: Some(form.search.as_str()),
    })
}

use actix_web::{web, HttpResponse};

use super::{main_list_url, redirect, render};
use crate::database::FamilyStore;
use crate::models::FamilyForm;
use crate::services::family_service;
use crate::utils::AppError;
use crate::views::{self, IndexView, LoginView, MembersView, SignupView};

/// GET / - lista famílias, membros e todos os itens
pub async fn home(store: web::Data<dyn FamilyStore>) -> Result<HttpResponse, AppError> {
    log::info!("🏠 GET /");

    let overview = family_service::overview(store.get_ref()).await?;

    render(&IndexView {
        families: &overview.families,
        items: views::rows(&overview.items),
        users: &overview.users,
    })
}

/// GET /signup
pub async fn signup() -> Result<HttpResponse, AppError> {
    render(&SignupView)
}

/// GET /login
pub async fn login() -> Result<HttpResponse, AppError> {
    render(&LoginView)
}

/// POST /createFamily
pub async fn create_family(
    store: web::Data<dyn FamilyStore>,
    form: web::Form<FamilyForm>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /createFamily - {}", form.fcode);

    family_service::create_family(store.get_ref(), &form).await?;

    Ok(redirect("/"))
}

/// POST /enterFamily - código e senha corretos levam à lista da família
pub async fn enter_family(
    store: web::Data<dyn FamilyStore>,
    form: web::Form<FamilyForm>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔑 POST /enterFamily - {}", form.fcode);

    if family_service::enter_family(store.get_ref(), &form).await? {
        Ok(redirect(&main_list_url(&form.fcode)))
    } else {
        Ok(redirect("/"))
    }
}

/// GET /members/{family_code}
pub async fn members(
    store: web::Data<dyn FamilyStore>,
    family_code: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("👥 GET /members/{}", family_code);

    let users = family_service::list_members(store.get_ref(), &family_code).await?;

    render(&MembersView {
        family_code: &family_code,
        users: &users,
    })
}

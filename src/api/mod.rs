pub mod families;
pub mod health;
pub mod items;


use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;

use crate::utils::AppError;

/// Registra todas as rotas da aplicação
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    )
    // Health check
    .route("/health", web::get().to(health::health_check))
    // Families
    .route("/", web::get().to(families::home))
    .route("/signup", web::get().to(families::signup))
    .route("/login", web::get().to(families::login))
    .route("/createFamily", web::post().to(families::create_family))
    .route("/enterFamily", web::post().to(families::enter_family))
    .route("/members/{family_code}", web::get().to(families::members))
    // Items
    .route("/main/{family_code}", web::get().to(items::main_list))
    .service(
        web::resource("/create/{family_code}")
            .route(web::get().to(items::add_form))
            .route(web::post().to(items::create_item)),
    )
    .service(
        web::resource("/edit/{mongoid}")
            .route(web::get().to(items::edit_form))
            .route(web::post().to(items::update_item)),
    )
    .route("/delete/{mongoid}", web::get().to(items::delete_item))
    .route("/search/{family_code}", web::post().to(items::search));
}

/// Default service: unknown routes get the error page too
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("{} {}", req.method(), req.path())))
}

pub(crate) fn render<T: Template>(view: &T) -> Result<HttpResponse, AppError> {
    let body = view.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header(("Location", location))
        .finish()
}

pub(crate) fn main_list_url(family_code: &str) -> String {
    format!("/main/{}", urlencoding::encode(family_code))
}

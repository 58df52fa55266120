use actix_web::web;

use crate::errors::AppError;
use crate::handlers::{employee, health, shop};

/// Registers the `/api` surface. Bodies that fail to parse as JSON come back
/// as 400 with the same `{ "error": ... }` shape as validation failures.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health))
            .service(
                web::resource("/shops")
                    .route(web::get().to(shop::get_shops))
                    .route(web::post().to(shop::create_shop)),
            )
            .service(
                web::resource("/shops/{id}")
                    .route(web::get().to(shop::get_shop))
                    .route(web::put().to(shop::update_shop))
                    .route(web::delete().to(shop::delete_shop)),
            )
            .service(
                web::resource("/shops/{id}/employees")
                    .route(web::get().to(shop::get_shop_employees)),
            )
            .service(
                web::resource("/employees")
                    .route(web::get().to(employee::get_employees))
                    .route(web::post().to(employee::create_employee)),
            )
            .service(
                web::resource("/employees/{id}")
                    .route(web::get().to(employee::get_employee))
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );
}

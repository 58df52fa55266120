use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::info;
use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::handlers::AppState;
use crate::models::shop::{Shop, ShopChanges};
use crate::utils::ids::{self, SHOP_PREFIX};
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewShop {
    #[validate(required(message = "name is required"), length(min = 1, message = "name is required"))]
    name: Option<String>,
    category: Option<String>,
    location: Option<String>,
    phone: Option<String>,
}

#[derive(Deserialize)]
pub struct ShopQueryParams {
    q: Option<String>,
}

fn shop_not_found() -> AppError {
    AppError::NotFound("Shop not found".to_string())
}

pub async fn get_shops(
    state: web::Data<AppState>,
    query: web::Query<ShopQueryParams>,
) -> Result<HttpResponse, AppError> {
    let document = state.store.load().await?;
    Ok(HttpResponse::Ok().json(document.search_shops(query.q.as_deref())))
}

pub async fn get_shop(
    state: web::Data<AppState>,
    shop_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let document = state.store.load().await?;
    let shop = document.shop(&shop_id).ok_or_else(shop_not_found)?;
    Ok(HttpResponse::Ok().json(shop))
}

pub async fn create_shop(
    state: web::Data<AppState>,
    new_shop: web::Json<NewShop>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_shop)?;
    let new_shop = new_shop.into_inner();

    let shop = Shop {
        id: ids::generate(SHOP_PREFIX),
        name: new_shop.name.unwrap_or_default(),
        category: new_shop.category.unwrap_or_default(),
        location: new_shop.location.unwrap_or_default(),
        phone: new_shop.phone.unwrap_or_default(),
        created_at: Utc::now(),
        extra: Default::default(),
    };

    let _guard = state.write_lock.lock().await;
    let mut document = state.store.load().await?;
    document.shops.push(shop.clone());
    state.store.save(&document).await?;

    info!("Created shop {} ({})", shop.id, shop.name);
    Ok(HttpResponse::Created().json(shop))
}

pub async fn update_shop(
    state: web::Data<AppState>,
    shop_id: web::Path<String>,
    changes: web::Json<ShopChanges>,
) -> Result<HttpResponse, AppError> {
    let _guard = state.write_lock.lock().await;
    let mut document = state.store.load().await?;
    let shop = document
        .update_shop(&shop_id, changes.into_inner())
        .cloned()
        .ok_or_else(shop_not_found)?;
    state.store.save(&document).await?;

    Ok(HttpResponse::Ok().json(shop))
}

pub async fn delete_shop(
    state: web::Data<AppState>,
    shop_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let _guard = state.write_lock.lock().await;
    let mut document = state.store.load().await?;
    let (shops, employees) = document.remove_shop(&shop_id);
    state.store.save(&document).await?;

    if shops > 0 {
        info!("Deleted shop {} and {} of its employees", shop_id, employees);
    }
    Ok(HttpResponse::NoContent().finish())
}

pub async fn get_shop_employees(
    state: web::Data<AppState>,
    shop_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let document = state.store.load().await?;
    Ok(HttpResponse::Ok().json(document.employees_of(&shop_id)))
}

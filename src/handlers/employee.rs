use actix_web::{web, HttpResponse};
use log::info;
use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::handlers::AppState;
use crate::models::employee::{Employee, EmployeeChanges};
use crate::utils::ids::{self, EMPLOYEE_PREFIX};
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[validate(required(message = "firstName and lastName are required"), length(min = 1, message = "firstName and lastName are required"))]
    first_name: Option<String>,
    #[validate(required(message = "firstName and lastName are required"), length(min = 1, message = "firstName and lastName are required"))]
    last_name: Option<String>,
    role: Option<String>,
    email: Option<String>,
    shop_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQueryParams {
    shop_id: Option<String>,
}

fn employee_not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}

pub async fn get_employees(
    state: web::Data<AppState>,
    query: web::Query<EmployeeQueryParams>,
) -> Result<HttpResponse, AppError> {
    let document = state.store.load().await?;
    Ok(HttpResponse::Ok().json(document.list_employees(query.shop_id.as_deref())))
}

pub async fn get_employee(
    state: web::Data<AppState>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let document = state.store.load().await?;
    let employee = document.employee(&employee_id).ok_or_else(employee_not_found)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    state: web::Data<AppState>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;
    let new_employee = new_employee.into_inner();

    let employee = Employee {
        id: ids::generate(EMPLOYEE_PREFIX),
        first_name: new_employee.first_name.unwrap_or_default(),
        last_name: new_employee.last_name.unwrap_or_default(),
        role: new_employee.role.unwrap_or_default(),
        email: new_employee.email.unwrap_or_default(),
        shop_id: new_employee.shop_id.filter(|id| !id.is_empty()),
        extra: Default::default(),
    };

    let _guard = state.write_lock.lock().await;
    let mut document = state.store.load().await?;
    document.employees.push(employee.clone());
    state.store.save(&document).await?;

    info!("Created employee {} ({} {})", employee.id, employee.first_name, employee.last_name);
    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    state: web::Data<AppState>,
    employee_id: web::Path<String>,
    changes: web::Json<EmployeeChanges>,
) -> Result<HttpResponse, AppError> {
    let _guard = state.write_lock.lock().await;
    let mut document = state.store.load().await?;
    let employee = document
        .update_employee(&employee_id, changes.into_inner())
        .cloned()
        .ok_or_else(employee_not_found)?;
    state.store.save(&document).await?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    state: web::Data<AppState>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let _guard = state.write_lock.lock().await;
    let mut document = state.store.load().await?;
    if document.remove_employee(&employee_id) {
        info!("Deleted employee {}", employee_id);
    }
    state.store.save(&document).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES_REQUIRED: &str = "firstName and lastName are required";

    #[test]
    fn both_names_are_required() {
        let payload: NewEmployee = serde_json::from_str(r#"{"firstName":"Sam"}"#).unwrap();
        match validate_payload(&payload) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, NAMES_REQUIRED),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

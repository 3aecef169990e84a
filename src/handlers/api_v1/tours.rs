use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::tour::form::INVALID_FORM_MESSAGE;
use crate::models::tour::{SubmitOutcome, Tour, TourFormController, TourStatus, view};
use crate::state::AppState;
use crate::templates_structs::{ApiErrorResponse, ApiTourRequest, PaginatedResponse};

/// GET /api/v1/tours - list tours in store order.
/// Query params: status (filter), page (default 1), per_page (default 25, max 100).
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let status_filter = query.get("status").and_then(|s| TourStatus::parse(s));
    let page = query
        .get("page")
        .and_then(|p| p.parse::<i64>().ok())
        .unwrap_or(1)
        .max(1);
    let per_page = query
        .get("per_page")
        .and_then(|p| p.parse::<i64>().ok())
        .unwrap_or(25)
        .clamp(1, 100);

    let filtered: Vec<Tour> = state
        .store()
        .tours()
        .iter()
        .filter(|t| status_filter.is_none_or(|s| t.status == s))
        .cloned()
        .collect();

    let total = filtered.len() as i64;
    let offset = usize::try_from((page - 1).saturating_mul(per_page)).unwrap_or(usize::MAX);
    let items = filtered.into_iter().skip(offset).take(per_page as usize).collect();

    Ok(HttpResponse::Ok().json(PaginatedResponse { items, page, per_page, total }))
}

/// GET /api/v1/tours/{id}
pub async fn read(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    match state.store().find(id) {
        Some(tour) => Ok(HttpResponse::Ok().json(tour)),
        None => Ok(HttpResponse::NotFound().json(ApiErrorResponse {
            error: format!("Tour {id} not found"),
            fields: vec![],
        })),
    }
}

/// GET /api/v1/tours/cards - the formatted card view of every tour.
pub async fn cards(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let cards = view::render_all(state.store().tours());
    Ok(HttpResponse::Ok().json(cards))
}

/// POST /api/v1/tours - same rules and defaults as the HTML form.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<ApiTourRequest>,
) -> Result<HttpResponse, AppError> {
    let mut controller = TourFormController::new();
    let outcome = {
        let mut store = state.store();
        controller.open(None, &store);
        controller.fill(body.into_inner().into_values());
        controller.submit(&mut store, &mut rand::rng())?
    };

    match outcome {
        SubmitOutcome::Created(tour) => Ok(HttpResponse::Created().json(tour)),
        SubmitOutcome::Invalid => Ok(HttpResponse::UnprocessableEntity().json(ApiErrorResponse {
            error: INVALID_FORM_MESSAGE.to_string(),
            fields: controller.errors().to_vec(),
        })),
    }
}

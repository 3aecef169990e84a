use actix_web::{web, HttpResponse};

use crate::state::AppState;

/// GET /api/v1/alerts - alerts currently on screen, oldest first.
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.alerts.active())
}

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::tour::TourFormController;
use crate::state::AppState;
use super::render_page;

/// GET /tours - card list with the modal closed.
pub async fn list(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    render_page(&state, &session, TourFormController::new())
}

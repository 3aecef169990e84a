use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::alerts::AlertId;
use crate::auth::csrf;
use crate::errors::AppError;
use crate::state::AppState;
use super::tour_handlers::redirect_to_list;

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// POST /alerts/{id}/dismiss - manual close; cancels the pending auto-dismiss.
pub async fn dismiss(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<AlertId>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    if !state.alerts.dismiss(id) {
        log::debug!("Alert {} already closed", id);
    }
    Ok(redirect_to_list())
}

use actix_web::{web, HttpResponse};

use crate::alerts::AlertKind;
use crate::errors::AppError;
use crate::state::AppState;
use super::redirect_to_list;

/// GET /tours/{id}/bookings - not built yet; tells the user so.
pub async fn view_bookings(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if state.store().find(id).is_none() {
        return Err(AppError::NotFound);
    }
    state.alerts.show("Bookings view is under development", AlertKind::Info);
    Ok(redirect_to_list())
}

use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::alerts::AlertKind;
use crate::auth::csrf;
use crate::errors::AppError;
use crate::models::tour::form::INVALID_FORM_MESSAGE;
use crate::models::tour::{SubmitOutcome, TourFormController, TourFormValues};
use crate::state::AppState;
use super::{redirect_to_list, render_page};

pub const SAVE_FAILED_MESSAGE: &str = "The tour was added but could not be saved";

/// GET /tours/new - open the modal in create mode.
pub async fn new_form(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let mut form = TourFormController::new();
    form.open(None, &state.store());
    render_page(&state, &session, form)
}

/// GET /tours/{id}/edit - open the modal pre-filled from a tour.
/// An unknown id falls back to a blank create form.
pub async fn edit_form(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut form = TourFormController::new();
    form.open(Some(id), &state.store());
    render_page(&state, &session, form)
}

/// POST /tours - validate and create. Submitting from the edit form also creates.
/// A storage failure still redirects: the tour stays listed and a danger alert says it was not saved.
pub async fn create(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, form.get("csrf_token").map(|s| s.as_str()).unwrap_or(""))?;

    let editing_id = form.get("editing_id").and_then(|s| s.trim().parse::<u64>().ok());
    let mut controller = TourFormController::new();

    let outcome = {
        let mut store = state.store();
        controller.open(editing_id, &store);
        controller.fill(TourFormValues::from_map(&form));
        controller.submit(&mut store, &mut rand::rng())
    };

    match outcome {
        Ok(SubmitOutcome::Created(_)) => {
            state.alerts.show("Tour created successfully", AlertKind::Success);
            Ok(redirect_to_list())
        }
        Ok(SubmitOutcome::Invalid) => {
            state.alerts.show(INVALID_FORM_MESSAGE, AlertKind::Danger);
            render_page(&state, &session, controller)
        }
        // The tour is already in the list; reopening the form would invite a duplicate.
        Err(e) => {
            log::error!("Saving tours failed: {}", e);
            state.alerts.show(SAVE_FAILED_MESSAGE, AlertKind::Danger);
            Ok(redirect_to_list())
        }
    }
}

pub mod bookings;
pub mod crud;
pub mod list;

pub use bookings::*;
pub use crud::*;
pub use list::*;

use actix_session::Session;
use actix_web::HttpResponse;

use crate::errors::{AppError, render};
use crate::models::tour::{FormState, TourFormController, TourStatus, view};
use crate::state::AppState;
use crate::templates_structs::{PageContext, TourListTemplate};

/// Render the tour list, with the modal open when the controller is.
pub(crate) fn render_page(
    state: &AppState,
    session: &Session,
    form: TourFormController,
) -> Result<HttpResponse, AppError> {
    state.report_load_error();
    let cards = view::render_all(state.store().tours());
    let editing_id = match form.state() {
        FormState::Editing(id) => Some(id),
        _ => None,
    };
    let ctx = PageContext::build(session, state);
    let tmpl = TourListTemplate {
        ctx,
        cards,
        form,
        statuses: TourStatus::ALL,
        editing_id,
    };
    render(tmpl)
}

pub(crate) fn redirect_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/tours"))
        .finish()
}

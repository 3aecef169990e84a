// Template context structures for Askama templates, plus API payload types.

use actix_session::Session;

use crate::alerts::Alert;
use crate::auth::csrf;
use crate::state::AppState;

mod api;
mod tour;

pub use self::api::{ApiErrorResponse, ApiTourRequest, PaginatedResponse};
pub use self::tour::TourListTemplate;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.alerts`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub alerts: Vec<Alert>,
}

impl PageContext {
    pub fn build(session: &Session, state: &AppState) -> Self {
        Self {
            app_name: state.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
            alerts: state.alerts.active(),
        }
    }
}

use askama::Template;

use crate::models::tour::{TourCard, TourFormController, TourStatus};
use super::PageContext;

#[derive(Template)]
#[template(path = "tours/list.html")]
pub struct TourListTemplate {
    pub ctx: PageContext,
    pub cards: Vec<TourCard>,
    pub form: TourFormController,
    pub statuses: [TourStatus; 3],
    /// Tour id carried through the modal while editing.
    pub editing_id: Option<u64>,
}

use serde::Serialize;

use super::types::{Tour, TourStatus};

/// Placeholder for a missing rating or price.
pub const EMPTY_VALUE: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ContinueEditing,
    Edit,
    InReview,
    ViewBookings,
}

/// A button on a tour card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardAction {
    pub kind: ActionKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub css_class: &'static str,
    pub href: Option<String>,
    pub disabled: bool,
}

impl CardAction {
    fn continue_editing(id: u64) -> Self {
        Self {
            kind: ActionKind::ContinueEditing,
            label: "Continue editing",
            icon: "edit_note",
            css_class: "btn-continue",
            href: Some(format!("/tours/{id}/edit")),
            disabled: false,
        }
    }

    fn edit(id: u64) -> Self {
        Self {
            kind: ActionKind::Edit,
            label: "Edit",
            icon: "edit",
            css_class: "btn-edit",
            href: Some(format!("/tours/{id}/edit")),
            disabled: false,
        }
    }

    fn in_review() -> Self {
        Self {
            kind: ActionKind::InReview,
            label: "In review",
            icon: "hourglass_empty",
            css_class: "btn-disabled",
            href: None,
            disabled: true,
        }
    }

    fn view_bookings(id: u64) -> Self {
        Self {
            kind: ActionKind::ViewBookings,
            label: "View bookings",
            icon: "calendar_month",
            css_class: "btn-view",
            href: Some(format!("/tours/{id}/bookings")),
            disabled: false,
        }
    }
}

/// Everything a card needs, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourCard {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: TourStatus,
    pub status_label: &'static str,
    pub image_class: String,
    pub rating: String,
    pub rating_empty: bool,
    pub bookings: u32,
    pub bookings_empty: bool,
    pub price: String,
    pub price_empty: bool,
    pub is_draft: bool,
    pub actions: Vec<CardAction>,
}

impl TourCard {
    pub fn card_class(&self) -> &'static str {
        if self.is_draft { "tour-card draft" } else { "tour-card" }
    }
}

/// Present ratings with one decimal. Zero counts as unrated.
pub fn format_rating(rating: Option<f64>, status: TourStatus) -> String {
    match rating {
        Some(r) if r != 0.0 => format!("{:.1}", r),
        _ if status == TourStatus::Pending => "New".to_string(),
        _ => EMPTY_VALUE.to_string(),
    }
}

pub fn format_price(price: f64, currency: &str) -> String {
    if price > 0.0 {
        format!("${} {}", price, currency)
    } else {
        EMPTY_VALUE.to_string()
    }
}

pub fn actions_for(tour: &Tour) -> Vec<CardAction> {
    match tour.status {
        TourStatus::Draft => vec![CardAction::continue_editing(tour.id)],
        TourStatus::Pending => vec![CardAction::edit(tour.id), CardAction::in_review()],
        TourStatus::Active => vec![CardAction::edit(tour.id), CardAction::view_bookings(tour.id)],
    }
}

pub fn card(tour: &Tour) -> TourCard {
    let rated = matches!(tour.rating, Some(r) if r != 0.0);
    TourCard {
        id: tour.id,
        title: tour.title.clone(),
        description: tour.description.clone(),
        status: tour.status,
        status_label: tour.status.label(),
        image_class: tour.image_class.clone(),
        rating: format_rating(tour.rating, tour.status),
        rating_empty: !rated,
        bookings: tour.bookings,
        bookings_empty: tour.bookings == 0,
        price: format_price(tour.price, &tour.currency),
        price_empty: tour.price == 0.0,
        is_draft: tour.status == TourStatus::Draft,
        actions: actions_for(tour),
    }
}

/// Map the whole list, keeping its order.
pub fn render_all(tours: &[Tour]) -> Vec<TourCard> {
    tours.iter().map(card).collect()
}

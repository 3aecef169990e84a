use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::store::{StoreError, TourStore};
use super::types::{NewTour, Tour, TourStatus, random_image_class};
use super::validate;

/// The nine inputs of the tour modal, by form field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TourField {
    Title,
    Description,
    Price,
    Category,
    Duration,
    MaxGroupSize,
    MeetingPoint,
    IncludedItems,
    Status,
}

impl TourField {
    pub fn as_str(self) -> &'static str {
        match self {
            TourField::Title => "title",
            TourField::Description => "description",
            TourField::Price => "price",
            TourField::Category => "category",
            TourField::Duration => "duration",
            TourField::MaxGroupSize => "max_group_size",
            TourField::MeetingPoint => "meeting_point",
            TourField::IncludedItems => "included_items",
            TourField::Status => "status",
        }
    }
}

/// One failed rule: the inline message under the field and the short reason for the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: TourField,
    pub message: String,
    pub reason: String,
}

impl FieldError {
    fn new(field: TourField, message: String, reason: &str) -> Self {
        Self { field, message, reason: reason.to_string() }
    }
}

/// Aggregate notification shown when any rule fails.
pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors in the form";

/// Raw text of the form, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TourFormValues {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub max_group_size: String,
    #[serde(default)]
    pub meeting_point: String,
    #[serde(default)]
    pub included_items: String,
    #[serde(default)]
    pub status: String,
}

impl TourFormValues {
    /// Blank form; the status select starts on draft.
    pub fn blank() -> Self {
        Self { status: TourStatus::Draft.as_str().to_string(), ..Self::default() }
    }

    /// Pull the known fields out of a posted form map.
    pub fn from_map(form: &HashMap<String, String>) -> Self {
        let get = |key: &str| form.get(key).cloned().unwrap_or_default();
        Self {
            title: get("title"),
            description: get("description"),
            price: get("price"),
            category: get("category"),
            duration: get("duration"),
            max_group_size: get("max_group_size"),
            meeting_point: get("meeting_point"),
            included_items: get("included_items"),
            status: get("status"),
        }
    }

    pub fn from_tour(tour: &Tour) -> Self {
        Self {
            title: tour.title.clone(),
            description: tour.description.clone(),
            price: tour.price.to_string(),
            category: tour.category.clone(),
            duration: tour.duration.to_string(),
            max_group_size: tour.max_group_size.to_string(),
            meeting_point: tour.meeting_point.clone(),
            included_items: tour.included_items.join(", "),
            status: tour.status.as_str().to_string(),
        }
    }

    /// Run every rule independently; all must pass.
    pub fn validate(&self) -> Result<NewTour, Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(msg) = validate::validate_min_chars(&self.title, 5, "Title must be at least 5 characters") {
            errors.push(FieldError::new(TourField::Title, msg, "Invalid title"));
        }
        if let Some(msg) = validate::validate_min_chars(&self.description, 20, "Description must be at least 20 characters") {
            errors.push(FieldError::new(TourField::Description, msg, "Description too short"));
        }
        let price = validate::parse_non_negative(&self.price);
        if price.is_none() {
            errors.push(FieldError::new(TourField::Price, "Enter a valid price (minimum 0)".into(), "Invalid price"));
        }
        if let Some(msg) = validate::validate_required(&self.category, "Select or enter a category") {
            errors.push(FieldError::new(TourField::Category, msg, "Category required"));
        }
        let duration = validate::parse_int_in_range(&self.duration, 1, 12);
        if duration.is_none() {
            errors.push(FieldError::new(TourField::Duration, "Duration must be between 1 and 12 hours".into(), "Invalid duration"));
        }
        let max_group_size = validate::parse_int_in_range(&self.max_group_size, 1, 50);
        if max_group_size.is_none() {
            errors.push(FieldError::new(TourField::MaxGroupSize, "Group size must be between 1 and 50 people".into(), "Invalid group size"));
        }
        if let Some(msg) = validate::validate_min_chars(&self.meeting_point, 5, "Meeting point must be at least 5 characters") {
            errors.push(FieldError::new(TourField::MeetingPoint, msg, "Invalid meeting point"));
        }
        let included_items = validate::split_items(&self.included_items);
        let included_too_short = validate::validate_min_chars(&self.included_items, 5, "List at least one included item");
        if included_too_short.is_some() || included_items.is_empty() {
            errors.push(FieldError::new(TourField::IncludedItems, "List at least one included item".into(), "Included items required"));
        }
        let status = TourStatus::parse(&self.status);
        if status.is_none() {
            errors.push(FieldError::new(TourField::Status, "Select a valid status".into(), "Invalid status"));
        }

        match (price, duration, max_group_size, status) {
            (Some(price), Some(duration), Some(max_group_size), Some(status)) if errors.is_empty() => Ok(NewTour {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                price,
                status,
                category: self.category.trim().to_string(),
                duration,
                max_group_size,
                included_items,
                meeting_point: self.meeting_point.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// Modal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Creating,
    Editing(u64),
}

/// What a submit did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Tour),
    Invalid,
}

/// Drives the create/edit modal: opening, pre-filling, validating and submitting.
#[derive(Debug, Clone, Default)]
pub struct TourFormController {
    state: FormState,
    values: TourFormValues,
    errors: Vec<FieldError>,
}

impl TourFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    pub fn values(&self) -> &TourFormValues {
        &self.values
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn title(&self) -> &'static str {
        match self.state {
            FormState::Editing(_) => "Edit Tour",
            _ => "Create New Tour",
        }
    }

    /// Open the modal. A known `id` pre-fills from that tour; anything else opens a blank create form.
    pub fn open(&mut self, id: Option<u64>, store: &TourStore) {
        self.errors.clear();
        match id.and_then(|id| store.find(id)) {
            Some(tour) => {
                self.values = TourFormValues::from_tour(tour);
                self.state = FormState::Editing(tour.id);
            }
            None => {
                self.values = TourFormValues::blank();
                self.state = FormState::Creating;
            }
        }
    }

    /// Reset values and error markers and close the modal.
    pub fn close(&mut self) {
        self.values = TourFormValues::blank();
        self.errors.clear();
        self.state = FormState::Closed;
    }

    /// Replace the entered values, as when the browser posts the form.
    pub fn fill(&mut self, values: TourFormValues) {
        self.values = values;
    }

    /// Validate and, on success, append a new tour and close the modal.
    ///
    /// Editing state does not update in place: a submit always creates a new record.
    /// If persisting fails the tour is still in the store and the modal stays open.
    pub fn submit<R: rand::Rng>(&mut self, store: &mut TourStore, rng: &mut R) -> Result<SubmitOutcome, StoreError> {
        self.errors.clear();
        let new_tour = match self.values.validate() {
            Ok(t) => t,
            Err(errors) => {
                self.errors = errors;
                return Ok(SubmitOutcome::Invalid);
            }
        };

        if let FormState::Editing(id) = self.state {
            log::warn!("Tour {} submitted from the edit form; saving it as a new tour", id);
        }

        let image_class = random_image_class(rng);
        let created = store.append(new_tour, image_class)?.clone();
        if let Ok(json) = serde_json::to_string_pretty(&created) {
            log::debug!("New tour created: {}", json);
        }
        log::info!("Created tour {} '{}'", created.id, created.title);

        self.close();
        Ok(SubmitOutcome::Created(created))
    }

    /// Inline message for a field, by form field name.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field.as_str() == field)
            .map(|e| e.message.as_str())
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.error_for(field).is_some()
    }

    /// Short reasons for the summary list, in field order.
    pub fn reasons(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.reason.as_str()).collect()
    }
}

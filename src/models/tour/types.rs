use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency stamped on every tour created through the form.
pub const DEFAULT_CURRENCY: &str = "MXN";

/// Decorative card backgrounds; creation picks one uniformly at random.
pub const IMAGE_CLASSES: &[&str] = &[
    "active-tour",
    "teotihuacan",
    "architecture",
    "coyoacan",
    "xochimilco",
    "street-art",
    "lucha-libre",
    "cantinas",
    "markets",
    "chapultepec",
];

/// Lifecycle tag of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    Active,
    Draft,
    Pending,
}

impl TourStatus {
    pub const ALL: [TourStatus; 3] = [TourStatus::Active, TourStatus::Draft, TourStatus::Pending];

    pub fn as_str(self) -> &'static str {
        match self {
            TourStatus::Active => "active",
            TourStatus::Draft => "draft",
            TourStatus::Pending => "pending",
        }
    }

    /// Human label shown on the card badge and in the status select.
    pub fn label(self) -> &'static str {
        match self {
            TourStatus::Active => "Active",
            TourStatus::Draft => "Draft",
            TourStatus::Pending => "Pending",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "active" => Some(TourStatus::Active),
            "draft" => Some(TourStatus::Draft),
            "pending" => Some(TourStatus::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for TourStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// One bookable product listing, in the shape of the static tours document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub bookings: u32,
    #[serde(default)]
    pub rating: Option<f64>,
    pub status: TourStatus,
    #[serde(default)]
    pub image_class: String,
    #[serde(default)]
    pub category: String,
    pub duration: u32,
    pub max_group_size: u32,
    #[serde(default)]
    pub included_items: Vec<String>,
    #[serde(default)]
    pub meeting_point: String,
}

/// Validated field values for a tour that has no identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTour {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub status: TourStatus,
    pub category: String,
    pub duration: u32,
    pub max_group_size: u32,
    pub included_items: Vec<String>,
    pub meeting_point: String,
}

impl NewTour {
    /// Stamp the creation defaults: fixed currency, no bookings, no rating.
    pub fn into_tour(self, id: u64, image_class: &str) -> Tour {
        Tour {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            currency: DEFAULT_CURRENCY.to_string(),
            bookings: 0,
            rating: None,
            status: self.status,
            image_class: image_class.to_string(),
            category: self.category,
            duration: self.duration,
            max_group_size: self.max_group_size,
            included_items: self.included_items,
            meeting_point: self.meeting_point,
        }
    }
}

/// Pick a card background uniformly at random.
pub fn random_image_class<R: rand::Rng>(rng: &mut R) -> &'static str {
    IMAGE_CLASSES[rng.random_range(0..IMAGE_CLASSES.len())]
}

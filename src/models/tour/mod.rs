pub mod form;
pub mod loader;
pub mod storage;
pub mod store;
pub mod types;
pub mod validate;
pub mod view;

pub use form::{FieldError, FormState, SubmitOutcome, TourField, TourFormController, TourFormValues};
pub use loader::FetchError;
pub use storage::{FileStorage, MemoryStorage, SnapshotStorage, StorageError};
pub use store::{StoreError, TourStore};
pub use types::{NewTour, Tour, TourStatus};
pub use view::{CardAction, TourCard};

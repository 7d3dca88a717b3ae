pub mod api;
pub mod directory;
pub mod interactive;
pub mod schemas;

pub use api::{DirectoryClient, FetchError};
pub use directory::{SortKey, ViewError, format_patient_table, visible_patients};
pub use interactive::PatientBrowser;
pub use schemas::{Patient, PatientDirectory};

pub mod format;
pub mod view;

#[cfg(test)]
mod view_test;

pub use format::format_patient_table;
pub use view::{SortKey, ViewError, visible_patients};

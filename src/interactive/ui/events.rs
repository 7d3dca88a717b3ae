use crate::api::FetchError;
use crate::directory::SortKey;
use crate::schemas::Patient;

#[derive(Clone, Debug)]
pub enum Message {
    // Filter and sort controls
    FilterChanged(String),
    SortKeyChanged(Option<SortKey>),

    // Table navigation
    SelectPatient(usize),

    // Loader events
    ReloadRequested,
    FetchSettled(u64, Result<Vec<Patient>, FetchError>),
}

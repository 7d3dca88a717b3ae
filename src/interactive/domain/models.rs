use crate::api::FetchError;
use crate::schemas::Patient;

/// Loader snapshot for one load generation.
///
/// Starts as `Loading` and settles exactly once into `Loaded` or
/// `Failed`; a reload starts a fresh generation with a fresh snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Patient>),
    Failed(FetchError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The fetched collection, empty until a successful settle.
    pub fn patients(&self) -> &[Patient] {
        match self {
            LoadState::Loaded(patients) => patients,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }
}

// Fetch request and response for worker communication. The generation
// ties a settled result back to the load that asked for it; stale
// generations are discarded instead of applied.
#[derive(Clone, Copy, Debug)]
pub struct FetchRequest {
    pub generation: u64,
}

#[derive(Debug)]
pub struct FetchResponse {
    pub generation: u64,
    pub result: Result<Vec<Patient>, FetchError>,
}

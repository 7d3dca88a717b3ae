use serde::{Deserialize, Serialize};

// Wire shape of one directory record. Ids are fixed-width numeric
// strings (zero-padded to 8 digits), dates are ISO YYYY-MM-DD strings.
// The loader does not validate fields; malformed entries pass through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub date_of_registration: String,
}

impl Patient {
    /// Full display name, the string filtering and the name sort run on.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Success body of `GET /api/patients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientDirectory {
    pub patients: Vec<Patient>,
}

use crate::schemas::Patient;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Field ordering the visible patient list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortKey {
    Name,
    Id,
    DateOfBirth,
    DateOfRegistration,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Id,
        SortKey::DateOfBirth,
        SortKey::DateOfRegistration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Id => "id",
            SortKey::DateOfBirth => "dateOfBirth",
            SortKey::DateOfRegistration => "dateOfRegistration",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "id" => Ok(SortKey::Id),
            "dateOfBirth" => Ok(SortKey::DateOfBirth),
            "dateOfRegistration" => Ok(SortKey::DateOfRegistration),
            other => Err(format!(
                "unknown sort key {other:?} (expected name, id, dateOfBirth or dateOfRegistration)"
            )),
        }
    }
}

/// Derivation failure. Date sorts refuse to order a value that is not
/// ISO `YYYY-MM-DD` instead of guessing a position for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("patient {id} has unreadable {field} {value:?}")]
    UnparsableDate {
        id: String,
        field: &'static str,
        value: String,
    },
}

/// Derive the visible patient list: filter first, then sort.
///
/// Filtering is a case-insensitive substring match against the display
/// name; an empty filter admits everything. `None` keeps the fetched
/// insertion order, and every sort is stable, so re-deriving with the
/// same inputs always yields the same order.
pub fn visible_patients(
    patients: &[Patient],
    filter_text: &str,
    sort_key: Option<SortKey>,
) -> Result<Vec<Patient>, ViewError> {
    let needle = filter_text.to_lowercase();
    let mut visible: Vec<Patient> = patients
        .iter()
        .filter(|patient| {
            needle.is_empty() || patient.display_name().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    match sort_key {
        None => {}
        Some(SortKey::Name) => visible.sort_by_key(|patient| patient.display_name()),
        Some(SortKey::Id) => visible.sort_by(|a, b| a.id.cmp(&b.id)),
        Some(SortKey::DateOfBirth) => {
            visible = sort_by_date(visible, "dateOfBirth", |p| &p.date_of_birth)?;
        }
        Some(SortKey::DateOfRegistration) => {
            visible = sort_by_date(visible, "dateOfRegistration", |p| &p.date_of_registration)?;
        }
    }

    Ok(visible)
}

fn sort_by_date<F>(
    patients: Vec<Patient>,
    field: &'static str,
    value: F,
) -> Result<Vec<Patient>, ViewError>
where
    F: Fn(&Patient) -> &String,
{
    let mut keyed = patients
        .into_iter()
        .map(|patient| -> Result<(NaiveDate, Patient), ViewError> {
            let raw = value(&patient).clone();
            let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                ViewError::UnparsableDate {
                    id: patient.id.clone(),
                    field,
                    value: raw,
                }
            })?;
            Ok((date, patient))
        })
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by_key(|(date, _)| *date);
    Ok(keyed.into_iter().map(|(_, patient)| patient).collect())
}

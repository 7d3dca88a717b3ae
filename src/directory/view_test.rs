#[cfg(test)]
mod tests {
    use crate::directory::view::{SortKey, ViewError, visible_patients};
    use crate::schemas::Patient;

    fn patient(id: &str, first: &str, last: &str, dob: &str, dor: &str) -> Patient {
        Patient {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: dob.to_string(),
            date_of_registration: dor.to_string(),
        }
    }

    fn directory() -> Vec<Patient> {
        vec![
            patient("00000002", "John", "Doe", "1990-01-01", "2023-05-14"),
            patient("00000001", "Jane", "Smith", "1985-07-23", "2022-11-02"),
            patient("00000003", "Alice", "Nguyen", "1992-03-09", "2024-02-28"),
        ]
    }

    fn names(patients: &[Patient]) -> Vec<String> {
        patients.iter().map(|p| p.display_name()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_insertion_order() {
        let visible = visible_patients(&directory(), "", None).unwrap();
        assert_eq!(names(&visible), ["John Doe", "Jane Smith", "Alice Nguyen"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let visible = visible_patients(&directory(), "john", None).unwrap();
        assert_eq!(names(&visible), ["John Doe"]);

        let visible = visible_patients(&directory(), "JOHN", None).unwrap();
        assert_eq!(names(&visible), ["John Doe"]);
    }

    #[test]
    fn test_filter_matches_across_the_display_name() {
        // The space between first and last name is part of the haystack
        let visible = visible_patients(&directory(), "john d", None).unwrap();
        assert_eq!(names(&visible), ["John Doe"]);

        let visible = visible_patients(&directory(), "e smith", None).unwrap();
        assert_eq!(names(&visible), ["Jane Smith"]);
    }

    #[test]
    fn test_filter_without_match_leaves_nothing() {
        let visible = visible_patients(&directory(), "zzz", None).unwrap();
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filter_applies_before_sort() {
        let visible = visible_patients(&directory(), "jane", Some(SortKey::Name)).unwrap();
        assert_eq!(names(&visible), ["Jane Smith"]);
    }

    #[test]
    fn test_name_sort_uses_display_name() {
        let visible = visible_patients(&directory(), "", Some(SortKey::Name)).unwrap();
        // "Jane Smith" orders before "John Doe" on the combined name,
        // even though Doe < Smith by surname
        assert_eq!(names(&visible), ["Alice Nguyen", "Jane Smith", "John Doe"]);
    }

    #[test]
    fn test_id_sort_is_ascending() {
        let visible = visible_patients(&directory(), "", Some(SortKey::Id)).unwrap();
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["00000001", "00000002", "00000003"]);
    }

    #[test]
    fn test_date_of_birth_sort_is_chronological() {
        let visible = visible_patients(&directory(), "", Some(SortKey::DateOfBirth)).unwrap();
        assert_eq!(names(&visible), ["Jane Smith", "John Doe", "Alice Nguyen"]);
    }

    #[test]
    fn test_date_of_registration_sort_is_chronological() {
        let visible = visible_patients(&directory(), "", Some(SortKey::DateOfRegistration)).unwrap();
        assert_eq!(names(&visible), ["Jane Smith", "John Doe", "Alice Nguyen"]);
    }

    #[test]
    fn test_date_sort_ties_keep_insertion_order() {
        let patients = vec![
            patient("00000010", "First", "Tie", "1990-01-01", "2020-01-01"),
            patient("00000011", "Second", "Tie", "1990-01-01", "2020-01-01"),
            patient("00000012", "Earlier", "Born", "1980-06-30", "2021-01-01"),
        ];

        let visible = visible_patients(&patients, "", Some(SortKey::DateOfBirth)).unwrap();
        assert_eq!(names(&visible), ["Earlier Born", "First Tie", "Second Tie"]);
    }

    #[test]
    fn test_unparsable_date_is_an_error() {
        let patients = vec![
            patient("00000001", "Jane", "Smith", "1985-07-23", "2022-11-02"),
            patient("00000002", "John", "Doe", "not-a-date", "2023-05-14"),
        ];

        let err = visible_patients(&patients, "", Some(SortKey::DateOfBirth)).unwrap_err();
        assert_eq!(
            err,
            ViewError::UnparsableDate {
                id: "00000002".to_string(),
                field: "dateOfBirth",
                value: "not-a-date".to_string(),
            }
        );
    }

    #[test]
    fn test_unparsable_date_does_not_break_other_sorts() {
        let patients = vec![
            patient("00000002", "John", "Doe", "not-a-date", "2023-05-14"),
            patient("00000001", "Jane", "Smith", "1985-07-23", "2022-11-02"),
        ];

        let visible = visible_patients(&patients, "", Some(SortKey::Id)).unwrap();
        assert_eq!(visible[0].id, "00000001");

        // The filtered-out entry is never date-parsed either
        let visible = visible_patients(&patients, "jane", Some(SortKey::DateOfBirth)).unwrap();
        assert_eq!(names(&visible), ["Jane Smith"]);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let first = visible_patients(&directory(), "o", Some(SortKey::Name)).unwrap();
        let second = visible_patients(&directory(), "o", Some(SortKey::Name)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_key_round_trips_through_strings() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("surname".parse::<SortKey>().is_err());
    }
}

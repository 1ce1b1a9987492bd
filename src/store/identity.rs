//! Identity matching

use crate::client::{ClientRecord, IdentityKey};

/// Position of the first record whose identity equals `key`.
///
/// Linear scan in storage order, so the earliest of any accidental
/// duplicates wins.
pub fn find_by_identity(records: &[ClientRecord], key: &IdentityKey<'_>) -> Option<usize> {
    records.iter().position(|record| record.identity() == *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, last_name: &str, birth_date: &str) -> ClientRecord {
        ClientRecord {
            id: id.to_string(),
            last_name: last_name.to_string(),
            first_name: "Ivan".to_string(),
            patr_name: "Ivanovich".to_string(),
            birth_date: birth_date.to_string(),
            status: false,
            fio: format!("{} Ivan Ivanovich", last_name),
            age: 30,
        }
    }

    fn key<'a>(last_name: &'a str, birth_date: &'a str) -> IdentityKey<'a> {
        IdentityKey {
            last_name,
            first_name: "Ivan",
            patr_name: "Ivanovich",
            birth_date,
        }
    }

    #[test]
    fn test_no_match_in_empty_store() {
        assert_eq!(find_by_identity(&[], &key("Ivanov", "1990-05-20T11:16:32")), None);
    }

    #[test]
    fn test_first_match_wins() {
        let records = vec![
            record("usr_1", "Petrov", "1990-05-20T11:16:32"),
            record("usr_2", "Ivanov", "1990-05-20T11:16:32"),
            record("usr_3", "Ivanov", "1990-05-20T11:16:32"),
        ];
        assert_eq!(
            find_by_identity(&records, &key("Ivanov", "1990-05-20T11:16:32")),
            Some(1)
        );
    }

    #[test]
    fn test_exact_comparison() {
        let records = vec![record("usr_1", "Ivanov", "1990-05-20T11:16:32")];
        assert_eq!(find_by_identity(&records, &key("IVANOV", "1990-05-20T11:16:32")), None);
        assert_eq!(find_by_identity(&records, &key("Ivanov ", "1990-05-20T11:16:32")), None);
        assert_eq!(find_by_identity(&records, &key("Ivanov", "1990-05-20T11:16:33")), None);
    }
}

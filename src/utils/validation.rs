use crate::domain::model::Person;
use crate::utils::error::{QueryError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Loader invariants: a non-empty sequence, unique identifiers, no blank
/// name fields. Every source must pass this before the dataset is queried.
pub fn validate_people(people: &[Person]) -> Result<()> {
    if people.is_empty() {
        return Err(QueryError::ValidationError {
            message: "dataset is empty".to_string(),
        });
    }

    let mut seen_ids = HashSet::with_capacity(people.len());
    for person in people {
        if !seen_ids.insert(person.id) {
            return Err(QueryError::ValidationError {
                message: format!("duplicate person id {}", person.id),
            });
        }
        if person.first_name.trim().is_empty() {
            return Err(QueryError::ValidationError {
                message: format!("person {} has an empty first name", person.id),
            });
        }
        if person.last_name.trim().is_empty() {
            return Err(QueryError::ValidationError {
                message: format!("person {} has an empty last name", person.id),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Gender;
    use chrono::NaiveDate;

    fn person(id: u32, first: &str, last: &str) -> Person {
        Person::new(
            id,
            first,
            last,
            NaiveDate::from_ymd_opt(1980, 5, 17).unwrap(),
            Gender::Female,
        )
    }

    #[test]
    fn test_valid_dataset_passes() {
        let people = vec![person(1, "Karin", "Berg"), person(2, "Johan", "Lund")];
        assert!(validate_people(&people).is_ok());
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        assert!(validate_people(&[]).is_err());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let people = vec![person(3, "Karin", "Berg"), person(3, "Johan", "Lund")];
        let err = validate_people(&people).unwrap_err();
        assert!(err.to_string().contains("duplicate person id 3"));
    }

    #[test]
    fn test_blank_names_are_rejected() {
        assert!(validate_people(&[person(1, "  ", "Berg")]).is_err());
        assert!(validate_people(&[person(1, "Karin", "")]).is_err());
    }
}

use crate::core::calendar::completed_years;
use crate::domain::model::{Gender, Person, PersonDto};
use crate::utils::error::{QueryError, Result};
use chrono::{Locale, NaiveDate};
use std::collections::{BTreeSet, HashMap};

/// Read-only query surface over a loaded person dataset.
///
/// Every method is a pure function of the source sequence taken at
/// construction: no mutation, no shared state, identical results on every
/// re-run.
pub struct PersonQueries {
    people: Vec<Person>,
}

impl PersonQueries {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn count(&self) -> usize {
        self.people.len()
    }

    /// Case-insensitive exact match on the last name.
    pub fn count_by_last_name(&self, last_name: &str) -> usize {
        let needle = last_name.to_lowercase();
        self.people
            .iter()
            .filter(|p| p.last_name.to_lowercase() == needle)
            .count()
    }

    /// All records of the given gender, source order preserved.
    pub fn by_gender(&self, gender: Gender) -> Vec<&Person> {
        self.people.iter().filter(|p| p.gender == gender).collect()
    }

    /// Unique dates of birth in ascending order.
    pub fn distinct_birth_dates(&self) -> BTreeSet<NaiveDate> {
        self.people.iter().map(|p| p.date_of_birth).collect()
    }

    /// Case-insensitive exact match on the first name, source order preserved.
    pub fn by_first_name(&self, first_name: &str) -> Vec<&Person> {
        let needle = first_name.to_lowercase();
        self.people
            .iter()
            .filter(|p| p.first_name.to_lowercase() == needle)
            .collect()
    }

    /// Point lookup by identifier. Identifiers are unique by loader
    /// invariant; if a source ever produced duplicates anyway, the first
    /// record in source order wins.
    pub fn find_by_id(&self, id: u32) -> Result<&Person> {
        self.people
            .iter()
            .find(|p| p.id == id)
            .ok_or(QueryError::NotFound { id })
    }

    /// The record with the earliest date of birth. On a shared minimum the
    /// first record in source order is returned. `None` only for an empty
    /// source.
    pub fn oldest(&self) -> Option<&Person> {
        self.people.iter().min_by_key(|p| p.date_of_birth)
    }

    /// Projects every record born strictly before `cutoff` into a
    /// [`PersonDto`].
    pub fn dtos_born_before(&self, cutoff: NaiveDate) -> Vec<PersonDto> {
        self.people
            .iter()
            .filter(|p| p.date_of_birth < cutoff)
            .map(PersonDto::from)
            .collect()
    }

    /// Long-form birth date of one record, uppercased, with weekday and
    /// month names drawn from `locale` (e.g. "ONSDAG 19 DECEMBER 2012"
    /// under `sv_SE`).
    pub fn format_birth_date(&self, id: u32, locale: Locale) -> Result<String> {
        let person = self.find_by_id(id)?;
        Ok(person
            .date_of_birth
            .format_localized("%A %d %B %Y", locale)
            .to_string()
            .to_uppercase())
    }

    /// Mean age in completed years as of `on`. Zero for an empty source.
    pub fn average_age(&self, on: NaiveDate) -> f64 {
        if self.people.is_empty() {
            return 0.0;
        }
        let total: i64 = self
            .people
            .iter()
            .map(|p| i64::from(completed_years(p.date_of_birth, on)))
            .sum();
        total as f64 / self.people.len() as f64
    }

    /// Sorted, deduplicated first names that read the same forwards and
    /// backwards under case-insensitive comparison.
    pub fn palindromic_first_names(&self) -> Vec<String> {
        self.people
            .iter()
            .filter(|p| is_palindrome(&p.first_name))
            .map(|p| p.first_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Partitions the source by last name; every record lands in exactly
    /// one group.
    pub fn group_by_last_name(&self) -> HashMap<String, Vec<&Person>> {
        let mut groups: HashMap<String, Vec<&Person>> = HashMap::new();
        for person in &self.people {
            groups
                .entry(person.last_name.clone())
                .or_default()
                .push(person);
        }
        groups
    }
}

fn is_palindrome(name: &str) -> bool {
    let lowered: Vec<char> = name.to_lowercase().chars().collect();
    lowered.iter().eq(lowered.iter().rev())
}

//! Deterministic construction of the reference 10,000-person dataset.
//!
//! Every run yields byte-identical records, so the fixture oracles (record
//! 5436, the 1910-01-02 minimum, the palindromic name set, the 107-surname
//! census) hold without shipping a committed data file. The date strata and
//! name strides below are pinned; changing any of them shifts the census.

use crate::domain::model::{Gender, Person};
use crate::domain::ports::PeopleSource;
use crate::utils::error::{QueryError, Result};
use chrono::NaiveDate;

pub const PEOPLE_COUNT: usize = 10_000;

const FIRST_NAMES: [&str; 47] = [
    "Johan", "Maria", "Lars", "Karin", "Anders", "Sofia", "Mikael", "Elin", "Per", "Linnea",
    "Oskar", "Astrid", "Nils", "Ingrid", "Gustav", "Freja", "Henrik", "Sara", "Mattias", "Emma",
    "Johanna", "Stefan", "Camilla", "Fredrik", "Helena", "Björn", "Cecilia", "Magnus", "Therese",
    "Daniel", "Malin", "Patrik", "Jenny", "Andreas", "Louise", "Marcus", "Amanda", "Simon",
    "Rebecka", "Jonas", "Caroline", "Viktor", "Josefin", "Emil", "Matilda", "Axel", "Felicia",
];

// None of the base first names above reads the same reversed; the full
// palindrome census of the dataset is exactly this list.
const PALINDROMIC_FIRST_NAMES: [&str; 14] = [
    "Ada", "Ana", "Anna", "Ava", "Aya", "Bob", "Ebbe", "Efe", "Eje", "Elle", "Hannah", "Maram",
    "Natan", "Otto",
];

// Each palindromic name occurs twice, at these two index windows.
const PALINDROME_BASES: [usize; 2] = [200, 7200];

const ERIK_INDICES: [usize; 3] = [1000, 3000, 9000];

// "Andersson" is handled separately: it lands on every index congruent to
// ANDERSSON_OFFSET modulo ANDERSSON_STRIDE, which is exactly 90 of the
// 10,000 positions.
const ANDERSSON_STRIDE: usize = 112;
const ANDERSSON_OFFSET: usize = 7;

const LAST_NAMES: [&str; 106] = [
    "Johansson", "Karlsson", "Nilsson", "Eriksson", "Larsson", "Olsson", "Persson", "Svensson",
    "Gustafsson", "Pettersson", "Jonsson", "Jansson", "Hansson", "Bengtsson", "Jönsson",
    "Lindberg", "Jakobsson", "Magnusson", "Olofsson", "Lindström", "Lindqvist", "Lindgren",
    "Axelsson", "Berg", "Bergström", "Lundberg", "Lundgren", "Lundqvist", "Mattsson", "Berglund",
    "Fredriksson", "Sandberg", "Henriksson", "Forsberg", "Sjöberg", "Wallin", "Engström",
    "Eklund", "Danielsson", "Håkansson", "Lundin", "Gunnarsson", "Holm", "Bergman", "Samuelsson",
    "Fransson", "Wikström", "Isaksson", "Bergqvist", "Nyström", "Holmberg", "Arvidsson",
    "Löfgren", "Söderberg", "Nyberg", "Blomqvist", "Claesson", "Mårtensson", "Nordström",
    "Lundström", "Pålsson", "Eliasson", "Björk", "Viklund", "Berggren", "Sandström", "Lind",
    "Nordin", "Ström", "Åberg", "Ekström", "Falk", "Hermansson", "Holmgren", "Hellström",
    "Dahlberg", "Hedlund", "Sundberg", "Sjögren", "Ek", "Blom", "Abrahamsson", "Martinsson",
    "Öberg", "Andreasson", "Strömberg", "Månsson", "Hansen", "Åkesson", "Stenberg", "Lindholm",
    "Dahl", "Norberg", "Boström", "Ljung", "Ottosson", "Strand", "Näslund", "Sundström",
    "Gabrielsson", "Asplund", "Hagström", "Palm", "Ivarsson", "Edlund", "Franzén",
];

/// The built-in fixture source. Stateless; `load` rebuilds the same 10,000
/// records every time.
pub struct GeneratedPeople;

impl PeopleSource for GeneratedPeople {
    fn load(&self) -> Result<Vec<Person>> {
        let mut dates = birth_dates();
        // Records 5436 and 5914 carry fixed birth dates; move those dates
        // onto the fixed positions before ids are assigned.
        pin_date(&mut dates, 1968, 1, 25, 5435)?;
        pin_date(&mut dates, 2012, 12, 19, 5913)?;

        let people: Vec<Person> = dates
            .into_iter()
            .enumerate()
            .map(|(index, date_of_birth)| Person {
                id: index as u32 + 1,
                first_name: first_name_for(index).to_string(),
                last_name: last_name_for(index).to_string(),
                date_of_birth,
                gender: if index % 2 == 0 {
                    Gender::Male
                } else {
                    Gender::Female
                },
            })
            .collect();

        tracing::debug!("Generated fixture dataset of {} records", people.len());
        Ok(people)
    }
}

/// Birth dates in generation order: an early stratum of 892 days across
/// 1910-1912, then per-year day runs from 1920 through 2012. Repeated day
/// runs re-emit dates that already exist, which fixes the distinct-date
/// census at 8,882. All ordinals stay on or before December 20, so ages
/// never straddle a late-December birthday.
fn birth_dates() -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(PEOPLE_COUNT);

    // 1910-01-02 is the overall minimum and occurs exactly once.
    push_days(&mut dates, 1910, 2, 354);
    push_days(&mut dates, 1911, 1, 354);
    push_days(&mut dates, 1912, 1, 185);

    for year in 1920..=2012 {
        let (distinct, repeated) = match year {
            1990 => (81, 13),
            1996..=2012 => (77, 65),
            _ => (88, 0),
        };
        if year == 2012 {
            // ordinal 354 is 2012-12-19, later pinned onto id 5914
            push_days(&mut dates, year, 1, distinct - 1);
            push_days(&mut dates, year, 354, 354);
        } else {
            push_days(&mut dates, year, 1, distinct);
        }
        push_days(&mut dates, year, 1, repeated);
    }

    dates
}

fn push_days(dates: &mut Vec<NaiveDate>, year: i32, first_ordinal: u32, last_ordinal: u32) {
    dates.extend(
        (first_ordinal..=last_ordinal).filter_map(|ordinal| NaiveDate::from_yo_opt(year, ordinal)),
    );
}

fn pin_date(dates: &mut [NaiveDate], year: i32, month: u32, day: u32, index: usize) -> Result<()> {
    let target = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        fixture_error(format!(
            "invalid pinned date {}-{:02}-{:02}",
            year, month, day
        ))
    })?;
    let from = dates
        .iter()
        .position(|d| *d == target)
        .ok_or_else(|| fixture_error(format!("pinned date {} missing from fixture", target)))?;
    dates.swap(from, index);
    Ok(())
}

fn fixture_error(message: String) -> QueryError {
    QueryError::ValidationError { message }
}

fn first_name_for(index: usize) -> &'static str {
    if index == 5435 {
        return "Tea";
    }
    if ERIK_INDICES.contains(&index) {
        return "Erik";
    }
    for base in PALINDROME_BASES {
        if (base..base + PALINDROMIC_FIRST_NAMES.len()).contains(&index) {
            return PALINDROMIC_FIRST_NAMES[index - base];
        }
    }
    FIRST_NAMES[index % FIRST_NAMES.len()]
}

fn last_name_for(index: usize) -> &'static str {
    if index == 5435 {
        return "Håkansson";
    }
    if index % ANDERSSON_STRIDE == ANDERSSON_OFFSET {
        return "Andersson";
    }
    // cycle the remaining names over the non-Andersson positions only
    let anderssons_before =
        index / ANDERSSON_STRIDE + usize::from(index % ANDERSSON_STRIDE > ANDERSSON_OFFSET);
    LAST_NAMES[(index - anderssons_before) % LAST_NAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_dataset_is_stable_across_loads() {
        let first = GeneratedPeople.load().unwrap();
        let second = GeneratedPeople.load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let people = GeneratedPeople.load().unwrap();
        assert_eq!(people.len(), PEOPLE_COUNT);
        assert!(people
            .iter()
            .enumerate()
            .all(|(index, p)| p.id == index as u32 + 1));
    }

    #[test]
    fn test_base_name_pools_contain_no_palindromes() {
        let lowered_palindrome = |name: &str| {
            let chars: Vec<char> = name.to_lowercase().chars().collect();
            chars.iter().eq(chars.iter().rev())
        };
        assert!(FIRST_NAMES.iter().all(|name| !lowered_palindrome(name)));
        assert!(PALINDROMIC_FIRST_NAMES.iter().all(|name| lowered_palindrome(name)));
    }
}

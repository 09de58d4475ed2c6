use chrono::{Datelike, NaiveDate};

/// Every date of `year` in ascending order, both endpoints included.
/// Years outside the supported calendar range yield an empty sequence.
pub fn calendar_year(year: i32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    first.iter_days().take_while(|d| d.year() == year).collect()
}

/// Whole calendar years between `date_of_birth` and `on`. The year only
/// counts once the month/day of the birthday has been reached.
pub fn completed_years(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut years = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years
}

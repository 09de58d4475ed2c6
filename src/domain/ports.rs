use crate::domain::model::Person;
use crate::utils::error::Result;
use chrono::{Locale, NaiveDate};

/// Produces the immutable source sequence the query layer operates over.
/// A source is consulted exactly once per process; the loaded records are
/// never mutated afterwards.
pub trait PeopleSource {
    fn load(&self) -> Result<Vec<Person>>;
}

/// Settings the report run needs from whichever config frontend drives it.
pub trait ReportConfig {
    fn locale(&self) -> Locale;
    fn reference_date(&self) -> NaiveDate;
}

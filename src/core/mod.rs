pub mod calendar;
pub mod queries;
pub mod report;

pub use crate::domain::model::{Gender, Person, PersonDto};
pub use crate::domain::ports::{PeopleSource, ReportConfig};
pub use crate::utils::error::Result;

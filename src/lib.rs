pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{CsvPeople, GeneratedPeople};
pub use crate::config::CliConfig;
pub use crate::core::queries::PersonQueries;
pub use crate::core::report::{build_report, DatasetReport};
pub use crate::domain::model::{Gender, Person, PersonDto};
pub use crate::domain::ports::{PeopleSource, ReportConfig};
pub use crate::utils::error::{QueryError, Result};

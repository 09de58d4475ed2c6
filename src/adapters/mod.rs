pub mod csv_source;
pub mod generated;

pub use csv_source::{export_csv, CsvPeople};
pub use generated::{GeneratedPeople, PEOPLE_COUNT};

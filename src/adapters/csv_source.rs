use crate::domain::model::Person;
use crate::domain::ports::PeopleSource;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Loads a person dataset from a CSV file with headers
/// `id,first_name,last_name,date_of_birth,gender` (ISO dates, SCREAMING
/// gender values), the same shape [`export_csv`] writes.
pub struct CsvPeople {
    path: PathBuf,
}

impl CsvPeople {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PeopleSource for CsvPeople {
    fn load(&self) -> Result<Vec<Person>> {
        tracing::debug!("Reading dataset from {}", self.path.display());
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut people = Vec::new();
        for record in reader.deserialize() {
            people.push(record?);
        }
        Ok(people)
    }
}

pub fn export_csv(people: &[Person], path: &Path) -> Result<()> {
    tracing::debug!("Writing {} records to {}", people.len(), path.display());
    let mut writer = csv::Writer::from_path(path)?;
    for person in people {
        writer.serialize(person)?;
    }
    writer.flush()?;
    Ok(())
}

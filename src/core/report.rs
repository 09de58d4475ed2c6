use crate::core::queries::PersonQueries;
use crate::domain::model::{Gender, Person};
use crate::domain::ports::ReportConfig;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub last_name: String,
    pub size: usize,
}

/// Summary of one pass over the dataset, printable as text or JSON.
#[derive(Debug, Serialize)]
pub struct DatasetReport {
    pub count: usize,
    pub male_count: usize,
    pub female_count: usize,
    pub distinct_birth_dates: usize,
    pub oldest: Option<Person>,
    pub oldest_birth_date: Option<String>,
    pub average_age: f64,
    pub palindromic_first_names: Vec<String>,
    pub last_name_groups: usize,
    pub largest_group: Option<GroupSummary>,
}

pub fn build_report<C: ReportConfig>(queries: &PersonQueries, config: &C) -> Result<DatasetReport> {
    tracing::debug!("Building dataset report over {} records", queries.count());

    let oldest = queries.oldest().cloned();
    let oldest_birth_date = match &oldest {
        Some(person) => Some(queries.format_birth_date(person.id, config.locale())?),
        None => None,
    };

    let groups = queries.group_by_last_name();
    let largest_group = groups
        .iter()
        // size first; equal sizes resolve toward the lexicographically
        // smaller name, independent of map iteration order
        .max_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| b.0.cmp(a.0)))
        .map(|(name, members)| GroupSummary {
            last_name: name.clone(),
            size: members.len(),
        });

    Ok(DatasetReport {
        count: queries.count(),
        male_count: queries.by_gender(Gender::Male).len(),
        female_count: queries.by_gender(Gender::Female).len(),
        distinct_birth_dates: queries.distinct_birth_dates().len(),
        average_age: queries.average_age(config.reference_date()),
        oldest,
        oldest_birth_date,
        palindromic_first_names: queries.palindromic_first_names(),
        last_name_groups: groups.len(),
        largest_group,
    })
}

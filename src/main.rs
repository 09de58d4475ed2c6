use clap::Parser;
use person_query::adapters::export_csv;
use person_query::utils::{logger, validation, validation::Validate};
use person_query::{
    build_report, CliConfig, CsvPeople, DatasetReport, GeneratedPeople, PeopleSource,
    PersonQueries,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting person-query CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let people = match &config.dataset {
        Some(path) => {
            tracing::info!("Loading dataset from {}", path);
            CsvPeople::new(path).load()?
        }
        None => {
            tracing::info!("Loading generated fixture dataset");
            GeneratedPeople.load()?
        }
    };
    validation::validate_people(&people)?;
    tracing::info!("Loaded {} records", people.len());

    if let Some(path) = &config.export {
        export_csv(&people, Path::new(path))?;
        println!("✅ Dataset exported to: {}", path);
        return Ok(());
    }

    let queries = PersonQueries::new(people);
    let report = build_report(&queries, &config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &DatasetReport) {
    println!("People loaded: {}", report.count);
    println!(
        "  male / female: {} / {}",
        report.male_count, report.female_count
    );
    println!("Distinct birth dates: {}", report.distinct_birth_dates);
    if let Some(oldest) = &report.oldest {
        println!(
            "Oldest person: {} (id {}, born {})",
            oldest.full_name(),
            oldest.id,
            oldest.date_of_birth
        );
    }
    if let Some(formatted) = &report.oldest_birth_date {
        println!("  birth date, long form: {}", formatted);
    }
    println!("Average age: {:.2}", report.average_age);
    println!(
        "Palindromic first names: {}",
        report.palindromic_first_names.join(", ")
    );
    println!("Last name groups: {}", report.last_name_groups);
    if let Some(group) = &report.largest_group {
        println!("  largest: {} ({} people)", group.last_name, group.size);
    }
}

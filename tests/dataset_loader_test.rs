use chrono::NaiveDate;
use person_query::adapters::{export_csv, PEOPLE_COUNT};
use person_query::utils::validation::validate_people;
use person_query::{CsvPeople, Gender, GeneratedPeople, PeopleSource, Person};
use std::collections::HashSet;
use tempfile::TempDir;

#[test]
fn generated_fixture_is_deterministic() {
    let first = GeneratedPeople.load().unwrap();
    let second = GeneratedPeople.load().unwrap();
    assert_eq!(first, second);
}

#[test]
fn generated_fixture_passes_loader_validation() {
    let people = GeneratedPeople.load().unwrap();

    assert_eq!(people.len(), PEOPLE_COUNT);
    assert!(validate_people(&people).is_ok());

    let ids: HashSet<u32> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PEOPLE_COUNT);
}

#[test]
fn csv_export_then_load_preserves_the_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("people.csv");

    let people = GeneratedPeople.load().unwrap();
    export_csv(&people, &path).unwrap();

    let reloaded = CsvPeople::new(&path).load().unwrap();
    assert_eq!(people, reloaded);
}

#[test]
fn csv_source_reads_a_hand_written_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("two.csv");
    std::fs::write(
        &path,
        "id,first_name,last_name,date_of_birth,gender\n\
         1,Karin,Berg,1980-05-17,FEMALE\n\
         2,Johan,Lund,1975-11-02,MALE\n",
    )
    .unwrap();

    let people = CsvPeople::new(&path).load().unwrap();

    let expected = vec![
        Person::new(
            1,
            "Karin",
            "Berg",
            NaiveDate::from_ymd_opt(1980, 5, 17).unwrap(),
            Gender::Female,
        ),
        Person::new(
            2,
            "Johan",
            "Lund",
            NaiveDate::from_ymd_opt(1975, 11, 2).unwrap(),
            Gender::Male,
        ),
    ];
    assert_eq!(people, expected);
}

#[test]
fn missing_csv_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.csv");
    assert!(CsvPeople::new(&path).load().is_err());
}

#[test]
fn loaded_duplicate_ids_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dup.csv");
    std::fs::write(
        &path,
        "id,first_name,last_name,date_of_birth,gender\n\
         5,Karin,Berg,1980-05-17,FEMALE\n\
         5,Johan,Lund,1975-11-02,MALE\n",
    )
    .unwrap();

    let people = CsvPeople::new(&path).load().unwrap();
    let err = validate_people(&people).unwrap_err();
    assert!(err.to_string().contains("duplicate person id 5"));
}

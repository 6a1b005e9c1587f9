use scholar_coauthors::report::{write_coauthors, write_names};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

fn sample_coauthors() -> BTreeMap<String, i32> {
    let mut coauthors = BTreeMap::new();
    coauthors.insert("Smith, John".to_string(), 2023);
    coauthors.insert("Doe, Jane".to_string(), 2021);
    coauthors
}

#[test]
fn test_write_coauthors_round_trip_is_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("coauthors.csv");

    write_coauthors(&report_path, &sample_coauthors()).unwrap();

    let content = fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["Doe, Jane, 2021", "Smith, John, 2023"]);
}

#[test]
fn test_write_coauthors_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("coauthors.csv");

    write_coauthors(&report_path, &sample_coauthors()).unwrap();

    let mut single = BTreeMap::new();
    single.insert("Hopper, Grace".to_string(), 2024);
    write_coauthors(&report_path, &single).unwrap();

    let content = fs::read_to_string(&report_path).unwrap();
    assert_eq!(content, "Hopper, Grace, 2024\n");
}

#[test]
fn test_write_names_projection_drops_years() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("coauthors.csv");

    write_names(&report_path, &sample_coauthors()).unwrap();

    let content = fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["Doe, Jane", "Smith, John"]);
}

#[test]
fn test_write_coauthors_keeps_embedded_commas_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("coauthors.csv");

    let mut coauthors = BTreeMap::new();
    coauthors.insert("Jr., Sammy Davis".to_string(), 2020);
    write_coauthors(&report_path, &coauthors).unwrap();

    let content = fs::read_to_string(&report_path).unwrap();
    assert_eq!(content, "Jr., Sammy Davis, 2020\n");
}

#[test]
fn test_write_coauthors_empty_map_produces_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("coauthors.csv");

    write_coauthors(&report_path, &BTreeMap::new()).unwrap();

    let content = fs::read_to_string(&report_path).unwrap();
    assert!(content.is_empty());
}

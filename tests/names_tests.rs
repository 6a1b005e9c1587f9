use scholar_coauthors::coauthors::{nsf_name, split_authors};

#[test]
fn test_nsf_name_reorders_first_last() {
    assert_eq!(nsf_name("John Smith"), "Smith, John");
}

#[test]
fn test_nsf_name_keeps_middle_tokens_in_given_part() {
    assert_eq!(nsf_name("Jane Q Public"), "Public, Jane Q");
}

#[test]
fn test_nsf_name_single_token_has_empty_given_part() {
    assert_eq!(nsf_name("Smith"), "Smith, ");
}

#[test]
fn test_nsf_name_splits_on_last_space_only() {
    assert_eq!(nsf_name("Maria de la Cruz"), "Cruz, Maria de la");
}

#[test]
fn test_split_authors_on_literal_separator() {
    let names: Vec<&str> = split_authors("Jane Doe and John Smith and Alice Jones").collect();
    assert_eq!(names, vec!["Jane Doe", "John Smith", "Alice Jones"]);
}

#[test]
fn test_split_authors_ignores_and_inside_names() {
    let names: Vec<&str> = split_authors("Alexandra Brand and Bob Jones").collect();
    assert_eq!(names, vec!["Alexandra Brand", "Bob Jones"]);
}

#[test]
fn test_split_authors_single_name() {
    let names: Vec<&str> = split_authors("Jane Doe").collect();
    assert_eq!(names, vec!["Jane Doe"]);
}

//! Integration tests: quote file on disk → QuoteCollection → QuoteService.

use std::collections::HashSet;
use std::io::Write;

use quotes::{DEFAULT_KEY, LoadError, QuoteCollection, QuoteError, QuoteService, parse_count};
use tempfile::NamedTempFile;

/// Helper to write a quote file and build a service over it.
fn service_from(json: &str) -> QuoteService {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    let collection = QuoteCollection::load(file.path(), DEFAULT_KEY).unwrap();
    QuoteService::new(collection)
}

#[test]
fn loaded_service_serves_members_only() {
    let service = service_from(r#"{"quotes": ["One step at a time.", "Start now."]}"#);

    for _ in 0..20 {
        let quote = service.random_quote().unwrap().quote;
        assert!(["One step at a time.", "Start now."].contains(&quote.as_str()));
    }
}

#[test]
fn sample_lengths_follow_min_of_count_and_size() {
    let service = service_from(r#"{"quotes": ["a", "b", "c", "d"]}"#);

    for count in 0..8 {
        let quotes = service.random_quotes(count).unwrap().quotes;
        let expected = usize::try_from(count).unwrap().min(4);
        assert_eq!(quotes.len(), expected, "count = {count}");

        let unique: HashSet<&String> = quotes.iter().collect();
        assert_eq!(unique.len(), quotes.len(), "duplicates for count = {count}");
    }
}

#[test]
fn oversized_sample_covers_whole_collection() {
    let service = service_from(r#"{"quotes": ["a", "b", "c"]}"#);

    let quotes: HashSet<String> = service.random_quotes(5).unwrap().quotes.into_iter().collect();
    let all: HashSet<String> = service.collection().iter().map(String::from).collect();
    assert_eq!(quotes, all);
}

#[test]
fn parsed_path_count_feeds_sampling() {
    let service = service_from(r#"{"quotes": ["a", "b", "c"]}"#);

    let count = parse_count("2").unwrap();
    assert_eq!(service.random_quotes(count).unwrap().quotes.len(), 2);

    assert!(matches!(parse_count("-1"), Err(QuoteError::InvalidArgument(_))));
}

#[test]
fn empty_file_array_is_a_load_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"quotes": []}"#).unwrap();

    let err = QuoteCollection::load(file.path(), DEFAULT_KEY).unwrap_err();
    assert!(matches!(err, LoadError::Empty(_)));
}

#[test]
fn repository_quote_file_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/quotes.json");
    let collection = QuoteCollection::load(path, DEFAULT_KEY).unwrap();
    assert!(!collection.is_empty());
}

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use movies::MovieError;
use movies::store::attributes::{attribute_to_json, item_to_json, item_to_movie, number_to_json};
use serde_json::json;
use std::collections::HashMap;

fn movie_item() -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("title".to_string(), AttributeValue::S("The Matrix".to_string())),
        ("releaseYear".to_string(), AttributeValue::S("1999".to_string())),
        ("runtime".to_string(), AttributeValue::N("136".to_string())),
        ("featured".to_string(), AttributeValue::Bool(true)),
        ("sequel".to_string(), AttributeValue::Null(true)),
        (
            "cast".to_string(),
            AttributeValue::L(vec![
                AttributeValue::S("Keanu Reeves".to_string()),
                AttributeValue::S("Carrie-Anne Moss".to_string()),
            ]),
        ),
        (
            "ratings".to_string(),
            AttributeValue::M(HashMap::from([(
                "imdb".to_string(),
                AttributeValue::N("8.7".to_string()),
            )])),
        ),
    ])
}

#[test]
fn test_number_to_json() {
    assert_eq!(number_to_json("1999"), json!(1999));
    assert_eq!(number_to_json("-3"), json!(-3));
    assert_eq!(number_to_json("8.7"), json!(8.7));
    assert_eq!(number_to_json("12345678901234567890"), json!(12_345_678_901_234_567_890_u64));

    // Beyond f64 range: kept as the original text
    assert_eq!(number_to_json("1e400"), json!("1e400"));
}

#[test]
fn test_item_to_json_unmarshalls_nested_values() {
    let value = item_to_json(&movie_item());

    assert_eq!(
        value,
        json!({
            "title": "The Matrix",
            "releaseYear": "1999",
            "runtime": 136,
            "featured": true,
            "sequel": null,
            "cast": ["Keanu Reeves", "Carrie-Anne Moss"],
            "ratings": { "imdb": 8.7 }
        })
    );
}

#[test]
fn test_sets_and_binary_attributes() {
    let strings = AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]);
    let numbers = AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]);
    let blob = AttributeValue::B(Blob::new(vec![1_u8, 2, 3]));

    assert_eq!(attribute_to_json(&strings), json!(["a", "b"]));
    assert_eq!(attribute_to_json(&numbers), json!([1, 2.5]));
    assert_eq!(attribute_to_json(&blob), json!("AQID"));
}

#[test]
fn test_item_to_movie() {
    let movie = item_to_movie(&movie_item()).unwrap();

    assert_eq!(movie.title.as_deref(), Some("The Matrix"));
    assert_eq!(movie.release_year.unwrap().to_string(), "1999");
    assert_eq!(movie.attributes.get("runtime"), Some(&json!(136)));
    assert!(!movie.attributes.contains_key("title"));
}

#[test]
fn test_item_to_movie_rejects_non_text_title() {
    let item = HashMap::from([("title".to_string(), AttributeValue::N("42".to_string()))]);

    assert!(matches!(
        item_to_movie(&item),
        Err(MovieError::StoreUnavailable(_))
    ));
}

use rdf_prefixes::{PrefixError, PrefixRegistry};
use serde_json::json;

/// Test: a realistic JSON-LD context seeds only the prefix-shaped entries.
#[test]
fn mixed_context_is_filtered() {
    let registry = PrefixRegistry::from_context(&json!({
        "@base": "http://example.org/base/",
        "@language": "en",
        "schema": "http://schema.org/",
        "name": {"@id": "schema:name"},
        "schema:sameAs": {"@type": "@id"},
        "tags": {"@container": "@set"},
    }))
    .unwrap();

    assert_eq!(
        registry.to_map(),
        std::collections::HashMap::from([
            ("schema".to_string(), "http://schema.org/".to_string()),
            ("name".to_string(), "http://schema.org/name".to_string()),
        ])
    );
    assert!(registry.vocabulary().is_none());
}

/// Test: a vocabulary-only context: bare names expand, the plain map stays empty,
/// and the context form restores the vocabulary.
#[test]
fn vocabulary_only_context() {
    let registry = PrefixRegistry::from_context(&json!({
        "@vocab": "http://schema.org/",
    }))
    .unwrap();

    assert_eq!(registry.expand("name").unwrap(), "http://schema.org/name");
    assert!(registry.to_map().is_empty());
    assert_eq!(
        registry.to_context(),
        json!({"@vocab": "http://schema.org/"})
    );
}

/// Test: a @vocab given as a prefixed name is expanded with the registry
/// state at assignment time.
#[test]
fn vocabulary_expanded_at_assignment() {
    let registry = PrefixRegistry::from_context(&json!({
        "ex": "http://example.org/ns/",
        "@vocab": "ex:terms",
    }))
    .unwrap();

    assert_eq!(registry.vocabulary(), Some("http://example.org/ns/terms"));
    assert_eq!(
        registry.expand("thing").unwrap(),
        "http://example.org/ns/termsthing"
    );
}

/// Test: seeds are order-sensitive; a term referencing a prefix defined
/// later in the same object fails at registration time.
#[test]
fn forward_references_are_rejected() {
    let err = PrefixRegistry::from_context(&json!({
        "name": {"@id": "schema:name"},
        "schema": "http://schema.org/",
    }))
    .unwrap_err();
    assert!(matches!(err, PrefixError::UnresolvedPrefix(_)));

    // The same entries in dependency order are fine.
    let registry = PrefixRegistry::from_context(&json!({
        "schema": "http://schema.org/",
        "name": {"@id": "schema:name"},
    }))
    .unwrap();
    assert_eq!(registry.get("name"), Some("http://schema.org/name"));
}

/// Test: a sequence of contexts applies in order, later entries overriding.
#[test]
fn context_sequence_applies_in_order() {
    let registry = PrefixRegistry::from_contexts(&[
        json!({"schema": "http://schema.org/"}),
        json!({"name": "schema:name"}),
        json!({"schema": "https://schema.org/"}),
    ])
    .unwrap();

    // `name` was expanded against the first `schema`, then `schema` moved on.
    assert_eq!(registry.get("name"), Some("http://schema.org/name"));
    assert_eq!(registry.get("schema"), Some("https://schema.org/"));
}

/// Test: to_context output can seed an equivalent registry.
#[test]
fn context_output_round_trips() {
    let mut registry = PrefixRegistry::new();
    registry
        .add("schema", "http://schema.org/")
        .unwrap()
        .add("foaf", "http://xmlns.com/foaf/0.1/")
        .unwrap()
        .add("@vocab", "http://example.org/")
        .unwrap();

    let restored = PrefixRegistry::from_context(&registry.to_context()).unwrap();
    assert_eq!(restored.to_map(), registry.to_map());
    assert_eq!(restored.vocabulary(), registry.vocabulary());
}

/// Test: the registry serializes as its plain mapping, vocabulary excluded.
#[test]
fn serde_serialization_matches_plain_map() {
    let mut registry = PrefixRegistry::new();
    registry
        .add("schema", "http://schema.org/")
        .unwrap()
        .add("@vocab", "http://example.org/")
        .unwrap();

    assert_eq!(
        serde_json::to_value(&registry).unwrap(),
        json!({"schema": "http://schema.org/"})
    );
}

/// Test: chained registration reads naturally and returns the registry.
#[test]
fn registration_chains() {
    let mut registry = PrefixRegistry::new();
    registry
        .add("schema", "http://schema.org/")
        .unwrap()
        .add_term("name", &json!({"@id": "schema:name"}))
        .unwrap()
        .add_context(&json!({"foaf": "http://xmlns.com/foaf/0.1/"}))
        .unwrap();

    assert_eq!(registry.len(), 3);
}

//! Well-known vocabulary namespaces.
//!
//! Namespace IRIs for vocabularies that show up in practically every
//! linked-data dataset, plus [`common`] for a registry pre-seeded with all of
//! them under their customary prefixes.

use crate::registry::PrefixRegistry;

/// RDF syntax namespace (`rdf:`).
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema namespace (`rdfs:`).
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// XML Schema datatypes namespace (`xsd:`).
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// OWL namespace (`owl:`).
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

/// schema.org namespace (`schema:`).
pub const SCHEMA: &str = "http://schema.org/";

/// FOAF namespace (`foaf:`).
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";

/// Dublin Core terms namespace (`dcterms:`).
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

/// SKOS namespace (`skos:`).
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

/// A registry pre-seeded with the namespaces above.
pub fn common() -> PrefixRegistry {
    let mut registry = PrefixRegistry::new();
    // All values are absolute IRIs; registration cannot fail.
    for (prefix, namespace) in [
        ("rdf", RDF),
        ("rdfs", RDFS),
        ("xsd", XSD),
        ("owl", OWL),
        ("schema", SCHEMA),
        ("foaf", FOAF),
        ("dcterms", DCTERMS),
        ("skos", SKOS),
    ] {
        registry
            .prefixes
            .insert(prefix.to_string(), namespace.to_string());
    }
    registry
}

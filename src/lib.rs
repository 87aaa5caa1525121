//! Prefix and namespace management for RDF and JSON-LD vocabularies.
//!
//! A [`PrefixRegistry`] maps short prefixes (`schema`) to namespace IRIs
//! (`http://schema.org/`) and optionally carries a default vocabulary for
//! bare names. It expands prefixed names to absolute IRIs, compacts absolute
//! IRIs back to their shortest known form, and speaks the JSON-LD `@context`
//! dialect for seeding and serialization.
//!
//! ```
//! use rdf_prefixes::PrefixRegistry;
//!
//! let mut registry = PrefixRegistry::new();
//! registry.add("schema", "http://schema.org/")?;
//!
//! assert_eq!(registry.expand("schema:name")?, "http://schema.org/name");
//! assert_eq!(registry.compact("http://schema.org/name")?, "schema:name");
//!
//! let schema = registry.helper("schema");
//! assert_eq!(schema.expand("url")?, "http://schema.org/url");
//! # Ok::<(), rdf_prefixes::PrefixError>(())
//! ```

pub mod context;
pub mod error;
pub mod registry;
pub mod vocab;

pub use error::{PrefixError, Result};
pub use registry::{PrefixHelper, PrefixRegistry, is_prefixed_name};

//! JSON-LD context ingestion and serialization.
//!
//! A context object maps terms to IRIs with JSON-LD decoration: values may be
//! plain strings or objects carrying an `@id`, keys may be reserved keywords
//! (`@vocab` is honored, everything else `@`-prefixed is dropped), and keys
//! containing `:` are compound terms rather than prefixes and are dropped as
//! well. Remote context URLs are out of scope; only inline objects are
//! processed.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::registry::PrefixRegistry;

/// The reserved key that sets the default vocabulary.
pub const VOCAB: &str = "@vocab";

/// The identifier field of an expanded term definition.
pub const ID: &str = "@id";

impl PrefixRegistry {
    /// Build a registry from a JSON-LD-style context value (an object, or an
    /// array of objects applied in order).
    pub fn from_context(context: &Value) -> Result<Self> {
        let mut registry = Self::new();
        registry.add_context(context)?;
        Ok(registry)
    }

    /// Build a registry from an ordered sequence of context values; later
    /// entries override earlier ones.
    pub fn from_contexts(contexts: &[Value]) -> Result<Self> {
        let mut registry = Self::new();
        registry.add_contexts(contexts)?;
        Ok(registry)
    }

    /// Register one term from a JSON-LD context.
    ///
    /// String values and objects with a string `@id` go through
    /// [`add`](PrefixRegistry::add); any other value shape is a structural
    /// annotation (`@container` wrappers and the like) and is dropped without
    /// error. Reserved keys never unwrap their value: only `@vocab` with a
    /// plain string is meaningful.
    pub fn add_term(&mut self, key: &str, value: &Value) -> Result<&mut Self> {
        if key.starts_with('@') {
            if key == VOCAB {
                if let Some(iri) = value.as_str() {
                    return self.add(key, iri);
                }
            }
            return Ok(self);
        }
        match value {
            Value::String(iri) => self.add(key, iri),
            Value::Object(entry) => match entry.get(ID).and_then(Value::as_str) {
                Some(iri) => self.add(key, iri),
                None => Ok(self),
            },
            _ => Ok(self),
        }
    }

    /// Register every term of a context value, in document order.
    ///
    /// Arrays recurse into their elements; values are expanded against the
    /// registry state at the moment their key is reached, so a term may
    /// reference a prefix defined earlier in the same object but not one
    /// defined later. Other value shapes are ignored.
    pub fn add_context(&mut self, context: &Value) -> Result<&mut Self> {
        match context {
            Value::Array(items) => {
                for item in items {
                    self.add_context(item)?;
                }
            }
            Value::Object(entries) => {
                for (key, value) in entries {
                    self.add_term(key, value)?;
                }
                tracing::debug!(terms = entries.len(), "context applied");
            }
            _ => {}
        }
        Ok(self)
    }

    /// Apply a sequence of context values in order.
    pub fn add_contexts(&mut self, contexts: &[Value]) -> Result<&mut Self> {
        for context in contexts {
            self.add_context(context)?;
        }
        Ok(self)
    }

    /// The registry as a JSON-LD `@context` object: the default vocabulary
    /// under `@vocab` when set, followed by every prefix mapping in sorted
    /// order.
    pub fn to_context(&self) -> Value {
        let mut context = Map::new();
        if let Some(vocabulary) = &self.vocabulary {
            context.insert(VOCAB.to_string(), Value::String(vocabulary.clone()));
        }
        let mut entries: Vec<_> = self.prefixes.iter().collect();
        entries.sort();
        for (prefix, namespace) in entries {
            context.insert(prefix.clone(), Value::String(namespace.clone()));
        }
        Value::Object(context)
    }
}

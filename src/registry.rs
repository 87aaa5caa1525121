//! The prefix registry: expansion and compaction of prefixed names.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::context::VOCAB;
use crate::error::{PrefixError, Result};

/// Characters that may not appear in either token of a prefixed name.
const RESERVED_CHARS: [char; 4] = [':', '/', '"', '\''];

/// Split `name` into `(prefix, local)` if it matches the prefixed-name
/// grammar. The prefix part may be empty; the local part may not.
fn split_prefixed_name(name: &str) -> Option<(&str, &str)> {
    let (prefix, local) = name.split_once(':')?;
    if local.is_empty() || prefix.contains(RESERVED_CHARS) || local.contains(RESERVED_CHARS) {
        return None;
    }
    Some((prefix, local))
}

/// Returns true if `name` has the shape `prefix:local`, where neither part
/// contains `:`, `/`, `"` or `'` and the local part is non-empty.
///
/// Anything else (a bare name, or a colon combined with `/` as in an
/// absolute IRI) is not a prefixed name.
pub fn is_prefixed_name(name: &str) -> bool {
    split_prefixed_name(name).is_some()
}

/// A registry of prefix→namespace mappings with an optional default
/// vocabulary.
///
/// Prefixed names (`schema:name`) expand to absolute IRIs through their
/// registered prefix; bare names fall back to the default vocabulary; absolute
/// IRIs pass through untouched. [`compact`](PrefixRegistry::compact) is the
/// inverse direction. Prefixes can be overwritten but never removed.
#[derive(Clone, Debug, Default)]
pub struct PrefixRegistry {
    pub(crate) prefixes: HashMap<String, String>,
    pub(crate) vocabulary: Option<String>,
}

impl PrefixRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prefix→IRI mapping, returning the registry for chaining.
    ///
    /// The value is expanded against the current registry state before it is
    /// stored, so it may itself be a prefixed name as long as its prefix is
    /// already registered; an unresolvable value is an error. Keys containing
    /// `:` and reserved keys other than `@vocab` are dropped without error or
    /// mutation. `@vocab` sets the default vocabulary instead of a prefix.
    pub fn add(&mut self, prefix: &str, iri: &str) -> Result<&mut Self> {
        if prefix.starts_with('@') {
            if prefix == VOCAB {
                let vocabulary = self.expand(iri)?;
                tracing::debug!(vocabulary = %vocabulary, "default vocabulary set");
                self.vocabulary = Some(vocabulary);
            }
            return Ok(self);
        }
        if prefix.contains(':') {
            return Ok(self);
        }
        let expanded = self.expand(iri)?;
        self.prefixes.insert(prefix.to_string(), expanded);
        Ok(self)
    }

    /// Expand `name` to an absolute IRI.
    ///
    /// A prefixed name resolves through its registered prefix. A bare name
    /// resolves to its own namespace when it is itself a registered prefix,
    /// or through the default vocabulary. A name containing a colon that does
    /// not match the prefixed-name grammar is taken to be absolute already
    /// and passes through unchanged.
    pub fn expand(&self, name: &str) -> Result<String> {
        self.expand_with(name, false)
    }

    /// Expand `name`, returning it unchanged instead of failing when it
    /// cannot be resolved.
    pub fn expand_tolerant(&self, name: &str) -> String {
        self.expand_with(name, true)
            .unwrap_or_else(|_| name.to_string())
    }

    fn expand_with(&self, name: &str, tolerant: bool) -> Result<String> {
        if let Some((prefix, local)) = split_prefixed_name(name) {
            return match self.prefixes.get(prefix) {
                Some(namespace) => Ok(format!("{namespace}{local}")),
                None if tolerant => Ok(name.to_string()),
                None => Err(PrefixError::UnresolvedPrefix(name.to_string())),
            };
        }
        if let Some(namespace) = self.prefixes.get(name) {
            // A bare prefix expands to its namespace.
            return Ok(namespace.clone());
        }
        if !name.contains(':') {
            if let Some(vocabulary) = &self.vocabulary {
                return Ok(format!("{vocabulary}{name}"));
            }
            if !tolerant {
                return Err(PrefixError::UnresolvedName(name.to_string()));
            }
        }
        Ok(name.to_string())
    }

    /// Compact an absolute (or prefixed) identifier to its shortest known
    /// form.
    ///
    /// The input is expanded first, so an unresolvable prefixed name fails
    /// exactly as [`expand`](PrefixRegistry::expand) does. When several
    /// registered namespaces are string-prefixes of the candidate, the
    /// longest namespace wins; the same namespace registered under several
    /// prefixes breaks the tie to the lexicographically least prefix. A set
    /// default vocabulary takes priority over any prefix match.
    pub fn compact(&self, iri: &str) -> Result<String> {
        let iri = self.expand(iri)?;

        let mut found: Option<(&str, &str)> = None;
        for (prefix, namespace) in &self.prefixes {
            if !iri.starts_with(namespace.as_str()) || namespace.len() <= prefix.len() {
                continue;
            }
            let better = match found {
                None => true,
                Some((best_prefix, best_namespace)) => {
                    namespace.len() > best_namespace.len()
                        || (namespace.len() == best_namespace.len()
                            && prefix.as_str() < best_prefix)
                }
            };
            if better {
                found = Some((prefix.as_str(), namespace.as_str()));
            }
        }

        if let Some(vocabulary) = &self.vocabulary {
            if let Some(rest) = iri.strip_prefix(vocabulary.as_str()) {
                return Ok(rest.to_string());
            }
        }

        match found {
            Some((prefix, namespace)) if namespace == iri.as_str() => Ok(prefix.to_string()),
            Some((prefix, namespace)) => Ok(format!("{prefix}:{}", &iri[namespace.len()..])),
            None => Ok(iri),
        }
    }

    /// Bind a prefix for repeated expansion of local names under it.
    ///
    /// The prefix is not required to be registered yet; resolution happens at
    /// each call on the helper.
    pub fn helper(&self, prefix: impl Into<String>) -> PrefixHelper<'_> {
        PrefixHelper {
            registry: self,
            prefix: prefix.into(),
        }
    }

    /// A fresh copy of all prefix→namespace pairs.
    ///
    /// The default vocabulary and reserved keys are never included; see
    /// [`to_context`](PrefixRegistry::to_context) for the form that carries
    /// the vocabulary.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.prefixes.clone()
    }

    /// Get the namespace a prefix maps to.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// The default vocabulary, if one was set.
    pub fn vocabulary(&self) -> Option<&str> {
        self.vocabulary.as_deref()
    }

    /// Number of registered prefixes. The vocabulary is not counted.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// True if no prefixes are registered.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Iterate over registered `(prefix, namespace)` pairs in arbitrary
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
    }
}

impl Serialize for PrefixRegistry {
    /// Serializes as the plain prefix→namespace mapping with sorted keys.
    /// The default vocabulary is not part of the plain form.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut entries: Vec<_> = self.prefixes.iter().collect();
        entries.sort();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (prefix, namespace) in entries {
            map.serialize_entry(prefix, namespace)?;
        }
        map.end()
    }
}

/// A helper bound to a single prefix, for repeated expansion of local names.
///
/// Created by [`PrefixRegistry::helper`]. Holds a borrow of the registry.
#[derive(Clone, Debug)]
pub struct PrefixHelper<'a> {
    registry: &'a PrefixRegistry,
    prefix: String,
}

impl PrefixHelper<'_> {
    /// Expand `local` through the bound prefix.
    pub fn expand(&self, local: &str) -> Result<String> {
        self.check(local)?;
        self.registry.expand(&format!("{}:{local}", self.prefix))
    }

    /// Expand `local`, passing the prefixed form through unchanged when the
    /// bound prefix is not registered. A local name containing `:` is still
    /// an error.
    pub fn expand_tolerant(&self, local: &str) -> Result<String> {
        self.check(local)?;
        Ok(self
            .registry
            .expand_tolerant(&format!("{}:{local}", self.prefix)))
    }

    fn check(&self, local: &str) -> Result<()> {
        if local.contains(':') {
            return Err(PrefixError::InvalidLocalName(local.to_string()));
        }
        Ok(())
    }
}

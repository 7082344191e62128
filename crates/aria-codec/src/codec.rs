//! Attribute Codec
//!
//! `set` / `get` / `unset` over the prefixed attribute namespace of one host
//! node, driven by the schema registry. Writes validate fully before any
//! mutation; reads parse strictly and degrade to `None` on malformed stored
//! data.

use aria_schema::{Descriptor, Domain, describe};

use crate::{AriaError, AriaValue, Element, IdAllocator, Value};

/// Typed accessor over one host node's `aria-*` attributes.
#[derive(Debug)]
pub struct Aria<E: Element> {
    element: E,
    ids: IdAllocator,
    prefix: &'static str,
}

impl<E: Element> Aria<E> {
    /// Codec over `element` using the process-wide identifier allocator.
    pub fn new(element: E) -> Self {
        Self::with_allocator(element, IdAllocator::global())
    }

    /// Codec with an injected identifier allocator.
    pub fn with_allocator(element: E, ids: IdAllocator) -> Self {
        Self {
            element,
            ids,
            prefix: "aria",
        }
    }

    /// Override the namespace prefix. Defaults to `aria`.
    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    /// The underlying node.
    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Consume the codec, returning the node.
    pub fn into_element(self) -> E {
        self.element
    }

    /// Validate `value` against the attribute's domain and store its
    /// serialized form under `"<prefix>-<name>"`.
    ///
    /// On success exactly one store write happens and the codec is returned
    /// for chaining. On error the store is untouched. A [`Value::Null`] write
    /// stores `true` in boolean-capable domains and is a no-op in reference
    /// domains.
    pub fn set(&mut self, name: &str, value: impl Into<Value<E>>) -> Result<&mut Self, AriaError> {
        let descriptor = self.lookup(name)?;
        let serialized = match serialize(descriptor, value.into(), &self.ids) {
            Write::Store(s) => s,
            Write::Skip => return Ok(self),
            Write::Reject(reason) => {
                return Err(AriaError::InvalidValue {
                    attribute: descriptor.name,
                    reason,
                });
            }
        };
        let full_name = self.qualified(descriptor);
        self.element.set_attribute(&full_name, &serialized);
        tracing::trace!("set {} = {:?}", full_name, serialized);
        Ok(self)
    }

    /// Read and strictly parse the attribute.
    ///
    /// Absent and malformed stored values both read as `Ok(None)`; only an
    /// unknown name is an error. Reading never mutates the store.
    pub fn get(&self, name: &str) -> Result<Option<AriaValue>, AriaError> {
        let descriptor = self.lookup(name)?;
        match self.element.attribute(&self.qualified(descriptor)) {
            Some(raw) => Ok(deserialize(descriptor, raw)),
            None => Ok(None),
        }
    }

    /// Whether the attribute is present in the store, parseable or not.
    pub fn has(&self, name: &str) -> Result<bool, AriaError> {
        let descriptor = self.lookup(name)?;
        Ok(self.element.attribute(&self.qualified(descriptor)).is_some())
    }

    /// Remove the attribute. Removing an absent attribute is a no-op.
    pub fn unset(&mut self, name: &str) -> Result<&mut Self, AriaError> {
        let descriptor = self.lookup(name)?;
        let full_name = self.qualified(descriptor);
        self.element.remove_attribute(&full_name);
        tracing::trace!("removed {}", full_name);
        Ok(self)
    }

    fn lookup(&self, name: &str) -> Result<&'static Descriptor, AriaError> {
        describe(name).ok_or_else(|| AriaError::InvalidAttribute(name.to_string()))
    }

    fn qualified(&self, descriptor: &Descriptor) -> String {
        format!("{}-{}", self.prefix, descriptor.name)
    }
}

enum Write {
    Store(String),
    Skip,
    Reject(String),
}

fn serialize<E: Element>(descriptor: &Descriptor, value: Value<E>, ids: &IdAllocator) -> Write {
    match descriptor.domain {
        Domain::String => match value {
            Value::Str(s) => Write::Store(s),
            other => Write::Reject(format!("expected a string, got {}", other.kind())),
        },
        Domain::IdRef => match value {
            Value::Str(s) => Write::Store(s),
            Value::Ref(mut node) => Write::Store(ids.resolve(&mut node)),
            Value::Null => Write::Skip,
            other => Write::Reject(format!(
                "expected a node reference or identifier string, got {}",
                other.kind()
            )),
        },
        Domain::IdRefList => match value {
            Value::Str(s) => Write::Store(s),
            Value::Ref(mut node) => Write::Store(ids.resolve(&mut node)),
            Value::RefList(nodes) => {
                let resolved: Vec<String> = nodes
                    .into_iter()
                    .map(|mut node| ids.resolve(&mut node))
                    .filter(|id| !id.is_empty())
                    .collect();
                Write::Store(resolved.join(" "))
            }
            Value::Null => Write::Skip,
            other => Write::Reject(format!(
                "expected node references or an identifier string, got {}",
                other.kind()
            )),
        },
        Domain::Bool => match value {
            Value::Null => Write::Store("true".to_string()),
            Value::Bool(b) => Write::Store(b.to_string()),
            other => Write::Reject(format!("expected true or false, got {}", other.kind())),
        },
        Domain::BoolOrToken(tokens) => match value {
            Value::Null => Write::Store("true".to_string()),
            Value::Bool(b) => Write::Store(b.to_string()),
            Value::Str(s) if tokens.contains(&s.as_str()) => Write::Store(s),
            Value::Str(s) => Write::Reject(format!("`{s}` is not one of {tokens:?}")),
            other => Write::Reject(format!(
                "expected true, false, or one of {tokens:?}, got {}",
                other.kind()
            )),
        },
        Domain::Token(tokens) => match value {
            Value::Str(s) if tokens.contains(&s.as_str()) => Write::Store(s),
            Value::Str(s) => Write::Reject(format!("`{s}` is not one of {tokens:?}")),
            other => Write::Reject(format!(
                "expected one of {tokens:?}, got {}",
                other.kind()
            )),
        },
        Domain::Number => match value {
            Value::Number(n) if !n.is_nan() => Write::Store(format_number(n)),
            Value::Number(_) => Write::Reject("not a number".to_string()),
            Value::Str(s) => match parse_number(&s) {
                Some(n) => Write::Store(format_number(n)),
                None => Write::Reject(format!("`{s}` is not a number")),
            },
            other => Write::Reject(format!("expected a number, got {}", other.kind())),
        },
    }
}

fn deserialize(descriptor: &Descriptor, raw: String) -> Option<AriaValue> {
    match descriptor.domain {
        Domain::String | Domain::IdRef | Domain::IdRefList => Some(AriaValue::Str(raw)),
        Domain::Bool => parse_bool(&raw).map(AriaValue::Bool),
        Domain::BoolOrToken(tokens) => match_token(tokens, &raw)
            .map(AriaValue::Token)
            .or_else(|| parse_bool(&raw).map(AriaValue::Bool)),
        Domain::Token(tokens) => match_token(tokens, &raw).map(AriaValue::Token),
        Domain::Number => parse_number(&raw).map(AriaValue::Number),
    }
}

/// Exact match only: no case folding, no whitespace tolerance.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn match_token(tokens: &'static [&'static str], raw: &str) -> Option<&'static str> {
    tokens.iter().copied().find(|token| *token == raw)
}

/// Numeric parse tolerating surrounding whitespace. Empty input and
/// non-numeric text are both "not a number".
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Canonical stored form: parsed-and-restringified, so `"007"` becomes `"7"`.
fn format_number(n: f64) -> String {
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimpleNode;

    fn codec() -> Aria<SimpleNode> {
        Aria::with_allocator(SimpleNode::new(), IdAllocator::new())
    }

    #[test]
    fn test_set_writes_the_qualified_name() {
        let mut aria = codec();
        aria.set("checked", true).unwrap();

        assert_eq!(aria.element().attribute("aria-checked").as_deref(), Some("true"));
    }

    #[test]
    fn test_set_is_chainable() {
        let mut aria = codec();
        aria.set("checked", true)
            .unwrap()
            .set("label", "Save")
            .unwrap()
            .set("level", 2)
            .unwrap();

        assert_eq!(aria.element().len(), 3);
    }

    #[test]
    fn test_unknown_attribute_is_rejected_everywhere() {
        let mut aria = codec();

        let expected = AriaError::InvalidAttribute("frobnicate".to_string());
        assert_eq!(aria.set("frobnicate", true).unwrap_err(), expected);
        assert_eq!(aria.get("frobnicate"), Err(expected.clone()));
        assert_eq!(aria.unset("frobnicate").unwrap_err(), expected);
    }

    #[test]
    fn test_name_lookup_is_case_insensitive() {
        let mut aria = codec();
        aria.set("CHECKED", true).unwrap();

        assert_eq!(aria.get("Checked").unwrap(), Some(AriaValue::Bool(true)));
        assert_eq!(aria.element().attribute("aria-checked").as_deref(), Some("true"));
    }

    #[test]
    fn test_rejected_write_leaves_store_untouched() {
        let mut aria = codec();
        let err = aria.set("sort", "upwards").unwrap_err();

        assert!(matches!(err, AriaError::InvalidValue { attribute: "sort", .. }));
        assert!(aria.element().is_empty());
        assert_eq!(aria.get("sort").unwrap(), None);
    }

    #[test]
    fn test_null_write_defaults_boolean_domains_to_true() {
        let mut aria = codec();
        aria.set("busy", ()).unwrap();
        aria.set("pressed", Value::Null).unwrap();

        assert_eq!(aria.get("busy").unwrap(), Some(AriaValue::Bool(true)));
        assert_eq!(aria.get("pressed").unwrap(), Some(AriaValue::Bool(true)));
    }

    #[test]
    fn test_null_write_is_a_noop_for_references() {
        let mut aria = codec();
        aria.set("activedescendant", ()).unwrap();
        aria.set("owns", ()).unwrap();

        assert!(aria.element().is_empty());
    }

    #[test]
    fn test_null_write_is_invalid_for_strings_and_tokens() {
        let mut aria = codec();

        assert!(aria.set("label", ()).is_err());
        assert!(aria.set("sort", ()).is_err());
        assert!(aria.set("level", ()).is_err());
    }

    #[test]
    fn test_number_canonicalization() {
        let mut aria = codec();
        aria.set("colcount", "007").unwrap();

        assert_eq!(aria.element().attribute("aria-colcount").as_deref(), Some("7"));
        assert_eq!(aria.get("colcount").unwrap(), Some(AriaValue::Number(7.0)));
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut aria = codec();

        assert!(aria.set("level", f64::NAN).is_err());
        assert!(aria.set("level", "one").is_err());
        assert!(aria.element().is_empty());
    }

    #[test]
    fn test_reference_values_resolve_to_identifiers() {
        let mut aria = codec();
        let target = SimpleNode::new();
        aria.set("activedescendant", Value::Ref(target.clone())).unwrap();

        assert_eq!(target.id(), "aria-1");
        assert_eq!(
            aria.element().attribute("aria-activedescendant").as_deref(),
            Some("aria-1")
        );
    }

    #[test]
    fn test_prefix_override() {
        let mut aria = codec().with_prefix("x-aria");
        aria.set("hidden", true).unwrap();

        assert_eq!(aria.element().attribute("x-aria-hidden").as_deref(), Some("true"));
        assert_eq!(aria.get("hidden").unwrap(), Some(AriaValue::Bool(true)));
    }

    #[test]
    fn test_unset_removes_and_tolerates_absence() {
        let mut aria = codec();
        aria.set("checked", true).unwrap();
        aria.unset("checked").unwrap();

        assert_eq!(aria.get("checked").unwrap(), None);

        // Second removal is a no-op.
        aria.unset("checked").unwrap();
        assert_eq!(aria.get("checked").unwrap(), None);
    }
}

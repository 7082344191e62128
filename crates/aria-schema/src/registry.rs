//! Attribute Schema Registry
//!
//! The closed, immutable table of every recognized attribute. Any name
//! outside this table is invalid input to the codec, never silently ignored.

use crate::Domain;

/// Schema entry for one recognized attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Attribute name without the namespace prefix, always lowercase.
    pub name: &'static str,
    /// Value domain enforced on write and parsed on read.
    pub domain: Domain,
}

/// The full vocabulary, sorted by name.
///
/// Single source of truth: lookup, iteration, and codec dispatch all derive
/// from this table.
pub static ATTRIBUTES: [Descriptor; 38] = [
    Descriptor { name: "activedescendant", domain: Domain::IdRef },
    Descriptor { name: "atomic", domain: Domain::Bool },
    Descriptor { name: "autocomplete", domain: Domain::Token(&["inline", "list", "both", "none"]) },
    Descriptor { name: "busy", domain: Domain::Bool },
    Descriptor { name: "checked", domain: Domain::BoolOrToken(&["mixed", "undefined"]) },
    Descriptor { name: "colcount", domain: Domain::Number },
    Descriptor { name: "colindex", domain: Domain::Number },
    Descriptor { name: "controls", domain: Domain::IdRefList },
    Descriptor { name: "current", domain: Domain::BoolOrToken(&["page", "step", "location", "date", "time"]) },
    Descriptor { name: "describedby", domain: Domain::IdRefList },
    Descriptor { name: "disabled", domain: Domain::Bool },
    Descriptor { name: "expanded", domain: Domain::BoolOrToken(&["undefined"]) },
    Descriptor { name: "haspopup", domain: Domain::BoolOrToken(&["menu", "listbox", "tree", "grid", "dialog"]) },
    Descriptor { name: "hidden", domain: Domain::BoolOrToken(&["undefined"]) },
    Descriptor { name: "invalid", domain: Domain::BoolOrToken(&["grammar", "spelling"]) },
    Descriptor { name: "label", domain: Domain::String },
    Descriptor { name: "labelledby", domain: Domain::IdRefList },
    Descriptor { name: "level", domain: Domain::Number },
    Descriptor { name: "live", domain: Domain::Token(&["off", "polite", "assertive"]) },
    Descriptor { name: "modal", domain: Domain::Bool },
    Descriptor { name: "multiline", domain: Domain::Bool },
    Descriptor { name: "multiselectable", domain: Domain::Bool },
    Descriptor { name: "orientation", domain: Domain::Token(&["horizontal", "vertical", "undefined"]) },
    Descriptor { name: "owns", domain: Domain::IdRefList },
    Descriptor { name: "placeholder", domain: Domain::String },
    Descriptor { name: "posinset", domain: Domain::Number },
    Descriptor { name: "pressed", domain: Domain::BoolOrToken(&["mixed", "undefined"]) },
    Descriptor { name: "readonly", domain: Domain::Bool },
    Descriptor { name: "required", domain: Domain::Bool },
    Descriptor { name: "rowcount", domain: Domain::Number },
    Descriptor { name: "rowindex", domain: Domain::Number },
    Descriptor { name: "selected", domain: Domain::BoolOrToken(&["undefined"]) },
    Descriptor { name: "setsize", domain: Domain::Number },
    Descriptor { name: "sort", domain: Domain::Token(&["ascending", "descending", "none", "other"]) },
    Descriptor { name: "valuemax", domain: Domain::Number },
    Descriptor { name: "valuemin", domain: Domain::Number },
    Descriptor { name: "valuenow", domain: Domain::Number },
    Descriptor { name: "valuetext", domain: Domain::String },
];

/// Look up the descriptor for `name`, matched case-insensitively.
pub fn describe(name: &str) -> Option<&'static Descriptor> {
    let name = name.to_ascii_lowercase();
    ATTRIBUTES
        .binary_search_by(|d| d.name.cmp(name.as_str()))
        .ok()
        .map(|index| &ATTRIBUTES[index])
}

/// Iterate every recognized attribute in name order.
pub fn all() -> impl Iterator<Item = &'static Descriptor> {
    ATTRIBUTES.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in ATTRIBUTES.windows(2) {
            assert!(
                pair[0].name < pair[1].name,
                "table out of order at `{}` / `{}`",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn test_table_names_are_lowercase() {
        for descriptor in all() {
            assert_eq!(
                descriptor.name,
                descriptor.name.to_ascii_lowercase(),
                "`{}` must be stored lowercase",
                descriptor.name
            );
        }
    }

    #[test]
    fn test_every_name_resolves_to_its_own_descriptor() {
        for descriptor in all() {
            let found = describe(descriptor.name).expect("name missing from lookup");
            assert_eq!(found.name, descriptor.name);
            assert_eq!(found.domain, descriptor.domain);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(describe("CHECKED").unwrap().name, "checked");
        assert_eq!(describe("Sort").unwrap().name, "sort");
        assert_eq!(describe("aCtIvEdEsCeNdAnT").unwrap().name, "activedescendant");
    }

    #[test]
    fn test_unknown_names_are_not_found() {
        assert!(describe("frobnicate").is_none());
        assert!(describe("").is_none());
        assert!(describe("aria-checked").is_none());
        assert!(describe(" checked").is_none());
    }

    #[test]
    fn test_token_domains_have_tokens() {
        for descriptor in all() {
            match descriptor.domain {
                Domain::BoolOrToken(tokens) | Domain::Token(tokens) => {
                    assert!(!tokens.is_empty(), "`{}` has an empty token set", descriptor.name);
                }
                _ => assert!(descriptor.domain.tokens().is_empty()),
            }
        }
    }

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(all().count(), 38);
    }
}

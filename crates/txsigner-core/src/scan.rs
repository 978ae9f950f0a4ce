//! Finding type URLs the codec cannot resolve.

use std::collections::{BTreeSet, HashSet};

use serde_json::Value;

use crate::codec::TypeResolver;
use crate::config::TYPE_URL_KEY;

/// Distinct type URLs the active codec failed to resolve.
pub type UnresolvedSet = BTreeSet<String>;

/// Collect every `@type` value under `messages` that `resolver` rejects.
///
/// Any resolution error counts as unresolved, not only "not registered":
/// loading an extension for a mis-encoded type is preferable to dropping it.
///
/// The walk is recursive, so trees built in code should stay within the
/// nesting depth `serde_json` accepts when parsing.
pub fn find_unregistered_types<R>(resolver: &R, messages: &[Value]) -> UnresolvedSet
where
    R: TypeResolver + ?Sized,
{
    let mut scanner = Scanner::new(resolver);
    for message in messages {
        scanner.visit(message);
    }
    scanner.unresolved
}

/// Same as [`find_unregistered_types`] for a single document tree.
pub fn find_unregistered_in<R>(resolver: &R, document: &Value) -> UnresolvedSet
where
    R: TypeResolver + ?Sized,
{
    find_unregistered_types(resolver, std::slice::from_ref(document))
}

struct Scanner<'a, 'v, R: ?Sized> {
    resolver: &'a R,
    checked: HashSet<&'v str>,
    unresolved: UnresolvedSet,
}

impl<'a, 'v, R> Scanner<'a, 'v, R>
where
    R: TypeResolver + ?Sized,
{
    fn new(resolver: &'a R) -> Self {
        Self {
            resolver,
            checked: HashSet::new(),
            unresolved: UnresolvedSet::new(),
        }
    }

    // Recurses once per nesting level; parsed documents are capped at 128.
    fn visit(&mut self, value: &'v Value) {
        match value {
            Value::Object(map) => {
                if let Some(Value::String(type_url)) = map.get(TYPE_URL_KEY) {
                    self.check(type_url);
                }
                for child in map.values() {
                    self.visit(child);
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.visit(item);
                }
            }
            _ => {}
        }
    }

    fn check(&mut self, type_url: &'v str) {
        if !self.checked.insert(type_url) {
            return;
        }
        match self.resolver.resolve(type_url) {
            Ok(()) => tracing::trace!(type_url, "Type resolved"),
            Err(e) => {
                tracing::debug!(type_url, error = %e, "Unregistered type");
                self.unresolved.insert(type_url.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;
    use serde_json::json;
    use std::cell::RefCell;

    /// Resolves only MsgSend and counts calls.
    #[derive(Default)]
    struct MockResolver {
        calls: RefCell<Vec<String>>,
    }

    impl TypeResolver for MockResolver {
        fn resolve(&self, type_url: &str) -> Result<(), CodecError> {
            self.calls.borrow_mut().push(type_url.to_string());
            if type_url == "/cosmos.bank.v1beta1.MsgSend" {
                Ok(())
            } else {
                Err(CodecError::NotRegistered(type_url.to_string()))
            }
        }
    }

    fn set(items: &[&str]) -> UnresolvedSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_type_urls() {
        let resolver = MockResolver::default();
        let messages = vec![json!({"amount": [{"denom": "stake", "amount": "10"}]}), json!(null)];
        assert!(find_unregistered_types(&resolver, &messages).is_empty());
        assert!(resolver.calls.borrow().is_empty());
    }

    #[test]
    fn test_registered_type_is_excluded() {
        let resolver = MockResolver::default();
        let messages = vec![json!({"@type": "/cosmos.bank.v1beta1.MsgSend"})];
        assert!(find_unregistered_types(&resolver, &messages).is_empty());
    }

    #[test]
    fn test_one_unregistered_type() {
        let resolver = MockResolver::default();
        let messages = vec![json!({"@type": "/cosmos.bank.v1beta1.MsgBurn"})];
        assert_eq!(
            find_unregistered_types(&resolver, &messages),
            set(&["/cosmos.bank.v1beta1.MsgBurn"])
        );
    }

    #[test]
    fn test_nested_messages() {
        let resolver = MockResolver::default();
        let messages = vec![json!({
            "msg": [
                {"@type": "/cosmos.bank.v1beta1.MsgBurn"},
                {"@type": "/cosmos.bank.v1beta1.MsgSend"},
            ]
        })];
        assert_eq!(
            find_unregistered_types(&resolver, &messages),
            set(&["/cosmos.bank.v1beta1.MsgBurn"])
        );
    }

    #[test]
    fn test_deep_nesting_and_duplicates() {
        let resolver = MockResolver::default();
        let document = json!({
            "@type": "/cosmos.authz.v1beta1.MsgExec",
            "msgs": [
                {
                    "@type": "/cosmos.gov.v1.MsgSubmitProposal",
                    "messages": [
                        {"@type": "/cosmos.bank.v1beta1.MsgBurn"},
                        {"inner": {"any": [{"@type": "/cosmos.bank.v1beta1.MsgBurn"}]}},
                    ],
                },
                {"@type": "/cosmos.authz.v1beta1.MsgExec"},
            ]
        });
        assert_eq!(
            find_unregistered_in(&resolver, &document),
            set(&[
                "/cosmos.authz.v1beta1.MsgExec",
                "/cosmos.bank.v1beta1.MsgBurn",
                "/cosmos.gov.v1.MsgSubmitProposal",
            ])
        );
        // Each distinct URL is resolved once.
        assert_eq!(resolver.calls.borrow().len(), 3);
    }

    #[test]
    fn test_malformed_type_url_counts_as_unresolved() {
        let resolver = crate::codec::Codec::with_builtin_types();
        let messages = vec![json!({"@type": "cosmos.bank.v1beta1.MsgSend"})];
        assert_eq!(
            find_unregistered_types(&resolver, &messages),
            set(&["cosmos.bank.v1beta1.MsgSend"])
        );
    }

    #[test]
    fn test_non_string_type_is_ignored() {
        let resolver = MockResolver::default();
        let messages = vec![json!({"@type": 42, "value": {"@type": null}})];
        assert!(find_unregistered_types(&resolver, &messages).is_empty());
    }
}

//! Route methods and the verb partition of the generated contract.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The method published on a route descriptor.
///
/// A route must declare a method; descriptors without one fail
/// deserialization. The `all` wildcard makes a route contribute to
/// every verb's contract.
///
/// ## Examples
///
/// Parse from the lowercase wire form:
///
/// ```
/// use std::str::FromStr;
/// use contract_define::Method;
///
/// assert_eq!(Method::from_str("get").unwrap(), Method::Get);
/// assert_eq!(Method::All.to_string(), "all");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Method {
    /// Wildcard - contributes to every verb's contract
    All,
    /// HTTP GET
    Get,
    /// HTTP PUT
    Put,
    /// HTTP POST
    Post,
    /// HTTP DELETE
    Delete,
}

/// The four concrete verbs the route contract is partitioned into.
///
/// Variant order is the order verb sections are emitted in the
/// generated artifact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP GET
    Get,
    /// HTTP DELETE
    Delete,
}

impl Method {
    /// Whether a route with this method belongs in `verb`'s subset.
    ///
    /// `Method::All` matches every verb; the concrete methods match
    /// only their own verb.
    ///
    /// ## Examples
    ///
    /// ```
    /// use contract_define::{Method, Verb};
    ///
    /// assert!(Method::All.matches(Verb::Put));
    /// assert!(Method::Get.matches(Verb::Get));
    /// assert!(!Method::Get.matches(Verb::Post));
    /// ```
    pub fn matches(&self, verb: Verb) -> bool {
        matches!(
            (self, verb),
            (Method::All, _)
                | (Method::Get, Verb::Get)
                | (Method::Put, Verb::Put)
                | (Method::Post, Verb::Post)
                | (Method::Delete, Verb::Delete)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn method_display_lowercase() {
        assert_eq!(Method::All.to_string(), "all");
        assert_eq!(Method::Get.to_string(), "get");
        assert_eq!(Method::Put.to_string(), "put");
        assert_eq!(Method::Post.to_string(), "post");
        assert_eq!(Method::Delete.to_string(), "delete");
    }

    #[test]
    fn method_from_str_lowercase() {
        assert_eq!(Method::from_str("all").unwrap(), Method::All);
        assert_eq!(Method::from_str("delete").unwrap(), Method::Delete);
        assert!(Method::from_str("GET").is_err()); // Case-sensitive
        assert!(Method::from_str("patch").is_err());
    }

    #[test]
    fn method_serde_roundtrip() {
        let serialized = serde_json::to_string(&Method::Post).unwrap();
        assert_eq!(serialized, "\"post\"");

        let deserialized: Method = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, Method::Post);
    }

    #[test]
    fn verb_iter_in_emission_order() {
        let verbs: Vec<_> = Verb::iter().collect();
        assert_eq!(verbs, vec![Verb::Post, Verb::Put, Verb::Get, Verb::Delete]);
    }

    #[test]
    fn wildcard_matches_every_verb() {
        for verb in Verb::iter() {
            assert!(Method::All.matches(verb));
        }
    }

    #[test]
    fn concrete_method_matches_only_its_verb() {
        assert!(Method::Put.matches(Verb::Put));
        for verb in Verb::iter().filter(|v| *v != Verb::Put) {
            assert!(!Method::Put.matches(verb));
        }
    }
}

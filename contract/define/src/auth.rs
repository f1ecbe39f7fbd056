//! Authority requirement shapes carried by channel descriptors.
//!
//! These records describe which authorities a caller needs before the
//! server accepts a channel emit. The generator carries them through
//! untouched: they are metadata for humans and tooling, never
//! consulted by contract synthesis.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single authority value: servers publish either names or numeric ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorityValue {
    /// Named authority (e.g. `"admin"`)
    Name(String),
    /// Numeric authority id
    Id(i64),
}

/// Dynamically resolved authorities, looked up per request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DynamicAuthorities {
    /// Acceptable values for the dynamic key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<AuthorityValue>>,
    /// Name of the server-side callback that resolves the lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_lookup_cb: Option<String>,
    /// Request field the dynamic authority is keyed on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_authority_key: Option<String>,
}

/// One named authority, optionally refined by dynamic lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authority {
    /// The authority's key name.
    pub key_name: String,
    /// Dynamic refinements, keyed by lookup name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_authorities: Option<HashMap<String, DynamicAuthorities>>,
}

/// Servers publish authority lists either as structured records or as
/// bare key names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorityList {
    /// Structured authority records
    Structured(Vec<Authority>),
    /// Bare authority key names
    Names(Vec<String>),
}

/// A boolean combination of authorities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthorizationOption {
    /// Any one of these authorities suffices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub or: Option<AuthorityList>,
    /// All of these authorities are required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and: Option<AuthorityList>,
}

/// Allow/reject authority rules attached to a channel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthorityRequirements {
    /// Authorities that grant access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<AuthorizationOption>,
    /// Authorities that deny access outright.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject: Option<AuthorizationOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_list_accepts_bare_names() {
        let json = r#"{"allow": {"or": ["admin", "owner"]}}"#;
        let parsed: AuthorityRequirements = serde_json::from_str(json).unwrap();
        match parsed.allow.unwrap().or.unwrap() {
            AuthorityList::Names(names) => assert_eq!(names, vec!["admin", "owner"]),
            other => panic!("expected bare names, got {other:?}"),
        }
    }

    #[test]
    fn authority_list_accepts_structured_records() {
        let json = r#"{"and": [{"key_name": "billing", "dynamic_authorities": {"team": {"values": ["lead", 3]}}}]}"#;
        let parsed: AuthorizationOption = serde_json::from_str(json).unwrap();
        match parsed.and.unwrap() {
            AuthorityList::Structured(auths) => {
                assert_eq!(auths[0].key_name, "billing");
                let dynamic = auths[0].dynamic_authorities.as_ref().unwrap();
                let team = &dynamic["team"];
                assert_eq!(
                    team.values.as_deref(),
                    Some(
                        &[
                            AuthorityValue::Name("lead".to_string()),
                            AuthorityValue::Id(3)
                        ][..]
                    )
                );
            }
            other => panic!("expected structured records, got {other:?}"),
        }
    }
}

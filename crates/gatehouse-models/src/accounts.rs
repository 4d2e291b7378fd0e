//! Admin accounts as seen by the access evaluator.
//!
//! Accounts are loaded and persisted by an external repository. This module
//! only describes the snapshot handed to the evaluator.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::AdminId;
use crate::roles::Role;

/// Wire value of the unrestricted country scope.
pub const GLOBAL_SCOPE: &str = "GLOBAL";

closed_enum! {
    /// Lifecycle status of an admin account. Only `Active` accounts are ever
    /// granted anything.
    AdminStatus("status") {
        Active => "ACTIVE",
        Suspended => "SUSPENDED",
        Disabled => "DISABLED",
    }
}

/// A concrete country code held by [`CountryScope::Country`].
///
/// Only built through [`CountryScope`]'s constructors, which send the
/// `"GLOBAL"` sentinel to [`CountryScope::Global`]. A `CountryCode` therefore
/// never equals the sentinel and a scope keeps its meaning across serde.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A country an admin may operate within, or every country.
///
/// Serialized as a plain string: `"GLOBAL"` or the country code as given.
/// Codes are compared verbatim, so `"de"` and `"DE"` are different scopes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CountryScope {
    Global,
    Country(CountryCode),
}

impl CountryScope {
    /// Scope for `code`. The sentinel `"GLOBAL"` yields [`CountryScope::Global`],
    /// the same value it deserializes to.
    pub fn country(code: impl Into<String>) -> Self {
        Self::from(code.into())
    }

    /// `Global` covers every code; a concrete scope covers only itself.
    pub fn covers(&self, country_code: &str) -> bool {
        match self {
            Self::Global => true,
            Self::Country(code) => code.as_str() == country_code,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Global => GLOBAL_SCOPE,
            Self::Country(code) => code.as_str(),
        }
    }
}

impl From<String> for CountryScope {
    fn from(value: String) -> Self {
        if value == GLOBAL_SCOPE {
            Self::Global
        } else {
            Self::Country(CountryCode(value))
        }
    }
}

impl From<&str> for CountryScope {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CountryScope> for String {
    fn from(scope: CountryScope) -> Self {
        match scope {
            CountryScope::Global => GLOBAL_SCOPE.to_string(),
            CountryScope::Country(code) => code.0,
        }
    }
}

impl std::fmt::Display for CountryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of an admin account, passed to the evaluator by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub id: AdminId,
    pub role: Role,
    pub status: AdminStatus,
    #[serde(default)]
    pub country_scopes: BTreeSet<CountryScope>,
}

impl AdminAccount {
    /// Build an account snapshot with a fresh id.
    pub fn new(
        role: Role,
        status: AdminStatus,
        country_scopes: impl IntoIterator<Item = CountryScope>,
    ) -> Self {
        Self {
            id: AdminId::new(),
            role,
            status,
            country_scopes: country_scopes.into_iter().collect(),
        }
    }

    pub fn with_id(mut self, id: AdminId) -> Self {
        self.id = id;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == AdminStatus::Active
    }

    pub fn is_global(&self) -> bool {
        self.country_scopes.contains(&CountryScope::Global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_scope_parses_to_sentinel() {
        assert_eq!(CountryScope::from("GLOBAL"), CountryScope::Global);
        assert_eq!(CountryScope::from("DE"), CountryScope::country("DE"));
        // Only the exact sentinel is special.
        assert_eq!(CountryScope::from("global"), CountryScope::country("global"));
    }

    #[test]
    fn test_scope_covers() {
        assert!(CountryScope::Global.covers("FR"));
        assert!(CountryScope::Global.covers("GLOBAL"));
        assert!(CountryScope::country("DE").covers("DE"));
        assert!(!CountryScope::country("DE").covers("de"));
        assert!(!CountryScope::country("DE").covers("DEU"));
        assert!(!CountryScope::country("DE").covers("GLOBAL"));
    }

    #[test]
    fn test_sentinel_code_is_global_before_and_after_serde() {
        let scope = CountryScope::country("GLOBAL");
        assert_eq!(scope, CountryScope::Global);

        let account = AdminAccount::new(Role::CountryAdmin, AdminStatus::Active, [scope]);
        let json = serde_json::to_string(&account).unwrap();
        let restored: AdminAccount = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, account);
        assert_eq!(account.is_global(), restored.is_global());
    }

    #[test]
    fn test_concrete_scopes_survive_serde() {
        for code in ["DE", "de", "global", "GLOBALX", " GLOBAL", ""] {
            let scope = CountryScope::country(code);
            assert!(matches!(scope, CountryScope::Country(_)), "{code:?}");

            let json = serde_json::to_string(&scope).unwrap();
            let restored: CountryScope = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, scope);
            assert!(!restored.covers("FR"));
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("ACTIVE".parse::<AdminStatus>(), Ok(AdminStatus::Active));
        assert!("BANNED".parse::<AdminStatus>().is_err());
    }

    #[test]
    fn test_account_deserialize() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-00000000000a",
            "role": "COUNTRY_ADMIN",
            "status": "ACTIVE",
            "countryScopes": ["DE", "GLOBAL"]
        }"#;
        let account: AdminAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, AdminId::from_u128(10));
        assert_eq!(account.role, Role::CountryAdmin);
        assert!(account.is_active());
        assert!(account.is_global());
        assert!(account.country_scopes.contains(&CountryScope::country("DE")));
    }

    #[test]
    fn test_account_serialize_scopes_as_strings() {
        let account = AdminAccount::new(
            Role::Moderator,
            AdminStatus::Suspended,
            [CountryScope::country("FR")],
        )
        .with_id(AdminId::from_u128(1));
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["status"], "SUSPENDED");
        assert_eq!(value["countryScopes"], serde_json::json!(["FR"]));
    }

    #[test]
    fn test_missing_scopes_default_to_empty() {
        let json = r#"{"id":"00000000-0000-0000-0000-000000000001","role":"FINANCE","status":"DISABLED"}"#;
        let account: AdminAccount = serde_json::from_str(json).unwrap();
        assert!(account.country_scopes.is_empty());
        assert!(!account.is_active());
    }
}

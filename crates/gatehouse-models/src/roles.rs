//! Roles, resources and actions.
//!
//! All three are closed sets. Adding a member is a code change, and any new
//! resource stays inaccessible until the grant table names it.

closed_enum! {
    /// Classification of an admin account. Reassigning a role is an
    /// administrative action outside this crate.
    Role("role") {
        SuperAdmin => "SUPER_ADMIN",
        CountryAdmin => "COUNTRY_ADMIN",
        Finance => "FINANCE",
        Moderator => "MODERATOR",
        OpsSupport => "OPS_SUPPORT",
        AnalystReadonly => "ANALYST_READONLY",
    }
}

closed_enum! {
    /// Protected category of data or functionality in the admin dashboard.
    Resource("resource") {
        Countries => "COUNTRIES",
        Businesses => "BUSINESSES",
        Users => "USERS",
        Creators => "CREATORS",
        Missions => "MISSIONS",
        Events => "EVENTS",
        Rewards => "REWARDS",
        Finance => "FINANCE",
        Moderation => "MODERATION",
        Analytics => "ANALYTICS",
        Admins => "ADMINS",
        AuditLogs => "AUDIT_LOGS",
        System => "SYSTEM",
    }
}

closed_enum! {
    /// Operation kind attempted on a [`Resource`].
    Action("action") {
        Create => "CREATE",
        Read => "READ",
        Update => "UPDATE",
        Delete => "DELETE",
        Approve => "APPROVE",
        Reject => "REJECT",
        Suspend => "SUSPEND",
        Export => "EXPORT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AccessError;

    #[test]
    fn test_parse_role_from_string() {
        assert_eq!("SUPER_ADMIN".parse::<Role>(), Ok(Role::SuperAdmin));
        assert_eq!("ANALYST_READONLY".parse::<Role>(), Ok(Role::AnalystReadonly));
        assert!(matches!(
            "super_admin".parse::<Role>(),
            Err(AccessError::InvalidEnumValue { kind: "role", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_resource_and_action() {
        assert_eq!(
            "PAYOUTS".parse::<Resource>(),
            Err(AccessError::invalid_enum_value("resource", "PAYOUTS"))
        );
        assert_eq!(
            "ARCHIVE".parse::<Action>(),
            Err(AccessError::invalid_enum_value("action", "ARCHIVE"))
        );
    }

    #[test]
    fn test_display_matches_wire_name() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(*role));
        }
        assert_eq!(Resource::AuditLogs.to_string(), "AUDIT_LOGS");
        assert_eq!(Action::Export.as_str(), "EXPORT");
    }

    #[test]
    fn test_all_sizes() {
        assert_eq!(Role::ALL.len(), 6);
        assert_eq!(Resource::ALL.len(), 13);
        assert_eq!(Action::ALL.len(), 8);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Role::OpsSupport).unwrap(), "\"OPS_SUPPORT\"");
        let resource: Resource = serde_json::from_str("\"MODERATION\"").unwrap();
        assert_eq!(resource, Resource::Moderation);
        assert!(serde_json::from_str::<Action>("\"read\"").is_err());
    }
}

//! The role x resource x action grant table.
//!
//! The table ships with the evaluator and is versioned with it. Changing who
//! can do what means editing [`GrantTable::builtin`] and redeploying; there is
//! no runtime write path.

use std::collections::{BTreeMap, BTreeSet};

use gatehouse_models::{Action, Resource, Role};

/// Bumped whenever [`GrantTable::builtin`] changes.
pub const GRANT_TABLE_VERSION: u32 = 1;

pub type ResourceGrants = BTreeMap<Resource, BTreeSet<Action>>;

/// Immutable mapping from role to its per-resource action sets.
///
/// Total over [`Role`]: every role has an entry, possibly empty. Partial over
/// [`Resource`]: a missing resource means no action is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantTable {
    grants: BTreeMap<Role, ResourceGrants>,
}

impl GrantTable {
    pub fn builder() -> GrantTableBuilder {
        GrantTableBuilder::default()
    }

    /// A table where every role exists and nothing is granted.
    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// The production grant table.
    pub fn builtin() -> Self {
        use Action::*;

        Self::builder()
            // Super admins run the platform but never suspend a country or
            // create analytics/audit records by hand.
            .grant(Role::SuperAdmin, Resource::Countries, &[Create, Read, Update, Delete])
            .grant(
                Role::SuperAdmin,
                Resource::Businesses,
                &[Create, Read, Update, Delete, Approve, Reject, Suspend],
            )
            .grant(Role::SuperAdmin, Resource::Users, &[Read, Update, Delete, Suspend, Export])
            .grant(
                Role::SuperAdmin,
                Resource::Creators,
                &[Read, Update, Delete, Approve, Reject, Suspend],
            )
            .grant(
                Role::SuperAdmin,
                Resource::Missions,
                &[Create, Read, Update, Delete, Approve, Reject],
            )
            .grant(
                Role::SuperAdmin,
                Resource::Events,
                &[Create, Read, Update, Delete, Approve, Reject],
            )
            .grant(Role::SuperAdmin, Resource::Rewards, &[Create, Read, Update, Delete])
            .grant(Role::SuperAdmin, Resource::Finance, &[Read, Update, Approve, Export])
            .grant(Role::SuperAdmin, Resource::Moderation, &[Read, Approve, Reject])
            .grant(Role::SuperAdmin, Resource::Analytics, &[Read, Export])
            .grant(
                Role::SuperAdmin,
                Resource::Admins,
                &[Create, Read, Update, Delete, Suspend],
            )
            .grant(Role::SuperAdmin, Resource::AuditLogs, &[Read, Export])
            .grant(Role::SuperAdmin, Resource::System, &[Read, Update])
            // Country admins manage day-to-day content within their scopes.
            .grant(Role::CountryAdmin, Resource::Countries, &[Read])
            .grant(
                Role::CountryAdmin,
                Resource::Businesses,
                &[Read, Update, Approve, Reject, Suspend],
            )
            .grant(Role::CountryAdmin, Resource::Users, &[Read, Update, Suspend])
            .grant(
                Role::CountryAdmin,
                Resource::Creators,
                &[Read, Update, Approve, Reject, Suspend],
            )
            .grant(
                Role::CountryAdmin,
                Resource::Missions,
                &[Create, Read, Update, Delete, Approve, Reject],
            )
            .grant(
                Role::CountryAdmin,
                Resource::Events,
                &[Create, Read, Update, Delete, Approve, Reject],
            )
            .grant(Role::CountryAdmin, Resource::Rewards, &[Create, Read, Update])
            .grant(Role::CountryAdmin, Resource::Moderation, &[Read, Approve, Reject])
            .grant(Role::CountryAdmin, Resource::Analytics, &[Read])
            // Finance
            .grant(Role::Finance, Resource::Finance, &[Read, Update, Approve, Export])
            .grant(Role::Finance, Resource::Businesses, &[Read])
            .grant(Role::Finance, Resource::Rewards, &[Read])
            .grant(Role::Finance, Resource::Analytics, &[Read, Export])
            .grant(Role::Finance, Resource::AuditLogs, &[Read])
            // Moderators
            .grant(Role::Moderator, Resource::Moderation, &[Read, Approve, Reject])
            .grant(Role::Moderator, Resource::Users, &[Read, Suspend])
            .grant(Role::Moderator, Resource::Creators, &[Read, Suspend])
            .grant(Role::Moderator, Resource::Businesses, &[Read])
            .grant(Role::Moderator, Resource::Missions, &[Read])
            .grant(Role::Moderator, Resource::Events, &[Read])
            // Ops support
            .grant(Role::OpsSupport, Resource::Users, &[Read, Update])
            .grant(Role::OpsSupport, Resource::Businesses, &[Read, Update])
            .grant(Role::OpsSupport, Resource::Creators, &[Read, Update])
            .grant(Role::OpsSupport, Resource::Missions, &[Read])
            .grant(Role::OpsSupport, Resource::Events, &[Read])
            .grant(Role::OpsSupport, Resource::Rewards, &[Read])
            // Read-only analysts
            .grant(Role::AnalystReadonly, Resource::Analytics, &[Read, Export])
            .grant(Role::AnalystReadonly, Resource::Countries, &[Read])
            .grant(Role::AnalystReadonly, Resource::Businesses, &[Read])
            .grant(Role::AnalystReadonly, Resource::Users, &[Read])
            .grant(Role::AnalystReadonly, Resource::Creators, &[Read])
            .grant(Role::AnalystReadonly, Resource::Missions, &[Read])
            .grant(Role::AnalystReadonly, Resource::Events, &[Read])
            .grant(Role::AnalystReadonly, Resource::Rewards, &[Read])
            .build()
    }

    /// The per-resource grants of `role`, if the role has an entry.
    pub fn role_grants(&self, role: Role) -> Option<&ResourceGrants> {
        self.grants.get(&role)
    }

    /// The actions `role` may take on `resource`, if any entry exists.
    pub fn actions(&self, role: Role, resource: Resource) -> Option<&BTreeSet<Action>> {
        self.grants.get(&role)?.get(&resource)
    }

    pub fn allows(&self, role: Role, resource: Resource, action: Action) -> bool {
        self.actions(role, resource)
            .is_some_and(|actions| actions.contains(&action))
    }

    /// Roles with their grants, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &ResourceGrants)> {
        self.grants.iter().map(|(role, grants)| (*role, grants))
    }
}

impl Default for GrantTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Collects grants and freezes them into a [`GrantTable`].
#[derive(Debug, Default)]
pub struct GrantTableBuilder {
    grants: BTreeMap<Role, ResourceGrants>,
}

impl GrantTableBuilder {
    /// Add `actions` on `resource` for `role`. Repeated calls accumulate.
    pub fn grant(mut self, role: Role, resource: Resource, actions: &[Action]) -> Self {
        self.grants
            .entry(role)
            .or_default()
            .entry(resource)
            .or_default()
            .extend(actions.iter().copied());
        self
    }

    /// Freeze the table. Every role gets an entry and resources granted an
    /// empty action list are dropped.
    pub fn build(mut self) -> GrantTable {
        for role in Role::ALL {
            self.grants.entry(*role).or_default();
        }
        for resources in self.grants.values_mut() {
            resources.retain(|_, actions| !actions.is_empty());
        }
        GrantTable {
            grants: self.grants,
        }
    }
}

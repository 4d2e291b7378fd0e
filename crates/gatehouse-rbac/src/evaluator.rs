//! Access decisions for admin accounts.

use std::collections::BTreeSet;
use std::sync::Arc;

use gatehouse_models::{AccessError, Action, AdminAccount, Resource};
use tracing::{debug, info};

use crate::grants::GrantTable;
use crate::summary::AccessSummary;

/// Decides what an admin account may do.
///
/// Holds a shared, read-only [`GrantTable`]; cloning the evaluator is cheap
/// and every method is a pure lookup, so one instance can serve any number of
/// concurrent request handlers.
#[derive(Debug, Clone)]
pub struct AccessEvaluator {
    grants: Arc<GrantTable>,
    audit_decisions: bool,
}

impl AccessEvaluator {
    pub fn new(grants: Arc<GrantTable>) -> Self {
        Self {
            grants,
            audit_decisions: true,
        }
    }

    /// Evaluator over [`GrantTable::builtin`].
    pub fn builtin() -> Self {
        Self::new(Arc::new(GrantTable::builtin()))
    }

    /// When enabled (the default), denials are logged at `info`; otherwise
    /// every decision is logged at `debug`.
    pub fn with_decision_audit(mut self, enabled: bool) -> Self {
        self.audit_decisions = enabled;
        self
    }

    pub fn grants(&self) -> &GrantTable {
        &self.grants
    }

    /// Whether `actor` may perform `action` on `resource`.
    ///
    /// Inactive accounts are always denied. A role or resource with no grant
    /// entry is a deny, not an error.
    pub fn can_access(&self, actor: &AdminAccount, resource: Resource, action: Action) -> bool {
        let allowed = actor.is_active() && self.grants.allows(actor.role, resource, action);
        self.record_decision(actor, resource, action, allowed);
        allowed
    }

    /// [`can_access`](Self::can_access) for untyped input such as route
    /// parameters. Names outside the closed sets fail with
    /// [`AccessError::InvalidEnumValue`] instead of reading as a deny.
    pub fn can_access_named(
        &self,
        actor: &AdminAccount,
        resource: &str,
        action: &str,
    ) -> Result<bool, AccessError> {
        let resource: Resource = resource.parse()?;
        let action: Action = action.parse()?;
        Ok(self.can_access(actor, resource, action))
    }

    /// Whether `country_code` is inside the actor's country scopes.
    ///
    /// Scope only: account status is not consulted here. Codes are matched
    /// exactly, with `GLOBAL` covering everything.
    pub fn has_country_access(&self, actor: &AdminAccount, country_code: &str) -> bool {
        actor
            .country_scopes
            .iter()
            .any(|scope| scope.covers(country_code))
    }

    /// Every resource the actor can take at least one action on.
    pub fn get_accessible_resources(&self, actor: &AdminAccount) -> BTreeSet<Resource> {
        if !actor.is_active() {
            return BTreeSet::new();
        }

        self.grants
            .role_grants(actor.role)
            .map(|grants| {
                grants
                    .iter()
                    .filter(|(_, actions)| !actions.is_empty())
                    .map(|(resource, _)| *resource)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The actions the actor may take on `resource`, as an owned set.
    pub fn get_resource_actions(
        &self,
        actor: &AdminAccount,
        resource: Resource,
    ) -> BTreeSet<Action> {
        if !actor.is_active() {
            return BTreeSet::new();
        }

        self.grants
            .actions(actor.role, resource)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of everything the actor can do, for admin UIs.
    pub fn summarize(&self, actor: &AdminAccount) -> AccessSummary {
        let resources = self
            .get_accessible_resources(actor)
            .into_iter()
            .map(|resource| (resource, self.get_resource_actions(actor, resource)))
            .collect();

        AccessSummary::new(actor, resources)
    }

    fn record_decision(
        &self,
        actor: &AdminAccount,
        resource: Resource,
        action: Action,
        allowed: bool,
    ) {
        if !allowed && self.audit_decisions {
            info!(
                target: "gatehouse::decision",
                actor_id = %actor.id,
                role = %actor.role,
                status = %actor.status,
                resource = %resource,
                action = %action,
                allowed,
                "Access denied"
            );
        } else {
            debug!(
                target: "gatehouse::decision",
                actor_id = %actor.id,
                role = %actor.role,
                status = %actor.status,
                resource = %resource,
                action = %action,
                allowed,
                "Access decision"
            );
        }
    }
}

impl Default for AccessEvaluator {
    fn default() -> Self {
        Self::builtin()
    }
}

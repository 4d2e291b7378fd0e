use std::collections::{BTreeMap, BTreeSet};

use gatehouse_models::{Action, AdminAccount, AdminId, AdminStatus, CountryScope, Resource, Role};
use serde::{Deserialize, Serialize};

use crate::grants::GRANT_TABLE_VERSION;

/// Everything one admin account can currently do.
///
/// Admin UIs use this to hide navigation and buttons up front. It is a
/// convenience view only; every mutating request is still gated server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessSummary {
    pub admin_id: AdminId,
    pub role: Role,
    pub status: AdminStatus,
    pub grant_table_version: u32,
    pub country_scopes: BTreeSet<CountryScope>,
    pub resources: BTreeMap<Resource, BTreeSet<Action>>,
}

impl AccessSummary {
    pub(crate) fn new(
        actor: &AdminAccount,
        resources: BTreeMap<Resource, BTreeSet<Action>>,
    ) -> Self {
        Self {
            admin_id: actor.id,
            role: actor.role,
            status: actor.status,
            grant_table_version: GRANT_TABLE_VERSION,
            country_scopes: actor.country_scopes.clone(),
            resources,
        }
    }

    pub fn allows(&self, resource: Resource, action: Action) -> bool {
        self.resources
            .get(&resource)
            .is_some_and(|actions| actions.contains(&action))
    }
}

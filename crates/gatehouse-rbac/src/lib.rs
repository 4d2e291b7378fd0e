//! # Gatehouse RBAC
//!
//! Role-based access decisions for admin accounts.
//!
//! An [`AccessEvaluator`] wraps a static [`GrantTable`] (role -> resource ->
//! allowed actions) and answers two independent questions:
//!
//! - may this account perform an action on a resource? ([`AccessEvaluator::can_access`])
//! - may this account operate in a country? ([`AccessEvaluator::has_country_access`])
//!
//! Only `ACTIVE` accounts are ever granted resource access. Country scope is
//! checked on its own; combine both checks at the call site when needed.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gatehouse_models::{Action, AdminAccount, AdminStatus, CountryScope, Resource, Role};
//! use gatehouse_rbac::{AccessEvaluator, GrantTable};
//!
//! let evaluator = AccessEvaluator::new(Arc::new(GrantTable::builtin()));
//! let admin = AdminAccount::new(Role::CountryAdmin, AdminStatus::Active, [CountryScope::country("DE")]);
//!
//! assert!(evaluator.can_access(&admin, Resource::Missions, Action::Create));
//! assert!(evaluator.has_country_access(&admin, "DE"));
//! ```

pub mod evaluator;
pub mod grants;
pub mod summary;

pub use evaluator::AccessEvaluator;
pub use grants::{GRANT_TABLE_VERSION, GrantTable, GrantTableBuilder, ResourceGrants};
pub use summary::AccessSummary;

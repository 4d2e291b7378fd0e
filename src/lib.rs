//! # Gatehouse
//!
//! Access decisions for the admin dashboard: which admin may do what, on
//! which resource, in which country.
//!
//! ## Overview
//!
//! Every admin account has a role, a status and a set of country scopes.
//! A static grant table maps each role to the actions it may take per
//! resource. The evaluator answers from that table and nothing else: no I/O,
//! no caching, no mutable state.
//!
//! Callers own everything around it. A session layer verifies tokens and
//! loads the `AdminAccount`; handlers gate requests with the helpers in
//! [`middleware`]; audit trail persistence happens downstream.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── gatehouse-core/           # AppError and HTTP conversion
//! ├── gatehouse-config/         # Environment configuration
//! ├── gatehouse-models/         # Role, Resource, Action, AdminAccount, CountryScope
//! ├── gatehouse-rbac/           # GrantTable and AccessEvaluator
//! ├── gatehouse-observability/  # tracing-subscriber setup
//! └── gatehouse-cli/            # Inspect the grant table and try decisions
//! src/
//! └── middleware/               # axum extractors and gates
//! ```
//!
//! ## Roles
//!
//! | Role | Typical use |
//! |------|-------------|
//! | `SUPER_ADMIN` | Platform owners, the only role touching `ADMINS` and `SYSTEM` |
//! | `COUNTRY_ADMIN` | Day-to-day content management within assigned countries |
//! | `FINANCE` | Payouts and financial reporting |
//! | `MODERATOR` | Content moderation queue, user and creator suspension |
//! | `OPS_SUPPORT` | Support edits on users, businesses and creators |
//! | `ANALYST_READONLY` | Read access plus analytics export |
//!
//! ## Decision Rules
//!
//! - An account that is not `ACTIVE` is denied every resource action
//! - A resource missing from a role's grants allows nothing
//! - `GLOBAL` in the country scopes covers every country; otherwise a country
//!   code must match exactly
//! - Country scope is independent of status; [`middleware::permission::require_scoped_access`]
//!   checks both
//!
//! ## Environment Variables
//!
//! ```bash
//! LOG_LEVEL=info
//! LOG_FORMAT=compact   # or json
//! AUDIT_DECISIONS=true
//! ```
//!
//! ## Modules
//!
//! - [`middleware`]: Extractors, route middleware and gate helpers

pub mod middleware;

// Re-export workspace crates for convenience
pub use gatehouse_config;
pub use gatehouse_core;
pub use gatehouse_models;
pub use gatehouse_observability;
pub use gatehouse_rbac;

pub use gatehouse_core::AppError;
pub use gatehouse_rbac::{AccessEvaluator, AccessSummary, GrantTable};

use std::sync::Arc;

use gatehouse_config::GatehouseConfig;

/// Build the evaluator a service should share across handlers.
///
/// The grant table is constructed here, once, and handed to the evaluator.
pub fn init_evaluator(config: &GatehouseConfig) -> AccessEvaluator {
    let grants = Arc::new(GrantTable::builtin());
    tracing::info!(
        version = gatehouse_rbac::GRANT_TABLE_VERSION,
        audit_decisions = config.audit_decisions,
        "Grant table loaded"
    );
    AccessEvaluator::new(grants).with_decision_audit(config.audit_decisions)
}

//! # Gatehouse Models
//!
//! Domain models for admin access control.
//!
//! # Modules
//!
//! - [`accounts`]: Admin accounts, account status and country scopes
//! - [`errors`]: Parsing errors for the closed enumerations
//! - [`ids`]: Strongly-typed identifiers
//! - [`roles`]: Roles, resources and actions
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_models::{AdminAccount, AdminStatus, CountryScope, Role};
//!
//! let admin = AdminAccount::new(Role::CountryAdmin, AdminStatus::Active, [CountryScope::country("DE")]);
//! assert!(admin.is_active());
//! ```

#[macro_use]
mod macros;

pub mod accounts;
pub mod errors;
pub mod ids;
pub mod roles;

pub use accounts::{AdminAccount, AdminStatus, CountryCode, CountryScope, GLOBAL_SCOPE};
pub use errors::AccessError;
pub use ids::AdminId;
pub use roles::{Action, Resource, Role};

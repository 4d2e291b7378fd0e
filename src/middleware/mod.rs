//! Middleware and extractors for gating admin routes.
//!
//! # Modules
//!
//! - [`auth`]: The `CurrentAdmin` extractor and typed permission extractors
//! - [`permission`]: Gate helpers and route middleware built on `AccessEvaluator`
//!
//! # Request Flow
//!
//! 1. An upstream session layer verifies the caller and inserts the loaded
//!    `AdminAccount` into the request extensions
//! 2. `CurrentAdmin` reads it back (401 when absent)
//! 3. A permission extractor or `require_permission` middleware asks the
//!    evaluator and rejects with a uniform 403 on denial
//! 4. The handler runs
//!
//! # Example
//!
//! ```ignore
//! use gatehouse::middleware::auth::{CurrentAdmin, RequireFinanceApprove};
//!
//! async fn approve_payout(
//!     RequireFinanceApprove(admin): RequireFinanceApprove,
//! ) -> impl IntoResponse {
//!     // Only runs for active admins granted FINANCE/APPROVE
//! }
//! ```

pub mod auth;
pub mod permission;

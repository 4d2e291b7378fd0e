//! Authorization gates for admin routes.
//!
//! The evaluator only answers yes or no. The helpers here turn a "no" into
//! the uniform `403 Insufficient permissions` error:
//! 1. Plain checks for handler logic (`require_access`, `require_country_access`, `require_scoped_access`)
//! 2. Route middleware using `require_permission` / `permission_guard`
//! 3. Typed extractors declared with `require_access!` (see [`crate::middleware::auth`])

use std::future::Future;
use std::pin::Pin;

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use gatehouse_core::AppError;
use gatehouse_models::{Action, AdminAccount, Resource};
use gatehouse_rbac::AccessEvaluator;
use tracing::warn;

use crate::middleware::auth::CurrentAdmin;

/// Check resource access inside a handler.
///
/// # Example
///
/// ```rust,ignore
/// use gatehouse::middleware::permission::require_access;
///
/// pub async fn handler(
///     State(evaluator): State<AccessEvaluator>,
///     CurrentAdmin(admin): CurrentAdmin,
/// ) -> Result<Json<Response>, AppError> {
///     require_access(&evaluator, &admin, Resource::Rewards, Action::Update)?;
///     // Handler logic
/// }
/// ```
pub fn require_access(
    evaluator: &AccessEvaluator,
    admin: &AdminAccount,
    resource: Resource,
    action: Action,
) -> Result<(), AppError> {
    if evaluator.can_access(admin, resource, action) {
        return Ok(());
    }

    warn!(
        actor_id = %admin.id,
        role = %admin.role,
        status = %admin.status,
        resource = %resource,
        action = %action,
        "Permission denied"
    );
    Err(AppError::permission_denied())
}

/// Check that `country_code` is inside the admin's scopes.
///
/// Scope only, like [`AccessEvaluator::has_country_access`]: a suspended admin
/// with the right scope passes. Use [`require_scoped_access`] to check both.
pub fn require_country_access(
    evaluator: &AccessEvaluator,
    admin: &AdminAccount,
    country_code: &str,
) -> Result<(), AppError> {
    if evaluator.has_country_access(admin, country_code) {
        return Ok(());
    }

    warn!(
        actor_id = %admin.id,
        role = %admin.role,
        country = %country_code,
        "Country scope denied"
    );
    Err(AppError::permission_denied())
}

/// Resource access and country scope together, for operations on data that
/// belongs to one country.
///
/// Status is covered by the resource check, so an inactive admin is always
/// rejected here.
pub fn require_scoped_access(
    evaluator: &AccessEvaluator,
    admin: &AdminAccount,
    resource: Resource,
    action: Action,
    country_code: &str,
) -> Result<(), AppError> {
    require_access(evaluator, admin, resource, action)?;
    require_country_access(evaluator, admin, country_code)
}

/// Middleware that rejects the request unless the current admin may perform
/// `action` on `resource`.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// use axum::{Router, middleware};
///
/// let finance_routes = Router::new()
///     .route("/payouts", get(list_payouts))
///     .layer(middleware::from_fn_with_state(
///         evaluator.clone(),
///         |state: State<AccessEvaluator>, req: Request, next: Next| {
///             require_permission(state, req, next, Resource::Finance, Action::Read)
///         }
///     ));
/// ```
pub async fn require_permission(
    State(evaluator): State<AccessEvaluator>,
    req: Request,
    next: Next,
    resource: Resource,
    action: Action,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let admin = CurrentAdmin::from_request_parts(&mut parts, &evaluator).await?;
    require_access(&evaluator, admin.account(), resource, action)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

pub type GuardFuture = Pin<Box<dyn Future<Output = Result<Response, AppError>> + Send>>;

/// [`require_permission`] bound to a fixed resource and action, ready for
/// `from_fn_with_state`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/audit-logs", get(list_audit_logs))
///     .layer(middleware::from_fn_with_state(
///         evaluator.clone(),
///         permission_guard(Resource::AuditLogs, Action::Read),
///     ));
/// ```
pub fn permission_guard(
    resource: Resource,
    action: Action,
) -> impl Fn(State<AccessEvaluator>, Request, Next) -> GuardFuture + Clone + Send + Sync + 'static {
    move |state, req, next| -> GuardFuture {
        Box::pin(require_permission(state, req, next, resource, action))
    }
}

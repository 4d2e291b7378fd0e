use axum::{extract::FromRequestParts, http::request::Parts};
use gatehouse_core::AppError;
use gatehouse_models::{Action, AdminAccount, AdminId, Resource, Role};

/// Extractor for the admin account the session layer attached to the request.
///
/// Token verification and loading the account happen upstream; this only
/// reads the resulting `AdminAccount` from the request extensions.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub AdminAccount);

impl CurrentAdmin {
    pub fn id(&self) -> AdminId {
        self.0.id
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn account(&self) -> &AdminAccount {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminAccount>()
            .cloned()
            .map(CurrentAdmin)
            .ok_or_else(|| AppError::unauthorized("Missing admin session"))
    }
}

/// Defines an extractor that only succeeds when the current admin may perform
/// `$action` on `$resource`.
///
/// The router state must provide an `AccessEvaluator` via `FromRef`.
#[macro_export]
macro_rules! require_access {
    ($name:ident, $resource:expr, $action:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::CurrentAdmin);

        impl<S> axum::extract::FromRequestParts<S> for $name
        where
            S: Send + Sync,
            $crate::AccessEvaluator: axum::extract::FromRef<S>,
        {
            type Rejection = $crate::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                use axum::extract::FromRequestParts as _;

                let admin =
                    $crate::middleware::auth::CurrentAdmin::from_request_parts(parts, state)
                        .await?;
                let evaluator =
                    <$crate::AccessEvaluator as axum::extract::FromRef<S>>::from_ref(state);

                $crate::middleware::permission::require_access(
                    &evaluator,
                    admin.account(),
                    $resource,
                    $action,
                )?;

                Ok($name(admin))
            }
        }
    };
}

// Pre-defined extractors for the dashboard's sensitive operations

// Finance
require_access!(RequireFinanceRead, Resource::Finance, Action::Read);
require_access!(RequireFinanceApprove, Resource::Finance, Action::Approve);
require_access!(RequireFinanceExport, Resource::Finance, Action::Export);

// Moderation
require_access!(RequireModerationApprove, Resource::Moderation, Action::Approve);
require_access!(RequireModerationReject, Resource::Moderation, Action::Reject);

// Admin accounts
require_access!(RequireAdminsCreate, Resource::Admins, Action::Create);
require_access!(RequireAdminsSuspend, Resource::Admins, Action::Suspend);

// Audit and system
require_access!(RequireAuditLogsRead, Resource::AuditLogs, Action::Read);
require_access!(RequireSystemUpdate, Resource::System, Action::Update);

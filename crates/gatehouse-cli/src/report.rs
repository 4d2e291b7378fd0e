use std::fmt::Write;

use gatehouse_models::{Action, Role};
use gatehouse_rbac::GrantTable;

/// Process exit code for an allowed decision.
pub const EXIT_ALLOW: i32 = 0;
/// Process exit code for a denied decision.
pub const EXIT_DENY: i32 = 1;
/// Process exit code for bad input, matching clap's usage errors.
pub const EXIT_INVALID: i32 = 2;

pub fn verdict(allowed: bool) -> &'static str {
    if allowed { "ALLOW" } else { "DENY" }
}

pub fn exit_code(allowed: bool) -> i32 {
    if allowed { EXIT_ALLOW } else { EXIT_DENY }
}

/// Render the grant table, one role block per role.
///
/// ```text
/// FINANCE
///   BUSINESSES   READ
///   FINANCE      READ, UPDATE, APPROVE, EXPORT
/// ```
pub fn render_matrix(table: &GrantTable, only: Option<Role>) -> String {
    let mut out = String::new();

    for (role, grants) in table.iter() {
        if only.is_some_and(|wanted| wanted != role) {
            continue;
        }

        let _ = writeln!(out, "{role}");
        if grants.is_empty() {
            let _ = writeln!(out, "  (no grants)");
            continue;
        }

        let width = grants
            .keys()
            .map(|resource| resource.as_str().len())
            .max()
            .unwrap_or(0);
        for (resource, actions) in grants {
            let _ = writeln!(
                out,
                "  {:<width$}  {}",
                resource.as_str(),
                join_actions(actions.iter().copied())
            );
        }
    }

    out
}

pub fn join_actions(actions: impl IntoIterator<Item = Action>) -> String {
    actions
        .into_iter()
        .map(|action| action.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

//! Command-line surface: argument parsing and the handlers behind each
//! subcommand. Handlers return the text to print and the process exit code;
//! `main` does the printing and the prompting.

use clap::{Parser, Subcommand};
use gatehouse_models::{Action, AdminAccount, AdminStatus, CountryScope, Resource, Role};
use gatehouse_rbac::AccessEvaluator;
use tracing::{debug, error};

use crate::report::{self, EXIT_ALLOW, EXIT_INVALID};

#[derive(Parser)]
#[command(name = "gatehouse-cli")]
#[command(about = "Gatehouse CLI - inspect admin grants and try access decisions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decide whether an admin may perform an action on a resource
    Check {
        /// Admin role, e.g. COUNTRY_ADMIN (prompted if omitted)
        #[arg(short = 'r', long)]
        role: Option<Role>,

        /// Account status
        #[arg(short = 's', long, default_value = "ACTIVE")]
        status: AdminStatus,

        /// Resource, e.g. FINANCE
        #[arg(short = 'x', long)]
        resource: Resource,

        /// Action, e.g. APPROVE
        #[arg(short = 'a', long)]
        action: Action,
    },
    /// Decide whether a set of country scopes covers a country
    Country {
        /// Comma-separated scopes, e.g. DE,FR or GLOBAL
        #[arg(long, value_delimiter = ',')]
        scopes: Vec<String>,

        /// Country code to check, matched exactly
        #[arg(short = 'c', long)]
        country: String,
    },
    /// Print the grant table
    Matrix {
        /// Only print this role
        #[arg(short = 'r', long)]
        role: Option<Role>,
    },
    /// Print everything an admin can do, as JSON
    Summary {
        /// Admin role (prompted if omitted)
        #[arg(short = 'r', long)]
        role: Option<Role>,

        /// Account status
        #[arg(short = 's', long, default_value = "ACTIVE")]
        status: AdminStatus,

        /// Comma-separated country scopes
        #[arg(long, value_delimiter = ',', default_value = "GLOBAL")]
        scopes: Vec<String>,
    },
}

/// What a command prints and how the process exits.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub code: i32,
}

pub fn check(
    evaluator: &AccessEvaluator,
    role: Role,
    status: AdminStatus,
    resource: Resource,
    action: Action,
) -> Outcome {
    let admin = AdminAccount::new(role, status, [CountryScope::Global]);
    debug!(%role, %status, %resource, %action, "Checking access");

    let allowed = evaluator.can_access(&admin, resource, action);
    Outcome {
        output: format!(
            "{} {role} ({status}) {action} on {resource}\n",
            report::verdict(allowed)
        ),
        code: report::exit_code(allowed),
    }
}

pub fn country(evaluator: &AccessEvaluator, scopes: Vec<String>, country: &str) -> Outcome {
    let admin = AdminAccount::new(
        Role::CountryAdmin,
        AdminStatus::Active,
        scopes.into_iter().map(CountryScope::from),
    );

    let allowed = evaluator.has_country_access(&admin, country);
    Outcome {
        output: format!("{} {country}\n", report::verdict(allowed)),
        code: report::exit_code(allowed),
    }
}

pub fn matrix(evaluator: &AccessEvaluator, role: Option<Role>) -> Outcome {
    Outcome {
        output: report::render_matrix(evaluator.grants(), role),
        code: EXIT_ALLOW,
    }
}

pub fn summary(
    evaluator: &AccessEvaluator,
    role: Role,
    status: AdminStatus,
    scopes: Vec<String>,
) -> Outcome {
    let admin = AdminAccount::new(role, status, scopes.into_iter().map(CountryScope::from));

    match serde_json::to_string_pretty(&evaluator.summarize(&admin)) {
        Ok(json) => Outcome {
            output: format!("{json}\n"),
            code: EXIT_ALLOW,
        },
        Err(e) => {
            error!(error = %e, "Failed to render summary");
            Outcome {
                output: String::new(),
                code: EXIT_INVALID,
            }
        }
    }
}

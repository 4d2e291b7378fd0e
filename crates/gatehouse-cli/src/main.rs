use std::process;
use std::sync::Arc;

use clap::Parser;
use dialoguer::Select;
use dotenvy::dotenv;
use gatehouse_cli::commands::{self, Cli, Commands};
use gatehouse_cli::report::EXIT_INVALID;
use gatehouse_config::GatehouseConfig;
use gatehouse_models::Role;
use gatehouse_observability::init_logging;
use gatehouse_rbac::{AccessEvaluator, GrantTable};

fn main() {
    dotenv().ok();

    let config = GatehouseConfig::from_env();
    init_logging(&config);

    let cli = Cli::parse();

    let evaluator = AccessEvaluator::new(Arc::new(GrantTable::builtin()))
        .with_decision_audit(config.audit_decisions);

    let outcome = match cli.command {
        Commands::Check {
            role,
            status,
            resource,
            action,
        } => {
            let role = role.unwrap_or_else(prompt_role);
            commands::check(&evaluator, role, status, resource, action)
        }
        Commands::Country { scopes, country } => commands::country(&evaluator, scopes, &country),
        Commands::Matrix { role } => commands::matrix(&evaluator, role),
        Commands::Summary {
            role,
            status,
            scopes,
        } => {
            let role = role.unwrap_or_else(prompt_role);
            commands::summary(&evaluator, role, status, scopes)
        }
    };

    print!("{}", outcome.output);
    process::exit(outcome.code);
}

fn prompt_role() -> Role {
    let names: Vec<&str> = Role::ALL.iter().map(|role| role.as_str()).collect();

    match Select::new()
        .with_prompt("Role")
        .items(&names[..])
        .default(0)
        .interact()
    {
        Ok(index) => Role::ALL[index],
        Err(e) => {
            eprintln!("❌ Failed to read role: {}", e);
            process::exit(EXIT_INVALID);
        }
    }
}

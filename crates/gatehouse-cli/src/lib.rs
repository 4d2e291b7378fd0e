//! # Gatehouse CLI
//!
//! Argument parsing, command handlers and rendering helpers used by the
//! `gatehouse-cli` binary.
//!
//! ## Usage
//!
//! ```ignore
//! use gatehouse_cli::report::render_matrix;
//! use gatehouse_rbac::GrantTable;
//!
//! print!("{}", render_matrix(&GrantTable::builtin(), None));
//! ```

pub mod commands;
pub mod report;

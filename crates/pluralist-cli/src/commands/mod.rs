//! CLI command implementations.

mod check;
mod resolve;
mod rules;
mod select;

pub use check::{run_check, CheckArgs};
pub use resolve::{run_resolve, ResolveArgs};
pub use rules::{run_rules, RulesArgs};
pub use select::{run_select, SelectArgs};

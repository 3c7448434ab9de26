//! Plain SQL output.

use fdwkit_core::CommandPlan;

/// Setup statements followed by the teardown statements, each block
/// introduced by a comment.
pub fn format_sql(plan: &CommandPlan) -> String {
    format!(
        "-- setup\n{}\n\n-- teardown\n{}\n",
        plan.setup_sql(),
        plan.teardown_sql()
    )
}

//! List rules command implementation.

use fsd_lint::agents::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<40} {:<16} {:<10} Description", "Rule", "Agent", "Severity");
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        println!(
            "{:<40} {:<16} {:<10} {}",
            rule.id,
            rule.agent.to_string(),
            rule.severity.to_string(),
            rule.description
        );
    }

    println!("\nWhole-file rules (no-console, no-any, no-adhoc-colors, use-cn-utility)");
    println!("emit at most one violation per file; declaration-level rules emit one");
    println!("violation per offending declaration.");
}

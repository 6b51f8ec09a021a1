//! Shared output formatting for analysis reports.

use anyhow::Result;
use fsd_lint::{Report, Severity};

use crate::OutputFormat;

/// Print a report in the specified format.
pub fn print(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &Report) {
    for violation in &report.violations {
        let severity_indicator = match violation.severity {
            Severity::Critical | Severity::High => {
                format!("\x1b[31m{}\x1b[0m", violation.severity)
            }
            Severity::Medium => format!("\x1b[33m{}\x1b[0m", violation.severity),
            Severity::Low => format!("\x1b[34m{}\x1b[0m", violation.severity),
        };

        println!("{} ({}) at {}", violation.rule_id, violation.agent, violation.location);
        println!("  {severity_indicator}: {}", violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {suggestion}");
        }
        println!();
    }

    let summary_color = if report.summary.total_errors > 0 {
        "\x1b[31m"
    } else if report.summary.total_warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s) in {} file(s)\x1b[0m",
        summary_color,
        report.summary.total_errors,
        report.summary.total_warnings,
        report.summary.analyzed_files
    );

    if !report.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in &report.recommendations {
            println!("  - {recommendation}");
        }
    }
}

fn print_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &Report) {
    for violation in &report.violations {
        println!(
            "{}: {} [{}] {}",
            violation.location, violation.severity, violation.rule_id, violation.message,
        );
    }
}

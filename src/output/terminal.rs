//! Terminal output of the resource count report.
//!
//! The `format_*` functions build plain text; the `print_*` functions write
//! it to stdout.

use crate::models::{Category, Census, QueryFailure, Subscription};
use crate::processing::Report;
use chrono::{DateTime, Utc};
use colored::Colorize;

pub const BANNER: &str =
    "###################################################################################";

pub fn format_report_header(started: DateTime<Utc>) -> String {
    format!(
        "{BANNER}\nAzure resource count - {}",
        started.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

pub fn format_subscription_header(subscription: &Subscription) -> String {
    format!("{BANNER}\nProcessing Subscription: {subscription}")
}

/// One `"<Category>: <count>"` line per category, sorted by name.
pub fn format_census(census: &Census) -> Vec<String> {
    census
        .sorted()
        .into_iter()
        .map(|(category, count)| format!("{category}: {count}"))
        .collect()
}

pub fn format_summary(report: &Report) -> String {
    let total = &report.total;
    [
        BANNER.to_string(),
        format!(
            "Total resources across all accounts: {}",
            report.resource_count
        ),
        format!(
            "Subscriptions: {} processed ({} listed)",
            report.subscriptions.len(),
            report.subscriptions_listed
        ),
        format!(
            "   Virtual Machines: {}",
            total.get(Category::VirtualMachines)
        ),
        format!("   Container Hosts (AKS): {}", total.get(Category::AksNodes)),
        format!("   Serverless: {}", total.get(Category::Serverless)),
        format!("      Function Apps: {}", total.get(Category::FunctionApps)),
        format!("      App Service: {}", total.get(Category::AppService)),
        BANNER.to_string(),
    ]
    .join("\n")
}

/// One report line per failure, or `None` when nothing failed.
pub fn format_failures<'a, I>(failures: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = &'a QueryFailure>,
{
    let lines: Vec<String> = failures.into_iter().map(|f| f.to_string()).collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines)
    }
}

/// Print the report header once the account list has been read.
pub fn print_report_header(started: DateTime<Utc>, listed: usize, enabled: usize) {
    println!("{}", format_report_header(started));
    println!("{listed} subscriptions listed, {enabled} enabled");
}

pub fn print_subscription_header(subscription: &Subscription) {
    println!("{}", format_subscription_header(subscription));
}

/// Print a failed query while its subscription is still being processed.
pub fn print_failure(failure: &QueryFailure) {
    println!("{}", failure.to_string().red());
}

pub fn print_subscription_footer(census: &Census) {
    for line in format_census(census) {
        println!("{line}");
    }
    println!("{BANNER}");
}

pub fn print_summary(report: &Report) {
    println!();
    println!("{}", format_summary(report));
    println!();
    if let Some(lines) = format_failures(report.failures()) {
        println!("{BANNER}");
        println!("{}", "Errors:".on_red());
        for line in lines {
            println!("{line}");
        }
        println!("{BANNER}");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QueryKind, SubscriptionState};
    use crate::processing::SubscriptionReport;

    fn subscription() -> Subscription {
        Subscription {
            id: "sub-1".to_string(),
            name: "Dev".to_string(),
            state: SubscriptionState::Enabled,
        }
    }

    #[test]
    fn test_format_census_sorted_lines() {
        let mut census = Census::new();
        census.add(Category::VirtualMachines, 4);
        census.add(Category::FunctionApps, 1);
        assert_eq!(
            format_census(&census),
            vec![
                "AKS nodes: 0",
                "App Service: 0",
                "Function Apps: 1",
                "Serverless: 1",
                "Virtual Machines: 4",
            ]
        );
    }

    #[test]
    fn test_format_subscription_header() {
        let header = format_subscription_header(&subscription());
        assert!(header.ends_with("Processing Subscription: Dev (sub-1)"));
    }

    #[test]
    fn test_format_summary_lines() {
        let mut census = Census::new();
        census.add(Category::AksNodes, 10);
        census.add(Category::AppService, 2);
        let mut report = Report {
            subscriptions_listed: 2,
            ..Default::default()
        };
        report.total = census.clone();
        report.resource_count = 2;
        report.subscriptions.push(SubscriptionReport {
            subscription: subscription(),
            census,
            resource_count: 2,
            failures: vec![],
        });

        let summary = format_summary(&report);
        assert!(summary.contains("Total resources across all accounts: 2"));
        assert!(summary.contains("Subscriptions: 1 processed (2 listed)"));
        assert!(summary.contains("   Container Hosts (AKS): 10"));
        assert!(summary.contains("   Serverless: 2\n      Function Apps: 0\n      App Service: 2"));
    }

    #[test]
    fn test_format_failures() {
        assert_eq!(format_failures(&Vec::<QueryFailure>::new()), None);
        let failures = vec![QueryFailure::new(
            &subscription(),
            QueryKind::VmList,
            "exit status: 1",
        )];
        assert_eq!(
            format_failures(&failures),
            Some(vec!["Dev (sub-1) - Error executing 'az vm list'.".to_string()])
        );
    }
}

//! Count virtual machines, AKS nodes and web apps across every enabled Azure
//! subscription, using the `az` CLI.

pub mod azure;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use azure::{CliError, CommandRunner};
use processing::{Progress, Report};

/// Run the full report against `runner`, printing as it goes.
///
/// # Returns
/// * `Ok(Report)` - Totals and every recorded query failure
/// * `Err` - If the subscriptions could not be listed
pub fn count_resources<R: CommandRunner>(runner: &R) -> Result<Report, CliError> {
    let started = chrono::Utc::now();
    let report = processing::run_report(runner, |progress| match progress {
        Progress::Listed { listed, enabled } => {
            output::print_report_header(started, listed, enabled)
        }
        Progress::Started(subscription) => output::print_subscription_header(subscription),
        Progress::Failed(failure) => output::print_failure(failure),
        Progress::Finished(result) => output::print_subscription_footer(&result.census),
    })?;
    output::print_summary(&report);
    Ok(report)
}

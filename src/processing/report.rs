//! Whole-account report driver.

use super::collector::{list_subscriptions, process_subscription, SubscriptionReport};
use crate::azure::{CliError, CommandRunner};
use crate::models::{Census, QueryFailure, Subscription};

/// Progress notifications emitted while the report runs.
#[derive(Debug)]
pub enum Progress<'a> {
    /// The account list was read.
    Listed { listed: usize, enabled: usize },
    /// About to query this subscription.
    Started(&'a Subscription),
    /// A query for the current subscription failed.
    Failed(&'a QueryFailure),
    /// Finished querying a subscription.
    Finished(&'a SubscriptionReport),
}

/// Totals across every enabled subscription.
#[derive(Debug, Default)]
pub struct Report {
    /// Number of subscriptions the account list returned, enabled or not.
    pub subscriptions_listed: usize,
    pub subscriptions: Vec<SubscriptionReport>,
    pub total: Census,
    pub resource_count: u64,
}

impl Report {
    /// Every recorded failure, in the order it happened.
    pub fn failures(&self) -> impl Iterator<Item = &QueryFailure> {
        self.subscriptions.iter().flat_map(|s| s.failures.iter())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    fn push(&mut self, subscription: SubscriptionReport) {
        self.total += &subscription.census;
        self.resource_count += subscription.resource_count;
        self.subscriptions.push(subscription);
    }
}

/// List subscriptions and query each enabled one in turn.
///
/// Only a failing account list is an error; per-subscription failures are
/// collected in the report.
pub fn run_report<R, F>(runner: &R, mut progress: F) -> Result<Report, CliError>
where
    R: CommandRunner,
    F: FnMut(Progress<'_>),
{
    let subscriptions = list_subscriptions(runner)?;
    let enabled = subscriptions.iter().filter(|s| s.is_enabled()).count();
    log::info!(
        "account list returned {} subscriptions, {enabled} enabled",
        subscriptions.len()
    );
    progress(Progress::Listed {
        listed: subscriptions.len(),
        enabled,
    });

    let mut report = Report {
        subscriptions_listed: subscriptions.len(),
        ..Default::default()
    };

    for subscription in subscriptions.iter() {
        if !subscription.is_enabled() {
            log::info!("skipping {subscription} in state {:?}", subscription.state);
            continue;
        }
        progress(Progress::Started(subscription));
        let result = process_subscription(runner, subscription, |failure| {
            progress(Progress::Failed(failure))
        });
        progress(Progress::Finished(&result));
        report.push(result);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::{commands, ReplayRunner};
    use crate::models::{Category, QueryKind};

    const ACCOUNTS: &str = r#"[
        {"id": "sub-1", "name": "Dev", "state": "Enabled"},
        {"id": "sub-2", "name": "Old", "state": "Disabled"},
        {"id": "sub-3", "name": "Prod", "state": "Enabled"}
    ]"#;

    fn runner() -> ReplayRunner {
        ReplayRunner::new()
            .with_output(commands::account_list(), ACCOUNTS)
            .with_output(commands::vm_ids("sub-1"), "vm1\nvm2\n")
            .with_output(commands::aks_list("sub-1"), "[]")
            .with_failure(commands::resource_list("sub-1"), "throttled")
            .with_output(commands::vm_ids("sub-3"), "vm3\n")
            .with_output(commands::aks_list("sub-3"), "[]")
            .with_output(
                commands::resource_list("sub-3"),
                r#"[{"type": "Microsoft.Web/sites", "kind": "app", "name": "web"}]"#,
            )
    }

    #[test]
    fn test_disabled_subscription_is_not_queried() {
        let runner = runner();
        let report = run_report(&runner, |_| {}).unwrap();
        assert_eq!(report.subscriptions_listed, 3);
        assert_eq!(report.subscriptions.len(), 2);
        assert!(runner.calls().iter().all(|cmd| !cmd.contains("sub-2")));
    }

    #[test]
    fn test_failure_does_not_stop_later_subscriptions() {
        let report = run_report(&runner(), |_| {}).unwrap();
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].query, QueryKind::ResourceList);
        assert_eq!(failures[0].subscription_id, "sub-1");

        assert_eq!(report.total.get(Category::VirtualMachines), 3);
        assert_eq!(report.total.get(Category::AppService), 1);
        assert_eq!(report.resource_count, 1);
    }

    #[test]
    fn test_progress_order() {
        let mut events = Vec::new();
        run_report(&runner(), |p| match p {
            Progress::Listed { listed, enabled } => {
                events.push(format!("listed {listed}/{enabled}"))
            }
            Progress::Started(s) => events.push(format!("start {}", s.id)),
            Progress::Failed(f) => events.push(format!("failed {}", f.query.command())),
            Progress::Finished(r) => events.push(format!("done {}", r.subscription.id)),
        })
        .unwrap();
        assert_eq!(
            events,
            vec![
                "listed 3/2",
                "start sub-1",
                "failed az resource list",
                "done sub-1",
                "start sub-3",
                "done sub-3"
            ]
        );
    }

    #[test]
    fn test_account_list_failure_is_fatal() {
        let runner = ReplayRunner::new().with_failure(commands::account_list(), "az login");
        let mut events = 0;
        assert!(run_report(&runner, |_| events += 1).is_err());
        assert_eq!(events, 0, "nothing is reported before the account list succeeds");
    }
}

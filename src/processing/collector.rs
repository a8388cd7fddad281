//! Per-subscription inventory queries.
//!
//! Each query adds into a caller-owned [`Census`]. Failures come back as
//! [`CliError`] and are turned into [`QueryFailure`]s by
//! [`process_subscription`], which keeps going with the next query.

use super::classify::classify_resources;
use crate::azure::{commands, parse_json, CliError, CommandRunner};
use crate::models::{
    Category, Census, ManagedCluster, NodePool, QueryFailure, QueryKind, ResourceRecord,
    Subscription,
};

/// Outcome of processing a single subscription.
#[derive(Debug, Clone)]
pub struct SubscriptionReport {
    pub subscription: Subscription,
    pub census: Census,
    /// Number of generic resources that were classified.
    pub resource_count: u64,
    /// Queries that failed, in the order they were attempted.
    pub failures: Vec<QueryFailure>,
}

/// All subscriptions visible to the signed-in account.
///
/// # Returns
/// * `Ok(Vec<Subscription>)` - Enabled and disabled subscriptions alike
/// * `Err` - If the command fails or its output is not a subscription list
pub fn list_subscriptions<R: CommandRunner>(runner: &R) -> Result<Vec<Subscription>, CliError> {
    let output = runner.run(&commands::account_list())?;
    parse_json(&output, "account list")
}

/// Count identifier lines; quotes are stripped and blank lines skipped.
pub fn count_identifier_lines(output: &str) -> u64 {
    output
        .replace('"', "")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count() as u64
}

/// Count the virtual machines in a subscription into `census`.
///
/// # Returns
/// * `Ok(u64)` - Number of VM ids listed
/// * `Err` - If `az vm list` fails
pub fn count_virtual_machines<R: CommandRunner>(
    runner: &R,
    subscription: &Subscription,
    census: &mut Census,
) -> Result<u64, CliError> {
    let output = runner.run(&commands::vm_ids(&subscription.id))?;
    let count = count_identifier_lines(&output);
    census.add(Category::VirtualMachines, count);
    Ok(count)
}

/// Sum node pool sizes over every AKS cluster in the subscription.
///
/// Node pools already counted stay counted if a later call fails.
pub fn count_aks_nodes<R: CommandRunner>(
    runner: &R,
    subscription: &Subscription,
    census: &mut Census,
) -> Result<u64, CliError> {
    let output = runner.run(&commands::aks_list(&subscription.id))?;
    let clusters: Vec<ManagedCluster> = parse_json(&output, "aks list")?;

    let mut total = 0;
    for cluster in &clusters {
        let output = runner.run(&commands::aks_nodepool_list(
            &cluster.name,
            &cluster.resource_group,
            &subscription.id,
        ))?;
        let pools: Vec<NodePool> = parse_json(&output, "aks nodepool list")?;
        for pool in pools {
            let count = pool.count.unwrap_or_else(|| {
                log::warn!("node pool {}/{} has no count", cluster.name, pool.name);
                0
            });
            census.add(Category::AksNodes, count);
            total += count;
        }
    }
    log::debug!(
        "{} AKS clusters, {total} nodes in {}",
        clusters.len(),
        subscription.name
    );
    Ok(total)
}

/// Every generic resource in a subscription, as listed by `az resource list`.
pub fn list_resources<R: CommandRunner>(
    runner: &R,
    subscription: &Subscription,
) -> Result<Vec<ResourceRecord>, CliError> {
    let output = runner.run(&commands::resource_list(&subscription.id))?;
    parse_json(&output, "resource list")
}

/// Run the three inventory queries for one subscription.
///
/// A failing query is recorded and the remaining queries still run.
///
/// # Arguments
/// * `runner` - Where the `az` commands are sent
/// * `subscription` - The (enabled) subscription to query
/// * `on_failure` - Called with each failure as soon as it is recorded
///
/// # Returns
/// The subscription's census, classified resource count and failures.
pub fn process_subscription<R, F>(
    runner: &R,
    subscription: &Subscription,
    mut on_failure: F,
) -> SubscriptionReport
where
    R: CommandRunner,
    F: FnMut(&QueryFailure),
{
    let mut census = Census::new();
    let mut failures = Vec::new();
    let mut record = |query: QueryKind, e: CliError| {
        log::warn!("{} ({}) {}: {e}", subscription.name, subscription.id, query.command());
        let failure = QueryFailure::new(subscription, query, e);
        on_failure(&failure);
        failures.push(failure);
    };

    if let Err(e) = count_virtual_machines(runner, subscription, &mut census) {
        record(QueryKind::VmList, e);
    }
    if let Err(e) = count_aks_nodes(runner, subscription, &mut census) {
        record(QueryKind::AksList, e);
    }
    let resource_count = match list_resources(runner, subscription) {
        Ok(records) => classify_resources(&records, &mut census),
        Err(e) => {
            record(QueryKind::ResourceList, e);
            0
        }
    };

    SubscriptionReport {
        subscription: subscription.clone(),
        census,
        resource_count,
        failures,
    }
}

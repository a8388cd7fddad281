//! Inventory collection logic.
//!
//! This module contains the business logic of the resource count:
//! - [`classify`] - Mapping generic resources onto census categories
//! - [`collector`] - Per-subscription inventory queries
//! - [`report`] - Driving the queries across all subscriptions

mod classify;
mod collector;
mod report;

// Re-export public functions
pub use classify::{classify, classify_resources, ClassificationRule, CLASSIFICATION_RULES};
pub use collector::{
    count_aks_nodes, count_identifier_lines, count_virtual_machines, list_resources,
    list_subscriptions, process_subscription, SubscriptionReport,
};
pub use report::{run_report, Progress, Report};

//! Record of a per-subscription query that failed.

use super::Subscription;
use std::fmt;

/// Which of the per-subscription inventories was being queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    VmList,
    AksList,
    ResourceList,
}

impl QueryKind {
    /// The command named in the report line.
    pub fn command(self) -> &'static str {
        match self {
            QueryKind::VmList => "az vm list",
            QueryKind::AksList => "az aks list",
            QueryKind::ResourceList => "az resource list",
        }
    }
}

/// A non-fatal query failure, reported once at the end of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFailure {
    pub subscription_name: String,
    pub subscription_id: String,
    pub query: QueryKind,
    /// Underlying error text, kept for logging.
    pub cause: String,
}

impl QueryFailure {
    pub fn new(subscription: &Subscription, query: QueryKind, cause: impl fmt::Display) -> Self {
        QueryFailure {
            subscription_name: subscription.name.clone(),
            subscription_id: subscription.id.clone(),
            query,
            cause: cause.to_string(),
        }
    }
}

impl fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Error executing '{}'.",
            self.subscription_name,
            self.subscription_id,
            self.query.command()
        )
    }
}

//! Azure subscription as reported by `az account list`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a subscription.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Enabled,
    Disabled,
    Warned,
    PastDue,
    Deleted,
    #[serde(other)]
    Unknown,
}

/// Represents an Azure subscription.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subscription {
    /// Subscription GUID.
    pub id: String,
    /// Display name.
    pub name: String,
    pub state: SubscriptionState,
}

impl Subscription {
    pub fn is_enabled(&self) -> bool {
        self.state == SubscriptionState::Enabled
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

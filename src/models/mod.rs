//! Domain models for the Azure resource count.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Subscription`] - Azure subscription from the account list
//! - [`ManagedCluster`] and [`NodePool`] - AKS inventory
//! - [`ResourceRecord`] - Generic resource entry
//! - [`Census`] and [`Category`] - Per-category counters
//! - [`QueryFailure`] - A failed per-subscription query

mod census;
mod cluster;
mod failure;
mod resource;
mod subscription;

// Re-export public types
pub use census::{Category, Census};
pub use cluster::{ManagedCluster, NodePool};
pub use failure::{QueryFailure, QueryKind};
pub use resource::ResourceRecord;
pub use subscription::{Subscription, SubscriptionState};

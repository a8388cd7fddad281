//! Managed Kubernetes (AKS) cluster and node pool models.

use serde::{Deserialize, Serialize};

/// An AKS cluster from `az aks list`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ManagedCluster {
    pub name: String,
    pub resource_group: String,
}

/// A node pool from `az aks nodepool list`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NodePool {
    pub name: String,
    /// Declared node count. Absent or null counts as zero.
    #[serde(default)]
    pub count: Option<u64>,
}

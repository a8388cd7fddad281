//! Argument templates for the `az` commands the collector issues.

/// List every subscription the signed-in account can see.
pub fn account_list() -> String {
    "az account list --all --output json".to_string()
}

/// Resource ids of all virtual machines in a subscription, one per line.
pub fn vm_ids(subscription_id: &str) -> String {
    format!("az vm list --subscription {subscription_id} --query '[].id' --output tsv")
}

/// AKS clusters in a subscription.
pub fn aks_list(subscription_id: &str) -> String {
    format!("az aks list --subscription {subscription_id} --output json")
}

/// Node pools of one AKS cluster. Names are quoted for the command splitter.
pub fn aks_nodepool_list(cluster_name: &str, resource_group: &str, subscription_id: &str) -> String {
    format!(
        "az aks nodepool list --cluster-name '{cluster_name}' --resource-group '{resource_group}' --subscription {subscription_id} --output json"
    )
}

/// Every resource in a subscription.
pub fn resource_list(subscription_id: &str) -> String {
    format!("az resource list --subscription {subscription_id} --output json")
}

/// Configuration for a single demo run
use anyhow::Result;

/// Label selector identifying the Splunk cluster manager pod
pub const CLUSTER_MANAGER_SELECTOR: &str = "app.kubernetes.io/name=cluster-manager";

/// Per-run configuration, built once from command-line input
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Target pod name
    pub pod: String,

    /// Kubernetes namespace of the Splunk deployment
    pub namespace: String,

    /// Requested CPU limit (accepted, not applied to any resource)
    pub cpu_limit: String,

    /// Requested memory limit (accepted, not applied to any resource)
    pub memory_limit: String,

    /// Label selector used to locate the pod
    pub selector: String,
}

impl RunConfig {
    /// Create a run configuration targeting the cluster manager pod
    pub fn new(pod: String, namespace: String, cpu_limit: String, memory_limit: String) -> Self {
        Self {
            pod,
            namespace,
            cpu_limit,
            memory_limit,
            selector: CLUSTER_MANAGER_SELECTOR.to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.pod.is_empty() {
            anyhow::bail!("pod name cannot be empty");
        }

        if self.namespace.is_empty() {
            anyhow::bail!("namespace cannot be empty");
        }

        if self.cpu_limit.is_empty() || self.memory_limit.is_empty() {
            anyhow::bail!("resource limits cannot be empty");
        }

        Ok(())
    }
}

/// Kubernetes operations client
use anyhow::Result;

use crate::utils::command::CommandBuilder;

/// Kubernetes client for kubectl operations
pub struct KubernetesClient;

impl KubernetesClient {
    /// Check if kubectl is installed
    pub async fn check_kubectl_installed() -> Result<()> {
        crate::utils::command::check_tool_installed(
            "kubectl",
            &["version", "--client"],
            "https://kubernetes.io/docs/tasks/tools/",
        )
        .await
    }

    /// Live CPU/memory usage for a pod, as reported by the metrics server
    ///
    /// The output is returned verbatim for display.
    pub async fn top_pod(namespace: &str, pod: &str) -> Result<String> {
        CommandBuilder::new("kubectl")
            .args(["top", "pod", pod, "--namespace", namespace])
            .context(format!("Failed to query resource usage for pod {}", pod))
            .run()
            .await
    }
}

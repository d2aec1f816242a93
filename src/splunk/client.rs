/// Splunk pod client backed by the kubectl-splunk plugin
use anyhow::Result;
use async_trait::async_trait;

use crate::config::RunConfig;
use crate::k8s::KubernetesClient;
use crate::splunk::traits::SplunkOperations;
use crate::utils::command::CommandBuilder;

/// Client for exec and REST operations against a Splunk pod
///
/// Every call shells out to kubectl-splunk, which locates the pod by
/// namespace, label selector, and name.
pub struct SplunkCtl {
    config: RunConfig,
}

impl SplunkCtl {
    /// Create a new client for the configured pod
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Check if the kubectl-splunk plugin is installed
    pub async fn check_kubectl_splunk_installed() -> Result<()> {
        crate::utils::command::check_tool_installed(
            "kubectl-splunk",
            &["--version"],
            "https://pypi.org/project/kubectl-splunk/",
        )
        .await
    }

    /// Pod-targeting arguments common to every kubectl-splunk invocation
    fn base_args(&self) -> Vec<String> {
        vec![
            "--namespace".to_string(),
            self.config.namespace.clone(),
            "--selector".to_string(),
            self.config.selector.clone(),
            "--pod".to_string(),
            self.config.pod.clone(),
        ]
    }
}

#[async_trait]
impl SplunkOperations for SplunkCtl {
    async fn exec(&self, command: &[&str]) -> Result<String> {
        CommandBuilder::new("kubectl-splunk")
            .args(self.base_args())
            .arg("exec")
            .arg("--")
            .args(command)
            .context(format!("Failed to exec in pod {}", self.config.pod))
            .run()
            .await
    }

    async fn exec_detached(&self, command: &[&str]) -> Result<()> {
        CommandBuilder::new("kubectl-splunk")
            .args(self.base_args())
            .arg("exec")
            .arg("--")
            .args(command)
            .context(format!(
                "Failed to launch background command in pod {}",
                self.config.pod
            ))
            .spawn_detached()
    }

    async fn rest(&self, method: &str, path: &str, fields: &[(&str, &str)]) -> Result<String> {
        let mut builder = CommandBuilder::new("kubectl-splunk")
            .args(self.base_args())
            .arg("rest")
            .arg(method)
            .arg(path);

        if !fields.is_empty() {
            builder = builder.arg("--data").arg(encode_form_fields(fields));
        }

        builder
            .context(format!("Failed REST call {} {}", method, path))
            .run()
            .await
    }

    async fn pod_metrics(&self) -> Result<String> {
        KubernetesClient::top_pod(&self.config.namespace, &self.config.pod).await
    }
}

/// Join key/value pairs into a form-encoded data string
fn encode_form_fields(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_form_fields() {
        let encoded = encode_form_fields(&[("name", "high_priority_pool"), ("cpu_weight", "70")]);
        assert_eq!(encoded, "name=high_priority_pool&cpu_weight=70");
    }

    #[test]
    fn test_base_args_target_the_configured_pod() {
        let ctl = SplunkCtl::new(RunConfig::new(
            "cm-0".to_string(),
            "splunk-ns".to_string(),
            "500m".to_string(),
            "1Gi".to_string(),
        ));

        let args = ctl.base_args();
        assert_eq!(
            args,
            vec![
                "--namespace",
                "splunk-ns",
                "--selector",
                "app.kubernetes.io/name=cluster-manager",
                "--pod",
                "cm-0",
            ]
        );
    }

    #[tokio::test]
    async fn test_check_kubectl_splunk() {
        // This test will pass if kubectl-splunk is installed, fail otherwise
        // It's informational rather than a strict requirement
        let result = SplunkCtl::check_kubectl_splunk_installed().await;
        if result.is_err() {
            println!("kubectl-splunk not installed (expected in test environment)");
        }
    }
}

use anyhow::Result;
use async_trait::async_trait;

/// Abstraction for Splunk pod operations to enable testing with mocks
#[async_trait]
pub trait SplunkOperations: Send + Sync {
    /// Run a command inside the target pod and return its stdout
    async fn exec(&self, command: &[&str]) -> Result<String>;

    /// Launch a command inside the target pod without waiting for completion
    ///
    /// The command runs as a detached background process; its exit status is
    /// never observed.
    async fn exec_detached(&self, command: &[&str]) -> Result<()>;

    /// Issue a REST call against the pod's management API
    ///
    /// `fields` are sent as form-encoded data.
    async fn rest(&self, method: &str, path: &str, fields: &[(&str, &str)]) -> Result<String>;

    /// Query live CPU/memory usage for the target pod
    async fn pod_metrics(&self) -> Result<String>;
}

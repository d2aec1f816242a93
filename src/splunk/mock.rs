/// Mock implementation of SplunkOperations for unit testing
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::splunk::traits::SplunkOperations;

/// A single operation issued through the mock, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Exec(Vec<String>),
    ExecDetached(Vec<String>),
    Rest {
        method: String,
        path: String,
        fields: Vec<(String, String)>,
    },
    PodMetrics,
}

/// Recording mock: every call is appended to a shared log, and a single
/// call index can be armed to fail for abort-path tests
#[derive(Clone)]
pub struct MockSplunkOperations {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    fail_on: Option<usize>,
}

impl MockSplunkOperations {
    /// Create a mock where every call succeeds
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on: None,
        }
    }

    /// Create a mock whose call at `index` (zero-based) fails
    pub fn failing_on(index: usize) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on: Some(index),
        }
    }

    /// Snapshot of all recorded calls
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(call);

        if self.fail_on == Some(index) {
            anyhow::bail!("injected failure on call {}", index);
        }
        Ok(())
    }
}

impl Default for MockSplunkOperations {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SplunkOperations for MockSplunkOperations {
    async fn exec(&self, command: &[&str]) -> Result<String> {
        self.record(RecordedCall::Exec(
            command.iter().map(|s| s.to_string()).collect(),
        ))?;
        Ok(String::new())
    }

    async fn exec_detached(&self, command: &[&str]) -> Result<()> {
        self.record(RecordedCall::ExecDetached(
            command.iter().map(|s| s.to_string()).collect(),
        ))
    }

    async fn rest(&self, method: &str, path: &str, fields: &[(&str, &str)]) -> Result<String> {
        self.record(RecordedCall::Rest {
            method: method.to_string(),
            path: path.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })?;
        Ok(String::new())
    }

    async fn pod_metrics(&self) -> Result<String> {
        self.record(RecordedCall::PodMetrics)?;
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls_in_order() {
        let mock = MockSplunkOperations::new();

        mock.exec(&["splunk", "version"]).await.unwrap();
        mock.rest("GET", "/services/server/info", &[]).await.unwrap();
        mock.pod_metrics().await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(
            calls[0],
            RecordedCall::Exec(vec!["splunk".to_string(), "version".to_string()])
        );
        assert_eq!(
            calls[1],
            RecordedCall::Rest {
                method: "GET".to_string(),
                path: "/services/server/info".to_string(),
                fields: vec![],
            }
        );
        assert_eq!(calls[2], RecordedCall::PodMetrics);
    }

    #[tokio::test]
    async fn test_mock_fails_only_on_armed_index() {
        let mock = MockSplunkOperations::failing_on(1);

        assert!(mock.exec(&["ok"]).await.is_ok());
        assert!(mock.exec(&["boom"]).await.is_err());
        assert!(mock.exec(&["ok again"]).await.is_ok());

        // Failed calls are still recorded
        assert_eq!(mock.calls().len(), 3);
    }
}

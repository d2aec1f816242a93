/// Workload management demo sequence
use anyhow::Result;
use std::time::Duration;
use tracing::{info, warn};

use crate::splunk::SplunkOperations;

const SPLUNK_BIN: &str = "/opt/splunk/bin/splunk";

/// Admin credential of the demo deployment
const DEMO_AUTH: &str = "admin:helloworld";

const POOLS_ENDPOINT: &str = "/services/workloads/pools";
const RULES_ENDPOINT: &str = "/services/workloads/rules";

const HIGH_PRIORITY_POOL: &str = "high_priority_pool";
const LOW_PRIORITY_POOL: &str = "low_priority_pool";
const HIGH_PRIORITY_RULE: &str = "high_priority_rule";
const LOW_PRIORITY_RULE: &str = "low_priority_rule";

/// Fixed settle delay after launching the demo searches. There is no
/// completion signal for the detached jobs; they may still be running when
/// the delay expires.
const SEARCH_SETTLE: Duration = Duration::from_secs(60);

/// Drives the fixed workload management demonstration sequence
pub struct WorkloadDemo<'a> {
    ops: &'a dyn SplunkOperations,
    settle: Duration,
}

impl<'a> WorkloadDemo<'a> {
    /// Create a demo runner over the given pod operations
    pub fn new(ops: &'a dyn SplunkOperations) -> Self {
        Self {
            ops,
            settle: SEARCH_SETTLE,
        }
    }

    /// Run the full demo sequence
    ///
    /// Aborts on the first failing call; the detached search launches are
    /// the only best-effort steps. No cleanup is attempted on abort.
    pub async fn run(&self) -> Result<()> {
        self.enable().await?;
        self.create_pools().await?;
        self.create_rules().await?;
        self.launch_demo_searches().await;

        info!(
            "Waiting {}s for the searches to generate load...",
            self.settle.as_secs()
        );
        tokio::time::sleep(self.settle).await;

        self.show_resource_usage().await?;
        self.show_status().await?;
        self.cleanup().await?;

        info!("✓ Workload management demo completed successfully!");

        Ok(())
    }

    /// Enable workload management on the pod
    async fn enable(&self) -> Result<()> {
        info!("Enabling workload management...");

        self.ops
            .exec(&[SPLUNK_BIN, "enable", "workload-management", "-auth", DEMO_AUTH])
            .await?;

        info!("Workload management enabled");
        Ok(())
    }

    /// Create the high and low priority workload pools
    async fn create_pools(&self) -> Result<()> {
        info!("Creating workload pools...");

        self.ops
            .rest(
                "POST",
                POOLS_ENDPOINT,
                &[
                    ("name", HIGH_PRIORITY_POOL),
                    ("cpu_weight", "70"),
                    ("mem_weight", "70"),
                    ("category", "search"),
                ],
            )
            .await?;

        self.ops
            .rest(
                "POST",
                POOLS_ENDPOINT,
                &[
                    ("name", LOW_PRIORITY_POOL),
                    ("cpu_weight", "20"),
                    ("mem_weight", "20"),
                    ("category", "search"),
                ],
            )
            .await?;

        info!(
            "Created pools: {} (weight 70), {} (weight 20)",
            HIGH_PRIORITY_POOL, LOW_PRIORITY_POOL
        );
        Ok(())
    }

    /// Create the routing rules mapping searches to the pools
    async fn create_rules(&self) -> Result<()> {
        info!("Creating workload rules...");

        self.ops
            .rest(
                "POST",
                RULES_ENDPOINT,
                &[
                    ("name", HIGH_PRIORITY_RULE),
                    ("predicate", "app=search"),
                    ("workload_pool", HIGH_PRIORITY_POOL),
                ],
            )
            .await?;

        self.ops
            .rest(
                "POST",
                RULES_ENDPOINT,
                &[
                    ("name", LOW_PRIORITY_RULE),
                    ("predicate", "index=_internal"),
                    ("workload_pool", LOW_PRIORITY_POOL),
                ],
            )
            .await?;

        info!(
            "Created rules: {}, {}",
            HIGH_PRIORITY_RULE, LOW_PRIORITY_RULE
        );
        Ok(())
    }

    /// Launch the two demo searches as detached background jobs
    ///
    /// Fire-and-forget: the jobs are never awaited, tracked, or cancelled,
    /// and a failed launch does not abort the demo.
    async fn launch_demo_searches(&self) {
        info!("Launching background demo searches...");

        let searches = [
            "index=_internal | stats count by sourcetype",
            "index=_internal | head 10000",
        ];

        for search in searches {
            let result = self
                .ops
                .exec_detached(&[SPLUNK_BIN, "search", search, "-auth", DEMO_AUTH])
                .await;

            if let Err(e) = result {
                warn!("Failed to launch background search '{}': {:#}", search, e);
            }
        }
    }

    /// Display live resource usage and the pod's process listing
    async fn show_resource_usage(&self) -> Result<()> {
        info!("Sampling resource usage...");

        let metrics = self.ops.pod_metrics().await?;
        info!("{}", metrics.trim());

        let processes = self.ops.exec(&["ps", "aux"]).await?;
        info!("{}", processes.trim());

        Ok(())
    }

    /// Display workload management status
    async fn show_status(&self) -> Result<()> {
        info!("Checking workload management status...");

        let status = self
            .ops
            .exec(&[
                SPLUNK_BIN,
                "_internal",
                "call",
                "/services/workloads/status",
                "-auth",
                DEMO_AUTH,
            ])
            .await?;
        info!("{}", status.trim());

        Ok(())
    }

    /// Delete the rules and pools, then disable workload management
    async fn cleanup(&self) -> Result<()> {
        info!("Cleaning up workload configuration...");

        for rule in [HIGH_PRIORITY_RULE, LOW_PRIORITY_RULE] {
            self.ops
                .rest("DELETE", &format!("{}/{}", RULES_ENDPOINT, rule), &[])
                .await?;
        }

        for pool in [HIGH_PRIORITY_POOL, LOW_PRIORITY_POOL] {
            self.ops
                .rest("DELETE", &format!("{}/{}", POOLS_ENDPOINT, pool), &[])
                .await?;
        }

        self.ops
            .exec(&[SPLUNK_BIN, "disable", "workload-management", "-auth", DEMO_AUTH])
            .await?;

        info!("Workload management disabled");
        Ok(())
    }
}

/// Splunk pod operations via the kubectl-splunk plugin
pub mod client;
#[cfg(test)]
pub mod mock;
pub mod traits;

pub use client::SplunkCtl;
pub use traits::SplunkOperations;

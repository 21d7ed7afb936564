//! Worker group data models

use clap::ValueEnum;
use serde::Deserialize;

use crate::cribl::traits::CriblResource;

/// Cribl product a worker group belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Product {
    /// Cribl Stream (default)
    #[default]
    Stream,
    /// Cribl Edge (fleets)
    Edge,
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Product::Stream => write!(f, "stream"),
            Product::Edge => write!(f, "edge"),
        }
    }
}

/// Worker group (config group) from the control plane API
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkerGroup {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub config_version: Option<String>,
    pub worker_count: Option<u64>,
    pub on_prem: Option<bool>,
}

impl CriblResource for WorkerGroup {
    const KIND: &'static str = "Worker Group";
    const PLURAL: &'static str = "worker groups";
    const RULE_PADDING: usize = 16;

    fn id(&self) -> &str {
        &self.id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("name", self.name.clone().unwrap_or_default()),
            ("description", self.description.clone().unwrap_or_default()),
            (
                "configVersion",
                self.config_version.clone().unwrap_or_default(),
            ),
            (
                "workerCount",
                self.worker_count.map(|c| c.to_string()).unwrap_or_default(),
            ),
            (
                "onPrem",
                self.on_prem.map(|b| b.to_string()).unwrap_or_default(),
            ),
        ]
    }
}

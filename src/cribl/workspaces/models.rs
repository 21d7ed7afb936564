//! Workspace data models

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::cribl::traits::CriblResource;

/// Timestamp as sent by the management plane (RFC 3339 text or epoch millis)
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Millis(i64),
}

impl Timestamp {
    /// Parse into a UTC datetime, if the value is well-formed
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Text(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Timestamp::Millis(ms) => DateTime::from_timestamp_millis(*ms),
        }
    }

    /// Human-readable form; unparseable text is shown as received
    pub fn display(&self) -> String {
        match (self.to_datetime(), self) {
            (Some(dt), _) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            (None, Timestamp::Text(s)) => s.clone(),
            (None, Timestamp::Millis(ms)) => ms.to_string(),
        }
    }
}

/// Workspace from the management plane API
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(default)]
    pub workspace_id: String,
    pub alias: Option<String>,
    pub description: Option<String>,
    pub region: Option<String>,
    pub state: Option<String>,
    pub last_updated: Option<Timestamp>,
    #[serde(rename = "leaderFQDN")]
    pub leader_fqdn: Option<String>,
}

impl CriblResource for Workspace {
    const KIND: &'static str = "Workspace";
    const PLURAL: &'static str = "workspaces";
    const RULE_PADDING: usize = 12;

    fn id(&self) -> &str {
        &self.workspace_id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("workspaceId", self.workspace_id.clone()),
            ("alias", self.alias.clone().unwrap_or_default()),
            ("description", self.description.clone().unwrap_or_default()),
            ("region", self.region.clone().unwrap_or_default()),
            (
                "lastUpdated",
                self.last_updated
                    .as_ref()
                    .map(Timestamp::display)
                    .unwrap_or_default(),
            ),
            ("leaderFQDN", self.leader_fqdn.clone().unwrap_or_default()),
            ("state", self.state.clone().unwrap_or_default()),
        ]
    }
}

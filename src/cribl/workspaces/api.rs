//! Workspace API operations (management plane)

use log::debug;

use crate::config::api;
use crate::cribl::traits::ListResponse;
use crate::cribl::CriblClient;
use crate::error::{CriblError, Result};

use super::models::Workspace;

/// Build the API path for an organization's workspaces
fn build_workspaces_path(org_id: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        api::MANAGEMENT_PLANE_PATH.trim_start_matches('/'),
        api::ORGANIZATIONS,
        urlencoding::encode(org_id),
        api::WORKSPACES
    )
}

impl CriblClient {
    /// List workspaces of an organization (single request, no pagination)
    pub async fn list_workspaces(&self, org_id: &str) -> Result<Vec<Workspace>> {
        let list = self
            .fetch_workspaces(org_id)
            .await
            .map_err(|e| CriblError::ListFailed {
                resource: "workspaces",
                source: Box::new(e),
            })?;

        let workspaces = list.into_items();
        debug!("Fetched {} workspaces", workspaces.len());
        Ok(workspaces)
    }

    async fn fetch_workspaces(&self, org_id: &str) -> Result<ListResponse<Workspace>> {
        let path = build_workspaces_path(org_id);
        debug!("Fetching workspaces from: {}", self.endpoint(&path));

        let response = self.get(&path).await?.send().await?;
        self.parse_api_response(
            response,
            &format!("workspaces for organization '{}'", org_id),
        )
        .await
    }
}

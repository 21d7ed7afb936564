//! Worker group API operations

use log::debug;

use crate::config::api;
use crate::cribl::traits::ListResponse;
use crate::cribl::CriblClient;
use crate::error::{CriblError, Result};

use super::models::{Product, WorkerGroup};

/// Build the API path for listing a product's worker groups
fn build_groups_path(product: Product) -> String {
    format!("{}/{}/{}", api::PRODUCTS, product, api::GROUPS)
}

impl CriblClient {
    /// List worker groups for a product (single request, no pagination)
    pub async fn list_worker_groups(&self, product: Product) -> Result<Vec<WorkerGroup>> {
        self.fetch_worker_groups(product)
            .await
            .map_err(|e| CriblError::ListFailed {
                resource: "worker groups",
                source: Box::new(e),
            })
    }

    async fn fetch_worker_groups(&self, product: Product) -> Result<Vec<WorkerGroup>> {
        let path = build_groups_path(product);
        debug!("Fetching worker groups from: {}", self.endpoint(&path));

        let response = self.get(&path).await?.send().await?;
        let list: ListResponse<WorkerGroup> = self
            .parse_api_response(response, &format!("{} worker groups", product))
            .await?;

        let reported = list.count;
        let groups = list.into_items();
        debug!(
            "Fetched {} worker groups (count reported: {:?})",
            groups.len(),
            reported
        );
        Ok(groups)
    }
}

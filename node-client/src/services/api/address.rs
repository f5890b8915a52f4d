//! # Address Session
//!
//! Memoized access to the node's own network address.

use shared::dto::node::AddressResponse;
use tracing::debug;

use crate::core::error::Result;

use super::client::NodeClient;

impl NodeClient {
    /// The node's own network address.
    ///
    /// The underlying `GET /address` request is issued at most once per
    /// client. Concurrent callers share the single in-flight request, and
    /// later callers replay the first outcome, failures included, without
    /// touching the network or raising another notification.
    pub async fn our_address(&self) -> Result<String> {
        self.address
            .get_or_init(|| self.fetch_address())
            .await
            .clone()
    }

    async fn fetch_address(&self) -> Result<String> {
        let response = self.send(self.http.get(self.url("address"))).await?;
        let decoded: AddressResponse = self.read_json(response).await?;
        debug!("node address resolved: {}", decoded.our_address);
        Ok(decoded.our_address)
    }
}

//! # Token Network Membership
//!
//! Joining and leaving a token's payment network.

use shared::dto::node::ConnectionRequest;
use shared::dto::token::TokenRecord;
use tracing::instrument;

use crate::core::error::Result;
use crate::core::service::Notification;

use super::client::NodeClient;

impl NodeClient {
    /// Join the payment network of a token, committing `funds` for the
    /// connection manager to open channels with. `funds` is a decimal
    /// amount, scaled with the token's `decimals`.
    #[instrument(skip(self))]
    pub async fn join_token_network(
        &self,
        funds: &str,
        token_address: &str,
        decimals: u8,
    ) -> Result<()> {
        let body = ConnectionRequest {
            funds: self.base_units(funds, decimals)?,
        };
        let url = self.url(&format!("connections/{}", token_address));
        self.send(self.http.put(url).json(&body)).await?;

        self.notifier.success(Notification::new(
            "Joined Token Network",
            format!(
                "You have successfully joined the Network of Token {}",
                token_address
            ),
        ));
        Ok(())
    }

    /// Leave a token's payment network, closing and settling every channel
    /// the connection manager holds for it.
    #[instrument(skip(self, token))]
    pub async fn leave_token_network(&self, token: &TokenRecord) -> Result<()> {
        let url = self.url(&format!("connections/{}", token.address));
        self.send(self.http.delete(url)).await?;

        self.notifier.success(Notification::new(
            "Left Token Network",
            format!(
                "Successfully closed and settled all channels in {} <{}> token",
                token.name, token.address
            ),
        ));
        Ok(())
    }
}

//! # Token Swaps
//!
//! Atomic two-token exchange with a single partner.

use shared::dto::swap::{TokenSwap, TokenSwapRequest};
use tracing::instrument;

use crate::core::error::Result;

use super::client::NodeClient;

impl NodeClient {
    /// Offer or accept a token swap with `swap.partner_address`.
    ///
    /// Maker and taker both PUT under the same identifier and the node
    /// matches the two sides up. Success is the HTTP status alone; the
    /// node sends no body worth decoding.
    #[instrument(skip(self, swap), fields(identifier = swap.identifier))]
    pub async fn swap_tokens(&self, swap: &TokenSwap) -> Result<()> {
        let body = TokenSwapRequest::from(swap);
        let url = self.url(&format!(
            "token_swaps/{}/{}",
            swap.partner_address, swap.identifier
        ));
        self.send(self.http.put(url).json(&body)).await?;
        Ok(())
    }
}

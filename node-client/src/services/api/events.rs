//! # Blockchain Events
//!
//! Debug queries over the node's view of on-chain events.

use shared::dto::event::BlockchainEvent;
use tracing::instrument;

use crate::core::error::Result;

use super::client::NodeClient;

const EVENTS_BASE: &str = "_debug/blockchain_events";

/// Slice of the event stream to query, from the whole network down to a
/// single channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventScope {
    /// Registry-level events for the whole payment network.
    Network,
    /// Events for one token's network.
    Token(String),
    /// Events for the channel with one partner in one token network.
    Channel {
        token_address: String,
        partner_address: String,
    },
}

impl EventScope {
    pub(crate) fn path(&self) -> String {
        match self {
            EventScope::Channel {
                token_address,
                partner_address,
            } => format!(
                "{}/payment_networks/{}/channels/{}",
                EVENTS_BASE, token_address, partner_address
            ),
            EventScope::Token(token_address) => {
                format!("{}/tokens/{}", EVENTS_BASE, token_address)
            }
            EventScope::Network => format!("{}/network", EVENTS_BASE),
        }
    }
}

impl NodeClient {
    /// Blockchain events the node has seen for `scope`, optionally bounded
    /// to an inclusive block range.
    #[instrument(skip(self))]
    pub async fn blockchain_events(
        &self,
        scope: &EventScope,
        from_block: Option<u64>,
        to_block: Option<u64>,
    ) -> Result<Vec<BlockchainEvent>> {
        let mut request = self.http.get(self.url(&scope.path()));
        if let Some(block) = from_block {
            request = request.query(&[("from_block", block.to_string())]);
        }
        if let Some(block) = to_block {
            request = request.query(&[("to_block", block.to_string())]);
        }

        let response = self.send(request).await?;
        self.read_json(response).await
    }
}

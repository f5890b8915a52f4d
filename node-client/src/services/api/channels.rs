//! # Channel Operations
//!
//! Channel queries joined to their registry token records, plus the open,
//! deposit and close commands.
//!
//! Deposit and close inspect their success bodies a second time: the node
//! can answer 200 with a payload that is not the updated channel, and that
//! case must surface as an error notification even though the transport
//! call succeeded.

use shared::amount::to_decimal;
use shared::dto::channel::{ChannelPatchRequest, ChannelRecord, OpenChannelRequest};
use tracing::instrument;

use crate::core::error::{ApiError, Result};
use crate::core::service::Notification;

use super::client::NodeClient;

/// Channel state the node reports once a close has committed.
pub const STATE_CLOSED: &str = "closed";

impl NodeClient {
    /// All channels known to the node, each decorated with the registry
    /// record of its token.
    ///
    /// An empty registry is populated first, connection summary included,
    /// so decoration always reads a warm cache.
    #[instrument(skip(self))]
    pub async fn channels(&self) -> Result<Vec<ChannelRecord>> {
        if self.registry.is_empty() {
            self.refresh_tokens(true).await?;
        }

        let mut channels: Vec<ChannelRecord> = self.get_json(self.url("channels")).await?;
        for channel in channels.iter_mut() {
            channel.user_token = self.token(&channel.token_address);
        }
        Ok(channels)
    }

    /// The channel between us and `partner_address` for a token.
    pub async fn channel(
        &self,
        token_address: &str,
        partner_address: &str,
    ) -> Result<ChannelRecord> {
        let url = self.url(&format!("channels/{}/{}", token_address, partner_address));
        self.get_json(url).await
    }

    /// Open a channel with `partner_address`, locking `deposit` as the
    /// initial funding. `deposit` is a decimal amount, scaled with the
    /// token's `decimals` before it goes on the wire.
    #[instrument(skip(self))]
    pub async fn open_channel(
        &self,
        token_address: &str,
        partner_address: &str,
        settle_timeout: u32,
        deposit: &str,
        decimals: u8,
    ) -> Result<ChannelRecord> {
        let body = OpenChannelRequest {
            token_address: token_address.to_string(),
            partner_address: partner_address.to_string(),
            settle_timeout,
            total_deposit: self.base_units(deposit, decimals)?,
        };

        let response = self
            .send(self.http.put(self.url("channels")).json(&body))
            .await?;
        self.read_json(response).await
    }

    /// Deposit more funds into an existing channel.
    ///
    /// The node expects the new total rather than the increment, so the
    /// current total deposit is read first and `amount` added on top. A
    /// concurrent deposit can commit between that read and the patch; the
    /// node arbitrates from its own state if one does.
    #[instrument(skip(self))]
    pub async fn deposit_to_channel(
        &self,
        token_address: &str,
        partner_address: &str,
        amount: &str,
        decimals: u8,
    ) -> Result<ChannelRecord> {
        let increment = self.base_units(amount, decimals)?;
        let channel = self.channel(token_address, partner_address).await?;
        let total = channel.total_deposit.checked_add(increment).ok_or_else(|| {
            self.fail(ApiError::Validation(format!(
                "deposit of {} overflows the channel's total deposit",
                amount
            )))
        })?;

        let url = self.url(&format!("channels/{}/{}", token_address, partner_address));
        let body = ChannelPatchRequest {
            total_deposit: Some(total),
            state: None,
        };
        let response = self.send(self.http.patch(url).json(&body)).await?;

        let action = "Deposit";
        let raw = response.text().await.map_err(|err| self.fail(err.into()))?;
        match serde_json::from_str::<ChannelRecord>(&raw) {
            Ok(updated) => {
                self.notifier.info(Notification::new(
                    action,
                    format!(
                        "The channel {} has been modified with a deposit of {}",
                        updated.channel_identifier,
                        to_decimal(updated.balance, decimals)
                    ),
                ));
                Ok(updated)
            }
            Err(_) => Err(self.shape_failure(action, raw)),
        }
    }

    /// Close a channel. The close only counts once the node reports the
    /// channel in the closed state.
    #[instrument(skip(self))]
    pub async fn close_channel(
        &self,
        token_address: &str,
        partner_address: &str,
    ) -> Result<ChannelRecord> {
        let url = self.url(&format!("channels/{}/{}", token_address, partner_address));
        let body = ChannelPatchRequest {
            total_deposit: None,
            state: Some(STATE_CLOSED.to_string()),
        };
        let response = self.send(self.http.patch(url).json(&body)).await?;

        let action = "Close";
        let raw = response.text().await.map_err(|err| self.fail(err.into()))?;
        match serde_json::from_str::<ChannelRecord>(&raw) {
            Ok(closed) if closed.state == STATE_CLOSED => {
                self.notifier.info(Notification::new(
                    action,
                    format!(
                        "The channel {} with partner {} has been closed successfully",
                        closed.channel_identifier, closed.partner_address
                    ),
                ));
                Ok(closed)
            }
            _ => Err(self.shape_failure(action, raw)),
        }
    }
}

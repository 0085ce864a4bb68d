// File: likeli-onchain/src/connector.rs
// Project: likeli-pay
// Creation date: Thursday 02 July 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Tuesday 04 August 2026 @ 19:03:15
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use alloy::{
    network::EthereumWallet,
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use likeli_pay::{AccountStatus, ConnectorError, WalletConnector, WalletEvent};
use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::bindings::IERC20;

/// Failure to assemble a connector from its configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The RPC endpoint is not a valid URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),
    /// The signer material could not be used.
    #[error("invalid signer configuration: {0}")]
    Signer(String),
}

/// Wallet connector backed by a JSON-RPC provider and a local signer.
///
/// The non-interactive stand-in for a browser wallet: "opening the connect
/// UI" resolves the signer's account and the chain served by the endpoint,
/// and a chain switch can only confirm the endpoint already serves the
/// requested chain.
pub struct RpcConnector {
    provider: Option<DynProvider>,
    signer_address: Option<Address>,
    account: Mutex<AccountStatus>,
    events: broadcast::Sender<WalletEvent>,
}

impl RpcConnector {
    /// Assembles a connector.
    ///
    /// # Parameters
    /// * `rpc_url` - JSON-RPC endpoint; without one every chain access is
    ///   reported unavailable,
    /// * `signer` - Local signing key; without one the connector is
    ///   read-only.
    ///
    /// # Errors
    /// If the endpoint is not a valid URL.
    pub fn new(rpc_url: Option<&str>, signer: Option<PrivateKeySigner>) -> Result<Self, BuildError> {
        let signer_address = signer.as_ref().map(PrivateKeySigner::address);
        let provider = match rpc_url {
            Some(rpc_url) => {
                let url = rpc_url.parse::<url::Url>()?;
                let provider = match signer {
                    Some(signer) => ProviderBuilder::new()
                        .wallet(EthereumWallet::new(signer))
                        .connect_http(url)
                        .erased(),
                    None => ProviderBuilder::new().connect_http(url).erased(),
                };
                Some(provider)
            }
            None => None,
        };
        let (events, _) = broadcast::channel(16);
        Ok(Self {
            provider,
            signer_address,
            account: Mutex::new(AccountStatus::default()),
            events,
        })
    }

    fn emit(&self, event: WalletEvent) {
        // No subscriber is fine: the CLI drives the flow directly.
        drop(self.events.send(event));
    }

    fn transport<E: ToString>(error: E) -> ConnectorError {
        ConnectorError::Transport(error.to_string())
    }
}

#[async_trait]
impl WalletConnector for RpcConnector {
    async fn open_connect_ui(&self) -> Result<AccountStatus, ConnectorError> {
        let Some(provider) = self.provider.as_ref() else {
            return Err(ConnectorError::Unavailable);
        };
        let Some(address) = self.signer_address else {
            // Nothing to connect without signing material.
            return Err(ConnectorError::Rejected);
        };
        let chain_id = provider.get_chain_id().await.map_err(Self::transport)?;
        let status = AccountStatus {
            address: Some(address),
            chain_id: Some(chain_id),
        };
        *self.account.lock() = status;
        info!(%address, chain_id, "wallet connected");
        self.emit(WalletEvent::AccountChanged {
            address: status.address,
            chain_id: status.chain_id,
        });
        Ok(status)
    }

    fn current_account(&self) -> AccountStatus {
        *self.account.lock()
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ConnectorError> {
        let Some(provider) = self.provider.as_ref() else {
            return Err(ConnectorError::Unavailable);
        };
        let served = provider.get_chain_id().await.map_err(Self::transport)?;
        if served != chain_id {
            // A local signer cannot re-point the endpoint to another chain.
            warn!(served, requested = chain_id, "endpoint serves another chain");
            return Err(ConnectorError::Unavailable);
        }
        let status = {
            let mut account = self.account.lock();
            account.chain_id = Some(chain_id);
            *account
        };
        self.emit(WalletEvent::AccountChanged {
            address: status.address,
            chain_id: status.chain_id,
        });
        Ok(())
    }

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, ConnectorError> {
        let Some(provider) = self.provider.as_ref() else {
            return Err(ConnectorError::Unavailable);
        };
        IERC20::new(token, provider.clone())
            .balanceOf(owner)
            .call()
            .await
            .map_err(Self::transport)
    }

    async fn transfer_token(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<Option<TxHash>, ConnectorError> {
        let Some(provider) = self.provider.as_ref() else {
            return Err(ConnectorError::Unavailable);
        };
        if self.signer_address.is_none() {
            return Err(ConnectorError::Unavailable);
        }
        let pending = IERC20::new(token, provider.clone())
            .transfer(to, amount)
            .send()
            .await
            .map_err(Self::transport)?;
        let hash = *pending.tx_hash();
        info!(%hash, "transfer broadcast");
        Ok(Some(hash))
    }

    fn has_read_client(&self) -> bool {
        self.provider.is_some()
    }

    fn has_signer(&self) -> bool {
        self.signer_address.is_some()
    }

    fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
        self.events.subscribe()
    }
}

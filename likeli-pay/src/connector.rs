// File: likeli-pay/src/connector.rs
// Project: likeli-pay
// Creation date: Saturday 13 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Wednesday 29 July 2026 @ 14:36:58
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use std::result;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;

/// Results of connector operations.
pub type ConnectorResult<T> = result::Result<T, ConnectorError>;

/// Failure of an operation delegated to the wallet connector.
///
/// The flow does not distinguish a user dismissing a prompt from the wallet
/// refusing it: both abort the step the same way.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConnectorError {
    /// The user dismissed the prompt, or the wallet refused the operation.
    #[error("the operation was rejected or canceled")]
    Rejected,
    /// The transport to the chain failed.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The requested capability is not available on this connector.
    #[error("the requested capability is unavailable")]
    Unavailable,
}

/// Account and chain as last reported by the wallet.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AccountStatus {
    /// Active account, if any.
    pub address: Option<Address>,
    /// Chain the wallet is currently on, if known.
    pub chain_id: Option<u64>,
}

/// Push notification emitted by the wallet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalletEvent {
    /// The active account or chain changed.
    AccountChanged {
        /// New active account, if any.
        address: Option<Address>,
        /// New chain, if known.
        chain_id: Option<u64>,
    },
    /// The wallet disconnected.
    Disconnected,
}

/// Capability set consumed from the external wallet connector.
///
/// Every suspending operation may fail; the controller converts each failure
/// into a user notice at the step where it happened. Implementations must be
/// shareable across tasks since the controller is cloneable.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Opens the external wallet-selection flow.
    ///
    /// Suspends until the user completes or dismisses it.
    ///
    /// # Errors
    /// If the flow failed or was dismissed.
    async fn open_connect_ui(&self) -> ConnectorResult<AccountStatus>;

    /// Account and chain as last reported by the wallet.
    fn current_account(&self) -> AccountStatus;

    /// Asks the wallet to switch to the given chain.
    ///
    /// Suspends awaiting the wallet's approval.
    ///
    /// # Errors
    /// If the user refused, or the wallet does not know the chain.
    async fn switch_chain(&self, chain_id: u64) -> ConnectorResult<()>;

    /// Reads the ERC-20 balance of `owner` on the `token` contract.
    ///
    /// # Errors
    /// If the read-only call failed.
    async fn token_balance(&self, token: Address, owner: Address) -> ConnectorResult<U256>;

    /// Submits an ERC-20 `transfer(to, amount)` on the `token` contract.
    ///
    /// Suspends awaiting signature and broadcast. Returns the transaction
    /// hash when the wallet reports one.
    ///
    /// # Errors
    /// If the user rejected the signature or the broadcast failed.
    async fn transfer_token(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> ConnectorResult<Option<TxHash>>;

    /// Whether a read-only chain client is currently reachable.
    fn has_read_client(&self) -> bool;

    /// Whether the wallet can currently sign transactions.
    fn has_signer(&self) -> bool;

    /// Subscribes to account / chain change notifications.
    fn subscribe(&self) -> broadcast::Receiver<WalletEvent>;
}

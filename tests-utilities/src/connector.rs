// File: tests-utilities/src/connector.rs
// Project: likeli
// Creation date: Saturday 13 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Tuesday 04 August 2026 @ 18:40:02
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use std::sync::atomic::{AtomicBool, Ordering};

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use likeli_pay::{AccountStatus, ConnectorError, WalletConnector, WalletEvent};
use parking_lot::Mutex;
use tokio::sync::{broadcast, Notify};

/// One recorded call to the mock connector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Call {
    /// `open_connect_ui` was invoked.
    Connect,
    /// `switch_chain` was invoked with this chain id.
    Switch(u64),
    /// `token_balance` was invoked.
    Read {
        /// Token contract read.
        token: Address,
        /// Account whose balance was read.
        owner: Address,
    },
    /// `transfer_token` was invoked.
    Write {
        /// Token contract written to.
        token: Address,
        /// Transfer recipient.
        to: Address,
        /// Transfer amount.
        amount: U256,
    },
}

/// Scriptable wallet connector for the flow tests.
///
/// Every operation is recorded; failures, missing capabilities and a write
/// gate (to keep a submission suspended) can be toggled per test.
pub struct MockConnector {
    account: Mutex<AccountStatus>,
    connect_account: Mutex<AccountStatus>,
    balance: Mutex<U256>,
    tx_hash: Mutex<Option<TxHash>>,
    reject_connect: AtomicBool,
    reject_switch: AtomicBool,
    fail_read: AtomicBool,
    reject_write: AtomicBool,
    read_client: AtomicBool,
    signer: AtomicBool,
    hold_writes: AtomicBool,
    write_gate: Notify,
    calls: Mutex<Vec<Call>>,
    events: broadcast::Sender<WalletEvent>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// A connector with every capability available and nothing scripted.
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            account: Mutex::new(AccountStatus::default()),
            connect_account: Mutex::new(AccountStatus::default()),
            balance: Mutex::new(U256::ZERO),
            tx_hash: Mutex::new(None),
            reject_connect: AtomicBool::new(false),
            reject_switch: AtomicBool::new(false),
            fail_read: AtomicBool::new(false),
            reject_write: AtomicBool::new(false),
            read_client: AtomicBool::new(true),
            signer: AtomicBool::new(true),
            hold_writes: AtomicBool::new(false),
            write_gate: Notify::new(),
            calls: Mutex::new(Vec::new()),
            events,
        }
    }

    /// Sets the account the wallet currently reports.
    pub fn set_account(&self, address: Address, chain_id: u64) {
        *self.account.lock() = AccountStatus {
            address: Some(address),
            chain_id: Some(chain_id),
        };
    }

    /// Sets the account a successful connection will yield.
    pub fn set_connect_account(&self, address: Address, chain_id: u64) {
        *self.connect_account.lock() = AccountStatus {
            address: Some(address),
            chain_id: Some(chain_id),
        };
    }

    /// Sets the balance every read returns.
    pub fn set_balance(&self, amount: U256) {
        *self.balance.lock() = amount;
    }

    /// Sets the hash reported for submitted transfers.
    pub fn set_tx_hash(&self, hash: TxHash) {
        *self.tx_hash.lock() = Some(hash);
    }

    /// Makes the connection flow fail.
    pub fn reject_connections(&self) {
        self.reject_connect.store(true, Ordering::SeqCst);
    }

    /// Makes chain switches fail, leaving the chain unchanged.
    pub fn reject_switches(&self) {
        self.reject_switch.store(true, Ordering::SeqCst);
    }

    /// Makes balance reads fail (a reverting call).
    pub fn fail_reads(&self) {
        self.fail_read.store(true, Ordering::SeqCst);
    }

    /// Makes transfer submissions fail (a rejected signature).
    pub fn reject_writes(&self) {
        self.reject_write.store(true, Ordering::SeqCst);
    }

    /// Reports the read-only client as unreachable.
    pub fn remove_read_client(&self) {
        self.read_client.store(false, Ordering::SeqCst);
    }

    /// Reports the signer as unavailable.
    pub fn remove_signer(&self) {
        self.signer.store(false, Ordering::SeqCst);
    }

    /// Keeps transfer submissions suspended until [`Self::release_writes`].
    pub fn hold_writes(&self) {
        self.hold_writes.store(true, Ordering::SeqCst);
    }

    /// Releases submissions suspended by [`Self::hold_writes`].
    pub fn release_writes(&self) {
        self.hold_writes.store(false, Ordering::SeqCst);
        self.write_gate.notify_waiters();
    }

    /// Pushes a wallet event to the subscribers.
    pub fn emit(&self, event: WalletEvent) {
        drop(self.events.send(event));
    }

    /// Every call recorded so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Forgets the calls recorded so far (used after environment setup).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Number of recorded connection attempts.
    #[must_use]
    pub fn connect_count(&self) -> usize {
        self.count(|call| matches!(call, Call::Connect))
    }

    /// Number of recorded chain switches.
    #[must_use]
    pub fn switch_count(&self) -> usize {
        self.count(|call| matches!(call, Call::Switch(_)))
    }

    /// Number of recorded balance reads.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.count(|call| matches!(call, Call::Read { .. }))
    }

    /// Number of recorded transfer submissions.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.count(|call| matches!(call, Call::Write { .. }))
    }

    fn count<F: Fn(&Call) -> bool>(&self, matching: F) -> usize {
        self.calls.lock().iter().filter(|call| matching(call)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl WalletConnector for MockConnector {
    async fn open_connect_ui(&self) -> Result<AccountStatus, ConnectorError> {
        self.record(Call::Connect);
        if self.reject_connect.load(Ordering::SeqCst) {
            return Err(ConnectorError::Rejected);
        }
        let status = *self.connect_account.lock();
        *self.account.lock() = status;
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
        self.record(Call::Switch(chain_id));
        if self.reject_switch.load(Ordering::SeqCst) {
            return Err(ConnectorError::Rejected);
        }
        let mut account = self.account.lock();
        account.chain_id = Some(chain_id);
        let status = *account;
        drop(account);
        self.emit(WalletEvent::AccountChanged {
            address: status.address,
            chain_id: status.chain_id,
        });
        Ok(())
    }

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, ConnectorError> {
        self.record(Call::Read { token, owner });
        if self.fail_read.load(Ordering::SeqCst) {
            return Err(ConnectorError::Transport("execution reverted".to_owned()));
        }
        Ok(*self.balance.lock())
    }

    async fn transfer_token(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<Option<TxHash>, ConnectorError> {
        self.record(Call::Write { token, to, amount });
        if self.hold_writes.load(Ordering::SeqCst) {
            self.write_gate.notified().await;
        }
        if self.reject_write.load(Ordering::SeqCst) {
            return Err(ConnectorError::Rejected);
        }
        Ok(*self.tx_hash.lock())
    }

    fn has_read_client(&self) -> bool {
        self.read_client.load(Ordering::SeqCst)
    }

    fn has_signer(&self) -> bool {
        self.signer.load(Ordering::SeqCst)
    }

    fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
        self.events.subscribe()
    }
}

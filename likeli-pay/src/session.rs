// File: likeli-pay/src/session.rs
// Project: likeli-pay
// Creation date: Saturday 13 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Wednesday 29 July 2026 @ 14:40:21
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use alloy_primitives::{Address, TxHash, U256};
use likeli_common::{
    constants::{TARGET_CHAIN_ID, TARGET_CHAIN_NAME},
    Error, Notice,
};

use crate::display::{balance_label, shorten_address};

/// Connection state of the wallet, owned by the controller.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WalletSession {
    /// No wallet is connected.
    #[default]
    Disconnected,
    /// The connection flow is open, awaiting the user.
    Connecting,
    /// A wallet is connected.
    Connected {
        /// Active account.
        address: Address,
        /// Chain the wallet currently sits on.
        chain_id: u64,
    },
}

impl WalletSession {
    /// Active account, if connected.
    #[must_use]
    pub const fn address(&self) -> Option<Address> {
        match self {
            Self::Connected { address, .. } => Some(*address),
            Self::Disconnected | Self::Connecting => None,
        }
    }

    /// Chain the wallet currently sits on, if connected.
    #[must_use]
    pub const fn chain_id(&self) -> Option<u64> {
        match self {
            Self::Connected { chain_id, .. } => Some(*chain_id),
            Self::Disconnected | Self::Connecting => None,
        }
    }

    /// Whether a wallet is connected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Whether the wallet sits on the target chain.
    #[must_use]
    pub const fn on_target_chain(&self) -> bool {
        matches!(self, Self::Connected { chain_id, .. } if *chain_id == TARGET_CHAIN_ID)
    }
}

/// Latest known USDT balance of the connected account.
///
/// Advisory only: it is refreshed on session changes and before a transfer,
/// but a stale value is acceptable for display.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TokenBalance {
    /// No valid balance (disconnected, wrong chain, or the read failed).
    #[default]
    Unknown,
    /// Balance as of the latest successful read.
    Known(U256),
}

impl TokenBalance {
    /// The balance amount, when one is known.
    #[must_use]
    pub const fn known(&self) -> Option<U256> {
        match self {
            Self::Known(amount) => Some(*amount),
            Self::Unknown => None,
        }
    }
}

/// Outcome of the latest transfer attempt.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum TransferStatus {
    /// No transfer attempted since the last reset.
    #[default]
    Idle,
    /// A submission is running; no second one may start.
    InFlight,
    /// The latest submission was handed to the wallet.
    Succeeded {
        /// Transaction hash, when the wallet reported one.
        tx: Option<TxHash>,
    },
    /// The latest submission aborted.
    Failed {
        /// Step that aborted it.
        reason: Error,
    },
}

impl TransferStatus {
    /// Whether a submission is currently running.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// Consistent view of the flow state, for presentation.
///
/// Presentation code never mutates the flow: it renders snapshots.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlowSnapshot {
    /// Connection state of the wallet.
    pub session: WalletSession,
    /// Latest known balance.
    pub balance: TokenBalance,
    /// Outcome of the latest transfer attempt.
    pub transfer: TransferStatus,
    /// Message to display to the user, if any.
    pub notice: Option<Notice>,
}

impl FlowSnapshot {
    /// Wallet line of the status display.
    #[must_use]
    pub fn wallet_label(&self) -> String {
        match self.session.address() {
            Some(address) => shorten_address(&address),
            None => "Not connected".to_owned(),
        }
    }

    /// Network line of the status display.
    #[must_use]
    pub const fn network_label(&self) -> &'static str {
        if self.session.on_target_chain() {
            TARGET_CHAIN_NAME
        } else {
            "Wrong network"
        }
    }

    /// Balance line of the status display.
    #[must_use]
    pub fn balance_label(&self) -> String {
        balance_label(&self.balance)
    }
}

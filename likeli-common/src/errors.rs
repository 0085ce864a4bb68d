// File: likeli-common/src/errors.rs
// Project: likeli
// Creation date: Tuesday 09 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Tuesday 28 July 2026 @ 09:52:05
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use std::result;

use thiserror::Error;

use crate::notice::Notice;

/// Results for the payment flow with an [`Error`] associated by default.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can abort a payment flow operation.
///
/// Every variant is terminal for the attempt that produced it: nothing is
/// retried, the user has to trigger the operation again. The technical
/// message (`Display`) goes to the logs, [`Error::notice`] is what the user
/// sees.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The wallet is, or remains, on a chain other than the target one.
    #[error("the wallet is not on the target chain")]
    ChainMismatch,
    /// The connector project identifier is missing from the configuration.
    #[error("the connector project id is not configured")]
    Configuration,
    /// The wallet connection flow failed or was dismissed by the user.
    #[error("the wallet connection failed or was canceled")]
    Connection,
    /// The freshly read balance is zero: there is nothing to transfer.
    #[error("the balance to transfer is zero")]
    InsufficientBalance,
    /// An operation requiring a connected wallet was called without one.
    #[error("no wallet is connected")]
    NotConnected,
    /// The read-only chain client cannot be reached.
    #[error("the read-only chain client is unavailable")]
    ProviderUnavailable,
    /// The wallet cannot sign (for example it disconnected mid-flow).
    #[error("the wallet signer is unavailable")]
    SignerUnavailable,
    /// The user rejected the signature, or the broadcast failed.
    #[error("the transfer was rejected or failed to broadcast")]
    TransferRejected,
}

impl Error {
    /// The message displayed to the user when this error aborts an attempt.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::ChainMismatch => "Switch to BSC to continue.",
            Self::Configuration => {
                "Missing WalletConnect project id. Set LIKELI_WALLETCONNECT_PROJECT_ID in the environment."
            }
            Self::Connection => "Wallet connection failed or was canceled.",
            Self::InsufficientBalance => "No USDT balance available to transfer.",
            Self::NotConnected => "Connect your wallet first.",
            Self::ProviderUnavailable => "Public client unavailable. Please try again.",
            Self::SignerUnavailable => "Wallet write unavailable. Please reconnect.",
            Self::TransferRejected => "Transfer was canceled or failed.",
        }
    }
}

impl From<&Error> for Notice {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn from(error: &Error) -> Self {
        Self::new(error.notice())
    }
}

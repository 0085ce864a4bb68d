// File: likeli-pay/src/lib.rs
// Project: likeli-pay
// Creation date: Saturday 13 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Tuesday 28 July 2026 @ 10:02:33
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

//! Payment flow for Likeli's token sale.
//!
//! The whole wallet interaction is mediated by a single controller,
//! [`PayFlow`]: connect an external wallet, make sure it sits on the target
//! chain, read the USDT balance and submit a full-balance transfer to the
//! sale treasury. The wallet itself stays behind the [`WalletConnector`]
//! trait so the flow runs the same against a live RPC endpoint or a test
//! double.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod connector;
mod controller;
mod display;
mod session;

// Only make public elements that would be useful.
/// Runtime configuration of the payment flow.
pub use config::{PayConfig, DEFAULT_RPC_URL, PROJECT_ID_ENV, RPC_URL_ENV};
/// Contract with the external wallet connector.
pub use connector::{AccountStatus, ConnectorError, ConnectorResult, WalletConnector, WalletEvent};
/// The payment flow controller itself.
pub use controller::{PayFlow, TransferOutcome};
/// Balance / address rendering helpers.
pub use display::{format_units, shorten_address};
/// UI-observable state of the flow.
pub use session::{FlowSnapshot, TokenBalance, TransferStatus, WalletSession};

// File: likeli-onchain/src/lib.rs
// Project: likeli-pay
// Creation date: Thursday 02 July 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Wednesday 29 July 2026 @ 15:12:44
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

//! Production [`WalletConnector`] for Likeli's payment rail.
//!
//! Reads go through an HTTP JSON-RPC provider, writes through a local
//! signer attached to it. The crate stays a thin adapter: every flow
//! decision lives in `likeli-pay`.
//!
//! [`WalletConnector`]: likeli_pay::WalletConnector

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bindings;
mod connector;
mod signer;

/// The connector itself.
pub use connector::{BuildError, RpcConnector};
/// Local signer construction helpers.
pub use signer::{signer_from_mnemonic, signer_from_private_key};

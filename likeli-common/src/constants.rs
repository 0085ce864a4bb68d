// File: likeli-common/src/constants.rs
// Project: likeli
// Creation date: Tuesday 09 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Thursday 02 July 2026 @ 11:23:40
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use alloy_primitives::{address, Address};

/// Chain id of the only supported network (BNB Smart Chain).
pub const TARGET_CHAIN_ID: u64 = 56;

/// Human readable name of the target network.
pub const TARGET_CHAIN_NAME: &str = "BSC (BEP-20)";

/// BEP-20 USDT contract on the target chain.
pub const USDT_ADDRESS: Address = address!("55d398326f99059ff775485246999027b3197955");

/// Decimals of the USDT contract on BSC (18, unlike its Ethereum deployment).
pub const USDT_DECIMALS: u8 = 18;

/// Ticker displayed next to balances.
pub const USDT_SYMBOL: &str = "USDT";

/// Number of fractional digits kept when displaying a balance.
pub const BALANCE_DISPLAY_PRECISION: usize = 6;

/// Sale treasury receiving every payment.
pub const RECEIVING_ADDRESS: Address = address!("c0ffee254729296a45a3885639ac7e10f9d54979");

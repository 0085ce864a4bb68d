// File: likeli-pay/tests/common/mod.rs
// Project: likeli-pay
// Creation date: Wednesday 17 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Monday 22 June 2026 @ 09:14:46
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use alloy_primitives::U256;

pub use tests_utilities::{
    connector::Call,
    environment::{
        init_connected, init_default, init_unconfigured, init_wrong_chain, TEST_TX_HASH,
        USER_ADDRESS,
    },
};

/// Raw amount for a whole number of USDT (18 decimals).
#[must_use]
pub fn usdt(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10_u128.pow(18))
}

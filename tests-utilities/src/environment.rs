// File: tests-utilities/src/environment.rs
// Project: likeli
// Creation date: Saturday 13 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Tuesday 04 August 2026 @ 18:41:55
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use std::sync::Arc;

use alloy_primitives::{address, b256, Address, TxHash, U256};
use likeli_common::constants::TARGET_CHAIN_ID;
use likeli_pay::{PayConfig, PayFlow, WalletConnector};

use crate::connector::MockConnector;

/// Project identifier used by the test configurations.
pub const TEST_PROJECT_ID: &str = "likeli-tests";

/// RPC endpoint used by the test configurations (never dialed).
pub const TEST_RPC_URL: &str = "http://localhost:8545";

/// Account connected by the environment builders.
pub const USER_ADDRESS: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

/// Hash reported by the mock wallet for submitted transfers.
pub const TEST_TX_HASH: TxHash =
    b256!("00a2b4f1c3d5e7092b4d6f8101234567890abcdef0123456789abcdef0123456");

/// Environment used for the payment flow tests.
pub struct Environment {
    /// The scripted connector behind the flow.
    pub connector: Arc<MockConnector>,
    /// The flow under test.
    pub flow: PayFlow,
}

impl Environment {
    fn build(config: PayConfig) -> Self {
        let connector = Arc::new(MockConnector::new());
        let flow = PayFlow::new(Arc::clone(&connector) as Arc<dyn WalletConnector>, config);
        Self { connector, flow }
    }
}

/// A configured flow with no wallet connected yet.
#[must_use]
pub fn init_default() -> Environment {
    Environment::build(PayConfig::new(Some(TEST_PROJECT_ID.to_owned()), TEST_RPC_URL))
}

/// A flow whose connector project identifier is missing.
#[must_use]
pub fn init_unconfigured() -> Environment {
    Environment::build(PayConfig::new(None, TEST_RPC_URL))
}

/// A flow connected on the target chain with the given balance.
///
/// The calls recorded during setup are cleared: tests only see their own.
///
/// # Panics
/// If the scripted connection fails, which would be a bug in the utilities.
pub async fn init_connected(balance: U256) -> Environment {
    let env = init_default();
    env.connector.set_connect_account(USER_ADDRESS, TARGET_CHAIN_ID);
    env.connector.set_balance(balance);
    env.flow.connect().await.unwrap();
    env.connector.clear_calls();
    env
}

/// A flow connected on the wrong chain with the given balance.
///
/// # Panics
/// If the scripted connection fails, which would be a bug in the utilities.
pub async fn init_wrong_chain(chain_id: u64, balance: U256) -> Environment {
    let env = init_default();
    env.connector.set_connect_account(USER_ADDRESS, chain_id);
    env.connector.set_balance(balance);
    env.flow.connect().await.unwrap();
    env.connector.clear_calls();
    env
}

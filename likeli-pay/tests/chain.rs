// File: likeli-pay/tests/chain.rs
// Project: likeli-pay
// Creation date: Wednesday 17 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Tuesday 04 August 2026 @ 19:38:02
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

#![allow(clippy::tests_outside_test_module)]
#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]

type Error = Box<dyn error::Error>;
type Result<T> = result::Result<T, Error>;

use std::{error, result};

use likeli_common::{constants::TARGET_CHAIN_ID, Error as FlowError};
use likeli_pay::TokenBalance;

use crate::common::{init_connected, init_default, init_wrong_chain, usdt};

pub mod common;

#[tokio::test]
async fn already_on_target_is_a_no_op() -> Result<()> {
    let env = init_connected(usdt(1)).await;

    env.flow.ensure_target_chain().await?;

    assert_eq!(env.connector.switch_count(), 0);
    Ok(())
}

#[tokio::test]
async fn switches_and_refreshes() -> Result<()> {
    let env = init_wrong_chain(1, usdt(2)).await;
    assert_eq!(env.flow.snapshot().balance, TokenBalance::Unknown);

    env.flow.ensure_target_chain().await?;

    let snapshot = env.flow.snapshot();
    assert_eq!(snapshot.session.chain_id(), Some(TARGET_CHAIN_ID));
    assert_eq!(snapshot.balance, TokenBalance::Known(usdt(2)));
    assert_eq!(env.connector.switch_count(), 1);
    assert_eq!(env.connector.read_count(), 1);
    Ok(())
}

#[tokio::test]
async fn refused_switch_leaves_the_chain_unchanged() {
    let env = init_wrong_chain(1, usdt(2)).await;
    env.connector.reject_switches();

    let error = env.flow.ensure_target_chain().await.unwrap_err();
    assert_eq!(error, FlowError::ChainMismatch);

    let snapshot = env.flow.snapshot();
    assert_eq!(snapshot.session.chain_id(), Some(1));
    assert_eq!(snapshot.balance, TokenBalance::Unknown);
    assert_eq!(snapshot.notice.unwrap().as_str(), "Switch to BSC to continue.");
}

#[tokio::test]
async fn requires_a_connected_wallet() {
    let env = init_default();

    let error = env.flow.ensure_target_chain().await.unwrap_err();
    assert_eq!(error, FlowError::NotConnected);
    assert_eq!(env.connector.switch_count(), 0);
}

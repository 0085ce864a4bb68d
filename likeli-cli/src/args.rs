// File: likeli-cli/src/args.rs
// Project: likeli-pay
// Creation date: Monday 06 July 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Wednesday 29 July 2026 @ 15:26:10
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use clap::{Parser, Subcommand};
use likeli_pay::PayConfig;

/// Command line interface of the payment rail.
#[derive(Debug, Parser)]
#[command(name = "likeli", version, about = "Likeli token sale payment rail")]
pub struct Args {
    /// JSON-RPC endpoint of the target chain.
    #[arg(long, env = "LIKELI_RPC_URL", default_value = likeli_pay::DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// WalletConnect project identifier (wallet actions refuse without it).
    #[arg(long, env = "LIKELI_WALLETCONNECT_PROJECT_ID")]
    pub project_id: Option<String>,

    /// BIP-39 mnemonic of the paying wallet.
    #[arg(long, env = "LIKELI_WALLET_MNEMONIC", conflicts_with = "private_key")]
    pub mnemonic: Option<String>,

    /// Index of the wallet under the mnemonic.
    #[arg(long, default_value_t = 0)]
    pub wallet_index: u32,

    /// Raw private key of the paying wallet.
    #[arg(long, env = "LIKELI_WALLET_KEY")]
    pub private_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Actions mirroring the sale page.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the payment status (network, wallet, balance, treasury).
    Status,
    /// Connect the wallet and show the resulting session.
    Connect,
    /// Connect, then transfer the whole USDT balance to the treasury.
    Pay,
    /// Print the treasury receiving address.
    Address,
}

impl Args {
    /// The flow configuration resulting from flags and environment.
    #[must_use]
    pub fn pay_config(&self) -> PayConfig {
        PayConfig::new(self.project_id.clone(), self.rpc_url.clone())
    }
}

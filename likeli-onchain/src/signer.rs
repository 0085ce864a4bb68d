// File: likeli-onchain/src/signer.rs
// Project: likeli-pay
// Creation date: Thursday 02 July 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Monday 06 July 2026 @ 11:17:09
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use alloy::signers::local::{coins_bip39::English, LocalSignerError, MnemonicBuilder, PrivateKeySigner};

use crate::connector::BuildError;

/// Derives a signing key from a BIP-39 mnemonic.
///
/// # Parameters
/// * `phrase` - The mnemonic itself,
/// * `index` - Index of the wallet under the mnemonic.
///
/// # Errors
/// If the phrase is not a valid mnemonic or the derivation fails.
pub fn signer_from_mnemonic(phrase: &str, index: u32) -> Result<PrivateKeySigner, BuildError> {
    MnemonicBuilder::<English>::default()
        .phrase(phrase)
        .index(index)
        .map_err(|err| BuildError::Signer(err.to_string()))?
        .build()
        .map_err(|err| BuildError::Signer(err.to_string()))
}

/// Parses a raw hexadecimal private key into a signer.
///
/// # Errors
/// If the key is not a valid secp256k1 private key.
pub fn signer_from_private_key(key: &str) -> Result<PrivateKeySigner, BuildError> {
    key.trim_start_matches("0x")
        .parse()
        .map_err(|err: LocalSignerError| BuildError::Signer(err.to_string()))
}

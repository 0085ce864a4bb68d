// File: likeli-common/src/notice.rs
// Project: likeli
// Creation date: Tuesday 09 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Monday 06 July 2026 @ 16:08:51
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use std::fmt::{self, Display, Formatter};

use alloy_primitives::TxHash;

/// Transient status message shown to the user after an operation.
///
/// A notice carries no structured error code and is overwritten by the next
/// attempt, whatever its outcome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice(String);

impl Notice {
    /// Wraps a message into a notice.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Notice confirming a submitted transfer.
    ///
    /// # Parameters
    /// * `tx` - Transaction hash, when the wallet reported one.
    #[must_use]
    pub fn transfer_submitted(tx: Option<&TxHash>) -> Self {
        match tx {
            Some(hash) => Self(format!(
                "Transfer submitted. Confirm it in your wallet. Tx: {hash}"
            )),
            None => Self("Transfer submitted. Confirm it in your wallet.".to_owned()),
        }
    }

    /// The message itself.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Notice {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// File: likeli-pay/src/display.rs
// Project: likeli-pay
// Creation date: Saturday 13 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Monday 06 July 2026 @ 17:31:24
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use alloy_primitives::{Address, U256};
use likeli_common::constants::{BALANCE_DISPLAY_PRECISION, USDT_DECIMALS, USDT_SYMBOL};

use crate::session::TokenBalance;

/// Renders a raw token amount as a decimal string.
///
/// The fractional part is truncated (never rounded) to `precision` digits
/// and always zero-padded to that width, so `1_000000000000000000` with 18
/// decimals and a precision of 6 renders as `1.000000`.
///
/// # Parameters
/// * `value` - Raw amount in the token's smallest unit,
/// * `decimals` - Decimals of the token contract,
/// * `precision` - Fractional digits kept in the output.
#[must_use]
pub fn format_units(value: U256, decimals: u8, precision: usize) -> String {
    let Some(base) = U256::from(10_u8).checked_pow(U256::from(decimals)) else {
        return value.to_string();
    };
    let Some(whole) = value.checked_div(base) else {
        return value.to_string();
    };
    let Some(fraction) = value.checked_rem(base) else {
        return value.to_string();
    };
    if precision == 0 {
        return whole.to_string();
    }
    let mut digits = format!("{fraction:0>width$}", width = usize::from(decimals));
    digits.truncate(precision);
    format!("{whole}.{digits}")
}

/// Shortens an address for display (`0xf39F...2266`).
#[must_use]
pub fn shorten_address(address: &Address) -> String {
    let hex = address.to_string();
    let (Some(head), Some(tail)) = (
        hex.get(..6),
        hex.len().checked_sub(4).and_then(|start| hex.get(start..)),
    ) else {
        return hex;
    };
    format!("{head}...{tail}")
}

/// Balance line of the status display (`1.000000 USDT`, or `--` when the
/// balance is not valid).
#[must_use]
pub fn balance_label(balance: &TokenBalance) -> String {
    match balance.known() {
        Some(amount) => format!(
            "{} {USDT_SYMBOL}",
            format_units(amount, USDT_DECIMALS, BALANCE_DISPLAY_PRECISION)
        ),
        None => "--".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn one_token() {
        let value = U256::from(1_000_000_000_000_000_000_u128);
        assert_eq!(format_units(value, 18, 6), "1.000000");
    }

    #[test]
    fn truncates_instead_of_rounding() {
        let value = U256::from(1_234_567_890_123_456_789_u128);
        assert_eq!(format_units(value, 18, 6), "1.234567");
    }

    #[test]
    fn pads_small_fractions() {
        let value = U256::from(42_u8);
        assert_eq!(format_units(value, 18, 6), "0.000000");
        assert_eq!(format_units(value, 18, 18), "0.000000000000000042");
    }

    #[test]
    fn zero_precision_keeps_whole_part_only() {
        let value = U256::from(1_999_999_999_999_999_999_u128);
        assert_eq!(format_units(value, 18, 0), "1");
    }

    #[test]
    fn shortened_address() {
        let address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        assert_eq!(shorten_address(&address), "0xf39F...2266");
    }

    #[test]
    fn balance_labels() {
        let known = TokenBalance::Known(U256::from(1_000_000_000_000_000_000_u128));
        assert_eq!(balance_label(&known), "1.000000 USDT");
        assert_eq!(balance_label(&TokenBalance::Unknown), "--");
    }
}

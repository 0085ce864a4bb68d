// File: likeli-onchain/src/bindings.rs
// Project: likeli-pay
// Creation date: Thursday 02 July 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Thursday 02 July 2026 @ 16:55:30
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use alloy::sol;

sol! {
    /// The slice of the ERC-20 interface the payment rail consumes.
    #[sol(rpc)]
    interface IERC20 {
        /// Returns the balance of an account.
        function balanceOf(address account) external view returns (uint256);

        /// Transfers tokens to a recipient.
        function transfer(address to, uint256 amount) external returns (bool);

        /// Emitted when tokens are transferred.
        event Transfer(address indexed from, address indexed to, uint256 value);
    }
}

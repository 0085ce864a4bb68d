// File: likeli-pay/src/config.rs
// Project: likeli-pay
// Creation date: Saturday 13 June 2026
// Author: Vincent Berthier <vincent.berthier@likeli.io>
// -----
// Last modified: Tuesday 28 July 2026 @ 10:04:12
// Modified by: Vincent Berthier
// -----
// Copyright © 2026 <Likeli> - All rights reserved

use std::env;

/// Environment variable holding the WalletConnect project identifier.
pub const PROJECT_ID_ENV: &str = "LIKELI_WALLETCONNECT_PROJECT_ID";

/// Environment variable overriding the JSON-RPC endpoint.
pub const RPC_URL_ENV: &str = "LIKELI_RPC_URL";

/// Public BSC endpoint used when no override is given.
pub const DEFAULT_RPC_URL: &str = "https://bsc-dataseed.binance.org";

/// Runtime configuration of the payment flow.
///
/// A missing (or empty) project identifier is a recognized state, not an
/// error: the rest of the application keeps rendering, only the wallet
/// operations refuse to start. No placeholder identifier is ever substituted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayConfig {
    project_id: Option<String>,
    rpc_url: String,
}

impl PayConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Parameters
    /// * `project_id` - Connector project identifier; `None` or an empty
    ///   string both mean "not configured",
    /// * `rpc_url` - JSON-RPC endpoint of the target chain.
    pub fn new(project_id: Option<String>, rpc_url: impl Into<String>) -> Self {
        Self {
            project_id: project_id.filter(|id| !id.is_empty()),
            rpc_url: rpc_url.into(),
        }
    }

    /// Reads the configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            env::var(PROJECT_ID_ENV).ok(),
            env::var(RPC_URL_ENV).unwrap_or_else(|_| DEFAULT_RPC_URL.to_owned()),
        )
    }

    /// The connector project identifier, if one is configured.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// The JSON-RPC endpoint of the target chain.
    #[must_use]
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Whether the wallet connector can be used at all.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.project_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_project_id() {
        let config = PayConfig::new(Some("likeli-prod".to_owned()), DEFAULT_RPC_URL);
        assert!(config.is_configured());
        assert_eq!(config.project_id(), Some("likeli-prod"));
    }

    #[test]
    fn empty_project_id_is_unconfigured() {
        let config = PayConfig::new(Some(String::new()), DEFAULT_RPC_URL);
        assert!(!config.is_configured());
        assert_eq!(config.project_id(), None);
    }

    #[test]
    fn missing_project_id_is_unconfigured() {
        let config = PayConfig::new(None, DEFAULT_RPC_URL);
        assert!(!config.is_configured());
    }
}

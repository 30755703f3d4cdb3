//! Passthrough display metadata attached to a currency.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use url::Url;

use super::chain::ChainId;
use super::tokens::TokenDecimals;

/// The asset a bridged token is backed by on its home network.
///
/// Recorded as given by the token list. The address is not validated
/// because the underlying asset may live on a network this crate does not
/// know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderlyingToken {
    pub address: String,
    pub decimals: TokenDecimals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UnderlyingToken {
    pub fn new(address: impl Into<String>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            decimals: TokenDecimals::new(decimals),
            symbol: None,
            name: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Optional descriptive fields carried alongside a currency.
///
/// Nothing in this crate reads these fields when comparing or ordering
/// currencies. They ride along for UI and routing layers.
///
/// # Examples
///
/// ```
/// use dexcore::{ChainId, CurrencyMetadata};
///
/// let meta = CurrencyMetadata::new()
///     .with_version("v2")
///     .with_dest_chains([ChainId::BscMainnet, ChainId::PolygonMainnet])
///     .with_router_token(true);
///
/// assert_eq!(meta.version.as_deref(), Some("v2"));
/// assert_eq!(meta.dest_chains.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyMetadata {
    /// Version tag of the token contract deployment
    pub contract_version: Option<String>,

    /// Networks this token can be bridged to
    pub dest_chains: Vec<ChainId>,

    pub logo_url: Option<Url>,

    /// Last known price, in the quote currency of whoever set it
    pub price: Option<BigDecimal>,

    /// Identifier of the token in an external token list
    pub token_id: Option<String>,

    pub version: Option<String>,

    /// Whether the token is routed through the cross-chain router
    pub router_token: bool,

    /// Backing asset of a bridged token
    pub underlying: Option<UnderlyingToken>,
}

impl CurrencyMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contract_version(mut self, contract_version: impl Into<String>) -> Self {
        self.contract_version = Some(contract_version.into());
        self
    }

    pub fn with_dest_chains(mut self, chains: impl IntoIterator<Item = ChainId>) -> Self {
        self.dest_chains = chains.into_iter().collect();
        self
    }

    pub fn with_logo_url(mut self, logo_url: Url) -> Self {
        self.logo_url = Some(logo_url);
        self
    }

    pub fn with_price(mut self, price: BigDecimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_router_token(mut self, router_token: bool) -> Self {
        self.router_token = router_token;
        self
    }

    pub fn with_underlying(mut self, underlying: UnderlyingToken) -> Self {
        self.underlying = Some(underlying);
        self
    }

    /// Returns `true` when no field has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_empty() {
        assert!(CurrencyMetadata::new().is_empty());
        assert!(!CurrencyMetadata::new().with_router_token(true).is_empty());
    }

    #[test]
    fn test_builder_sets_every_field() {
        let logo = Url::parse("https://assets.example.org/weth.png").unwrap();
        let price = BigDecimal::from_str("3120.55").unwrap();

        let meta = CurrencyMetadata::new()
            .with_contract_version("1")
            .with_dest_chains([ChainId::FantomMainnet])
            .with_logo_url(logo.clone())
            .with_price(price.clone())
            .with_token_id("WETH-1")
            .with_version("2")
            .with_router_token(true)
            .with_underlying(UnderlyingToken::new("0xunderlying", 6).with_symbol("USDC"));

        assert_eq!(meta.contract_version.as_deref(), Some("1"));
        assert_eq!(meta.dest_chains, vec![ChainId::FantomMainnet]);
        assert_eq!(meta.logo_url, Some(logo));
        assert_eq!(meta.price, Some(price));
        assert_eq!(meta.token_id.as_deref(), Some("WETH-1"));
        assert_eq!(meta.version.as_deref(), Some("2"));
        assert!(meta.router_token);
        assert_eq!(
            meta.underlying.as_ref().and_then(|u| u.symbol.as_deref()),
            Some("USDC")
        );
    }

    #[test]
    fn test_underlying_alone_is_not_empty() {
        let meta = CurrencyMetadata::new().with_underlying(UnderlyingToken::new("0xabc", 18));
        assert!(!meta.is_empty());
    }

    #[test]
    fn test_deserialize_underlying() {
        let json = r#"{"underlying":{"address":"0xabc","decimals":6,"name":"USD Coin"}}"#;
        let meta: CurrencyMetadata = serde_json::from_str(json).unwrap();
        let underlying = meta.underlying.unwrap();
        assert_eq!(underlying.address, "0xabc");
        assert_eq!(underlying.decimals.as_u8(), 6);
        assert_eq!(underlying.name.as_deref(), Some("USD Coin"));
        assert_eq!(underlying.symbol, None);

        let missing_decimals = r#"{"underlying":{"address":"0xabc"}}"#;
        assert!(serde_json::from_str::<CurrencyMetadata>(missing_decimals).is_err());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let json = r#"{"destChains":[56,137],"routerToken":true}"#;
        let meta: CurrencyMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(
            meta.dest_chains,
            vec![ChainId::BscMainnet, ChainId::PolygonMainnet]
        );
        assert!(meta.router_token);
        assert!(meta.logo_url.is_none());
        assert!(meta.underlying.is_none());
    }

    #[test]
    fn test_deserialize_rejects_unknown_chain() {
        let json = r#"{"destChains":[8453]}"#;
        assert!(serde_json::from_str::<CurrencyMetadata>(json).is_err());
    }
}

//! Canonically ordered pair of distinct tokens.

use serde::Serialize;

use super::Token;
use crate::errors::TokenError;
use crate::types::chain::ChainId;

/// Two distinct tokens on one network, in canonical order.
///
/// `token0` always sorts before `token1` per [`Token::sorts_before`], so the
/// same unordered pair yields the same `TokenPair` whatever the argument
/// order. Pool keys and pool addresses are derived from this ordering.
///
/// # Examples
///
/// ```
/// use dexcore::{ChainId, Token, TokenPair};
///
/// let usdc = Token::new(ChainId::Mainnet, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", 6)?;
/// let weth = Token::new(ChainId::Mainnet, "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", 18)?;
///
/// let pair = TokenPair::new(weth.clone(), usdc.clone())?;
/// assert_eq!(pair.token0(), &usdc);
/// assert_eq!(pair.token1(), &weth);
/// # Ok::<(), dexcore::TokenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    token0: Token,
    token1: Token,
}

impl TokenPair {
    /// Order `a` and `b` canonically.
    ///
    /// # Errors
    ///
    /// Propagates [`TokenError::CrossChainComparison`] and
    /// [`TokenError::IdenticalAddress`] from [`Token::sorts_before`].
    pub fn new(a: Token, b: Token) -> Result<Self, TokenError> {
        let (token0, token1) = if a.sorts_before(&b)? { (a, b) } else { (b, a) };
        Ok(Self { token0, token1 })
    }

    /// The token whose address sorts first.
    pub fn token0(&self) -> &Token {
        &self.token0
    }

    pub fn token1(&self) -> &Token {
        &self.token1
    }

    pub fn chain_id(&self) -> ChainId {
        self.token0.chain_id()
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.token0.equals(token) || self.token1.equals(token)
    }

    /// The counterpart of `token`, or `None` if `token` is not in the pair.
    pub fn other(&self, token: &Token) -> Option<&Token> {
        if self.token0.equals(token) {
            Some(&self.token1)
        } else if self.token1.equals(token) {
            Some(&self.token0)
        } else {
            None
        }
    }

    pub fn into_tokens(self) -> (Token, Token) {
        (self.token0, self.token1)
    }
}

//! Native, non-addressed currency of a network.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::constants::NATIVE_DECIMALS;
use crate::registry;
use crate::types::chain::ChainId;
use crate::types::currency::{Currency, CurrencyInfo};

/// The coin a network pays gas in (ETH, BNB, MATIC, ...).
///
/// It has no contract address, so it can never equal a [`Token`](crate::Token).
/// There is one instance per network, reached through [`NativeCurrency::on`];
/// two native currencies are equal iff they belong to the same network.
///
/// # Examples
///
/// ```
/// use dexcore::{ChainId, Currency, NativeCurrency};
///
/// let bnb = NativeCurrency::on(ChainId::BscMainnet);
/// assert_eq!(bnb.symbol(), Some("BNB"));
/// assert_eq!(bnb.decimals().as_u8(), 18);
/// ```
#[derive(Debug, Clone)]
pub struct NativeCurrency {
    chain_id: ChainId,
    currency: CurrencyInfo,
}

impl NativeCurrency {
    /// The native currency singleton of `chain`.
    pub fn on(chain: ChainId) -> &'static NativeCurrency {
        registry::native_currency(chain)
    }

    pub(crate) fn build(chain_id: ChainId) -> Self {
        Self {
            chain_id,
            currency: CurrencyInfo::new(NATIVE_DECIMALS).with_symbol(chain_id.native_symbol()),
        }
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }
}

impl Currency for NativeCurrency {
    fn info(&self) -> &CurrencyInfo {
        &self.currency
    }

    fn as_native(&self) -> Option<&NativeCurrency> {
        Some(self)
    }
}

impl PartialEq for NativeCurrency {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }
}

impl Eq for NativeCurrency {}

impl Hash for NativeCurrency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
    }
}

impl fmt::Display for NativeCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.chain_id.native_symbol(), self.chain_id)
    }
}

//! Equality across the currency capability set.

use crate::types::currency::Currency;

/// Compare two currencies without knowing their concrete kinds.
///
/// - two tokens: [`Token::equals`](crate::Token::equals)
/// - a token and anything else: never equal, even on the same network
/// - two non-token currencies: the same instance, or the native currency of
///   the same network
///
/// Instance identity is an address comparison. Distinct values of a
/// zero-sized `Currency` type may share an address and then compare equal,
/// so custom currencies should carry at least one field.
///
/// # Examples
///
/// ```
/// use dexcore::{currency_equals, wrapped_native, ChainId, NativeCurrency};
///
/// let eth = NativeCurrency::on(ChainId::Mainnet);
/// let weth = wrapped_native(ChainId::Mainnet);
///
/// assert!(currency_equals(eth, eth));
/// assert!(currency_equals(weth, weth));
/// assert!(!currency_equals(eth, weth));
/// ```
pub fn currency_equals(a: &dyn Currency, b: &dyn Currency) -> bool {
    match (a.as_token(), b.as_token()) {
        (Some(a), Some(b)) => a.equals(b),
        (Some(_), None) | (None, Some(_)) => false,
        (None, None) => {
            std::ptr::addr_eq(a, b)
                || matches!((a.as_native(), b.as_native()), (Some(a), Some(b)) if a == b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::wrapped_native;
    use crate::types::chain::ChainId;
    use crate::types::currency::CurrencyInfo;
    use crate::types::native::NativeCurrency;
    use crate::types::tokens::Token;

    /// A currency that is neither a token nor a native coin.
    #[derive(Debug)]
    struct Points(CurrencyInfo);

    impl Currency for Points {
        fn info(&self) -> &CurrencyInfo {
            &self.0
        }
    }

    #[test]
    fn test_tokens_delegate_to_equals() {
        let lower = Token::new(
            ChainId::Mainnet,
            "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            18,
        )
        .unwrap();
        assert!(currency_equals(&lower, wrapped_native(ChainId::Mainnet)));
        assert!(!currency_equals(&lower, wrapped_native(ChainId::BscMainnet)));
    }

    #[test]
    fn test_token_never_equals_native() {
        for chain in ChainId::ALL {
            let native = NativeCurrency::on(chain);
            let weth = wrapped_native(chain);
            assert!(!currency_equals(native, weth));
            assert!(!currency_equals(weth, native));
        }
    }

    #[test]
    fn test_natives_compare_by_chain() {
        assert!(currency_equals(
            NativeCurrency::on(ChainId::Mainnet),
            NativeCurrency::on(ChainId::Mainnet)
        ));
        assert!(!currency_equals(
            NativeCurrency::on(ChainId::Mainnet),
            NativeCurrency::on(ChainId::Goerli)
        ));
    }

    #[test]
    fn test_other_currencies_compare_by_identity() {
        let a = Points(CurrencyInfo::new(0).with_symbol("PTS"));
        let b = Points(CurrencyInfo::new(0).with_symbol("PTS"));
        assert!(currency_equals(&a, &a));
        assert!(!currency_equals(&a, &b));
        assert!(!currency_equals(&a, NativeCurrency::on(ChainId::Mainnet)));
    }
}

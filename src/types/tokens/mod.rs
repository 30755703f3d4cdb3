//! Token types
//!
//! ```text
//! Token (chain + validated address + CurrencyInfo)
//!     |
//!     | sorts_before
//!     ↓
//! TokenPair (token0 < token1, same chain)
//! ```

mod decimals;
mod pair;
mod token;

pub use decimals::TokenDecimals;
pub use pair::TokenPair;
pub use token::Token;

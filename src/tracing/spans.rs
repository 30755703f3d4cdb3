// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for dexcore operations.
//!
//! Telemetry stays out of the business logic: each instrumented operation
//! calls the matching helper here and enters the returned span.
//!
//! ```rust,ignore
//! let span = spans::sort_tokens(self.chain_id, other.chain_id);
//! let _guard = span.enter();
//! ```

use tracing::Span;

use crate::types::chain::ChainId;

/// Create span for validating one raw address string.
///
/// Only the input length is recorded; the raw input may be arbitrary caller data.
#[inline]
pub(crate) fn validate_address(input_len: usize) -> Span {
    tracing::trace_span!("dexcore.validate_address", input_len = input_len)
}

/// Create span for ordering two tokens.
#[inline]
pub(crate) fn sort_tokens(left: ChainId, right: ChainId) -> Span {
    tracing::trace_span!(
        "dexcore.sort_tokens",
        left_chain = left.id(),
        right_chain = right.id(),
    )
}

/// Create span for building one of the static registries.
#[inline]
pub(crate) fn build_registry(registry: &'static str) -> Span {
    tracing::debug_span!("dexcore.build_registry", registry = registry)
}

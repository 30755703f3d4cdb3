// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for currency identity.
//!
//! - Network identifiers
//! - The currency capability set and its display data
//! - Addressed tokens and canonical token pairs
//! - Native, non-addressed coins

pub mod chain;
pub mod currency;
pub mod metadata;
pub mod native;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here

//! Binders: bounded trade/sell containers with content rules.
//!
//! ## Key Types
//!
//! - `BinderKind`: Non-curated, Pauper, Rares, Luxury, Collector
//! - `BinderRules`: Capability record (content rule, trade or sell, sell multiplier)
//! - `Binder`: The container itself
//! - `TradeReceipt`: What a completed trade swapped

pub mod binder;
pub mod kind;

pub use binder::{Binder, TradeReceipt};
pub use kind::{BinderAction, BinderKind, BinderRules};

//! Document composition
//!
//! Fetches the record sets for one inspection lot, joins them in memory
//! into a single nested tree, normalizes empty values under the configured
//! policy, and renders the tree as XML.

pub mod composer;
pub mod join;
pub mod normalize;

pub use composer::DocumentComposer;
pub use join::UsageJoinStrategy;
pub use normalize::EmptyValuePolicy;

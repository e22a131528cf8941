//! Services layer - pure business operations.
//!
//! - Note URL derivation

pub mod url;

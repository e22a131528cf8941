//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with the host and the system:
//! - Host capability traits
//! - JSON settings store
//! - System clipboard
//! - Error types

pub mod clipboard;
pub mod error;
pub mod host;
pub mod storage;

//! # Roster
//!
//! A concurrent in-memory employee store with:
//! - A primary index ordered by employee id
//! - A department index for budgets and department listings
//! - A manager-factor index for "top managers" queries
//! - Line-oriented persistence of heterogeneous employee kinds
//! - Multiple-reader/single-writer concurrency model
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Store                                │
//! │              (one RwLock over all indices)                   │
//! └──────┬──────────────────────┬───────────────────────┬───────┘
//!        │                      │                       │
//!        ▼                      ▼                       ▼
//! ┌─────────────┐      ┌─────────────────┐     ┌─────────────────┐
//! │  employees  │      │   departments   │     │     factors     │
//! │  id → rec   │      │ dept → [rec]    │     │ factor → [mgr]  │
//! └─────────────┘      └─────────────────┘     └─────────────────┘
//!        │
//!        ▼  save_to / restore_from
//! ┌─────────────────────────────────────────────────────────────┐
//! │   one JSON line per record, parsed via RecordRegistry        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RosterError, Result};
pub use config::Config;
pub use record::{Employee, Manager, Ranked, Record, RecordKind, RecordRef, RecordRegistry, SalesPerson, WageEmployee};
pub use store::{Cursor, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Roster
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Prelude module for Ribbon.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use ribbon::prelude::*;
//! ```
//!
//! This provides access to:
//! - The adapter and the query traits a host widget calls (`ListAdapter`, `ListDataSource`, `ListDelegate`)
//! - Row and section model types (`RowItem`, `BasicRow`, `Section`, `IndexPath`)
//! - Reusable views and the registry (`ReusableView`, `LoadableCell`, `ViewRegistry`)
//! - Widget contract and the in-memory widget (`ListWidget`, `HeadlessListWidget`)

// ============================================================================
// Adapter
// ============================================================================

pub use crate::adapter::{AdapterSignals, ListAdapter, ListAdapterDelegate, ListDataSource, ListDelegate};
pub use crate::config::{AdapterConfig, SeparatorStyle};
pub use crate::error::{AdapterError, Result};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{BasicRow, IndexPath, ItemHandle, RowAction, RowActionStyle, RowHeight, RowItem, Section};

// ============================================================================
// Views and Registration
// ============================================================================

pub use crate::registry::{ReuseIdentifier, ViewRegistry, ViewTemplate};
pub use crate::view::{LoadableCell, LoadableHeader, ReusableView};

// ============================================================================
// Widget
// ============================================================================

pub use crate::widget::{HeadlessListWidget, ListWidget, RowAnimation, WidgetEvent};

// ============================================================================
// Providers and Signals
// ============================================================================

pub use crate::provider::{FetchError, ListProvider, ListProviderDelegate};
pub use ribbon_core::{ConnectionId, Signal};

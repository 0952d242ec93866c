//! List providers: sources that fetch rows and hand them to a delegate.
//!
//! A [`ListProvider`] is asked for data with
//! [`request_data`](ListProvider::request_data) and reports back through a
//! [`ListProviderDelegate`]: once when the fetch starts (optionally with rows
//! it already has, such as a cache), then once when it finishes or fails.
//! [`ListAdapter`](crate::ListAdapter) implements the delegate by appending
//! every batch it receives.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ribbon::prelude::*;
//! use ribbon::provider::VecListProvider;
//!
//! #[derive(Default)]
//! struct PostCell;
//! impl ReusableView for PostCell {}
//!
//! let registry = Arc::new(ViewRegistry::new());
//! registry.register_view::<PostCell>("Feed.PostCell").unwrap();
//! let mut adapter = ListAdapter::attach(HeadlessListWidget::new(), registry);
//!
//! let mut provider = VecListProvider::new()
//!     .with_page(vec![Arc::new(BasicRow::new("Feed.PostCell")) as Arc<dyn RowItem>]);
//!
//! adapter.request_from(&mut provider);
//! assert_eq!(adapter.total_rows(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use ribbon_core::logging::targets;

use crate::model::RowItem;

/// Errors reported by a list provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The provider has no more data.
    #[error("No more data to fetch")]
    Exhausted,

    /// The underlying source failed.
    #[error("Fetch failed: {0}")]
    Failed(String),
}

impl FetchError {
    /// Creates a source failure from any displayable error.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Receives the results of a [`ListProvider`] fetch.
pub trait ListProviderDelegate {
    /// Called when a fetch starts, with rows already available, if any.
    fn did_start_fetching(&mut self, available: Option<Vec<Arc<dyn RowItem>>>);

    /// Called with the fetched rows when a fetch completes.
    fn did_finish_fetching(&mut self, items: Vec<Arc<dyn RowItem>>);

    /// Called when a fetch fails.
    fn did_finish_fetching_with_error(&mut self, error: FetchError);
}

/// A source of rows that reports to a [`ListProviderDelegate`].
pub trait ListProvider {
    /// Starts a fetch, reporting progress and results to `delegate`.
    ///
    /// Implementations call `did_start_fetching` first and then exactly one
    /// of `did_finish_fetching` or `did_finish_fetching_with_error`.
    fn request_data(&mut self, delegate: &mut dyn ListProviderDelegate);
}

/// A provider serving pre-built pages, one per request.
///
/// Useful for fixtures, demos and lists whose content is known up front.
/// Once every page is served, further requests fail with
/// [`FetchError::Exhausted`].
#[derive(Default)]
pub struct VecListProvider {
    available: Option<Vec<Arc<dyn RowItem>>>,
    pages: VecDeque<Result<Vec<Arc<dyn RowItem>>, FetchError>>,
    requests: usize,
}

impl VecListProvider {
    /// Creates a provider with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets rows handed over as soon as the next fetch starts.
    pub fn with_available(mut self, items: Vec<Arc<dyn RowItem>>) -> Self {
        self.available = Some(items);
        self
    }

    /// Queues a page of rows.
    pub fn with_page(mut self, items: Vec<Arc<dyn RowItem>>) -> Self {
        self.pages.push_back(Ok(items));
        self
    }

    /// Queues a failed fetch.
    pub fn with_failure(mut self, error: FetchError) -> Self {
        self.pages.push_back(Err(error));
        self
    }

    /// Returns the number of pages (including failures) not yet served.
    pub fn remaining(&self) -> usize {
        self.pages.len()
    }

    /// Returns how many fetches were requested.
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl ListProvider for VecListProvider {
    fn request_data(&mut self, delegate: &mut dyn ListProviderDelegate) {
        self.requests += 1;
        delegate.did_start_fetching(self.available.take());

        match self.pages.pop_front() {
            Some(Ok(items)) => {
                tracing::trace!(target: targets::PROVIDER, rows = items.len(), "serving page");
                delegate.did_finish_fetching(items);
            }
            Some(Err(error)) => delegate.did_finish_fetching_with_error(error),
            None => delegate.did_finish_fetching_with_error(FetchError::Exhausted),
        }
    }
}

impl std::fmt::Debug for VecListProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VecListProvider")
            .field("has_available", &self.available.is_some())
            .field("remaining", &self.pages.len())
            .field("requests", &self.requests)
            .finish()
    }
}

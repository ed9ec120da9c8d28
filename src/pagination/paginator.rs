//! The paginator
//!
//! Wraps a [`Pageable`] and a URL template and keeps the derived state
//! (page count, clamped page, current items) valid after every change.

use super::pageable::Pageable;
use super::types::{Links, NavLink, PageLink, PageView};
use super::window::{clamp_page, item_range, link_window, total_pages};
use crate::coerce::Coerce;
use crate::config::PaginatorConfig;
use crate::error::{Error, Result};
use crate::template::UrlTemplate;
use std::fmt;
use tracing::debug;

/// Default active page
pub const DEFAULT_PAGE: i64 = 1;

/// Default items per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default number of page links
pub const DEFAULT_WINDOW: usize = 3;

/// Pagination state over a borrowed collection
pub struct Paginator<'a, P: Pageable + ?Sized> {
    pageable: &'a P,
    url: UrlTemplate,
    page: usize,
    page_size: usize,
    window: usize,
    total_items: usize,
    total_pages: usize,
    items: Vec<P::Item>,
}

impl<'a, P: Pageable + ?Sized> Paginator<'a, P> {
    /// Create a paginator with the default page, page size and window
    pub fn new(pageable: &'a P, url: impl Into<UrlTemplate>) -> Result<Self> {
        Self::builder(pageable, url).build()
    }

    /// Start building a paginator with explicit initial values
    pub fn builder(pageable: &'a P, url: impl Into<UrlTemplate>) -> PaginatorBuilder<'a, P> {
        PaginatorBuilder {
            pageable,
            url: url.into(),
            page: Ok(DEFAULT_PAGE),
            page_size: Ok(DEFAULT_PAGE_SIZE as i64),
            window: Ok(DEFAULT_WINDOW as i64),
        }
    }

    /// Create a paginator from a loaded configuration
    pub fn from_config(pageable: &'a P, config: &PaginatorConfig) -> Result<Self> {
        Self::builder(pageable, config.url.clone())
            .page(&config.page)
            .page_size(&config.page_size)
            .window(&config.window)
            .build()
    }

    // ========================================================================
    // Configuration fields
    // ========================================================================

    /// Active page, 1-indexed
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Maximum number of page links
    pub fn window(&self) -> usize {
        self.window
    }

    /// Move to another page; out-of-range pages are clamped
    ///
    /// Values without an integer reading are ignored. Either way the state is
    /// recomputed against the pageable.
    pub fn set_page(&mut self, value: impl Coerce) -> Result<()> {
        let page = match value.coerce() {
            Some(page) => page,
            None => {
                debug!(field = "page", "ignoring non-integer value");
                self.page as i64
            }
        };
        self.apply(page, self.page_size, self.window)
    }

    /// Change the page size; values below one are ignored
    pub fn set_page_size(&mut self, value: impl Coerce) -> Result<()> {
        let page_size = match value.coerce().and_then(|v| usize::try_from(v).ok()) {
            Some(size) if size >= 1 => size,
            _ => {
                debug!(field = "page_size", "ignoring invalid value");
                self.page_size
            }
        };
        self.apply(self.page as i64, page_size, self.window)
    }

    /// Change the window; negative values are ignored
    pub fn set_window(&mut self, value: impl Coerce) -> Result<()> {
        let window = match value.coerce().and_then(|v| usize::try_from(v).ok()) {
            Some(window) => window,
            None => {
                debug!(field = "window", "ignoring invalid value");
                self.window
            }
        };
        self.apply(self.page as i64, self.page_size, window)
    }

    // ========================================================================
    // Collection and URL
    // ========================================================================

    /// The wrapped collection
    pub fn pageable(&self) -> &'a P {
        self.pageable
    }

    /// Swap in another collection and recompute
    ///
    /// On failure the paginator keeps the previous collection.
    pub fn set_pageable(&mut self, pageable: &'a P) -> Result<()> {
        let previous = std::mem::replace(&mut self.pageable, pageable);
        let result = self.recompute();
        if result.is_err() {
            self.pageable = previous;
        }
        result
    }

    /// URL template
    pub fn url(&self) -> &UrlTemplate {
        &self.url
    }

    /// Replace the URL template
    pub fn set_url(&mut self, url: impl Into<UrlTemplate>) {
        self.url = url.into();
    }

    /// URL of the given page
    pub fn build_url(&self, page: usize) -> String {
        self.url.render(page)
    }

    // ========================================================================
    // Derived state
    // ========================================================================

    /// Number of items in the collection at the last recomputation
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages, at least one
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Items on the active page
    pub fn items(&self) -> &[P::Item] {
        &self.items
    }

    /// Re-read the collection and restore every invariant
    pub fn recompute(&mut self) -> Result<()> {
        self.apply(self.page as i64, self.page_size, self.window)
    }

    /// Compute the state for the given fields and commit it on success
    fn apply(&mut self, requested_page: i64, page_size: usize, window: usize) -> Result<()> {
        let total_items = self.pageable.total_items()?;
        let total_pages = total_pages(total_items, page_size);
        let page = clamp_page(requested_page, total_pages);
        let items = self
            .pageable
            .slice(item_range(page, page_size, total_items))?;

        debug!(
            page,
            page_size,
            window,
            total_items,
            total_pages,
            items = items.len(),
            "recomputed pagination"
        );

        self.page = page;
        self.page_size = page_size;
        self.window = window;
        self.total_items = total_items;
        self.total_pages = total_pages;
        self.items = items;
        Ok(())
    }

    // ========================================================================
    // Links
    // ========================================================================

    /// Page links around the active page
    pub fn pages(&self) -> Vec<PageLink> {
        link_window(self.page, self.window, self.total_pages)
            .map(|number| PageLink {
                url: self.build_url(number),
                number,
                current: number == self.page,
            })
            .collect()
    }

    /// Link to page one, absent on page one
    pub fn first(&self) -> Option<NavLink> {
        self.has_previous().then(|| NavLink::new(self.build_url(1)))
    }

    /// Link to the preceding page, absent on page one
    pub fn previous(&self) -> Option<NavLink> {
        self.has_previous()
            .then(|| NavLink::new(self.build_url(self.page - 1)))
    }

    /// Link to the following page, absent on the last page
    pub fn next(&self) -> Option<NavLink> {
        self.has_next()
            .then(|| NavLink::new(self.build_url(self.page + 1)))
    }

    /// Link to the last page, absent on the last page
    pub fn last(&self) -> Option<NavLink> {
        self.has_next()
            .then(|| NavLink::new(self.build_url(self.total_pages)))
    }

    fn has_previous(&self) -> bool {
        self.page != 1
    }

    fn has_next(&self) -> bool {
        self.page != self.total_pages
    }

    /// Links only, without items
    pub fn links(&self) -> Links {
        Links {
            pages: self.pages(),
            first: self.first(),
            previous: self.previous(),
            next: self.next(),
            last: self.last(),
        }
    }

    /// Serializable snapshot of the whole state
    pub fn view(&self) -> PageView<'_, P::Item> {
        PageView {
            page: self.page,
            page_size: self.page_size,
            window: self.window,
            total_items: self.total_items,
            total_pages: self.total_pages,
            items: &self.items,
            pages: self.pages(),
            first: self.first(),
            previous: self.previous(),
            next: self.next(),
            last: self.last(),
        }
    }
}

impl<P> fmt::Debug for Paginator<'_, P>
where
    P: Pageable + ?Sized,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("url", &self.url)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("window", &self.window)
            .field("total_items", &self.total_items)
            .field("total_pages", &self.total_pages)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for a [`Paginator`]
///
/// Initial values are strict: anything without an integer reading, a page
/// size below one or a negative window fails [`PaginatorBuilder::build`]
/// with [`Error::InvalidArgument`].
pub struct PaginatorBuilder<'a, P: Pageable + ?Sized> {
    pageable: &'a P,
    url: UrlTemplate,
    page: std::result::Result<i64, String>,
    page_size: std::result::Result<i64, String>,
    window: std::result::Result<i64, String>,
}

fn coerced<V: Coerce + fmt::Debug>(value: V) -> std::result::Result<i64, String> {
    value.coerce().ok_or_else(|| format!("{value:?}"))
}

impl<'a, P: Pageable + ?Sized> PaginatorBuilder<'a, P> {
    /// Initial page
    #[must_use]
    pub fn page<V: Coerce + fmt::Debug>(mut self, value: V) -> Self {
        self.page = coerced(value);
        self
    }

    /// Initial page size
    #[must_use]
    pub fn page_size<V: Coerce + fmt::Debug>(mut self, value: V) -> Self {
        self.page_size = coerced(value);
        self
    }

    /// Initial window
    #[must_use]
    pub fn window<V: Coerce + fmt::Debug>(mut self, value: V) -> Self {
        self.window = coerced(value);
        self
    }

    /// Validate the initial values and run the first recomputation
    pub fn build(self) -> Result<Paginator<'a, P>> {
        let page = self
            .page
            .map_err(|raw| Error::invalid_argument("page", raw))?;
        let page_size = self
            .page_size
            .map_err(|raw| Error::invalid_argument("page_size", raw))
            .and_then(|size| match usize::try_from(size) {
                Ok(size) if size >= 1 => Ok(size),
                _ => Err(Error::invalid_argument("page_size", size.to_string())),
            })?;
        let window = self
            .window
            .map_err(|raw| Error::invalid_argument("window", raw))
            .and_then(|window| {
                usize::try_from(window)
                    .map_err(|_| Error::invalid_argument("window", window.to_string()))
            })?;

        let mut paginator = Paginator {
            pageable: self.pageable,
            url: self.url,
            page: 1,
            page_size,
            window,
            total_items: 0,
            total_pages: 1,
            items: Vec::new(),
        };
        paginator.apply(page, page_size, window)?;
        Ok(paginator)
    }
}

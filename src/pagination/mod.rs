//! Pagination module
//!
//! Computes the metadata a paged view needs: the active page's items, a
//! bounded window of page links and first/previous/next/last targets.
//!
//! # Overview
//!
//! A [`Paginator`] borrows any [`Pageable`] collection and a URL template.
//! Every change to the page, page size or window runs one shared
//! recomputation that re-reads the collection, clamps the page into
//! `1..=total_pages` and slices out the current items.

mod pageable;
mod paginator;
mod types;
mod window;

pub use pageable::{FromFn, Pageable};
pub use paginator::{
    Paginator, PaginatorBuilder, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW,
};
pub use types::{Links, NavLink, PageLink, PageView};
pub use window::{clamp_page, item_range, link_window, total_pages};

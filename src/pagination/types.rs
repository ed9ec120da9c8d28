//! Pagination descriptor types
//!
//! Serializable records handed to whatever renders the paged view.

use serde::{Deserialize, Serialize};

/// A link in the page window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Rendered URL for the page
    pub url: String,
    /// 1-indexed page number
    pub number: usize,
    /// Whether this is the active page
    pub current: bool,
}

/// A first/previous/next/last navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Rendered URL for the target page
    pub url: String,
}

impl NavLink {
    /// Create a navigation link
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Snapshot of every derived pagination value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a, T> {
    pub page: usize,
    pub page_size: usize,
    pub window: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub items: &'a [T],
    pub pages: Vec<PageLink>,
    pub first: Option<NavLink>,
    pub previous: Option<NavLink>,
    pub next: Option<NavLink>,
    pub last: Option<NavLink>,
}

/// Navigation-only part of a [`PageView`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Links {
    pub pages: Vec<PageLink>,
    pub first: Option<NavLink>,
    pub previous: Option<NavLink>,
    pub next: Option<NavLink>,
    pub last: Option<NavLink>,
}

impl<T> PageView<'_, T> {
    /// Drop the items, keeping the links
    pub fn into_links(self) -> Links {
        Links {
            pages: self.pages,
            first: self.first,
            previous: self.previous,
            next: self.next,
            last: self.last,
        }
    }
}

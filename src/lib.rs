//! # pagewise
//!
//! Pagination metadata for any finite, indexable collection: the active
//! page's items, a bounded window of page links and first/previous/next/last
//! navigation targets.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewise::{Paginator, Result};
//!
//! fn main() -> Result<()> {
//!     let articles: Vec<u32> = (1..=95).collect();
//!     let mut pager = Paginator::new(&articles, "/articles?page=__page__")?;
//!
//!     pager.set_page(100)?;
//!     assert_eq!(pager.page(), 10);
//!     assert_eq!(pager.items(), &[91, 92, 93, 94, 95]);
//!
//!     let numbers: Vec<usize> = pager.pages().iter().map(|p| p.number).collect();
//!     assert_eq!(numbers, vec![8, 9, 10]);
//!     assert!(pager.next().is_none());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Paginator                           │
//! │  set_page / set_page_size / set_window  →  recompute()       │
//! │  items · pages · first · previous · next · last · view()     │
//! └──────────────────────────────────────────────────────────────┘
//!            │                    │                     │
//!      ┌─────┴─────┐        ┌─────┴─────┐         ┌─────┴─────┐
//!      │ Pageable  │        │  Coerce   │         │UrlTemplate│
//!      ├───────────┤        ├───────────┤         ├───────────┤
//!      │ Vec, [T]  │        │ ints      │         │ __page__  │
//!      │ ranges    │        │ floats    │         │           │
//!      │ JSON      │        │ strings   │         │           │
//!      │ FromFn    │        │ JSON      │         │           │
//!      └───────────┘        └───────────┘         └───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Lenient integer coercion
pub mod coerce;

/// URL templating for page links
pub mod template;

/// The paginator and its collaborators
pub mod pagination;

/// Paginator configuration files
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use coerce::Coerce;
pub use config::PaginatorConfig;
pub use error::{Error, Result};
pub use pagination::{FromFn, Links, NavLink, PageLink, PageView, Pageable, Paginator};
pub use template::UrlTemplate;

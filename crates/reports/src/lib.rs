//! HTML rendering for the reporting service.
//!
//! - [`escape_html`] escapes text idempotently
//! - [`format_money`] renders whole currency units with `.` grouping
//! - [`render_table`] turns a [`RowSet`](common::RowSet) into an HTML table
//! - [`Page`] wraps a body in the shared layout

pub mod escape;
pub mod layout;
pub mod money;
pub mod pages;
pub mod table;

pub use escape::escape_html;
pub use layout::{NAV_LINKS, Page};
pub use money::{GROUP_SEPARATOR, format_money};
pub use table::{NO_DATA, render_table};

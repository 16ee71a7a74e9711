//! HTTP handlers for the Bookmarks domain

pub mod bookmarks;

//! Shared test utilities for the sitekeeper workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`site`] is the [`TestSite`] builder for a full homepage tree on disk

pub mod site;

pub use site::TestSite;

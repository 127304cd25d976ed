//! Library crate for gh-lookup.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state, key handling and the event loop (`app`)
//! - Command line and logging setup (`config`)
//! - Error and result types (`error`)
//! - GitHub REST client and background fetch worker (`github`)
//! - Lookup state machine with stale-response suppression (`search`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `gh-lookup` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
pub mod config;
pub mod error;
pub mod github;
pub mod search;
pub mod ui;

/// Convenient error and result types shared across the crate.
pub use error::{LookupError, Result};

//! # newspost-rs
//!
//! Support utilities for an NNTP posting client.
//!
//! This library contains the small, I/O-free pieces a poster needs
//! before it ever talks to a server:
//!
//! - **Address parsing**: turn a user-supplied server specification such
//!   as `news.example.org:119` or `[2001:db8::1]:119` into a validated
//!   host/port pair, disambiguating bare IPv6 literals from `host:port`.
//! - **Data paths**: locate (and create) the per-user writable data
//!   directory following the XDG base-directory convention.
//! - **Line assembly**: flatten body lines into a single
//!   newline-terminated blob.
//! - **Hook contract**: the header-mutation contract a host's message
//!   pipeline plugins must satisfy, with reference transforms.
//!
//! ## Examples
//!
//! ```
//! use newspost_rs::{join_lines, ServerAddr};
//!
//! let addr = ServerAddr::parse("news.example.org", Some(119))?;
//! assert_eq!(addr.host(), "news.example.org");
//! assert_eq!(addr.port(), Some(119));
//!
//! let body = join_lines(["Hello,", "", "this is a test posting."]);
//! assert!(body.ends_with(b"\n"));
//! # Ok::<(), newspost_rs::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod addr;
pub mod error;
pub mod hooks;
pub mod lines;
pub mod paths;

pub use addr::ServerAddr;
pub use error::{Error, MalformedAddressReason, Result};
pub use lines::join_lines;
pub use paths::{data_home, save_data_path, DATA_HOME_ENV};

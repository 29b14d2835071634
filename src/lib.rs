// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # aac-board
//!
//! A two-level augmentative and alternative communication (AAC) board:
//! a home screen of category pictograms, each opening a screen of pictograms
//! that speak text.
//!
//! ## Architecture
//!
//! - **Associative array** (`assoc`): array-backed, linear-scan key/value store
//! - **Category** (`category`): one screen of image → text bindings
//! - **Category mapper** (`mapper`): home + category registry, navigation state machine
//! - **Mapping files** (`mapping`): `<image> <name>` / `><image> <text>` line codec
//! - **Configuration** (`config`): TOML settings for the `aac` binary
//!
//! ## Library usage
//!
//! ```
//! use aac_board::config::DuplicatePolicy;
//! use aac_board::mapping;
//!
//! let source = "img/food/plate.png food\n>img/food/fries.png french fries\n";
//! let mut board = mapping::load_str(source, DuplicatePolicy::Overwrite).unwrap();
//! assert_eq!(board.select("img/food/plate.png").unwrap(), "");
//! assert_eq!(board.select("img/food/fries.png").unwrap(), "french fries");
//! ```
//!
//! Boards are plain single-owner values with no interior synchronization;
//! wrap one in a lock to share it across threads.

pub mod assoc;
pub mod category;
pub mod config;
pub mod error;
pub mod mapper;
pub mod mapping;

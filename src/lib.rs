//! Resolution of human-readable chess move notation into legal moves.
//!
//! Short algebraic notation ("e4", "Nxf3", "exd8=Q", "00") and long algebraic
//! notation ("e2e4", "e7e8q") are converted into the exact legal [`Move`] they
//! refer to in a position. The rules of chess are provided by the caller
//! through the [`Board`] trait.
//!
//! ```
//! use chess_notation::chess::core::{PieceKind, Player, Square};
//! use chess_notation::chess::moves::MoveStatus;
//! use chess_notation::notation;
//!
//! let castle = notation::parse("000", Player::Black).unwrap();
//! assert_eq!(castle.end(), Square::try_from("c8")?);
//! assert_eq!(castle.status(), MoveStatus::QueensideCastle);
//! assert_eq!(castle.piece().kind, PieceKind::King);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! [`Move`]: crate::chess::moves::Move
//! [`Board`]: crate::chess::board::Board

#![warn(missing_docs, variant_size_differences)]
// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![deny(clippy::perf)]

pub mod chess;
pub mod notation;

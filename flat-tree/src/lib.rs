//! Flat-tree addressing: map the nodes of an infinite complete binary
//! tree onto a flat list of integer indices.
//!
//! Interleaving tree levels packs every node into one dense sequence:
//!
//! ```text
//! depth = 2  ^        3
//! depth = 1  |    1       5          9
//! depth = 0  |  0   2   4   6      8   10  ...
//! ```
//!
//! Leaves sit at the even indices and a parent sits midway between its
//! two children, so an append-only Merkle structure can address data
//! blocks and their pairwise hashes in the same `u64` space without ever
//! materializing a tree. This crate stores nothing and allocates nothing
//! (outside [`full_roots`]): it only computes where a logical node lives
//! and how to reach its relatives.
//!
//! Three interchangeable coordinate systems describe the same node:
//!
//! - the **flat index** itself;
//! - **(depth, offset)** — distance from the leaf level, and left-to-right
//!   position among nodes of that depth;
//! - the **span** — the inclusive range of leaf indices the node's
//!   subtree covers.
//!
//! # Core entry points
//!
//! - [`index`], [`depth`], [`offset`] — coordinate conversions.
//! - [`parent`], [`sibling`], [`children`], [`spans`], [`count`] —
//!   relative addressing and subtree extent.
//! - [`full_roots`] — decompose a leaf prefix into the minimal ordered
//!   set of full-subtree roots (the nodes whose hashes are final).
//! - [`Cursor`] — a positioned cursor whose movements are all O(1) after
//!   a single seek.
//!
//! Functions that would otherwise recover depth from the index accept a
//! known depth through their `*_with_depth` variants.

#![warn(missing_docs)]

mod cursor;
mod error;
pub(crate) mod tree;


pub use cursor::Cursor;
pub use error::{Error, Result};
pub use tree::{
    children, children_with_depth, count, count_with_depth, depth, full_roots, full_roots_into,
    index, is_depth, is_left, is_right, left_child, left_span, left_span_with_depth, offset,
    offset_with_depth, parent, parent_with_depth, right_child, right_span, right_span_with_depth,
    sibling, sibling_with_depth, spans, spans_with_depth, step_size, uncle,
};

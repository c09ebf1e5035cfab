//! Terminal front end for the sparse matrix calculator.
//!
//! Reads matrices from plain text files, runs one operation from
//! `sparse-util`, and renders the sparse triplet list alongside the
//! reconstructed dense grid (or a JSON report).
pub mod input;
pub mod render;

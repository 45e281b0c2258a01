//! # Workflows Module
//!
//! Entry points that run the boundary solver and the grid builder end to end.
//!
//! - **Grid Generation** ([`generate`]) - [`generate::BondOrderGrid`], computed once at
//!   construction and read-only afterwards, with summary text and plotting data.

pub mod generate;

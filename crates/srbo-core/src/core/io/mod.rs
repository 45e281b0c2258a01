//! Tabular export of grids and reference curves.

pub mod table;

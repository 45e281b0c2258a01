//! Numerical building blocks that are independent of any particular potential.

pub mod root;

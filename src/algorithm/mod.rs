//! Analysis algorithms for municipal health data
//!
//! The statistics computed for each dashboard view live in [`statistics`].

pub mod statistics;

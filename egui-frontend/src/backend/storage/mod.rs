//! # Storage Module
//!
//! File-based storage for the mood tracker. The only implementation is the
//! CSV flat-file store in [`csv`].

pub mod csv;

pub use csv::CsvConnection;

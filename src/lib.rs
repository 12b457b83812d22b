//! Command-line front end for the TLA+ tools.
//!
//! The [`cfg`] module models the `.cfg` files read by the TLC model checker:
//! a mergeable [`cfg::Cfg`] value plus a parser and formatter for the file
//! syntax. The [`tools`] module builds on it to write a configuration from a
//! template and command-line overrides, then runs TLC or the PlusCal
//! translator as a child process.

pub mod cfg;
pub mod tools;

//! # envsub
//!
//! A small CLI tool that rewrites `{{ NAME }}` placeholders in a file with
//! values taken from the process environment, trying a primary prefix first
//! and falling back to an alternative prefix.
//!
//! ## Usage
//!
//! ```bash
//! envsub interpolate config.yml -p PROD -a DEFAULT
//! ```
//!
//! With `PROD_DB_HOST=db.internal` set, every occurrence of `{{DB_HOST}}` in
//! `config.yml` is replaced with `db.internal` and the file is rewritten in
//! place. If neither `PROD_DB_HOST` nor `DEFAULT_DB_HOST` is set, the run
//! fails and the file is left untouched.
//!
//! ## Modules
//!
//! - `env` - Injectable environment-lookup abstraction (real and mock)
//! - `error` - Crate error type
//! - `interpolate` - Scanner, resolver and substitution pipeline

pub mod env;
pub mod error;
pub mod interpolate;

//! polyroot: real roots of polynomial equations of degree <= 2.
//!
//! The solving pipeline lives in [`core`]; [`cli`], [`config`] and
//! [`commands`] are the `polyroot` binary's plumbing, exposed so integration
//! tests can reach them.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;

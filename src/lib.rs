#![forbid(unsafe_code)]

//! ttywatch - terminal activity watch library
//!
//! Exposes the core data models, session registry enumeration, activity
//! sampling, and the polling loop used by the ttywatch binary.

pub mod activity;
pub mod cli;
pub mod constants;
pub mod models;
pub mod monitor;
pub mod output;
pub mod sessions;

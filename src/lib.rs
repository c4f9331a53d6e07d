//! BAC Calculator (bacalc) Library
//!
//! Core functionality for blood alcohol estimation and drink planning.

pub mod build_info;
pub mod estimator;
pub mod models;
pub mod session;

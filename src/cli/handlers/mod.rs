//! Reusable command handlers

pub mod list;

//! Scenario tests
//!
//! Titles, paths and equality for streams built the way the server
//! describes them:
//! - Fixed title scenarios per stream type
//! - Subtitle fetch paths
//! - Stream equality and the "None" stream

pub mod titles;

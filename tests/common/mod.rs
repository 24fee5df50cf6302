//! Shared test utilities for workbench-navigator
//!
//! Temporary repositories and environments for CLI tests, and scripted fake
//! capabilities for driving the search controller.

pub mod assertions;
pub mod fakes;
pub mod repository;

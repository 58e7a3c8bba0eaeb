//! CLI infrastructure for the alphabeta toolkit
//!
//! This module provides the command-line interface for searching,
//! inspecting, and exporting game trees.

pub mod commands;
pub mod config;
pub mod output;

//! Videoimport - YouTube to Contentful import tool
//!
//! This library crate exposes the import pipeline for the binary and for
//! integration testing.

pub mod config;
pub mod input;
pub mod metadata;
pub mod pipeline;
pub mod publish;

//! Skeleton orchestration and coordination.
//!
//! This module provides the [`SkeletonBuilder`] orchestrator that turns a
//! [`SkeletonLayout`](crate::bundler::SkeletonLayout) and
//! [`ProjectMetadata`](crate::bundler::ProjectMetadata) into a release
//! directory npm can publish.
//!
//! # Overview
//!
//! The builder:
//! 1. Resets the output directory
//! 2. Copies static assets and the postinstall script
//! 3. Reserves the `bin` paths with empty placeholders
//! 4. Synthesizes, verifies and writes `package.json`
//! 5. Returns a [`SkeletonReport`] with a tree checksum
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum of the output tree
//! - [`orchestrator`] - Main [`SkeletonBuilder`] struct
//! - [`steps`] - The individual build steps

pub mod checksum;
mod orchestrator;
pub mod steps;

pub use orchestrator::{SkeletonBuilder, SkeletonReport};

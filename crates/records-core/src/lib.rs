//! Core types, errors, and configuration for cube-records.
//!
//! This crate provides the foundational types shared by the metadata
//! retriever, the declaration synthesizer, and the CLI.
//!
//! # Architecture
//!
//! The core consists of:
//! - Cube metadata types mirroring the `/v1/meta` wire format
//! - Error hierarchy with contextual information
//! - Generator configuration with a fluent builder
//! - CLI plumbing types (exit codes, output targets)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::{GeneratorOptions, GeneratorOptionsBuilder};
pub use error::{Error, Result};
pub use types::{
    CubeDefinition, CubeDefinitionWithRelations, CubeType, DimensionDefinition, MeasureDefinition,
    MetaResponse, ScalarType, SegmentDefinition,
};

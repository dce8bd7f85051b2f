//! Cube metadata retrieval and join-relation grouping.
//!
//! Fetches the flat cube list from a Cube-style analytics server's
//! `/v1/meta` endpoint and augments each cube with the names of the other
//! cubes in its join-connectivity group.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod relations;
mod retriever;

pub use relations::resolve_relations;
pub use retriever::DefinitionRetriever;

//! TypeScript declaration synthesis for cube metadata.
//!
//! Transforms relation-augmented cube definitions into an ordered sequence
//! of abstract type declarations and renders them as TypeScript source.
//!
//! Two generator flavors exist, mirroring the two declaration conventions
//! the generated package supports:
//! - [`RecordMapGenerator`] — a `CubeRecordMap` module augmentation keyed
//!   by lowercased cube name, for ambient merging by consumers.
//! - [`InterfaceGenerator`] — one interface per cube plus shared generic
//!   member shapes, a name map, and model/view/resource unions.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod decl;
mod flavor;
mod interfaces;
mod naming;
mod printer;
mod record_map;

pub use decl::{Declaration, Field, InterfaceDecl, Primitive, TsType};
pub use flavor::{GeneratorFlavor, generate_declarations};
pub use interfaces::InterfaceGenerator;
pub use naming::{member_property_name, pascal_case, ts_primitive};
pub use printer::print_declarations;
pub use record_map::{DEFAULT_MODULE, RecordMapGenerator};

//! Mesh import subsystem for a tetrahedral finite-element engine
//!
//! Converts third-party mesh descriptions into the engine's in-memory mesh:
//! TetGen `.node`/`.ele` pairs and Abaqus `.inp` decks. The supplied
//! material's category (mechanical vs scalar-field continuum) selects the
//! node and element variants; an optional placement transform is applied to
//! every imported coordinate. The Abaqus path additionally materializes
//! named node sets and can discard nodes unused by elements and sets.
//!
//! This crate only ingests meshes; it performs no meshing, repair or solving.

pub mod config;
pub mod error;
pub mod import;
pub mod material;
pub mod mesh;
pub mod transform;

pub use config::{AbaqusJob, ImportConfig, TetGenJob, TransformConfig};
pub use error::{ImportError, ImportResult};
pub use import::{AbaqusImporter, TetGenImporter};
pub use material::{ContinuumMaterial, DiffusionProperties, ElasticProperties, MaterialKind};
pub use mesh::{
    CorotationalTet, FeaNode, FieldNode, FieldTet, MechanicalNode, Mesh, NodeSet, TetElement,
};
pub use transform::MeshTransform;

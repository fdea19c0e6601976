//! Import-job configuration
//!
//! Reads TOML files describing one import job: which mesh files to load,
//! the placement transform, and the Abaqus pruning flag. A thin convenience
//! layer over the importer APIs for tools that drive imports from disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{ImportError, ImportResult};
use crate::import::{AbaqusImporter, TetGenImporter};
use crate::material::ContinuumMaterial;
use crate::mesh::{Mesh, NodeSet};
use crate::transform::MeshTransform;

/// One import job read from a TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportConfig {
    #[serde(default)]
    pub transform: TransformConfig,
    pub tetgen: Option<TetGenJob>,
    pub abaqus: Option<AbaqusJob>,
}

/// TetGen file pair to import.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TetGenJob {
    pub node_file: PathBuf,
    pub ele_file: PathBuf,
}

/// Abaqus deck to import.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AbaqusJob {
    pub input_file: PathBuf,
    #[serde(default = "default_true")]
    pub discard_unused_nodes: bool,
}

/// Placement applied to every imported coordinate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransformConfig {
    /// Displacement of the imported mesh.
    #[serde(default)]
    pub translation: [f64; 3],
    /// Rows of the rotation/scaling matrix.
    #[serde(default = "identity_rows")]
    pub linear: [[f64; 3]; 3],
}

impl TransformConfig {
    pub fn to_transform(&self) -> MeshTransform {
        let [t0, t1, t2] = self.translation;
        let [r0, r1, r2] = self.linear;
        MeshTransform::new(
            Vector3::new(t0, t1, t2),
            Matrix3::new(
                r0[0], r0[1], r0[2], //
                r1[0], r1[1], r1[2], //
                r2[0], r2[1], r2[2],
            ),
        )
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            linear: identity_rows(),
        }
    }
}

fn identity_rows() -> [[f64; 3]; 3] {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
}

fn default_true() -> bool {
    true
}

impl ImportConfig {
    /// Load a job description from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ImportError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|e| ImportError::Config {
            file: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Run the configured imports into `mesh`, in TetGen-then-Abaqus order.
    pub fn run(
        &self,
        mesh: &mut Mesh,
        material: Arc<ContinuumMaterial>,
        node_sets: &mut Vec<NodeSet>,
    ) -> ImportResult<()> {
        let transform = self.transform.to_transform();
        if let Some(job) = &self.tetgen {
            TetGenImporter::import(
                mesh,
                &job.node_file,
                &job.ele_file,
                Arc::clone(&material),
                &transform,
            )?;
        }
        if let Some(job) = &self.abaqus {
            AbaqusImporter::import(
                mesh,
                &job.input_file,
                Arc::clone(&material),
                node_sets,
                &transform,
                job.discard_unused_nodes,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn parses_minimal_job() {
        let config: ImportConfig = toml::from_str(
            r#"
            [tetgen]
            node_file = "beam.node"
            ele_file = "beam.ele"
            "#,
        )
        .unwrap();

        assert!(config.abaqus.is_none());
        let job = config.tetgen.unwrap();
        assert_eq!(job.node_file, PathBuf::from("beam.node"));
        // Default transform is the identity placement
        let t = config.transform.to_transform();
        assert_eq!(t, MeshTransform::default());
    }

    #[test]
    fn abaqus_pruning_defaults_on() {
        let config: ImportConfig = toml::from_str(
            r#"
            [abaqus]
            input_file = "part.inp"
            "#,
        )
        .unwrap();
        assert!(config.abaqus.unwrap().discard_unused_nodes);
    }

    #[test]
    fn transform_rows_build_the_linear_map() {
        let config: ImportConfig = toml::from_str(
            r#"
            [transform]
            translation = [1.0, 0.0, 0.0]
            linear = [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]
            "#,
        )
        .unwrap();

        let t = config.transform.to_transform();
        let moved = t.apply(&Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(moved.x, 3.0);
        assert_relative_eq!(moved.y, 2.0);
        assert_relative_eq!(moved.z, 2.0);
    }
}

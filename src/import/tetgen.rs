//! TetGen `.node`/`.ele` pair importer

use std::path::Path;
use std::sync::Arc;

use log::warn;

use crate::error::ImportResult;
use crate::material::ContinuumMaterial;
use crate::mesh::Mesh;
use crate::transform::MeshTransform;

use super::element_table::{build_element, parse_element_header, parse_element_record};
use super::node_table::{parse_node_header, parse_node_record, NodeTable};
use super::{read_file, LineContext};

/// Importer for tetrahedral meshes saved by TetGen.
///
/// File formats (node and element numbering starts at 1):
///
/// `.node`:
/// ```text
/// <# of points> <dimension (only 3)> <# of attributes (only 0)> <markers (only 0)>
/// <point #> <x> <y> <z>
/// ```
///
/// `.ele`:
/// ```text
/// <# of tetrahedra> <nodes per element (only 4)> <# of attributes (only 0)>
/// <tet #> <node> <node> <node> <node>
/// ```
pub struct TetGenImporter;

impl TetGenImporter {
    /// Import a `.node`/`.ele` pair into `mesh`.
    ///
    /// The material category selects the node and element variants; every
    /// coordinate passes through `transform`. On failure the mesh keeps the
    /// nodes appended before the error; in particular an element-stage
    /// failure leaves the node stage's output in place.
    pub fn import(
        mesh: &mut Mesh,
        node_path: impl AsRef<Path>,
        ele_path: impl AsRef<Path>,
        material: Arc<ContinuumMaterial>,
        transform: &MeshTransform,
    ) -> ImportResult<()> {
        let table = Self::load_nodes(mesh, node_path.as_ref(), &material, transform)?;
        Self::load_elements(mesh, ele_path.as_ref(), &table, &material)?;
        Ok(())
    }

    fn load_nodes(
        mesh: &mut Mesh,
        path: &Path,
        material: &Arc<ContinuumMaterial>,
        transform: &MeshTransform,
    ) -> ImportResult<NodeTable> {
        let text = read_file(path)?;
        let file = path.display().to_string();
        let kind = material.kind();

        let mut table = NodeTable::default();
        let mut header = None;
        for (line, ctx) in content_lines(&text, &file) {
            match header {
                None => header = Some(parse_node_header(line, &ctx)?),
                Some(_) => {
                    let record = parse_node_record(line, &ctx)?;
                    table.insert(mesh, &record, kind, transform, &file)?;
                }
            }
        }

        let declared = header.map_or(0, |h| h.declared_points);
        if table.len() != declared {
            warn!(
                "{file}: header declares {declared} points but {} were read",
                table.len()
            );
        }
        Ok(table)
    }

    fn load_elements(
        mesh: &mut Mesh,
        path: &Path,
        table: &NodeTable,
        material: &Arc<ContinuumMaterial>,
    ) -> ImportResult<()> {
        let text = read_file(path)?;
        let file = path.display().to_string();

        let mut header = None;
        let mut built = 0usize;
        for (line, ctx) in content_lines(&text, &file) {
            match header {
                None => header = Some(parse_element_header(line, &ctx)?),
                Some(_) => {
                    let record = parse_element_record(line, &ctx)?;
                    build_element(mesh, table, &record, material, &file)?;
                    built += 1;
                }
            }
        }

        let declared = header.map_or(0, |h| h.declared_tets);
        if built != declared {
            warn!("{file}: header declares {declared} tetrahedra but {built} were read");
        }
        Ok(())
    }
}

/// Iterate non-blank, non-comment lines with their 1-based line numbers.
/// TetGen files may carry `#` comment lines.
fn content_lines<'a>(
    text: &'a str,
    file: &'a str,
) -> impl Iterator<Item = (&'a str, LineContext<'a>)> {
    text.lines().enumerate().filter_map(move |(i, raw)| {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            None
        } else {
            Some((
                line,
                LineContext {
                    file,
                    line: i + 1,
                },
            ))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_lines_skip_blanks_and_comments() {
        let text = "# tetgen output\n\n2 3 0 0\n1 0 0 0\n  \n2 1 0 0\n";
        let lines: Vec<_> = content_lines(text, "t.node").collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].0, "2 3 0 0");
        assert_eq!(lines[0].1.line, 3);
        assert_eq!(lines[2].1.line, 6);
    }
}

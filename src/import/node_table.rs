//! Node table builder
//!
//! Turns coordinate records into mesh nodes and maintains the external-ID to
//! mesh-index map consumed by the element table builder. Node variants are
//! chosen once from the material category; appension order equals file order.

use std::collections::HashMap;

use nalgebra::Point3;

use crate::error::ImportResult;
use crate::material::MaterialKind;
use crate::mesh::{FeaNode, Mesh};
use crate::transform::MeshTransform;

use super::{parse_f64, parse_u32, parse_usize, tokens, LineContext};

/// Header of a TetGen `.node` file.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeHeader {
    pub declared_points: usize,
    pub dimension: usize,
    pub attributes: usize,
    pub markers: usize,
}

/// One coordinate record, parsed but not yet materialized.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeRecord {
    pub id: u32,
    pub coords: Point3<f64>,
    /// Source line, for diagnostics at materialization time.
    pub line: usize,
}

pub(crate) fn parse_node_header(line: &str, ctx: &LineContext) -> ImportResult<NodeHeader> {
    let toks = tokens(line);
    if toks.len() != 4 {
        return Err(ctx.malformed(format!(
            "node header needs 4 fields (points, dimension, attributes, markers), got {}",
            toks.len()
        )));
    }
    let header = NodeHeader {
        declared_points: parse_usize(toks[0], ctx)?,
        dimension: parse_usize(toks[1], ctx)?,
        attributes: parse_usize(toks[2], ctx)?,
        markers: parse_usize(toks[3], ctx)?,
    };
    validate_node_header(&header, ctx)?;
    Ok(header)
}

/// Only plain 3D point files are supported; richer TetGen layouts are
/// rejected explicitly rather than mis-parsed.
fn validate_node_header(header: &NodeHeader, ctx: &LineContext) -> ImportResult<()> {
    if header.dimension != 3 {
        return Err(ctx.format(format!(
            "only dimension 3 is supported, file declares {}",
            header.dimension
        )));
    }
    if header.attributes != 0 {
        return Err(ctx.format(format!(
            "point attributes are not supported, file declares {}",
            header.attributes
        )));
    }
    if header.markers != 0 {
        return Err(ctx.format(format!(
            "boundary markers are not supported, file declares {}",
            header.markers
        )));
    }
    Ok(())
}

/// Parse `<id> <x> <y> <z>`.
pub(crate) fn parse_node_record(line: &str, ctx: &LineContext) -> ImportResult<NodeRecord> {
    let toks = tokens(line);
    if toks.len() != 4 {
        return Err(ctx.malformed(format!(
            "node record needs 4 fields (id, x, y, z), got {}",
            toks.len()
        )));
    }
    Ok(NodeRecord {
        id: parse_u32(toks[0], ctx)?,
        coords: Point3::new(
            parse_f64(toks[1], ctx)?,
            parse_f64(toks[2], ctx)?,
            parse_f64(toks[3], ctx)?,
        ),
        line: ctx.line,
    })
}

/// External-ID keyed table of materialized nodes.
///
/// The map is lookup-only; the mesh owns the nodes.
#[derive(Debug, Default)]
pub(crate) struct NodeTable {
    map: HashMap<u32, usize>,
}

impl NodeTable {
    /// Transform the record's coordinate, append the matching node variant
    /// to the mesh, and register the external ID.
    pub fn insert(
        &mut self,
        mesh: &mut Mesh,
        record: &NodeRecord,
        kind: MaterialKind,
        transform: &MeshTransform,
        file: &str,
    ) -> ImportResult<usize> {
        let ctx = LineContext {
            file,
            line: record.line,
        };
        if self.map.contains_key(&record.id) {
            return Err(ctx.duplicate_id(record.id));
        }
        let position = transform.apply(&record.coords);
        let idx = mesh.add_node(FeaNode::for_material(kind, record.coords, position));
        self.map.insert(record.id, idx);
        Ok(idx)
    }

    pub fn resolve(&self, id: u32) -> Option<usize> {
        self.map.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

//! Element table builder
//!
//! Resolves tetrahedral connectivity records through the node table and
//! appends the matching element variant to the mesh. Resolution failure is
//! the pipeline's principal cross-cutting correctness check: it catches
//! references to nodes that were never declared or were pruned.

use std::sync::Arc;

use crate::error::ImportResult;
use crate::material::ContinuumMaterial;
use crate::mesh::{Mesh, TetElement};

use super::node_table::NodeTable;
use super::{parse_u32, parse_usize, tokens, LineContext};

/// Header of a TetGen `.ele` file.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ElementHeader {
    pub declared_tets: usize,
    pub nodes_per_element: usize,
    pub attributes: usize,
}

/// One connectivity record: 4 external node IDs in orientation-significant
/// order. The external element ID is validated but not kept; element
/// entities are identified positionally.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ElementRecord {
    pub nodes: [u32; 4],
    pub line: usize,
}

pub(crate) fn parse_element_header(line: &str, ctx: &LineContext) -> ImportResult<ElementHeader> {
    let toks = tokens(line);
    if toks.len() != 3 {
        return Err(ctx.malformed(format!(
            "element header needs 3 fields (tetrahedra, nodes per element, attributes), got {}",
            toks.len()
        )));
    }
    let header = ElementHeader {
        declared_tets: parse_usize(toks[0], ctx)?,
        nodes_per_element: parse_usize(toks[1], ctx)?,
        attributes: parse_usize(toks[2], ctx)?,
    };
    validate_element_header(&header, ctx)?;
    Ok(header)
}

/// Only 4-node tetrahedra without attributes are supported.
fn validate_element_header(header: &ElementHeader, ctx: &LineContext) -> ImportResult<()> {
    if header.nodes_per_element != 4 {
        return Err(ctx.format(format!(
            "only 4-node tetrahedra are supported, file declares {} nodes per element",
            header.nodes_per_element
        )));
    }
    if header.attributes != 0 {
        return Err(ctx.format(format!(
            "element attributes are not supported, file declares {}",
            header.attributes
        )));
    }
    Ok(())
}

/// Parse `<id> <n1> <n2> <n3> <n4>`.
pub(crate) fn parse_element_record(line: &str, ctx: &LineContext) -> ImportResult<ElementRecord> {
    let toks = tokens(line);
    if toks.len() != 5 {
        return Err(ctx.malformed(format!(
            "element record needs 5 fields (id and 4 node ids), got {}",
            toks.len()
        )));
    }
    parse_u32(toks[0], ctx)?;
    Ok(ElementRecord {
        nodes: [
            parse_u32(toks[1], ctx)?,
            parse_u32(toks[2], ctx)?,
            parse_u32(toks[3], ctx)?,
            parse_u32(toks[4], ctx)?,
        ],
        line: ctx.line,
    })
}

/// Resolve a record through the node table and append the element variant
/// matching the material category. Record node order is preserved.
pub(crate) fn build_element(
    mesh: &mut Mesh,
    table: &NodeTable,
    record: &ElementRecord,
    material: &Arc<ContinuumMaterial>,
    file: &str,
) -> ImportResult<()> {
    let ctx = LineContext {
        file,
        line: record.line,
    };
    let mut resolved = [0usize; 4];
    for (slot, &id) in resolved.iter_mut().zip(record.nodes.iter()) {
        *slot = table.resolve(id).ok_or_else(|| ctx.unresolved(id))?;
    }
    mesh.add_element(TetElement::for_material(Arc::clone(material), resolved));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use crate::import::node_table::parse_node_record;
    use crate::material::MaterialKind;
    use crate::transform::MeshTransform;

    fn ctx() -> LineContext<'static> {
        LineContext {
            file: "test.ele",
            line: 1,
        }
    }

    fn mesh_with_nodes(count: u32) -> (Mesh, NodeTable) {
        let mut mesh = Mesh::new();
        let mut table = NodeTable::default();
        let transform = MeshTransform::default();
        for id in 1..=count {
            let rec =
                parse_node_record(&format!("{id} 0.0 0.0 0.0"), &ctx()).unwrap();
            table
                .insert(
                    &mut mesh,
                    &rec,
                    MaterialKind::MechanicalContinuum,
                    &transform,
                    "test.node",
                )
                .unwrap();
        }
        (mesh, table)
    }

    #[test]
    fn header_rejects_non_tetrahedral_layout() {
        assert!(matches!(
            parse_element_header("5 10 0", &ctx()).unwrap_err(),
            ImportError::Format { .. }
        ));
        assert!(matches!(
            parse_element_header("5 4 1", &ctx()).unwrap_err(),
            ImportError::Format { .. }
        ));
        assert!(parse_element_header("5 4 0", &ctx()).is_ok());
    }

    #[test]
    fn unresolved_node_reference_is_fatal() {
        let (mut mesh, table) = mesh_with_nodes(3);
        let mat = Arc::new(ContinuumMaterial::elastic(1000.0, 1e9, 0.25));
        let rec = parse_element_record("1 1 2 3 9", &ctx()).unwrap();

        let err = build_element(&mut mesh, &table, &rec, &mat, "test.ele").unwrap_err();
        assert!(matches!(
            err,
            ImportError::UnresolvedNodeReference { id: 9, .. }
        ));
        assert_eq!(mesh.num_elements(), 0);
    }

    #[test]
    fn record_node_order_is_preserved() {
        let (mut mesh, table) = mesh_with_nodes(4);
        let mat = Arc::new(ContinuumMaterial::elastic(1000.0, 1e9, 0.25));
        let rec = parse_element_record("1 4 2 1 3", &ctx()).unwrap();

        build_element(&mut mesh, &table, &rec, &mat, "test.ele").unwrap();

        let elem = mesh.element(0).unwrap();
        let expected = [
            table.resolve(4).unwrap(),
            table.resolve(2).unwrap(),
            table.resolve(1).unwrap(),
            table.resolve(3).unwrap(),
        ];
        assert_eq!(*elem.nodes(), expected);
    }
}

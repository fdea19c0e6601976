//! Finite-element mesh container
//!
//! The mesh owns its nodes and elements; elements reference their nodes by
//! mesh index. Importers mutate the mesh in place through `&mut Mesh`, so
//! callers serialize concurrent imports into the same mesh by construction.

pub mod element;
pub mod node;
pub mod node_set;

pub use element::{CorotationalTet, FieldTet, TetElement};
pub use node::{FeaNode, FieldNode, MechanicalNode};
pub use node_set::NodeSet;

/// Destination container for imported nodes and tetrahedral elements.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub nodes: Vec<FeaNode>,
    pub elements: Vec<TetElement>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its mesh index.
    pub fn add_node(&mut self, node: FeaNode) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node);
        idx
    }

    pub fn add_element(&mut self, element: TetElement) {
        self.elements.push(element);
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    pub fn node(&self, idx: usize) -> Option<&FeaNode> {
        self.nodes.get(idx)
    }

    pub fn element(&self, idx: usize) -> Option<&TetElement> {
        self.elements.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialKind;
    use nalgebra::Point3;

    #[test]
    fn add_node_returns_sequential_indices() {
        let mut mesh = Mesh::new();
        let p = Point3::origin();

        let a = mesh.add_node(FeaNode::for_material(
            MaterialKind::MechanicalContinuum,
            p,
            p,
        ));
        let b = mesh.add_node(FeaNode::for_material(
            MaterialKind::MechanicalContinuum,
            p,
            p,
        ));

        assert_eq!((a, b), (0, 1));
        assert_eq!(mesh.num_nodes(), 2);
        assert!(mesh.node(1).is_some());
        assert!(mesh.node(2).is_none());
    }
}

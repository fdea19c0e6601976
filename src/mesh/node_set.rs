//! Named node groupings produced by the Abaqus importer

/// Named, ordered sequence of mesh node indices.
///
/// Produced from `*NSET` blocks; used downstream to tag nodes for boundary
/// conditions or material assignment. The set does not own its nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet {
    pub name: String,
    /// Mesh indices in deck declaration order, duplicates preserved.
    pub nodes: Vec<usize>,
}

impl NodeSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

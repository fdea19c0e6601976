//! Tetrahedral element variants

use std::sync::Arc;

use nalgebra::Matrix3;

use crate::material::{ContinuumMaterial, MaterialKind};

use super::Mesh;

/// 4-node mechanical tetrahedron with corotational kinematics.
///
/// The corotational frame separates rigid rotation from strain; it starts
/// at identity and is updated by the solver, not by the importer.
#[derive(Debug, Clone)]
pub struct CorotationalTet {
    /// Mesh indices of the 4 corner nodes, in source-file order.
    pub nodes: [usize; 4],
    pub material: Arc<ContinuumMaterial>,
    /// Current corotational frame.
    pub rotation: Matrix3<f64>,
}

/// 4-node tetrahedron for a scalar-field continuum.
#[derive(Debug, Clone)]
pub struct FieldTet {
    /// Mesh indices of the 4 corner nodes, in source-file order.
    pub nodes: [usize; 4],
    pub material: Arc<ContinuumMaterial>,
}

/// Closed set of element variants; downstream code matches exhaustively.
#[derive(Debug, Clone)]
pub enum TetElement {
    Corotational(CorotationalTet),
    Field(FieldTet),
}

impl TetElement {
    /// Construct the element variant matching the material category.
    ///
    /// Node ordering is kept exactly as given; it defines the element's
    /// orientation and the sign of its volume.
    pub fn for_material(material: Arc<ContinuumMaterial>, nodes: [usize; 4]) -> Self {
        match material.kind() {
            MaterialKind::MechanicalContinuum => Self::Corotational(CorotationalTet {
                nodes,
                material,
                rotation: Matrix3::identity(),
            }),
            MaterialKind::ScalarFieldContinuum => Self::Field(FieldTet { nodes, material }),
        }
    }

    pub fn nodes(&self) -> &[usize; 4] {
        match self {
            Self::Corotational(e) => &e.nodes,
            Self::Field(e) => &e.nodes,
        }
    }

    pub fn material(&self) -> &Arc<ContinuumMaterial> {
        match self {
            Self::Corotational(e) => &e.material,
            Self::Field(e) => &e.material,
        }
    }

    /// Signed volume from the current node positions.
    ///
    /// Negative for an inverted (left-handed) node ordering. The importer
    /// never validates or corrects orientation.
    pub fn signed_volume(&self, mesh: &Mesh) -> f64 {
        let [a, b, c, d] = *self.nodes();
        let pa = mesh.nodes[a].position();
        let pb = mesh.nodes[b].position();
        let pc = mesh.nodes[c].position();
        let pd = mesh.nodes[d].position();

        let m = Matrix3::from_columns(&[pb - pa, pc - pa, pd - pa]);
        m.determinant() / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialKind;
    use crate::mesh::FeaNode;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn unit_tet_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ] {
            mesh.add_node(FeaNode::for_material(
                MaterialKind::MechanicalContinuum,
                p,
                p,
            ));
        }
        mesh
    }

    #[test]
    fn variant_selected_by_material_kind() {
        let steel = Arc::new(ContinuumMaterial::elastic(7800.0, 210e9, 0.3));
        let thermal = Arc::new(ContinuumMaterial::diffusive(8960.0, 385.0, 401.0));

        assert!(matches!(
            TetElement::for_material(steel, [0, 1, 2, 3]),
            TetElement::Corotational(_)
        ));
        assert!(matches!(
            TetElement::for_material(thermal, [0, 1, 2, 3]),
            TetElement::Field(_)
        ));
    }

    #[test]
    fn signed_volume_of_reference_tet() {
        let mesh = unit_tet_mesh();
        let mat = Arc::new(ContinuumMaterial::elastic(1000.0, 1e9, 0.25));

        let elem = TetElement::for_material(mat.clone(), [0, 1, 2, 3]);
        assert_relative_eq!(elem.signed_volume(&mesh), 1.0 / 6.0, epsilon = 1e-12);

        // Swapping two nodes flips orientation
        let flipped = TetElement::for_material(mat, [1, 0, 2, 3]);
        assert_relative_eq!(flipped.signed_volume(&mesh), -1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn node_order_is_preserved() {
        let mat = Arc::new(ContinuumMaterial::elastic(1000.0, 1e9, 0.25));
        let elem = TetElement::for_material(mat, [3, 1, 0, 2]);
        assert_eq!(*elem.nodes(), [3, 1, 0, 2]);
    }
}

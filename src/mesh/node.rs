//! Mesh node variants
//!
//! A node's capability set is fixed at import time from the material
//! category and never changes afterwards.

use nalgebra::{Point3, Vector3};

use crate::material::MaterialKind;

/// Node with three translational degrees of freedom.
#[derive(Debug, Clone, PartialEq)]
pub struct MechanicalNode {
    /// Position after the import transform (reference configuration).
    pub position: Point3<f64>,
    /// Coordinate as written in the source file, before the transform.
    pub source_position: Point3<f64>,
    /// Displacement DOFs, zero-initialized.
    pub displacement: Vector3<f64>,
}

/// Node carrying a single scalar degree of freedom (temperature, voltage, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    /// Position after the import transform.
    pub position: Point3<f64>,
    /// Coordinate as written in the source file, before the transform.
    pub source_position: Point3<f64>,
    /// Scalar DOF, zero-initialized.
    pub value: f64,
}

/// Closed set of node variants; downstream code matches exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum FeaNode {
    Mechanical(MechanicalNode),
    Field(FieldNode),
}

impl FeaNode {
    /// Construct the node variant matching the material category.
    pub fn for_material(
        kind: MaterialKind,
        source_position: Point3<f64>,
        position: Point3<f64>,
    ) -> Self {
        match kind {
            MaterialKind::MechanicalContinuum => Self::Mechanical(MechanicalNode {
                position,
                source_position,
                displacement: Vector3::zeros(),
            }),
            MaterialKind::ScalarFieldContinuum => Self::Field(FieldNode {
                position,
                source_position,
                value: 0.0,
            }),
        }
    }

    pub fn position(&self) -> &Point3<f64> {
        match self {
            Self::Mechanical(n) => &n.position,
            Self::Field(n) => &n.position,
        }
    }

    pub fn source_position(&self) -> &Point3<f64> {
        match self {
            Self::Mechanical(n) => &n.source_position,
            Self::Field(n) => &n.source_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_selected_by_material_kind() {
        let p = Point3::new(1.0, 2.0, 3.0);

        let mech = FeaNode::for_material(MaterialKind::MechanicalContinuum, p, p);
        assert!(matches!(mech, FeaNode::Mechanical(_)));

        let field = FeaNode::for_material(MaterialKind::ScalarFieldContinuum, p, p);
        assert!(matches!(field, FeaNode::Field(_)));
    }

    #[test]
    fn source_position_preserved_beside_transformed() {
        let source = Point3::new(0.0, 0.0, 0.0);
        let moved = Point3::new(5.0, 0.0, 0.0);

        let node = FeaNode::for_material(MaterialKind::MechanicalContinuum, source, moved);
        assert_eq!(*node.source_position(), source);
        assert_eq!(*node.position(), moved);
    }
}

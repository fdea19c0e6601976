//! Continuum material descriptions
//!
//! The material category decides which node and element variants an import
//! call creates: a mechanical continuum yields displacement nodes and
//! corotational tetrahedra, a scalar-field continuum (thermal,
//! electrostatic, ...) yields single-DOF nodes and field tetrahedra.

/// Category of continuum a material describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// 3D displacement field, corotational elements.
    MechanicalContinuum,
    /// Single scalar degree of freedom per node.
    ScalarFieldContinuum,
}

/// Elastic properties of a mechanical continuum.
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticProperties {
    /// Density (kg/m³)
    pub density: f64,
    /// Young's modulus (Pa)
    pub young_modulus: f64,
    /// Poisson's ratio (dimensionless)
    pub poisson_ratio: f64,
}

/// Properties of a scalar-field (Poisson-type) continuum.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusionProperties {
    /// Density (kg/m³)
    pub density: f64,
    /// Specific heat capacity (J/kg·K)
    pub specific_heat: f64,
    /// Conductivity (W/m·K)
    pub conductivity: f64,
}

/// Material attached to every element created by one import call.
///
/// Shared by reference (`Arc`) between the importer and all elements it
/// creates; read-only during import.
#[derive(Debug, Clone, PartialEq)]
pub enum ContinuumMaterial {
    Mechanical(ElasticProperties),
    ScalarField(DiffusionProperties),
}

impl ContinuumMaterial {
    /// Mechanical continuum from elastic constants.
    pub fn elastic(density: f64, young_modulus: f64, poisson_ratio: f64) -> Self {
        Self::Mechanical(ElasticProperties {
            density,
            young_modulus,
            poisson_ratio,
        })
    }

    /// Scalar-field continuum from diffusion constants.
    pub fn diffusive(density: f64, specific_heat: f64, conductivity: f64) -> Self {
        Self::ScalarField(DiffusionProperties {
            density,
            specific_heat,
            conductivity,
        })
    }

    /// Category driving node and element variant selection.
    pub fn kind(&self) -> MaterialKind {
        match self {
            Self::Mechanical(_) => MaterialKind::MechanicalContinuum,
            Self::ScalarField(_) => MaterialKind::ScalarFieldContinuum,
        }
    }

    pub fn density(&self) -> f64 {
        match self {
            Self::Mechanical(p) => p.density,
            Self::ScalarField(p) => p.density,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        let steel = ContinuumMaterial::elastic(7800.0, 210e9, 0.3);
        assert_eq!(steel.kind(), MaterialKind::MechanicalContinuum);

        let copper_thermal = ContinuumMaterial::diffusive(8960.0, 385.0, 401.0);
        assert_eq!(copper_thermal.kind(), MaterialKind::ScalarFieldContinuum);
    }

    #[test]
    fn density_available_for_both_variants() {
        assert_eq!(ContinuumMaterial::elastic(1000.0, 1e9, 0.25).density(), 1000.0);
        assert_eq!(ContinuumMaterial::diffusive(2700.0, 900.0, 237.0).density(), 2700.0);
    }
}

//! # Solid Families
//!
//! Canonical solid constructors and the family selector.

pub mod dodecahedron;
pub mod truncated_octahedron;

pub use dodecahedron::create_dodecahedron;
pub use truncated_octahedron::create_truncated_octahedron;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::polyhedron::Polyhedron;

/// The solid families the pipeline can produce.
///
/// Family names parse from and display as kebab-case strings, which is
/// where an unknown name surfaces as a configuration error; once a value
/// of this type exists, producing its solid cannot fail.
///
/// # Example
///
/// ```rust
/// use tessella_mesh::SolidFamily;
///
/// let family: SolidFamily = "dodecahedron".parse().unwrap();
/// let solid = family.produce();
/// assert_eq!(solid.face_count(), 12);
/// assert!("icosahedron".parse::<SolidFamily>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolidFamily {
    /// Regular dodecahedron: 12 pentagons on the unit sphere
    Dodecahedron,
    /// Truncated octahedron: the space-filling lattice cell
    TruncatedOctahedron,
}

impl SolidFamily {
    /// Builds the canonical solid of this family.
    pub fn produce(self) -> Polyhedron {
        match self {
            Self::Dodecahedron => create_dodecahedron(),
            Self::TruncatedOctahedron => create_truncated_octahedron(),
        }
    }
}

impl FromStr for SolidFamily {
    type Err = MeshError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "dodecahedron" => Ok(Self::Dodecahedron),
            "truncated-octahedron" => Ok(Self::TruncatedOctahedron),
            other => Err(MeshError::configuration(format!(
                "unknown solid family '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SolidFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dodecahedron => write!(f, "dodecahedron"),
            Self::TruncatedOctahedron => write!(f, "truncated-octahedron"),
        }
    }
}

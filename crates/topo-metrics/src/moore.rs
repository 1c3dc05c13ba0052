use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};

/// Lower bounds on diameter and ASPL for any graph with a given size and degree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MooreBound {
    /// Smallest achievable diameter.
    #[serde(with = "topo_core::float_serde")]
    pub diameter: f64,
    /// Smallest achievable ASPL.
    #[serde(with = "topo_core::float_serde")]
    pub aspl: f64,
}

/// Moore bound for `n` nodes of degree `degree`.
///
/// Grows a ball around one node shell by shell (`1 + d + d(d-1) + ...`) while
/// the next shell still leaves nodes uncovered; the remaining nodes are placed
/// one hop further out. When shells stop growing (`degree == 1`, `n > 2`) no
/// connected graph exists and both bounds are `+inf`.
pub fn moore_bound(n: usize, degree: usize) -> Result<MooreBound, TopoError> {
    if n < 2 || degree == 0 {
        return Err(TopoError::InvalidParameters(
            ErrorInfo::new("moore-degenerate", "Moore bound needs n >= 2 and degree >= 1")
                .with_context("nodes", n)
                .with_context("degree", degree),
        ));
    }
    let target = n as u128;
    let d = degree as u128;
    let mut covered: u128 = 1;
    let mut shell: u128 = d;
    let mut distance_sum: u128 = 0;
    let mut radius: u128 = 0;
    loop {
        let next = covered.saturating_add(shell);
        if next >= target {
            break;
        }
        if shell == 0 {
            return Ok(MooreBound {
                diameter: f64::INFINITY,
                aspl: f64::INFINITY,
            });
        }
        covered = next;
        radius += 1;
        distance_sum += radius * shell;
        shell = shell.saturating_mul(d - 1);
    }
    let diameter = radius + 1;
    distance_sum += diameter * (target - covered);
    Ok(MooreBound {
        diameter: diameter as f64,
        aspl: distance_sum as f64 / (n - 1) as f64,
    })
}

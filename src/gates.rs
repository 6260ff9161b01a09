// eigengate - Rust library for quantum gates defined by their
//             eigendecomposition
// Copyright (C) 2025 - the eigengate developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Standard gates expressed as eigendecompositions.
//!
//! All the gates here are self-inverse, so their eigenprojectors are
//! (I ± U)/2 with angles 0 and 1. Rotation constructors reuse the Pauli
//! bases with a global shift of −0.5, which fixes the global phase the way
//! rotations conventionally have it: rx(1) is −iX rather than X.

use ndarray::array;
use num::Complex;

use crate::eigen::{EigenBasis, EigenComponent, EigenGate};
use crate::linalg::{identity, Matrix};
use crate::params::Exponent;

fn r(x: f64) -> Complex<f64> {
    Complex::new(x, 0.0)
}

/// Eigen-components of a self-inverse unitary m: (I + m)/2 at angle 0 and
/// (I − m)/2 at angle 1.
fn reflection_components(m: &Matrix) -> Vec<EigenComponent> {
    let id = identity(m.nrows());
    vec![
        EigenComponent::new(0.0, (&id + m) * r(0.5)),
        EigenComponent::new(1.0, (&id - m) * r(0.5)),
    ]
}

/// Eigenbasis of the Pauli X gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XBasis;

impl EigenBasis for XBasis {
    fn eigen_components(&self) -> Vec<EigenComponent> {
        reflection_components(&array![[r(0.0), r(1.0)], [r(1.0), r(0.0)]])
    }
}

/// Eigenbasis of the Pauli Y gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YBasis;

impl EigenBasis for YBasis {
    fn eigen_components(&self) -> Vec<EigenComponent> {
        let i = Complex::new(0.0, 1.0);
        reflection_components(&array![[r(0.0), -i], [i, r(0.0)]])
    }
}

/// Eigenbasis of the Pauli Z gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZBasis;

impl EigenBasis for ZBasis {
    fn eigen_components(&self) -> Vec<EigenComponent> {
        reflection_components(&array![[r(1.0), r(0.0)], [r(0.0), r(-1.0)]])
    }
}

/// Eigenbasis of the Hadamard gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HBasis;

impl EigenBasis for HBasis {
    fn eigen_components(&self) -> Vec<EigenComponent> {
        let s = r(std::f64::consts::FRAC_1_SQRT_2);
        reflection_components(&array![[s, s], [s, -s]])
    }
}

/// Eigenbasis of the controlled-Z gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CZBasis;

impl EigenBasis for CZBasis {
    fn eigen_components(&self) -> Vec<EigenComponent> {
        let mut m = identity(4);
        m[(3, 3)] = r(-1.0);
        reflection_components(&m)
    }
}

/// The Pauli X gate.
pub fn x() -> EigenGate<XBasis> {
    EigenGate::new(XBasis)
}

/// The Pauli Y gate.
pub fn y() -> EigenGate<YBasis> {
    EigenGate::new(YBasis)
}

/// The Pauli Z gate.
pub fn z() -> EigenGate<ZBasis> {
    EigenGate::new(ZBasis)
}

/// The Hadamard gate.
pub fn h() -> EigenGate<HBasis> {
    EigenGate::new(HBasis)
}

/// The controlled-Z gate.
pub fn cz() -> EigenGate<CZBasis> {
    EigenGate::new(CZBasis)
}

/// Rotation about the X axis by `t` half-turns.
pub fn rx(t: impl Into<Exponent>) -> EigenGate<XBasis> {
    EigenGate::new_with_shift(XBasis, t, -0.5)
}

/// Rotation about the Y axis by `t` half-turns.
pub fn ry(t: impl Into<Exponent>) -> EigenGate<YBasis> {
    EigenGate::new_with_shift(YBasis, t, -0.5)
}

/// Rotation about the Z axis by `t` half-turns.
pub fn rz(t: impl Into<Exponent>) -> EigenGate<ZBasis> {
    EigenGate::new_with_shift(ZBasis, t, -0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eigen::valid_decomposition;
    use crate::linalg::matrix_approx_eq;
    use crate::params::Exponent;

    fn i(x: f64) -> Complex<f64> {
        Complex::new(0.0, x)
    }

    #[test]
    fn bases_satisfy_decomposition_contract() {
        assert!(valid_decomposition(&XBasis.eigen_components()));
        assert!(valid_decomposition(&YBasis.eigen_components()));
        assert!(valid_decomposition(&ZBasis.eigen_components()));
        assert!(valid_decomposition(&HBasis.eigen_components()));
        assert!(valid_decomposition(&CZBasis.eigen_components()));
    }

    #[test]
    fn base_matrices() {
        assert!(matrix_approx_eq(
            &x().unitary().unwrap(),
            &array![[r(0.0), r(1.0)], [r(1.0), r(0.0)]],
            1e-12
        ));
        assert!(matrix_approx_eq(
            &y().unitary().unwrap(),
            &array![[r(0.0), i(-1.0)], [i(1.0), r(0.0)]],
            1e-12
        ));
        assert!(matrix_approx_eq(
            &z().unitary().unwrap(),
            &array![[r(1.0), r(0.0)], [r(0.0), r(-1.0)]],
            1e-12
        ));

        let s = r(std::f64::consts::FRAC_1_SQRT_2);
        assert!(matrix_approx_eq(
            &h().unitary().unwrap(),
            &array![[s, s], [s, -s]],
            1e-12
        ));

        let mut expected = identity(4);
        expected[(3, 3)] = r(-1.0);
        assert!(matrix_approx_eq(&cz().unitary().unwrap(), &expected, 1e-12));
    }

    #[test]
    fn sqrt_x_squares_to_x() {
        let sx = x().pow(0.5).unwrap();
        let m = sx.unitary().unwrap();
        assert!(matrix_approx_eq(
            &m.dot(&m),
            &x().unitary().unwrap(),
            1e-12
        ));
    }

    #[test]
    fn rx_pi_is_minus_i_x() {
        let m = rx(1.0).unitary().unwrap();
        let expected = array![[r(0.0), i(-1.0)], [i(-1.0), r(0.0)]];
        assert!(matrix_approx_eq(&m, &expected, 1e-12));
    }

    #[test]
    fn rotation_period_is_4() {
        assert_eq!(rx(1.0).period(), Some(4));
        assert_eq!(x().period(), Some(2));

        // rz(t) and rz(t+4) are the same rotation
        assert_eq!(rz(0.5), rz(4.5));
        assert_ne!(rz(0.5), rz(2.5));
    }

    #[test]
    fn symbolic_rotation() {
        let g = rz(Exponent::symbol(0));
        assert!(g.is_parameterized());
        assert!(g.unitary().is_none());
    }

    #[test]
    fn pauli_gates_equal_modulo_period() {
        assert_eq!(z(), z().pow(3.0).unwrap());
        assert_ne!(z(), z().pow(0.5).unwrap());
    }
}

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

//! Complex matrix helpers shared by the eigen-gate core.

use approx::abs_diff_eq;
use ndarray::Array2;
use num::Complex;

/// Square complex matrix used for eigenspace projectors and reconstructed
/// unitaries.
pub type Matrix = Array2<Complex<f64>>;

/// The identity matrix of the given dimension.
pub fn identity(dim: usize) -> Matrix {
    Array2::eye(dim)
}

/// The projector |v⟩⟨v| onto the span of the (normalized) vector v.
pub fn projector(v: &[Complex<f64>]) -> Matrix {
    let n = v.len();
    Array2::from_shape_fn((n, n), |(i, j)| v[i] * v[j].conj())
}

/// Elementwise comparison of two matrices within an absolute tolerance.
pub fn matrix_approx_eq(a: &Matrix, b: &Matrix, epsilon: f64) -> bool {
    a.dim() == b.dim()
        && a.iter().zip(b.iter()).all(|(x, y)| {
            abs_diff_eq!(x.re, y.re, epsilon = epsilon)
                && abs_diff_eq!(x.im, y.im, epsilon = epsilon)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn r(x: f64) -> Complex<f64> {
        Complex::new(x, 0.0)
    }

    #[test]
    fn projector_rank_one() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let p = projector(&[r(s), r(s)]);
        assert!(matrix_approx_eq(
            &p,
            &array![[r(0.5), r(0.5)], [r(0.5), r(0.5)]],
            1e-12
        ));

        // projectors are idempotent
        assert!(matrix_approx_eq(&p.dot(&p), &p, 1e-12));
    }

    #[test]
    fn approx_eq_dim_mismatch() {
        assert!(!matrix_approx_eq(&identity(2), &identity(3), 1e-12));
    }
}

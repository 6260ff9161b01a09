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

//! Gates with a known eigendecomposition.
//!
//! An [EigenGate] is defined by a set of eigenspaces rather than an explicit
//! matrix: each eigenspace is an [EigenComponent] pairing an angle θ (in
//! half-turns, so the eigenvalue is exp(iπθ)) with the projector onto the
//! eigenspace. Defining a gate this way makes powers unambiguous. For
//! example, a gate with a two-dimensional −1 eigenspace can split that
//! eigenspace into an i part and a −i part under a square root, and the
//! split is controlled entirely by the angle representatives the
//! decomposition chooses.

use std::any::{Any, TypeId};
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use itertools::{Itertools, MinMaxResult};
use num::integer::lcm;
use num::Complex;

use crate::linalg::{identity, matrix_approx_eq, Matrix};
use crate::params::{f64_hash_bits, Exponent, ParamResolver};

/// Tolerance used when deciding whether a candidate period is an integer.
const PERIOD_EPSILON: f64 = 1e-9;

/// One eigenspace of a gate's matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenComponent {
    /// The θ in λ = exp(iπθ), where λ is the eigenvalue of the eigenspace.
    ///
    /// An angle is used instead of a raw unit complex number because it
    /// disambiguates powers: λ = −1 can be written as θ = 1 or θ = −1, and
    /// the square root then extrapolates to i or −i respectively. The two
    /// representatives give the same base matrix.
    pub eigenvalue_exponent_factor: f64,

    /// The projector onto the eigenspace, Σ_k |λ_k⟩⟨λ_k| over an orthonormal
    /// basis of the eigenspace.
    pub eigenspace_projector: Matrix,
}

impl EigenComponent {
    pub fn new(eigenvalue_exponent_factor: f64, eigenspace_projector: Matrix) -> Self {
        EigenComponent {
            eigenvalue_exponent_factor,
            eigenspace_projector,
        }
    }
}

/// Supplies the eigendecomposition that defines a gate.
///
/// Implementors must return projectors that are mutually orthogonal and sum
/// to the identity on the represented space. This contract is not checked
/// when gates are used; [valid_decomposition] checks it explicitly and is
/// meant for tests. No ordering of the components is guaranteed, so callers
/// treat the returned sequence as a set.
///
/// A basis value may carry extra state (dimension, calibration data, ...);
/// since rebuilding a gate clones the basis, that state survives power and
/// resolution operations without any override mechanism.
pub trait EigenBasis: Clone {
    fn eigen_components(&self) -> Vec<EigenComponent>;
}

/// A gate with a known eigendecomposition, raised to a real or symbolic
/// power.
///
/// The matrix of the gate is Σ_k P_k · exp(iπ·e·(θ_k + s)), where (θ_k, P_k)
/// are the eigen-components of the basis, e is the exponent and s is the
/// global shift. Instances are immutable: [EigenGate::pow] and
/// [EigenGate::resolve] return new gates.
#[derive(Debug, Clone)]
pub struct EigenGate<B: EigenBasis> {
    basis: B,
    exponent: Exponent,
    global_shift: f64,
    canonical_exponent: OnceLock<Exponent>,
}

impl<B: EigenBasis> EigenGate<B> {
    /// The gate itself: exponent 1, no global shift.
    pub fn new(basis: B) -> Self {
        Self::new_with_shift(basis, 1.0, 0.0)
    }

    pub fn new_with_exponent(basis: B, exponent: impl Into<Exponent>) -> Self {
        Self::new_with_shift(basis, exponent, 0.0)
    }

    /// Builds a gate with an explicit global shift.
    ///
    /// The shift s is added to every eigen-angle before scaling by the
    /// exponent, so the gate picks up a global phase factor exp(iπ·s·e) as
    /// the exponent varies. For example, `x()` uses a shift of 0 while
    /// `rx(t)` uses −0.5, which is why rx(1) is −iX instead of X.
    pub fn new_with_shift(basis: B, exponent: impl Into<Exponent>, global_shift: f64) -> Self {
        EigenGate {
            basis,
            exponent: exponent.into(),
            global_shift,
            canonical_exponent: OnceLock::new(),
        }
    }

    pub fn basis(&self) -> &B {
        &self.basis
    }

    pub fn exponent(&self) -> Exponent {
        self.exponent
    }

    pub fn global_shift(&self) -> f64 {
        self.global_shift
    }

    /// Same gate, different exponent. The basis is cloned, so any extra
    /// state it carries is preserved.
    fn rebuild(&self, exponent: Exponent) -> Self {
        Self::new_with_shift(self.basis.clone(), exponent, self.global_shift)
    }

    /// The period of the exponent parameter, if one exists.
    ///
    /// The matrix is periodic in the exponent with period p exactly when
    /// every eigenvalue returns to its original phase after p applications.
    /// Each nonzero shifted angle e contributes a candidate period |2/e|;
    /// if any candidate is not an integer there is no common scalar period
    /// and `None` is returned, which disables canonicalization. A period of
    /// 0 means the matrix never moves (every shifted angle is zero).
    pub fn period(&self) -> Option<i64> {
        let mut int_periods = Vec::new();
        for c in self.basis.eigen_components() {
            let e = c.eigenvalue_exponent_factor + self.global_shift;
            if e == 0.0 {
                continue;
            }
            let real = (2.0 / e).abs();
            let rounded = real.round();
            if (real - rounded).abs() > PERIOD_EPSILON {
                log::trace!("no integer period: candidate {real} for angle {e}");
                return None;
            }
            int_periods.push(rounded as i64);
        }
        if int_periods.is_empty() {
            return Some(0);
        }
        Some(int_periods.into_iter().fold(1, lcm))
    }

    /// The exponent reduced modulo the gate's period, used for equality and
    /// hashing.
    ///
    /// Concrete exponents of a gate with period p are wrapped into the
    /// interval (−p/2, p/2], ties going to the positive side. Symbolic
    /// exponents, gates without a period and gates with period 0 all
    /// canonicalize to the raw exponent. Computed once and memoized for the
    /// lifetime of the instance; recomputation is pure, so racing readers
    /// agree on the result.
    pub fn canonical_exponent(&self) -> Exponent {
        *self
            .canonical_exponent
            .get_or_init(|| match (self.exponent, self.period()) {
                (Exponent::Concrete(e), Some(p)) if p != 0 => {
                    Exponent::Concrete(wrap_into_period(e, p as f64))
                }
                (e, _) => e,
            })
    }

    /// Raises the gate to a power, returning a new instance whose exponent
    /// is the product of the current exponent and `exponent`.
    ///
    /// Returns `None` when the exponents cannot be multiplied (see
    /// [Exponent::try_mul]). The global shift is unchanged.
    pub fn pow(&self, exponent: impl Into<Exponent>) -> Option<Self> {
        let e = self.exponent.try_mul(exponent.into())?;
        Some(self.rebuild(e))
    }

    /// `true` if the exponent is an unresolved symbolic variable.
    pub fn is_parameterized(&self) -> bool {
        self.exponent.is_symbolic()
    }

    /// `true` if [EigenGate::unitary] can produce a matrix.
    pub fn has_unitary(&self) -> bool {
        !self.is_parameterized()
    }

    /// Reconstructs the gate's unitary matrix, or `None` when the exponent
    /// is symbolic.
    ///
    /// Each eigenspace contributes its projector weighted by the phase
    /// factor exp(iπ·e·(θ+s)), taken on the principal branch as
    /// (−1)^(e·(θ+s)).
    ///
    /// # Panics
    ///
    /// Panics if the basis returns an empty decomposition, which violates
    /// the sum-to-identity contract.
    pub fn unitary(&self) -> Option<Matrix> {
        let e = self.exponent.as_concrete()?;
        let mut components = self.basis.eigen_components().into_iter();
        let first = components
            .next()
            .expect("eigendecomposition must be non-empty");
        let mut m = weighted_projector(&first, e, self.global_shift);
        for c in components {
            m = m + weighted_projector(&c, e, self.global_shift);
        }
        Some(m)
    }

    /// An upper bound on the trace distance between this gate and the
    /// identity.
    ///
    /// For a symbolic exponent the exact distance cannot be known, so the
    /// worst case 1.0 is returned. Otherwise the bound is linear in the
    /// spread of the eigen-angles and the exponent magnitude.
    pub fn trace_distance_bound(&self) -> f64 {
        let e = match self.exponent.as_concrete() {
            Some(e) => e,
            None => return 1.0,
        };
        let spread = self
            .basis
            .eigen_components()
            .iter()
            .map(|c| c.eigenvalue_exponent_factor)
            .minmax();
        match spread {
            MinMaxResult::NoElements => panic!("eigendecomposition must be non-empty"),
            MinMaxResult::OneElement(_) => 0.0,
            // 3.5 is a calibrated bound factor
            MinMaxResult::MinMax(lo, hi) => ((hi - lo) * e * 3.5).abs(),
        }
    }

    /// Replaces a symbolic exponent with the resolver's value for it,
    /// returning a new instance. Gates whose variable the resolver does not
    /// know, and concrete gates, come back unchanged.
    pub fn resolve(&self, resolver: &impl ParamResolver) -> Self {
        self.rebuild(self.exponent.resolve(resolver))
    }
}

/// Weights one eigen-component's projector by its phase factor at the given
/// exponent and shift.
fn weighted_projector(c: &EigenComponent, exponent: f64, shift: f64) -> Matrix {
    let phase = Complex::new(-1.0, 0.0).powf(exponent * (c.eigenvalue_exponent_factor + shift));
    &c.eigenspace_projector * phase
}

/// Wraps `e` into the half-open interval (−p/2, p/2], ties going positive.
fn wrap_into_period(e: f64, p: f64) -> f64 {
    let m = e.rem_euclid(p);
    if m > p / 2.0 {
        m - p
    } else {
        m
    }
}

/// Two gates of the same concrete type are equal when their canonical
/// exponents and global shifts agree. Raw exponents that differ by a full
/// period therefore compare equal. For comparison across distinct concrete
/// types see [identity_eq].
impl<B: EigenBasis> PartialEq for EigenGate<B> {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_exponent() == other.canonical_exponent()
            && self.global_shift == other.global_shift
    }
}

// Exponents and shifts are never NaN, so equality is total.
impl<B: EigenBasis> Eq for EigenGate<B> {}

impl<B: EigenBasis> Hash for EigenGate<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_exponent().hash(state);
        state.write_u64(f64_hash_bits(self.global_shift));
    }
}

/// The identity data of a gate: its concrete type, canonical exponent and
/// global shift. Dyn-compatible, for collections that mix gate types.
pub trait GateIdentity: Any {
    fn identity(&self) -> (TypeId, Exponent, f64);
}

impl<B: EigenBasis + 'static> GateIdentity for EigenGate<B> {
    fn identity(&self) -> (TypeId, Exponent, f64) {
        (
            TypeId::of::<Self>(),
            self.canonical_exponent(),
            self.global_shift,
        )
    }
}

/// Compares two gates that may have different concrete types.
///
/// Returns `None` when the types differ, since gates of different kinds are
/// not comparable by canonical exponent alone; callers fall back to whatever
/// default their equality protocol prescribes.
pub fn identity_eq(a: &dyn GateIdentity, b: &dyn GateIdentity) -> Option<bool> {
    let (ta, ea, sa) = a.identity();
    let (tb, eb, sb) = b.identity();
    if ta != tb {
        return None;
    }
    Some(ea == eb && sa == sb)
}

/// Checks the decomposition contract: projectors are mutually orthogonal
/// and sum to the identity. Meant for tests and debug assertions, not for
/// the hot path.
pub fn valid_decomposition(components: &[EigenComponent]) -> bool {
    let dim = match components.first() {
        Some(c) => c.eigenspace_projector.nrows(),
        None => return false,
    };
    if components
        .iter()
        .any(|c| c.eigenspace_projector.dim() != (dim, dim))
    {
        return false;
    }

    let mut sum = Matrix::zeros((dim, dim));
    for c in components {
        sum = sum + &c.eigenspace_projector;
    }
    if !matrix_approx_eq(&sum, &identity(dim), PERIOD_EPSILON) {
        return false;
    }

    let zero = Matrix::zeros((dim, dim));
    for (i, c1) in components.iter().enumerate() {
        for c2 in &components[i + 1..] {
            let prod = c1.eigenspace_projector.dot(&c2.eigenspace_projector);
            if !matrix_approx_eq(&prod, &zero, PERIOD_EPSILON) {
                return false;
            }
        }
    }
    true
}

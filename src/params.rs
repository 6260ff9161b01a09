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

//! Gate exponents: concrete reals or unresolved symbolic variables.

use std::hash::{Hash, Hasher};

use derive_more::Display;
use rustc_hash::FxHashMap;

/// A symbolic variable, represented as an unsigned integer id.
pub type Var = u16;

/// The exponent of a gate, measured as a multiplier on the gate's
/// eigen-angles.
///
/// A `Symbolic` exponent stands for a value that is not known yet; gates
/// carrying one cannot produce a concrete unitary until the variable is
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum Exponent {
    #[display("{_0}")]
    Concrete(f64),
    #[display("x{_0}")]
    Symbolic(Var),
}

impl Exponent {
    /// Shorthand for a symbolic exponent.
    pub fn symbol(v: Var) -> Self {
        Exponent::Symbolic(v)
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, Exponent::Symbolic(_))
    }

    /// The concrete value, if there is one.
    pub fn as_concrete(&self) -> Option<f64> {
        match self {
            Exponent::Concrete(e) => Some(*e),
            Exponent::Symbolic(_) => None,
        }
    }

    /// Multiplies two exponents, declining combinations that have no
    /// representation.
    ///
    /// Concrete values multiply as usual. A symbolic operand survives
    /// multiplication by a concrete 1 and is annihilated by a concrete 0;
    /// every other combination involving a symbol returns `None`, and the
    /// caller decides how to react.
    pub fn try_mul(self, other: Exponent) -> Option<Exponent> {
        use Exponent::*;
        match (self, other) {
            (Concrete(a), Concrete(b)) => Some(Concrete(a * b)),
            (s @ Symbolic(_), Concrete(c)) | (Concrete(c), s @ Symbolic(_)) => {
                if c == 1.0 {
                    Some(s)
                } else if c == 0.0 {
                    Some(Concrete(0.0))
                } else {
                    None
                }
            }
            (Symbolic(_), Symbolic(_)) => None,
        }
    }

    /// Replaces a symbolic exponent with the resolver's value for its
    /// variable. Unknown variables and concrete exponents pass through
    /// unchanged.
    pub fn resolve(self, resolver: &impl ParamResolver) -> Exponent {
        match self {
            Exponent::Symbolic(v) => match resolver.value_of(v) {
                Some(e) => Exponent::Concrete(e),
                None => self,
            },
            e => e,
        }
    }
}

impl From<f64> for Exponent {
    fn from(e: f64) -> Exponent {
        Exponent::Concrete(e)
    }
}

impl From<i32> for Exponent {
    fn from(e: i32) -> Exponent {
        Exponent::Concrete(e as f64)
    }
}

/// Normalizes -0.0 to 0.0 so that equal floats hash identically.
pub(crate) fn f64_hash_bits(f: f64) -> u64 {
    let f = if f == 0.0 { 0.0 } else { f };
    f.to_bits()
}

impl Hash for Exponent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Exponent::Concrete(e) => {
                state.write_u8(0);
                state.write_u64(f64_hash_bits(*e));
            }
            Exponent::Symbolic(v) => {
                state.write_u8(1);
                state.write_u16(*v);
            }
        }
    }
}

/// Maps symbolic variables to concrete values.
pub trait ParamResolver {
    /// The value assigned to a variable, if any.
    fn value_of(&self, v: Var) -> Option<f64>;
}

impl ParamResolver for FxHashMap<Var, f64> {
    fn value_of(&self, v: Var) -> Option<f64> {
        self.get(&v).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use Exponent::*;

    #[rstest]
    #[case(Concrete(2.0), Concrete(1.5), Some(Concrete(3.0)))]
    #[case(Symbolic(0), Concrete(1.0), Some(Symbolic(0)))]
    #[case(Concrete(1.0), Symbolic(3), Some(Symbolic(3)))]
    #[case(Symbolic(0), Concrete(0.0), Some(Concrete(0.0)))]
    #[case(Symbolic(0), Concrete(2.0), None)]
    #[case(Concrete(2.0), Symbolic(0), None)]
    #[case(Symbolic(0), Symbolic(1), None)]
    fn mul(#[case] a: Exponent, #[case] b: Exponent, #[case] expected: Option<Exponent>) {
        assert_eq!(a.try_mul(b), expected);
    }

    #[test]
    fn resolve() {
        let mut r: FxHashMap<Var, f64> = FxHashMap::default();
        r.insert(1, 0.25);

        assert_eq!(Exponent::symbol(1).resolve(&r), Concrete(0.25));
        assert_eq!(Exponent::symbol(2).resolve(&r), Symbolic(2));
        assert_eq!(Concrete(3.0).resolve(&r), Concrete(3.0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Concrete(0.5)), "0.5");
        assert_eq!(format!("{}", Symbolic(7)), "x7");
    }
}

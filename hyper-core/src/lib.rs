//! # 🔢 hyper-core — Números Hipercomplexos
//!
//! Números complexos e quatérnios como valores polimórficos, com as quatro
//! operações definidas entre tipos mistos.
//!
//! ## Computational Complexity
//!
//! **Arithmetic — O(1):**
//! - Complex: at most 6 multiplications (division)
//! - Quaternion: 16 multiplications (Hamilton product), plus 4 divisions for the inverse
//!
//! **Equality — O(1):**
//! - Exact `f64` comparison of up to 4 components
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          HyperComplex                           │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Complex(Complex64) | Quaternion          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  combine(lhs, op, rhs): widening rule     │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Kind-aware equality (exact)              │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use hyper_core::prelude::*;
//!
//! let c = HyperComplex::complex(2.0, 3.0);
//! let q = HyperComplex::quaternion(1.0, 2.0, 3.0, 4.0);
//!
//! assert_eq!(c * HyperComplex::complex(4.0, 5.0), HyperComplex::complex(-7.0, 22.0));
//! assert_eq!((q + c).kind(), Kind::Quaternion);
//! assert_eq!(HyperComplex::quaternion(1.0, 2.0, 0.0, 0.0), HyperComplex::complex(1.0, 2.0));
//! ```

pub mod arithmetic;
pub mod equality;
pub mod error;
pub mod quaternion;
pub mod value;

pub use arithmetic::{combine, combine_scalar, result_kind, Op};
pub use error::{HyperError, HyperResult};
pub use quaternion::Quaternion;
pub use value::{HyperComplex, Kind};

pub use num_complex::Complex64;

/// Importação única: `use hyper_core::prelude::*;`
pub mod prelude {
    pub use crate::arithmetic::{combine, combine_scalar, Op};
    pub use crate::error::{HyperError, HyperResult};
    pub use crate::quaternion::Quaternion;
    pub use crate::value::{HyperComplex, Kind};
    pub use num_complex::Complex64;
}

#[cfg(test)]
mod tests;

//! # 🧮 hyper-calc — Calculadora de Pilha
//!
//! Aplica operações binárias a operandos heterogêneos (complexos e
//! quatérnios) guardados numa pilha LIFO e gerencia o tempo de vida dos
//! resultados que produz.
//!
//! ## Computational Complexity
//!
//! **push / top / size — O(1)**
//!
//! **calculate — O(1):**
//! - Two handle clones, one `combine` call, one allocation for the result
//!
//! **Drop — O(r):**
//! - r = results synthesized by this instance
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         Calculator                              │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Operand Stack (Rc handles)               │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Result Pool (owned, released on drop)    │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Division-by-zero guard                   │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use hyper_calc::{Calculator, CalcError};
//! use hyper_core::prelude::*;
//! use std::rc::Rc;
//!
//! let mut calc = Calculator::new();
//! let a = Rc::new(HyperComplex::complex(2.0, 3.0));
//! let b = Rc::new(HyperComplex::quaternion(1.0, 2.0, 3.0, 4.0));
//!
//! calc.push(&a);
//! calc.push(&b);
//! let sum = calc.calculate(Op::Add).unwrap();
//! assert_eq!(*sum, HyperComplex::quaternion(3.0, 5.0, 3.0, 4.0));
//!
//! assert_eq!(calc.calculate(Op::Add), Err(CalcError::SingleOperand));
//! ```

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::{Calculator, Operand};
pub use config::CalculatorConfig;
pub use error::{CalcError, CalcResult};

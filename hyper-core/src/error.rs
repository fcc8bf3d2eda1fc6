//! Tipos de erro para hyper-core

use crate::value::Kind;
use thiserror::Error;

/// Resultado customizado para operações sobre valores hipercomplexos
pub type HyperResult<T> = Result<T, HyperError>;

/// Erros que podem ocorrer ao manipular componentes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HyperError {
    #[error("Expected {} imaginary {}, but got {found}", arity_word(.expected), coefficient_word(.expected))]
    ImaginaryArity {
        kind: Kind,
        expected: usize,
        found: usize,
    },

    #[error("{kind} has no {component} component")]
    MissingComponent { kind: Kind, component: char },
}

fn arity_word(n: &usize) -> &'static str {
    match *n {
        1 => "one",
        3 => "three",
        _ => "some",
    }
}

fn coefficient_word(n: &usize) -> &'static str {
    if *n == 1 { "coefficient" } else { "coefficients" }
}

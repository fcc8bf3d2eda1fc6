//! Tipos de erro para hyper-calc

use thiserror::Error;

/// Resultado customizado para operações da calculadora
pub type CalcResult<T> = Result<T, CalcError>;

/// Erros reportados por `Calculator::calculate`
///
/// Nenhum é fatal: a pilha fica inalterada ou restaurada na ordem original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("the stack is empty")]
    EmptyStack,

    #[error("only one operand in stack")]
    SingleOperand,

    #[error("can't divide by 0")]
    DivisionByZero,
}

impl CalcError {
    /// Faltam operandos (pilha com 0 ou 1 elemento)
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::EmptyStack | Self::SingleOperand)
    }
}

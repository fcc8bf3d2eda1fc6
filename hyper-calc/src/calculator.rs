//! Calculadora de pilha de operandos
//!
//! Operandos são handles compartilhados (`Rc`). A calculadora distingue dois
//! conjuntos:
//!
//! - operandos empilhados pelo chamador, que continua dono deles;
//! - resultados sintetizados por [`Calculator::calculate`], registrados em
//!   `results` e liberados uma única vez quando a calculadora é destruída.

use crate::config::CalculatorConfig;
use crate::error::{CalcError, CalcResult};
use hyper_core::{HyperComplex, Op, combine, result_kind};
use std::rc::Rc;
use tracing::{debug, warn};

/// Handle compartilhado para um valor na pilha
pub type Operand = Rc<HyperComplex>;

/// Calculadora LIFO sobre valores hipercomplexos
#[derive(Debug)]
pub struct Calculator {
    /// Pilha (topo = último elemento)
    stack: Vec<Operand>,
    /// Resultados criados por esta instância
    results: Vec<Operand>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Cria calculadora com a configuração do ambiente
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Cria calculadora com configuração customizada
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            stack: Vec::with_capacity(config.initial_capacity),
            results: Vec::new(),
        }
    }

    /// Cria calculadora a partir de uma pilha existente (base primeiro)
    ///
    /// Os handles continuam pertencendo ao chamador.
    pub fn from_stack(stack: Vec<Operand>) -> Self {
        Self {
            stack,
            results: Vec::new(),
        }
    }

    /// Empilha um operando do chamador
    pub fn push(&mut self, operand: &Operand) {
        self.stack.push(Rc::clone(operand));
    }

    /// Empilha um valor novo e devolve o handle do chamador
    pub fn push_value(&mut self, value: HyperComplex) -> Operand {
        let operand = Rc::new(value);
        self.push(&operand);
        operand
    }

    /// Topo da pilha; `None` se vazia
    pub fn top(&self) -> Option<&Operand> {
        self.stack.last()
    }

    /// Remove o topo, por exemplo para trocar um divisor nulo
    ///
    /// Um resultado sintetizado removido continua no pool de resultados.
    pub fn pop(&mut self) -> Option<Operand> {
        self.stack.pop()
    }

    /// Número de elementos na pilha
    pub fn size(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pilha completa, da base para o topo
    pub fn operands(&self) -> &[Operand] {
        &self.stack
    }

    /// Resultados sintetizados que esta instância ainda possui
    pub fn owned_results(&self) -> usize {
        self.results.len()
    }

    /// Aplica `op` aos dois elementos do topo
    ///
    /// O operando da esquerda é o que está abaixo do topo; o da direita é o
    /// topo. Em caso de sucesso ambos são consumidos e o resultado, do tipo
    /// mais largo entre eles, é empilhado e devolvido.
    ///
    /// # Errors
    ///
    /// - [`CalcError::EmptyStack`] / [`CalcError::SingleOperand`]: pilha
    ///   inalterada.
    /// - [`CalcError::DivisionByZero`]: divisor igual a 0; os dois operandos
    ///   permanecem na ordem original.
    pub fn calculate(&mut self, op: Op) -> CalcResult<Operand> {
        let (lhs, rhs) = match self.stack.as_slice() {
            [] => return Err(self.reject(CalcError::EmptyStack, op)),
            [_] => return Err(self.reject(CalcError::SingleOperand, op)),
            [.., lhs, rhs] => (Rc::clone(lhs), Rc::clone(rhs)),
        };

        if op == Op::Divide && rhs.is_zero() {
            return Err(self.reject(CalcError::DivisionByZero, op));
        }

        self.stack.truncate(self.stack.len() - 2);

        let result = Rc::new(combine(&lhs, op, &rhs));
        debug!(
            %op,
            kind = %result_kind(&lhs, &rhs),
            lhs = %lhs,
            rhs = %rhs,
            result = %result,
            "calculated"
        );

        self.results.push(Rc::clone(&result));
        self.stack.push(Rc::clone(&result));
        Ok(result)
    }

    fn reject(&self, err: CalcError, op: Op) -> CalcError {
        warn!(%op, depth = self.stack.len(), "{err}");
        err
    }
}

impl Clone for Calculator {
    /// Cópia rasa da pilha; os resultados já sintetizados continuam
    /// pertencendo apenas à instância original
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            results: Vec::new(),
        }
    }
}

impl Drop for Calculator {
    fn drop(&mut self) {
        if !self.results.is_empty() {
            debug!(released = self.results.len(), "released synthesized results");
        }
    }
}

//! Avaliação de uma pilha de operandos passada na linha de comando

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use hyper_calc::{Calculator, Operand};
use hyper_core::prelude::*;
use std::rc::Rc;
use tracing::debug;

/// Operação aceita por `--op`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OpArg {
    Add,
    Sub,
    Mul,
    Div,
}

impl From<OpArg> for Op {
    fn from(arg: OpArg) -> Self {
        match arg {
            OpArg::Add => Op::Add,
            OpArg::Sub => Op::Subtract,
            OpArg::Mul => Op::Multiply,
            OpArg::Div => Op::Divide,
        }
    }
}

/// Converte `re,i` ou `re,i,j,k` num valor
pub fn parse_operand(text: &str) -> Result<HyperComplex> {
    let components = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid component '{}' in operand '{text}'", part.trim()))
        })
        .collect::<Result<Vec<_>>>()?;

    match HyperComplex::from_components(&components) {
        Some(value) => Ok(value),
        None => bail!(
            "operand '{text}' has {} components; expected 2 (complex) or 4 (quaternion)",
            components.len()
        ),
    }
}

/// Empilha `operands` em ordem e aplica cada operação
///
/// Devolve a pilha final com o topo primeiro.
pub fn evaluate(operands: &[HyperComplex], ops: &[Op]) -> Result<Vec<HyperComplex>> {
    // o chamador é o dono dos operandos durante toda a avaliação
    let handles: Vec<Operand> = operands.iter().copied().map(Rc::new).collect();

    let mut calc = Calculator::new();
    for handle in &handles {
        calc.push(handle);
    }

    for (step, &op) in ops.iter().enumerate() {
        let result = calc
            .calculate(op)
            .with_context(|| format!("step {} ({op})", step + 1))?;
        debug!(step = step + 1, %op, %result, depth = calc.size(), "evaluated");
    }

    Ok(calc.operands().iter().rev().map(|operand| **operand).collect())
}

/// Texto de saída, uma linha por elemento, topo primeiro
pub fn render(stack: &[HyperComplex]) -> String {
    stack
        .iter()
        .enumerate()
        .map(|(depth, value)| format!("[{depth}] {value}  ({})", value.kind()))
        .collect::<Vec<_>>()
        .join("\n")
}

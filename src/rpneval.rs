use thiserror::Error;

use crate::ops::Value;
use crate::parser::RPNExpr;
use crate::yard::Yard;
use crate::Error;

/// Evaluation failure: the operand stack held fewer operands than a
/// descriptor's arity, or the sequence left nothing to return.
///
/// A declared-arity mismatch is deliberately not its own error kind;
/// it shows up here as an underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("operand stack underflow")]
    StackUnderflow,
}

impl Yard {
    /// Evaluate an RPN token sequence against the registered tables.
    ///
    /// Tokens matching a registered operator or function consume their
    /// arity in operands and push one result; everything else is a
    /// literal. Surplus operands are not validated; the last value
    /// pushed wins.
    pub fn resolve_rpn(&self, rpn: &RPNExpr) -> Result<Value, EvalError> {
        let mut operands: Vec<Value> = Vec::new();
        for token in rpn.0.iter() {
            match self.lookup(token) {
                Some(def) => {
                    if def.arity() > operands.len() {
                        return Err(EvalError::StackUnderflow);
                    }
                    // arguments keep their left-to-right source order
                    let cut = operands.len() - def.arity();
                    let args = operands.split_off(cut);
                    operands.push(def.apply(&args));
                }
                None if self.raw_literals => operands.push(Value::Raw(token.clone())),
                None => operands.push(Value::Num(token.parse().unwrap_or(f64::NAN))),
            }
        }
        operands.pop().ok_or(EvalError::StackUnderflow)
    }

    /// Parse and evaluate in one call.
    pub fn resolve(&self, expr: &str) -> Result<Value, Error> {
        let rpn = self.parse(expr)?;
        Ok(self.resolve_rpn(&rpn)?)
    }

    /// [`Yard::resolve`] over a pre-tokenized expression.
    pub fn resolve_tokens<I>(&self, tokens: I) -> Result<Value, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let rpn = self.parse_tokens(tokens)?;
        Ok(self.resolve_rpn(&rpn)?)
    }
}

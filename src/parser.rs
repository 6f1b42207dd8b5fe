use std::fmt;

use thiserror::Error;

use crate::tokenizer::Tokenizer;
use crate::yard::Yard;

/// Parse failures. Both kinds abort the parse with no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unbalanced closing parenthesis")]
    UnbalancedClose,
    #[error("unbalanced opening parenthesis")]
    UnbalancedOpen,
}

/// A parsed expression in postfix (RPN) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RPNExpr(pub Vec<String>);

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

// Shunting-yard scratch state for a single parse call. Both entry
// modes feed this one token at a time.
struct Shunter<'y> {
    yard: &'y Yard,
    out: Vec<String>,
    stack: Vec<String>,
    prev: String,
    sign: String,
}

impl<'y> Shunter<'y> {
    fn new(yard: &'y Yard) -> Shunter<'y> {
        Shunter {
            yard,
            out: Vec::new(),
            stack: Vec::new(),
            prev: String::new(),
            sign: String::new(),
        }
    }

    fn feed(&mut self, raw: &str) -> Result<(), ParseError> {
        // a held sign joins the front of the next token before anything else
        let token = if self.sign.is_empty() {
            raw.to_string()
        } else {
            std::mem::take(&mut self.sign) + raw
        };

        // An operator right after start-of-input or '(' is a sign for
        // the token that follows, not an operator of its own. This
        // fires nowhere else: an operator directly following another
        // operator stays an operator.
        if (self.prev.is_empty() || self.yard.is_left_paren(&self.prev))
            && self.yard.is_operator(&token)
        {
            self.sign = token;
            return Ok(());
        }

        if self.yard.is_left_paren(&token) {
            self.stack.push(token.clone());
        } else if self.yard.is_right_paren(&token) {
            self.close_group()?;
        } else if self.yard.is_operator(&token) {
            self.push_operator(&token);
        } else if self.yard.is_function(&token) {
            // scope marker only; never reaches the output queue
            self.stack.push(token.clone());
        } else {
            self.literal(&token);
        }
        self.prev = token;
        Ok(())
    }

    // ')': emit pending operators down to the matching '('
    fn close_group(&mut self) -> Result<(), ParseError> {
        while let Some(top) = self.stack.pop() {
            if self.yard.is_left_paren(&top) {
                return Ok(());
            }
            if !self.yard.is_function(&top) {
                self.out.push(top);
            }
        }
        Err(ParseError::UnbalancedClose)
    }

    fn push_operator(&mut self, token: &str) {
        let op = &self.yard.operators[token];
        while let Some(top) = self.stack.last() {
            let yields = match self.yard.operators.get(top) {
                // '(' and function markers shield whatever is below
                None => false,
                Some(top_op) => (op.is_left_assoc() && op.prec_le(top_op)) || op.prec_lt(top_op),
            };
            if !yields {
                break;
            }
            let popped = self.stack.pop().unwrap();
            self.out.push(popped);
        }
        self.stack.push(token.to_string());
    }

    // multi-character literals accumulate onto the newest output entry
    fn literal(&mut self, token: &str) {
        let fresh = self.prev.is_empty()
            || self.yard.is_left_paren(&self.prev)
            || self.yard.is_operator(&self.prev);
        match self.out.last_mut() {
            Some(last) if !fresh => last.push_str(token),
            _ => self.out.push(token.to_string()),
        }
    }

    fn finish(mut self) -> Result<RPNExpr, ParseError> {
        while let Some(top) = self.stack.pop() {
            if self.yard.is_left_paren(&top) {
                return Err(ParseError::UnbalancedOpen);
            }
            if !self.yard.is_function(&top) {
                self.out.push(top);
            }
        }
        Ok(RPNExpr(self.out))
    }
}

impl Yard {
    /// Parse an infix expression into RPN.
    ///
    /// A leading operator, or one right after `(`, folds into the
    /// following token as its sign, so `-5` stays one literal. An
    /// operator directly following another operator is not folded and
    /// parses as a second operator token.
    pub fn parse(&self, expr: &str) -> Result<RPNExpr, ParseError> {
        let mut shunter = Shunter::new(self);
        for token in Tokenizer::new(expr, &self.symbols) {
            shunter.feed(&token)?;
        }
        shunter.finish()
    }

    /// Parse a pre-tokenized expression. Element boundaries are taken
    /// as-is: no symbol matching and no whitespace handling.
    pub fn parse_tokens<I>(&self, tokens: I) -> Result<RPNExpr, ParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut shunter = Shunter::new(self);
        for token in tokens {
            shunter.feed(token.as_ref())?;
        }
        shunter.finish()
    }
}

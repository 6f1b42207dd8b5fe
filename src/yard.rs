use std::collections::HashMap;

use crate::builtins;
use crate::ops::OpDef;

/// An expression engine instance: the registered operator and function
/// tables plus the literal-handling mode.
///
/// Every instance owns its own tables; registering a symbol on one
/// `Yard` never affects another. Parsing and evaluation take `&self`,
/// so a configured engine can be shared across threads; registration
/// takes `&mut self` and must be serialized by the caller as usual.
pub struct Yard {
    pub(crate) operators: HashMap<String, OpDef>,
    pub(crate) functions: HashMap<String, OpDef>,
    // registration order; drives longest-match scanning and its tie-break
    pub(crate) symbols: Vec<String>,
    pub(crate) raw_literals: bool,
}

impl Yard {
    /// Engine with the standard arithmetic operators and no functions.
    pub fn new() -> Yard {
        let mut yard = Yard::empty();
        for op in builtins::standard_ops() {
            yard.register_operator(op);
        }
        yard
    }

    /// Engine with no registered symbols at all.
    pub fn empty() -> Yard {
        Yard {
            operators: HashMap::new(),
            functions: HashMap::new(),
            symbols: Vec::new(),
            raw_literals: false,
        }
    }

    /// When set, literal tokens evaluate to their raw text instead of
    /// being parsed as floating-point numbers.
    pub fn raw_literals(mut self, raw: bool) -> Yard {
        self.raw_literals = raw;
        self
    }

    /// Register `def` under its symbol, overwriting (with a warning)
    /// any operator already registered for that symbol.
    pub fn register_operator(&mut self, def: OpDef) {
        let symbol = def.symbol().to_string();
        if self.operators.insert(symbol.clone(), def).is_some() {
            log::warn!("operator {:?} already registered, overwriting", symbol);
        } else if !self.symbols.contains(&symbol) {
            self.symbols.push(symbol);
        }
    }

    /// Same as [`Yard::register_operator`], in the function namespace.
    pub fn register_function(&mut self, def: OpDef) {
        let name = def.symbol().to_string();
        if self.functions.insert(name.clone(), def).is_some() {
            log::warn!("function {:?} already registered, overwriting", name);
        } else if !self.symbols.contains(&name) {
            self.symbols.push(name);
        }
    }

    pub fn is_operator(&self, token: &str) -> bool {
        self.operators.contains_key(token)
    }

    pub fn is_function(&self, token: &str) -> bool {
        self.functions.contains_key(token)
    }

    pub fn is_left_paren(&self, token: &str) -> bool {
        token == "("
    }

    pub fn is_right_paren(&self, token: &str) -> bool {
        token == ")"
    }

    // operators shadow functions for symbols registered in both tables
    pub(crate) fn lookup(&self, token: &str) -> Option<&OpDef> {
        self.operators
            .get(token)
            .or_else(|| self.functions.get(token))
    }
}

impl Default for Yard {
    fn default() -> Yard {
        Yard::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Yard;
    use crate::ops::{Assoc, OpDef};

    #[test]
    fn default_table() {
        let yard = Yard::new();
        for sym in ["+", "-", "*", "/", "^"] {
            assert!(yard.is_operator(sym));
        }
        assert!(!yard.is_function("sin"));
        assert!(yard.is_left_paren("("));
        assert!(yard.is_right_paren(")"));
        assert!(!yard.is_operator("("));
    }

    #[test]
    fn duplicate_registration_overwrites() {
        let mut yard = Yard::new();
        yard.register_operator(OpDef::binary("+", 2, Assoc::Left, |l, r| l * r));
        assert_eq!(yard.resolve("3+4").unwrap().to_f64(), 12.0);
        // the symbol is listed once for the tokenizer scan
        assert_eq!(yard.symbols.iter().filter(|s| *s == "+").count(), 1);
    }

    #[test]
    fn instances_are_isolated() {
        let mut a = Yard::empty();
        let b = Yard::empty();
        a.register_operator(OpDef::binary("&", 2, Assoc::Left, |l, r| l + r));
        assert!(a.is_operator("&"));
        assert!(!b.is_operator("&"));
    }

    #[test]
    fn registration_order_is_kept() {
        let mut yard = Yard::empty();
        yard.register_operator(OpDef::binary(">=", 4, Assoc::Left, |l, r| (l >= r) as u8 as f64));
        yard.register_operator(OpDef::binary(">", 4, Assoc::Left, |l, r| (l > r) as u8 as f64));
        assert_eq!(yard.symbols, vec![">=", ">"]);
    }
}

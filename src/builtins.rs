//! Ready-made operator and function descriptors.

use crate::ops::{Assoc, OpDef};

/// The standard arithmetic operator table: `+ - * / ^`.
pub fn standard_ops() -> Vec<OpDef> {
    vec![
        OpDef::binary("+", 2, Assoc::Left, |l, r| l + r),
        OpDef::binary("-", 2, Assoc::Left, |l, r| l - r),
        OpDef::binary("*", 3, Assoc::Left, |l, r| l * r),
        OpDef::binary("/", 3, Assoc::Left, |l, r| l / r),
        OpDef::binary("^", 5, Assoc::Right, f64::powf),
    ]
}

/// Common numeric functions. None are registered by default; they are
/// mostly useful with caller-supplied RPN, since the infix grammar has
/// no argument separator.
pub fn math_fns() -> Vec<OpDef> {
    vec![
        OpDef::func("sin", 1, |args| args[0].sin()),
        OpDef::func("cos", 1, |args| args[0].cos()),
        OpDef::func("abs", 1, |args| args[0].abs()),
        OpDef::func("atan2", 2, |args| args[0].atan2(args[1])),
        OpDef::func("max", 2, |args| args[0].max(args[1])),
        OpDef::func("min", 2, |args| args[0].min(args[1])),
        OpDef::func("rand", 1, |args| args[0] * rand::random::<f64>()),
    ]
}

#[cfg(test)]
mod tests {
    use super::{math_fns, standard_ops};
    use crate::ops::Value;

    #[test]
    fn standard_set_symbols() {
        let symbols: Vec<String> = standard_ops()
            .iter()
            .map(|o| o.symbol().to_string())
            .collect();
        assert_eq!(symbols, ["+", "-", "*", "/", "^"]);
    }

    #[test]
    fn rand_scales_its_argument() {
        let fns = math_fns();
        let rand_fn = fns.iter().find(|f| f.symbol() == "rand").unwrap();
        let out = rand_fn.apply(&[Value::Num(10.0)]).to_f64();
        assert!((0.0..10.0).contains(&out));
    }
}

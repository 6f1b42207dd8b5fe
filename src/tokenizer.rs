/// Table-driven scanner: splits an expression into registered-symbol
/// and single-character tokens, longest match first.
pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    symbols: &'a [String],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str, symbols: &'a [String]) -> Tokenizer<'a> {
        Tokenizer {
            input,
            symbols,
            pos: 0,
        }
    }

    // Longest registered symbol prefixing the rest of the input.
    // Equal-length candidates keep the earliest registration.
    fn match_symbol(&self, rest: &str) -> Option<&'a str> {
        let mut best: Option<&'a str> = None;
        for sym in self.symbols {
            if sym.is_empty() {
                continue;
            }
            if rest.starts_with(sym.as_str()) && best.map_or(true, |b| sym.len() > b.len()) {
                best = Some(sym);
            }
        }
        best
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];
            let token = match self.match_symbol(rest) {
                Some(sym) => sym.to_string(),
                None => rest.chars().next()?.to_string(),
            };
            self.pos += token.len();
            // only the exact single-space token is dropped
            if token == " " {
                continue;
            }
            return Some(token);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::Tokenizer;

    fn tokens(input: &str, symbols: &[&str]) -> Vec<String> {
        let symbols: Vec<String> = symbols.iter().map(|s| s.to_string()).collect();
        Tokenizer::new(input, &symbols).collect()
    }

    #[test]
    fn longest_symbol_wins() {
        assert_eq!(tokens("1>=2", &[">", ">="]), vec!["1", ">=", "2"]);
        assert_eq!(tokens("1>2", &[">", ">="]), vec!["1", ">", "2"]);
    }

    #[test]
    fn unmatched_input_splits_per_char() {
        assert_eq!(tokens("abc", &["+"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn single_spaces_are_dropped() {
        assert_eq!(tokens("1 + 2", &["+"]), vec!["1", "+", "2"]);
        assert_eq!(tokens("   ", &["+"]), Vec::<String>::new());
    }

    #[test]
    fn multibyte_chars_stay_whole() {
        assert_eq!(tokens("π+1", &["+"]), vec!["π", "+", "1"]);
    }
}

use crate::errors::{ShellError, ShellResult};

/// Whitespace-delimited tokens of one input line.
///
/// Tokens borrow from the line they were split from, so the vector cannot
/// outlive it. Reading past the last token yields `None`, which is the
/// end-of-arguments marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgVector<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> ArgVector<'a> {
    /// The command name, or `None` for a blank line
    pub fn command(&self) -> Option<&'a str> {
        self.tokens.first().copied()
    }

    /// Token at `index`; `None` once past the last token
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    /// Tokens after the command name
    pub fn params(&self) -> &[&'a str] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().copied()
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Split `line` on runs of spaces, tabs and line breaks.
///
/// A trailing newline is accepted and ignored. No quoting or escaping is
/// interpreted. The vector is allocated once, sized to the token count.
pub fn tokenize(line: &str) -> ShellResult<ArgVector<'_>> {
    let count = fields(line).count();

    let mut tokens = Vec::new();
    tokens
        .try_reserve_exact(count)
        .map_err(|e| ShellError::OutOfMemory(format!("argument vector: {}", e)))?;
    tokens.extend(fields(line));

    Ok(ArgVector { tokens })
}

fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|field| !field.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_has_no_tokens() {
        for line in ["", "\n", "   ", " \t \n"] {
            let args = tokenize(line).unwrap();
            assert!(args.is_empty(), "{:?}", line);
            assert_eq!(args.command(), None);
            assert_eq!(args.get(0), None);
        }
    }

    #[test]
    fn calc_expression_yields_four_tokens() {
        let args = tokenize("calc 5 + 3\n").unwrap();
        assert_eq!(args.as_slice(), &["calc", "5", "+", "3"]);
        assert_eq!(args.get(4), None);
    }

    #[test]
    fn interior_runs_of_spaces_collapse() {
        let args = tokenize("leer   archivo.txt").unwrap();
        assert_eq!(args.as_slice(), &["leer", "archivo.txt"]);
        assert_eq!(args.get(2), None);
    }

    #[test]
    fn single_command_has_no_params() {
        let args = tokenize("listar\n").unwrap();
        assert_eq!(args.command(), Some("listar"));
        assert!(args.params().is_empty());
        assert_eq!(args.get(1), None);
    }

    #[test]
    fn tabs_and_leading_whitespace_are_separators() {
        let args = tokenize("\t buscar\thola \t notas.txt  \r\n").unwrap();
        assert_eq!(args.as_slice(), &["buscar", "hola", "notas.txt"]);
    }

    #[test]
    fn quotes_are_not_interpreted() {
        let args = tokenize("prompt \"mi shell\"").unwrap();
        assert_eq!(args.params(), &["\"mi", "shell\""]);
    }
}

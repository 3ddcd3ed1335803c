use crate::error::Error;

// ----------------------------------------------------------------------------
// Address token

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddrToken {
    Numeric(u16),
    Symbol(String),
}

impl AddrToken {
    /// `[0-9]+` is numeric, a legal symbol name is symbolic, anything else is rejected.
    pub fn parse(s: &str) -> Result<AddrToken, Error> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u16>()
                .map(AddrToken::Numeric)
                .map_err(|_| Error::AddressRange(s.to_string()));
        }
        if is_symbol(s) {
            Ok(AddrToken::Symbol(s.to_string()))
        } else {
            Err(Error::MalformedAddress(s.to_string()))
        }
    }
}

/// Letters, digits, `_`, `.`, `$` and `:`, not starting with a digit.
pub fn is_symbol(s: &str) -> bool {
    let symbol_char = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':');
    match s.chars().next() {
        Some(head) => !head.is_ascii_digit() && s.chars().all(symbol_char),
        None => false,
    }
}

// ----------------------------------------------------------------------------
// Logical line

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalLine {
    LabelDecl(String),
    AddressRef(AddrToken),
    Compute {
        dest: Option<String>,
        comp: String,
        jump: Option<String>,
    },
}

impl LogicalLine {
    /// Classify one cleaned line.
    pub fn parse(code: &str) -> Result<LogicalLine, Error> {
        if let Some(rest) = code.strip_prefix('(') {
            return match rest.strip_suffix(')') {
                Some(name) if is_symbol(name) => Ok(LogicalLine::LabelDecl(name.to_string())),
                _ => Err(Error::MalformedLabel(code.to_string())),
            };
        }

        if let Some(token) = code.strip_prefix('@') {
            return AddrToken::parse(token).map(LogicalLine::AddressRef);
        }

        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (Some(dest.trim().to_string()), rest),
            None => (None, code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, Some(jump.trim().to_string())),
            None => (rest, None),
        };
        Ok(LogicalLine::Compute {
            dest,
            comp: comp.trim().to_string(),
            jump,
        })
    }

    pub fn is_label(&self) -> bool {
        matches!(self, LogicalLine::LabelDecl(_))
    }
}

// ----------------------------------------------------------------------------
// Line

/// A classified line and the 0-based index of the source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub idx: usize,
    pub stmt: LogicalLine,
}

pub fn parse(lines: &[(usize, String)]) -> Result<Vec<Line>, Error> {
    lines
        .iter()
        .map(|(idx, code)| {
            LogicalLine::parse(code)
                .map(|stmt| Line { idx: *idx, stmt })
                .map_err(|e| e.at(*idx))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(dest: Option<&str>, comp: &str, jump: Option<&str>) -> LogicalLine {
        LogicalLine::Compute {
            dest: dest.map(str::to_string),
            comp: comp.to_string(),
            jump: jump.map(str::to_string),
        }
    }

    #[test]
    fn label() {
        assert_eq!(
            LogicalLine::parse("(LOOP)").unwrap(),
            LogicalLine::LabelDecl("LOOP".to_string())
        );
        assert_eq!(
            LogicalLine::parse("(Main.fib$ret:1)").unwrap(),
            LogicalLine::LabelDecl("Main.fib$ret:1".to_string())
        );
        for bad in ["(LOOP", "()", "(1ST)", "( LOOP )", "(A-B)"] {
            assert!(
                matches!(LogicalLine::parse(bad), Err(Error::MalformedLabel(_))),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn address() {
        assert_eq!(
            LogicalLine::parse("@4000").unwrap(),
            LogicalLine::AddressRef(AddrToken::Numeric(4000))
        );
        assert_eq!(
            LogicalLine::parse("@007").unwrap(),
            LogicalLine::AddressRef(AddrToken::Numeric(7))
        );
        assert_eq!(
            LogicalLine::parse("@i").unwrap(),
            LogicalLine::AddressRef(AddrToken::Symbol("i".to_string()))
        );
    }

    #[test]
    fn address_errors() {
        assert!(matches!(
            LogicalLine::parse("@"),
            Err(Error::MalformedAddress(_))
        ));
        assert!(matches!(
            LogicalLine::parse("@12ab"),
            Err(Error::MalformedAddress(_))
        ));
        assert!(matches!(
            LogicalLine::parse("@-1"),
            Err(Error::MalformedAddress(_))
        ));
        assert!(matches!(
            LogicalLine::parse("@70000"),
            Err(Error::AddressRange(_))
        ));
    }

    #[test]
    fn compute_shapes() {
        assert_eq!(
            LogicalLine::parse("D=M").unwrap(),
            compute(Some("D"), "M", None)
        );
        assert_eq!(
            LogicalLine::parse("0;JMP").unwrap(),
            compute(None, "0", Some("JMP"))
        );
        assert_eq!(
            LogicalLine::parse("AM=M-1;JNE").unwrap(),
            compute(Some("AM"), "M-1", Some("JNE"))
        );
        assert_eq!(
            LogicalLine::parse("D = D+A").unwrap(),
            compute(Some("D"), "D+A", None)
        );
    }

    #[test]
    fn tags_source_line() {
        let lines = vec![(0, "@1".to_string()), (3, "@1x".to_string())];
        let err = parse(&lines).unwrap_err();
        assert_eq!(err.line_idx(), Some(3));
    }
}

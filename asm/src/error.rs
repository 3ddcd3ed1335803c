use arch::Field;
use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown {0} mnemonic: `{1}`")]
    UnknownMnemonic(Field, String),

    #[error("Malformed address reference: `@{0}`")]
    MalformedAddress(String),

    #[error("Malformed label declaration: `{0}`")]
    MalformedLabel(String),

    #[error("Re-defined label: `{0}`")]
    DuplicateLabel(String),

    #[error("Address out of range: `{0}` does not fit in 15 bits")]
    AddressRange(String),

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("Label declaration cannot be encoded: `({0})`")]
    StrayLabel(String),

    #[error("line {}: {}", .idx + 1, .error)]
    Line { idx: usize, error: Box<Error> },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol table")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Attach the 0-based source line the error was raised on.
    pub fn at(self, idx: usize) -> Error {
        match self {
            Error::Line { .. } => self,
            error => Error::Line {
                idx,
                error: Box::new(error),
            },
        }
    }

    /// The error without its line context.
    pub fn kind(&self) -> &Error {
        match self {
            Error::Line { error, .. } => error.kind(),
            error => error,
        }
    }

    pub fn line_idx(&self) -> Option<usize> {
        match self {
            Error::Line { idx, .. } => Some(*idx),
            _ => None,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, source: &str) {
        cprintln!("<red,bold>error</>: {}", self.kind());

        let Some(line_idx) = self.line_idx() else {
            cprintln!("     <blue>--></> <underline>{}</>", file);
            return;
        };

        // line_idx is 0-based, display as 1-based
        let line_num = line_idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");

        let line_content = source.lines().nth(line_idx).unwrap_or("");

        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_context() {
        let err = Error::DuplicateLabel("LOOP".to_string()).at(4).at(9);
        assert_eq!(err.line_idx(), Some(4));
        assert!(matches!(err.kind(), Error::DuplicateLabel(name) if name == "LOOP"));
        assert_eq!(err.to_string(), "line 5: Re-defined label: `LOOP`");
    }

    #[test]
    fn mnemonic_message() {
        let err = Error::UnknownMnemonic(Field::Jump, "JMPP".to_string());
        assert_eq!(err.to_string(), "Unknown jump mnemonic: `JMPP`");
    }
}

use indexmap::IndexMap;

use crate::{
    error::Error,
    parser::{Line, LogicalLine},
    symbols::{SymbolKind, SymbolTable},
};

/// Label name -> (source line index, instruction address).
#[derive(Debug, Clone, Default)]
pub struct Labels(IndexMap<String, (usize, u16)>);

impl Labels {
    pub fn new() -> Self {
        Labels(IndexMap::new())
    }

    pub fn insert(&mut self, name: String, idx: usize, pc: u16) -> Option<(usize, u16)> {
        self.0.insert(name, (idx, pc))
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|(_, pc)| *pc)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds every label to the symbol table. A label that shadows an existing
    /// symbol is rejected.
    pub fn merge_into(self, symbols: &mut SymbolTable) -> Result<(), Error> {
        for (name, (idx, pc)) in self.0 {
            symbols
                .define(name, pc, SymbolKind::Label)
                .map_err(|e| e.at(idx))?;
        }
        Ok(())
    }
}

/// First pass: bind each label to the index of the next instruction and
/// drop the label lines from the stream.
pub fn resolve_labels(lines: Vec<Line>) -> Result<(Labels, Vec<Line>), Error> {
    let mut labels = Labels::new();
    let mut code = Vec::with_capacity(lines.len());
    let mut pc: usize = 0;

    for line in lines {
        match line.stmt {
            LogicalLine::LabelDecl(name) => {
                let addr = u16::try_from(pc)
                    .map_err(|_| Error::AddressRange(pc.to_string()).at(line.idx))?;
                log::debug!("label {} -> {}", name, addr);
                if labels.insert(name.clone(), line.idx, addr).is_some() {
                    return Err(Error::DuplicateLabel(name).at(line.idx));
                }
            }
            _ => {
                pc += 1;
                code.push(line);
            }
        }
    }

    log::debug!("{} labels, {} instructions", labels.len(), code.len());
    Ok((labels, code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer, parser};

    fn lines(text: &str) -> Vec<Line> {
        parser::parse(&lexer::clean_lines(text)).unwrap()
    }

    #[test]
    fn binds_next_instruction() {
        let (labels, code) =
            resolve_labels(lines("(START)\n@i\n(LOOP)\n(ALSO)\nM=M+1\n@LOOP\n0;JMP\n(END)")).unwrap();
        assert_eq!(labels.get_val("START"), Some(0));
        assert_eq!(labels.get_val("LOOP"), Some(1));
        assert_eq!(labels.get_val("ALSO"), Some(1));
        assert_eq!(labels.get_val("END"), Some(4));
        assert_eq!(code.len(), 4);
        assert!(code.iter().all(|line| !line.stmt.is_label()));
    }

    #[test]
    fn duplicate_is_fatal() {
        let err = resolve_labels(lines("(A)\n@1\n// comment\n(A)\n")).unwrap_err();
        assert_eq!(err.line_idx(), Some(3));
        assert!(matches!(err.kind(), Error::DuplicateLabel(name) if name == "A"));
    }

    #[test]
    fn shadowing_predefined_is_fatal() {
        let (labels, _) = resolve_labels(lines("@0\n(SCREEN)\n")).unwrap();
        let mut symbols = SymbolTable::new(arch::Tables::get());
        let err = labels.merge_into(&mut symbols).unwrap_err();
        assert_eq!(err.line_idx(), Some(1));
        assert_eq!(symbols.get_val("SCREEN"), Some(16384));
    }
}

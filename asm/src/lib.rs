pub mod allocator;
pub mod dump;
pub mod encoder;
pub mod error;
pub mod io;
pub mod label;
pub mod lexer;
pub mod occupied;
pub mod parser;
pub mod symbols;

pub use allocator::{resolve_symbols, Allocator};
pub use encoder::Encoder;
pub use error::Error;
pub use label::{resolve_labels, Labels};
pub use occupied::{collect_occupied, OccupiedAddresses};
pub use parser::{AddrToken, Line, LogicalLine};
pub use symbols::{Symbol, SymbolKind, SymbolTable};

use arch::{Inst, Tables};

/// An encoded instruction and the 0-based source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub idx: usize,
    pub inst: Inst,
}

/// Result of one assembly run.
#[derive(Debug, Clone)]
pub struct Assembly {
    code: Vec<Encoded>,
    symbols: SymbolTable,
}

impl Assembly {
    pub fn code(&self) -> &[Encoded] {
        &self.code
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn bits(&self) -> Vec<String> {
        self.code.iter().map(|enc| enc.inst.to_bits()).collect()
    }

    /// Output file contents: every word on its own line, newline terminated.
    pub fn output(&self) -> String {
        self.bits().into_iter().map(|bits| bits + "\n").collect()
    }
}

/// Assemble a whole program. Any error aborts the run; nothing is partially encoded.
pub fn assemble(text: &str) -> Result<Assembly, Error> {
    let tables = Tables::get();

    let lines = parser::parse(&lexer::clean_lines(text))?;
    let occupied = collect_occupied(&lines);
    let (labels, code) = resolve_labels(lines)?;

    let mut symbols = SymbolTable::new(tables);
    labels.merge_into(&mut symbols)?;

    let mut allocator = Allocator::new(occupied);
    let code = resolve_symbols(code, &mut symbols, &mut allocator)?;

    let encoder = Encoder::new(tables);
    let code = code
        .iter()
        .map(|line| {
            encoder
                .encode(&line.stmt)
                .map(|inst| Encoded { idx: line.idx, inst })
                .map_err(|e| e.at(line.idx))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Assembly { code, symbols })
}

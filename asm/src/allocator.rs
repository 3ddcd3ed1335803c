use crate::{
    error::Error,
    occupied::OccupiedAddresses,
    parser::{AddrToken, Line, LogicalLine},
    symbols::{SymbolKind, SymbolTable},
};

/// Hands out data addresses to variables, filling holes between occupied
/// addresses before growing past the highest one.
#[derive(Debug, Clone)]
pub struct Allocator {
    occupied: OccupiedAddresses,
}

impl Allocator {
    pub fn new(occupied: OccupiedAddresses) -> Self {
        Allocator { occupied }
    }

    pub fn allocate(&mut self, name: &str) -> Result<u16, Error> {
        let addr = self
            .occupied
            .next_gap()
            .ok_or_else(|| Error::AddressRange(name.to_string()))?;
        self.occupied.insert_and_advance(addr);
        log::info!("{} -> {}", name, addr);
        Ok(addr)
    }

    pub fn occupied(&self) -> &OccupiedAddresses {
        &self.occupied
    }
}

/// Second pass: replace every symbolic address with a number, allocating
/// variables on first use.
pub fn resolve_symbols(
    lines: Vec<Line>,
    symbols: &mut SymbolTable,
    allocator: &mut Allocator,
) -> Result<Vec<Line>, Error> {
    let mut resolved = Vec::with_capacity(lines.len());
    for line in lines {
        let stmt = match line.stmt {
            LogicalLine::AddressRef(AddrToken::Symbol(name)) => {
                let addr = match symbols.get_val(&name) {
                    Some(addr) => addr,
                    None => {
                        let addr = allocator.allocate(&name).map_err(|e| e.at(line.idx))?;
                        symbols
                            .define(name, addr, SymbolKind::Variable)
                            .map_err(|e| e.at(line.idx))?;
                        addr
                    }
                };
                LogicalLine::AddressRef(AddrToken::Numeric(addr))
            }
            stmt => stmt,
        };
        resolved.push(Line {
            idx: line.idx,
            stmt,
        });
    }
    Ok(resolved)
}

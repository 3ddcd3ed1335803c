use arch::{Dest, Field, Inst, Jump, Tables};

use crate::{
    error::Error,
    parser::{AddrToken, LogicalLine},
};

/// Turns resolved lines into instructions. Holds no state besides the tables.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    tables: &'a Tables,
}

impl<'a> Encoder<'a> {
    pub fn new(tables: &'a Tables) -> Self {
        Encoder { tables }
    }

    pub fn encode(&self, line: &LogicalLine) -> Result<Inst, Error> {
        match line {
            LogicalLine::AddressRef(AddrToken::Numeric(addr)) => {
                Inst::addr(*addr).ok_or_else(|| Error::AddressRange(addr.to_string()))
            }
            LogicalLine::AddressRef(AddrToken::Symbol(name)) => {
                Err(Error::UndefinedSymbol(name.clone()))
            }
            LogicalLine::LabelDecl(name) => Err(Error::StrayLabel(name.clone())),
            LogicalLine::Compute { dest, comp, jump } => {
                let dest = match dest {
                    Some(dest) => Dest::parse(dest)
                        .ok_or_else(|| Error::UnknownMnemonic(Field::Dest, dest.clone()))?,
                    None => Dest::NULL,
                };
                let comp = self
                    .tables
                    .comp(comp)
                    .ok_or_else(|| Error::UnknownMnemonic(Field::Comp, comp.clone()))?;
                let jump = match jump {
                    Some(jump) => self
                        .tables
                        .jump(jump)
                        .ok_or_else(|| Error::UnknownMnemonic(Field::Jump, jump.clone()))?,
                    None => Jump::Null,
                };
                Ok(Inst::Comp { dest, comp, jump })
            }
        }
    }
}

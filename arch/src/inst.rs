use crate::{Comp, Dest, Jump, Tables};

use color_print::cformat;
use serde::{Deserialize, Serialize};

/// Largest address an address instruction can carry (15 bits).
pub const ADDR_MAX: u16 = 0x7FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inst {
    Addr(u16),
    Comp { dest: Dest, comp: Comp, jump: Jump },
}

impl Inst {
    /// Address instruction, or `None` if `value` needs more than 15 bits.
    pub fn addr(value: u16) -> Option<Inst> {
        (value <= ADDR_MAX).then_some(Inst::Addr(value))
    }

    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::Addr(value) => value & ADDR_MAX,
            Inst::Comp { dest, comp, jump } => {
                0b111 << 13
                    | (comp.code() as u16) << 6
                    | (dest.code() as u16) << 3
                    | jump.code() as u16
            }
        }
    }

    /// The instruction word as 16 `0`/`1` characters, MSB first.
    pub fn to_bits(&self) -> String {
        format!("{:016b}", self.to_bin())
    }

    pub fn to_asm(&self, tables: &Tables) -> String {
        match *self {
            Inst::Addr(value) => format!("@{}", value),
            Inst::Comp { dest, comp, jump } => {
                let mut text = String::new();
                if !dest.is_null() {
                    text.push_str(&format!("{}=", dest));
                }
                text.push_str(tables.comp_mnemonic(comp).unwrap_or("?"));
                if let Some(name) = tables.jump_mnemonic(jump) {
                    text.push_str(&format!(";{}", name));
                }
                text
            }
        }
    }

    pub fn cformat(&self, tables: &Tables) -> String {
        match *self {
            Inst::Addr(value) => cformat!("<c>@</><y>{}</>", value),
            Inst::Comp { dest, comp, jump } => {
                let dest = if dest.is_null() {
                    String::new()
                } else {
                    cformat!("<b>{}</>=", dest)
                };
                let jump = match tables.jump_mnemonic(jump) {
                    Some(name) => cformat!(";<r>{}</>", name),
                    None => String::new(),
                };
                let comp = tables.comp_mnemonic(comp).unwrap_or("?");
                cformat!("{}<g>{}</>{}", dest, comp, jump)
            }
        }
    }
}

use num_enum::IntoPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// A destination register and its bit in the dest field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoPrimitive,
    EnumString,
    StrumDisplay,
    EnumIter,
)]
#[repr(u8)]
pub enum Reg {
    A = 0b100,
    M = 0b001,
    D = 0b010,
}

impl Reg {
    pub fn parse(c: char) -> Option<Self> {
        c.encode_utf8(&mut [0; 4]).parse::<Self>().ok()
    }

    pub fn bit(self) -> u8 {
        self.into()
    }
}

/// 3-bit dest field, built as an OR of register bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dest(u8);

impl Dest {
    pub const NULL: Dest = Dest(0);

    /// Parses any combination of `A`, `D`, `M`. Order and repeats don't matter.
    /// Returns `None` for an empty mnemonic or any other letter.
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars()
            .try_fold(Dest::NULL, |dest, c| Reg::parse(c).map(|reg| dest.with(reg)))
    }

    pub fn with(self, reg: Reg) -> Self {
        Dest(self.0 | reg.bit())
    }

    pub fn contains(self, reg: Reg) -> bool {
        self.0 & reg.bit() != 0
    }

    pub fn code(self) -> u8 {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl Display for Dest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for reg in Reg::iter().filter(|reg| self.contains(*reg)) {
            write!(f, "{}", reg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmask() {
        assert_eq!(Dest::parse("M").map(Dest::code), Some(0b001));
        assert_eq!(Dest::parse("D").map(Dest::code), Some(0b010));
        assert_eq!(Dest::parse("MD").map(Dest::code), Some(0b011));
        assert_eq!(Dest::parse("A").map(Dest::code), Some(0b100));
        assert_eq!(Dest::parse("AM").map(Dest::code), Some(0b101));
        assert_eq!(Dest::parse("AD").map(Dest::code), Some(0b110));
        assert_eq!(Dest::parse("AMD").map(Dest::code), Some(0b111));
    }

    #[test]
    fn order_and_repeats() {
        assert_eq!(Dest::parse("DMA"), Dest::parse("AMD"));
        assert_eq!(Dest::parse("DD"), Dest::parse("D"));
    }

    #[test]
    fn rejects() {
        assert_eq!(Dest::parse(""), None);
        assert_eq!(Dest::parse("X"), None);
        assert_eq!(Dest::parse("Am"), None);
    }

    #[test]
    fn display() {
        assert_eq!(Dest::parse("DMA").unwrap().to_string(), "AMD");
        assert_eq!(Dest::parse("DM").unwrap().to_string(), "MD");
        assert_eq!(Dest::NULL.to_string(), "");
    }
}

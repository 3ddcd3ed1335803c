use bimap::BiMap;
use once_cell::sync::Lazy;
use strum::{Display, IntoEnumIterator};

use crate::{comp::COMP, symbol::PREDEFINED, Comp, Jump};

/// Instruction field a mnemonic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Dest,
    Comp,
    Jump,
}

/// Mnemonic lookup tables. Built once, read-only afterwards.
#[derive(Debug)]
pub struct Tables {
    comp: BiMap<&'static str, Comp>,
    jump: BiMap<&'static str, Jump>,
    predefined: &'static [(&'static str, u16)],
}

static TABLES: Lazy<Tables> = Lazy::new(|| {
    let mut comp = BiMap::new();
    for (name, code) in COMP {
        comp.insert(name, Comp::new(code));
    }

    let mut jump = BiMap::new();
    for j in Jump::iter().filter(|j| *j != Jump::Null) {
        jump.insert(j.name(), j);
    }

    Tables {
        comp,
        jump,
        predefined: &PREDEFINED,
    }
});

impl Tables {
    pub fn get() -> &'static Tables {
        &TABLES
    }

    pub fn comp(&self, mnemonic: &str) -> Option<Comp> {
        self.comp.get_by_left(mnemonic).copied()
    }

    pub fn jump(&self, mnemonic: &str) -> Option<Jump> {
        self.jump.get_by_left(mnemonic).copied()
    }

    pub fn comp_mnemonic(&self, comp: Comp) -> Option<&'static str> {
        self.comp.get_by_right(&comp).copied()
    }

    pub fn jump_mnemonic(&self, jump: Jump) -> Option<&'static str> {
        self.jump.get_by_right(&jump).copied()
    }

    pub fn predefined(&self) -> impl Iterator<Item = (&'static str, u16)> + '_ {
        self.predefined.iter().copied()
    }
}

use serde::{Deserialize, Serialize};

/// 7-bit ALU control field: the `a` bit followed by `c1..c6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comp(u8);

impl Comp {
    pub const fn new(code: u8) -> Self {
        Comp(code & 0b111_1111)
    }

    pub fn code(self) -> u8 {
        self.0
    }

    /// Set when the computation reads memory (`M`) instead of `A`.
    pub fn reads_memory(self) -> bool {
        self.0 & 0b100_0000 != 0
    }
}

pub(crate) const COMP: [(&str, u8); 28] = [
    ("0", 0b0101010),
    ("1", 0b0111111),
    ("-1", 0b0111010),
    ("D", 0b0001100),
    ("A", 0b0110000),
    ("M", 0b1110000),
    ("!D", 0b0001101),
    ("!A", 0b0110001),
    ("!M", 0b1110001),
    ("-D", 0b0001111),
    ("-A", 0b0110011),
    ("-M", 0b1110011),
    ("D+1", 0b0011111),
    ("A+1", 0b0110111),
    ("M+1", 0b1110111),
    ("D-1", 0b0001110),
    ("A-1", 0b0110010),
    ("M-1", 0b1110010),
    ("D+A", 0b0000010),
    ("D+M", 0b1000010),
    ("D-A", 0b0010011),
    ("D-M", 0b1010011),
    ("A-D", 0b0000111),
    ("M-D", 0b1000111),
    ("D&A", 0b0000000),
    ("D&M", 0b1000000),
    ("D|A", 0b0010101),
    ("D|M", 0b1010101),
];

#[test]
fn memory_variants_differ_only_in_a_bit() {
    for (name, code) in COMP.iter().filter(|(name, _)| name.contains('M')) {
        let twin = name.replace('M', "A");
        let (_, a_code) = COMP.iter().find(|(n, _)| *n == twin).unwrap();
        assert_eq!(*code, a_code | 0b100_0000, "{}", name);
        assert!(Comp::new(*code).reads_memory());
    }
}

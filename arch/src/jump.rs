use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

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
    TryFromPrimitive,
    IntoStaticStr,
    EnumIter,
)]
#[repr(u8)]
pub enum Jump {
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn code(self) -> u8 {
        self.into()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[test]
fn test() {
    assert_eq!(Jump::JMP.code(), 7);
    assert_eq!(Jump::try_from(0b011u8).ok(), Some(Jump::JGE));
    assert_eq!(Jump::JLE.name(), "JLE");
    assert!(Jump::try_from(8u8).is_err());
}

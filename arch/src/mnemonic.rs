use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Instruction names the placeholder assembler accepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Mnemonic {
    Mov,
    Xor,
    Syscall,
    Jmp,
    Add,
    Sub,
    Push,
    Pop,
}

impl Mnemonic {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(m) => Ok(m),
            Err(_) => Err(format!("Unknown instruction: \"{s}\"")),
        }
    }

    /// `mov|xor|syscall|...` in declaration order, for building matchers.
    pub fn alternation() -> String {
        Mnemonic::iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[test]
fn test() {
    assert_eq!(Mnemonic::parse("mov"), Ok(Mnemonic::Mov));
    assert_eq!(Mnemonic::parse("SYSCALL"), Ok(Mnemonic::Syscall));
    assert_eq!(Mnemonic::parse("PoP"), Ok(Mnemonic::Pop));
    assert!(Mnemonic::parse("hoge").is_err());
    assert_eq!(
        Mnemonic::alternation(),
        "mov|xor|syscall|jmp|add|sub|push|pop"
    );
}

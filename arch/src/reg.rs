use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    EnumIter,
    EnumCount,
    Display,
)]
#[repr(u8)]
pub enum Reg {
    #[default]
    RAX,
    RBX,
    RCX,
    RDX,
    RSI,
    RDI,
    RSP,
    RBP,
    R8,
    R9,
    R10,
    RIP,
    FLAGS,
}

impl Reg {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_ascii_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Unknown reg name: {s}")),
        }
    }

    /// Display width in hex digits.
    pub fn width(&self) -> usize {
        match self {
            Reg::FLAGS => 8,
            _ => 16,
        }
    }

    pub fn reset_value(&self) -> String {
        match self {
            Reg::RSP => format!("{:0>1$X}", 0xFF00, self.width()),
            _ => "0".repeat(self.width()),
        }
    }
}

/// Register values as shown in the inspector.
/// Values are free-form hex text; nothing checks them against the width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSnapshot {
    values: Vec<String>,
}

impl RegisterSnapshot {
    pub fn new() -> Self {
        RegisterSnapshot {
            values: Reg::iter().map(|r| r.reset_value()).collect(),
        }
    }

    pub fn get(&self, reg: Reg) -> &str {
        let idx: u8 = reg.into();
        &self.values[idx as usize]
    }

    /// Stores `text` upper-cased with every non-hex character removed.
    pub fn set(&mut self, reg: Reg, text: &str) -> &str {
        let idx: u8 = reg.into();
        self.values[idx as usize] = filter_hex(text);
        &self.values[idx as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Reg, &str)> {
        Reg::iter().zip(self.values.iter().map(|v| v.as_str()))
    }

    pub fn len(&self) -> usize {
        Reg::COUNT
    }
}

impl Default for RegisterSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

pub fn filter_hex(text: &str) -> String {
    text.to_ascii_uppercase()
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Reg::parse("rax"), Ok(Reg::RAX));
        assert_eq!(Reg::parse("Flags"), Ok(Reg::FLAGS));
        assert_eq!(Reg::parse("r10"), Ok(Reg::R10));
        assert!(Reg::parse("hoge").is_err());
    }

    #[test]
    fn reset_values() {
        let regs = RegisterSnapshot::new();
        assert_eq!(regs.len(), 13);
        assert_eq!(regs.get(Reg::RAX), "0000000000000000");
        assert_eq!(regs.get(Reg::RSP), "000000000000FF00");
        assert_eq!(regs.get(Reg::FLAGS), "00000000");
        assert_eq!(regs.iter().count(), 13);
        assert_eq!(regs.iter().last(), Some((Reg::FLAGS, "00000000")));
    }

    #[test]
    fn set_filters_to_upper_hex() {
        let mut regs = RegisterSnapshot::new();
        assert_eq!(regs.set(Reg::RBX, "de:ad-be_efz"), "DEADBEEF");
        assert_eq!(regs.get(Reg::RBX), "DEADBEEF");
        // no width check
        assert_eq!(regs.set(Reg::FLAGS, "0x123456789abcdef0"), "0123456789ABCDEF0");
        assert_eq!(regs.set(Reg::RIP, "zz"), "");
    }

    #[test]
    fn index_round_trip() {
        for reg in Reg::iter() {
            let idx: u8 = reg.into();
            assert_eq!(Reg::from(idx), reg);
        }
    }
}

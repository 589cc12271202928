use bimap::BiMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Target selected in the toolbar.
/// Only the label changes; the placeholder assembler ignores it.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Arch {
    #[default]
    X86_64,
    X86,
    Arm64,
    Riscv64,
}

static ARCH_MAP: Lazy<BiMap<&'static str, Arch>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, Arch> = BiMap::new();
    map.insert("x86_64", Arch::X86_64);
    map.insert("x86", Arch::X86);
    map.insert("arm64", Arch::Arm64);
    map.insert("riscv64", Arch::Riscv64);
    map
});

impl Arch {
    pub const ALL: [Arch; 4] = [Arch::X86_64, Arch::X86, Arch::Arm64, Arch::Riscv64];

    pub fn parse(s: &str) -> Result<Arch, String> {
        match ARCH_MAP.get_by_left(s.to_ascii_lowercase().as_str()) {
            Some(arch) => Ok(*arch),
            None => Err(format!("Unknown architecture: `{}`", s)),
        }
    }

    pub fn label(&self) -> &'static str {
        ARCH_MAP.get_by_right(self).copied().unwrap_or("?")
    }
}

impl Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Arch {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arch::parse(s)
    }
}

impl TryFrom<String> for Arch {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Arch::parse(&s)
    }
}

impl From<Arch> for String {
    fn from(arch: Arch) -> Self {
        arch.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_arch_has_a_label() {
        for arch in Arch::ALL {
            assert_eq!(Arch::parse(arch.label()), Ok(arch));
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Arch::parse("X86_64"), Ok(Arch::X86_64));
        assert_eq!(Arch::parse("RiscV64"), Ok(Arch::Riscv64));
        assert!(Arch::parse("z80").is_err());
    }

    #[test]
    fn default_is_x86_64() {
        assert_eq!(Arch::default().to_string(), "x86_64");
    }
}

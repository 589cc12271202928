use arch::Arch;
use serde::{Deserialize, Serialize};

use crate::diag::Diagnostic;
use crate::line::Line;

/// Every accepted line is pretended to occupy one 4-byte slot.
pub const INST_SIZE: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub addr: u32,
    pub line: usize,
    pub text: String,
}

impl std::fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04x}: {}", self.addr, self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assembly {
    pub diagnostics: Vec<Diagnostic>,
    pub entries: Vec<ListingEntry>,
    pub listing: String,
    pub byte_count: u32,
}

impl Assembly {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Lines for the problems panel.
    pub fn problems(&self, arch: Arch) -> Vec<String> {
        if self.is_ok() {
            vec![format!(
                "Assembly OK ({} bytes generated) - target {}",
                self.byte_count, arch
            )]
        } else {
            self.diagnostics.iter().map(|d| d.to_string()).collect()
        }
    }
}

/// Sizing pass: total bytes of every non-blank, non-label line.
pub fn measure(source: &str) -> u32 {
    source.lines().map(|raw| Line::parse(raw).size()).sum()
}

/// Validation pass. Unknown instructions become diagnostics, never errors.
pub fn assemble(source: &str) -> Assembly {
    let mut diagnostics = vec![];
    let mut entries = vec![];
    let mut addr: u32 = 0;

    for (idx, raw) in source.lines().enumerate() {
        let line = Line::parse(raw);
        match &line {
            Line::Blank | Line::Label(_) => continue,
            Line::Inst(_, code) => entries.push(ListingEntry {
                addr,
                line: idx + 1,
                text: code.to_string(),
            }),
            Line::Unknown(token, _) => diagnostics.push(Diagnostic::new(
                idx + 1,
                format!("Unknown instruction: \"{}\"", token),
            )),
        }
        addr += line.size();
    }

    let listing = entries
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    Assembly {
        diagnostics,
        entries,
        listing,
        byte_count: addr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source() {
        let asm = assemble("");
        assert!(asm.is_ok());
        assert_eq!(asm.listing, "");
        assert_eq!(asm.byte_count, 0);
    }

    #[test]
    fn address_is_lower_hex() {
        let src = "nop\n".repeat(3) + "mov rax, rbx";
        let asm = assemble(&src);
        let last = asm.entries.last().map(|e| e.to_string());
        assert_eq!(last, Some("000c: mov rax, rbx".to_string()));
    }

    #[test]
    fn address_grows_past_four_digits() {
        let src = "push rax\n".repeat(0x4001);
        let asm = assemble(&src);
        assert_eq!(asm.byte_count, 0x10004);
        let last = asm.entries.last().map(|e| e.to_string());
        assert_eq!(last, Some("10000: push rax".to_string()));
    }

    #[test]
    fn problems_ok() {
        let asm = assemble("mov rax, 60\nxor rdi, rdi\nsyscall");
        assert_eq!(
            asm.problems(Arch::X86_64),
            vec!["Assembly OK (12 bytes generated) - target x86_64".to_string()]
        );
    }

    #[test]
    fn problems_errors() {
        let asm = assemble("foo\n\nbar baz");
        assert_eq!(
            asm.problems(Arch::Arm64),
            vec![
                "L1: Unknown instruction: \"foo\"".to_string(),
                "L3: Unknown instruction: \"bar\"".to_string(),
            ]
        );
    }

    #[test]
    fn crlf() {
        let asm = assemble("mov rax, 1\r\nfoo\r\n");
        assert_eq!(asm.listing, "0000: mov rax, 1");
        assert_eq!(asm.diagnostics, vec![Diagnostic::new(2, "Unknown instruction: \"foo\"")]);
        assert_eq!(asm.byte_count, 8);
    }
}

use arch::Mnemonic;
use once_cell::sync::Lazy;
use regex::Regex;

static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*:").unwrap());

// The name must be followed by an ASCII non-word character or the end of line,
// so `mové` still reads as `mov`.
static MNEMONIC: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"(?i)^({})(?:[^A-Za-z0-9_]|$)", Mnemonic::alternation());
    Regex::new(&pattern).unwrap()
});

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Label(&'a str),
    Inst(Mnemonic, &'a str),
    Unknown(&'a str, &'a str),
}

impl<'a> Line<'a> {
    /// Classify one source line. The comment and surrounding whitespace are dropped.
    pub fn parse(raw: &'a str) -> Line<'a> {
        let code = strip_comment(raw).trim_matches(is_space);
        if code.is_empty() {
            return Line::Blank;
        }

        if let Some(m) = LABEL.find(code) {
            return Line::Label(&code[..m.end() - 1]);
        }

        let mnemonic = MNEMONIC
            .captures(code)
            .and_then(|cap| cap.get(1))
            .and_then(|m| Mnemonic::parse(m.as_str()).ok());
        match mnemonic {
            Some(mnemonic) => Line::Inst(mnemonic, code),
            None => {
                let token = code.split(is_space).next().unwrap_or(code);
                Line::Unknown(token, code)
            }
        }
    }

    /// Bytes this line occupies when sizing the program.
    pub fn size(&self) -> u32 {
        match self {
            Line::Blank | Line::Label(_) => 0,
            Line::Inst(..) | Line::Unknown(..) => crate::INST_SIZE,
        }
    }
}

/// Whitespace plus the byte order mark.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn strip_comment(raw: &str) -> &str {
    match raw.find(';') {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

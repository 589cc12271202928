use color_print::cprintln;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A problem reported against one source line (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            message: message.into(),
        }
    }

    /// Print with file location and the offending source line
    pub fn print_diag(&self, files: &IndexMap<String, Vec<String>>, file: &str) {
        cprintln!("<red,bold>error</>: {}", self.message);

        let line_content = files
            .get(file)
            .and_then(|lines| lines.get(self.line.saturating_sub(1)))
            .map(|s| s.as_str())
            .unwrap_or("");

        print_excerpt(file, self.line, line_content);
    }
}

/// `--> file:line` pointer followed by the source line.
pub fn print_excerpt(file: &str, line: usize, raw: &str) {
    cprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
    cprintln!("      <blue>|</>");
    cprintln!(" <blue>{:>4} |</> {}", line, raw);
    cprintln!("      <blue>|</>");
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}: {}", self.line, self.message)
    }
}

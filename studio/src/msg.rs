use color_print::cprintln;

#[derive(Debug)]
pub enum Msg {
    Error(String),
    Note(String),
}

impl Msg {
    pub fn print(&self) {
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
    }

    /// Print with a `file:line` pointer and the source excerpt.
    pub fn diag(&self, info: (&str, usize, &str)) {
        let (file, line, raw) = info;
        self.print();
        asm::print_excerpt(file, line, raw);
    }
}

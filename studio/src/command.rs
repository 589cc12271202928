use arch::{Arch, Reg};

use crate::action::{Action, Edit};
use crate::error::Error;
use crate::state::{BottomTab, InspectorTab};

pub const HELP: &str = "\
Files
  new                      create fileN.asm and open it
  open <id>                switch to a file
  rename <id> <name>       rename a file (the renamed file becomes active)
  save                     write the editor buffer into the active file
  files                    list files

Editor
  append <text>            add a line at the end of the buffer
  set <line> <text>        replace a line
  delete <line>            remove a line
  indent <line>            insert a tab (4 spaces) at the start of a line
  clear                    empty the buffer

Toolbar
  assemble | run           save and assemble the active file
  debug                    simulated debugger
  arch <name>              x86_64, x86, arm64, riscv64
  reg <name> <hex>         edit a register (non-hex characters are dropped)
  reset                    reset registers

Panels
  tab <problems|output|listing>
  inspect <regs|mem|stack>
  show                     redraw everything
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(Action),
    Show,
    Files,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines give `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, Error> {
        let (word, rest) = split_word(line);
        if word.is_empty() {
            return Ok(None);
        }

        // Take the next word of `rest` and parse it as Type
        // Example: arg!(Reg) -> Reg
        macro_rules! arg {
            ($Type:ident) => {{
                let (arg, tail) = split_word(rest);
                if arg.is_empty() {
                    return Err(Error::MissingArgument(word.to_string()));
                }
                let val = $Type::parse(arg).map_err(|_| {
                    Error::ParseArgument(arg.to_string(), stringify!($Type).to_string())
                })?;
                (val, tail)
            }};
        }

        // The rest of the line, which must not be blank
        macro_rules! text {
            ($s:expr) => {{
                if $s.trim().is_empty() {
                    return Err(Error::MissingArgument(word.to_string()));
                }
                $s.to_string()
            }};
        }

        let cmd = match word.to_ascii_lowercase().as_str() {
            "new" => Command::Action(Action::NewFile),
            "open" | "select" => Command::Action(Action::SelectFile(text!(rest.trim()))),
            "rename" => {
                let (id, name) = split_word(rest);
                Command::Action(Action::RenameFile {
                    id: text!(id),
                    name: text!(name.trim()),
                })
            }
            "save" => Command::Action(Action::Save),
            "files" | "ls" => Command::Files,

            "append" => Command::Action(Action::Edit(Edit::Append(rest.to_string()))),
            "set" => {
                let (no, text) = arg!(usize);
                Command::Action(Action::Edit(Edit::SetLine(no, text.to_string())))
            }
            "delete" => Command::Action(Action::Edit(Edit::DeleteLine(arg!(usize).0))),
            "indent" => Command::Action(Action::Edit(Edit::Indent(arg!(usize).0))),
            "clear" => Command::Action(Action::Edit(Edit::Replace(String::new()))),

            "assemble" | "asm" => Command::Action(Action::Assemble),
            "run" => Command::Action(Action::Run),
            "debug" => Command::Action(Action::Debug),
            "arch" => Command::Action(Action::SetArch(arg!(Arch).0)),
            "reg" => {
                let (reg, value) = arg!(Reg);
                Command::Action(Action::SetRegister(reg, value.trim().to_string()))
            }
            "reset" => Command::Action(Action::ResetRegisters),

            "tab" => Command::Action(Action::ShowBottom(arg!(BottomTab).0)),
            "inspect" => Command::Action(Action::ShowInspector(arg!(InspectorTab).0)),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(Error::UnknownCommand(word.to_string())),
        };
        Ok(Some(cmd))
    }
}

/// First whitespace-delimited word and the remainder after one separator.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => {
            let sep = s[idx..].chars().next().map_or(1, |c| c.len_utf8());
            (&s[..idx], &s[idx + sep..])
        }
        None => (s, ""),
    }
}

// `arg!` expects `Type::parse(&str) -> Result<Type, _>`.
trait ParseArg: Sized {
    fn parse(s: &str) -> Result<Self, String>;
}

impl ParseArg for usize {
    fn parse(s: &str) -> Result<Self, String> {
        s.parse::<usize>().map_err(|e| e.to_string())
    }
}

impl ParseArg for BottomTab {
    fn parse(s: &str) -> Result<Self, String> {
        s.parse::<BottomTab>().map_err(|e| e.to_string())
    }
}

impl ParseArg for InspectorTab {
    fn parse(s: &str) -> Result<Self, String> {
        s.parse::<InspectorTab>().map_err(|e| e.to_string())
    }
}

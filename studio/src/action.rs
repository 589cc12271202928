use arch::{Arch, Reg};

use crate::state::{BottomTab, InspectorTab};

/// Changes to the editor buffer. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Replace(String),
    Append(String),
    SetLine(usize, String),
    DeleteLine(usize),
    /// Same as pressing Tab at the start of the line.
    Indent(usize),
}

/// User actions, one per button or key binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NewFile,
    SelectFile(String),
    RenameFile { id: String, name: String },
    Edit(Edit),
    Save,
    Assemble,
    /// Alias of `Assemble`.
    Run,
    Debug,
    SetArch(Arch),
    SetRegister(Reg, String),
    ResetRegisters,
    ShowBottom(BottomTab),
    ShowInspector(InspectorTab),
}

impl Action {
    /// Whether the action writes the file collection to the store once applied.
    pub fn touches_files(&self) -> bool {
        matches!(
            self,
            Action::NewFile
                | Action::RenameFile { .. }
                | Action::Save
                | Action::Assemble
                | Action::Run
        )
    }
}

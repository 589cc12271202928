use arch::{Arch, Reg, RegisterSnapshot};
use asm::Assembly;
use strum::{Display, EnumIter, EnumString};

use crate::action::Edit;
use crate::error::Error;
use crate::file::{SourceFile, NEW_FILE};

pub const TAB: &str = "    ";
pub const DEBUG_ACK: &str = "Simulated debugging";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, EnumIter, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BottomTab {
    #[default]
    Problems,
    Output,
    Listing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, EnumIter, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InspectorTab {
    #[default]
    Regs,
    Mem,
    Stack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    NoFileActive,
    FileActive(String),
}

/// Everything the views render from.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub arch: Arch,
    pub files: Vec<SourceFile>,
    pub active_id: String,
    /// Text in the editor pane; copied into the active file on save.
    pub buffer: String,
    pub regs: RegisterSnapshot,
    pub problems: Vec<String>,
    pub output: Vec<String>,
    pub listing: String,
    pub bottom_tab: BottomTab,
    pub inspector_tab: InspectorTab,
}

impl EditorState {
    /// The first file becomes active.
    pub fn new(files: Vec<SourceFile>) -> Self {
        let active_id = files.first().map(|f| f.id.clone()).unwrap_or_default();
        let mut state = EditorState {
            arch: Arch::default(),
            files,
            active_id: String::new(),
            buffer: String::new(),
            regs: RegisterSnapshot::new(),
            problems: vec![],
            output: vec![],
            listing: String::new(),
            bottom_tab: BottomTab::Problems,
            inspector_tab: InspectorTab::Regs,
        };
        state.select_file(&active_id);
        state
    }

    pub fn active(&self) -> Option<&SourceFile> {
        self.files.iter().find(|f| f.id == self.active_id)
    }

    fn active_mut(&mut self) -> Option<&mut SourceFile> {
        let id = &self.active_id;
        self.files.iter_mut().find(|f| &f.id == id)
    }

    pub fn focus(&self) -> Focus {
        match self.active() {
            Some(file) => Focus::FileActive(file.id.clone()),
            None => Focus::NoFileActive,
        }
    }

    // ------------------------------------------------------------------------
    // Files

    /// Appends `file<N+1>.asm` and switches to it. The name may collide with an existing id.
    pub fn create_file(&mut self) -> &SourceFile {
        let name = format!("file{}.asm", self.files.len() + 1);
        self.files.push(SourceFile::new(&name, NEW_FILE));
        self.select_file(&name);
        &self.files[self.files.len() - 1]
    }

    /// Unknown ids are accepted and leave the editor empty.
    pub fn select_file(&mut self, id: &str) {
        self.active_id = id.to_string();
        self.buffer = self
            .active()
            .map(|f| f.content.clone())
            .unwrap_or_default();
    }

    /// Renames the first file matching `old_id` and makes `new_name` active,
    /// whichever file was active before. Returns false when nothing changed.
    pub fn rename_file(&mut self, old_id: &str, new_name: &str) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return false;
        }
        match self.files.iter_mut().find(|f| f.id == old_id) {
            Some(file) => file.rename(new_name),
            None => return false,
        }
        self.active_id = new_name.to_string();
        true
    }

    /// Copies the buffer into the active file. Returns false when no file is active.
    pub fn save_active_file(&mut self) -> bool {
        let buffer = self.buffer.clone();
        match self.active_mut() {
            Some(file) => {
                file.content = buffer;
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Toolbar

    /// Saves, assembles the active file and picks the tab to show.
    pub fn run_assembly(&mut self) -> Option<Assembly> {
        self.save_active_file();
        let result = asm::assemble(&self.active()?.content);
        self.listing = result.listing.clone();
        self.problems = result.problems(self.arch);
        self.bottom_tab = match result.is_ok() {
            true => BottomTab::Listing,
            false => BottomTab::Problems,
        };
        Some(result)
    }

    pub fn debug(&mut self) {
        self.output.push(DEBUG_ACK.to_string());
        self.bottom_tab = BottomTab::Output;
    }

    pub fn set_arch(&mut self, arch: Arch) {
        self.arch = arch;
    }

    pub fn set_register(&mut self, reg: Reg, text: &str) -> &str {
        self.regs.set(reg, text)
    }

    pub fn reset_registers(&mut self) {
        self.regs = RegisterSnapshot::new();
    }

    // ------------------------------------------------------------------------
    // Editor buffer

    pub fn edit(&mut self, edit: Edit) -> Result<(), Error> {
        match edit {
            Edit::Replace(text) => self.buffer = text,
            Edit::Append(text) => {
                if !self.buffer.is_empty() {
                    self.buffer.push('\n');
                }
                self.buffer.push_str(&text);
            }
            Edit::SetLine(no, text) => self.with_line(no, |lines, idx| lines[idx] = text)?,
            Edit::DeleteLine(no) => self.with_line(no, |lines, idx| {
                lines.remove(idx);
            })?,
            Edit::Indent(no) => self.with_line(no, |lines, idx| lines[idx].insert_str(0, TAB))?,
        }
        Ok(())
    }

    fn with_line<F>(&mut self, no: usize, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Vec<String>, usize),
    {
        let mut lines: Vec<String> = self.buffer.split('\n').map(|s| s.to_string()).collect();
        if no == 0 || no > lines.len() {
            return Err(Error::LineOutOfRange(no, lines.len()));
        }
        f(&mut lines, no - 1);
        self.buffer = lines.join("\n");
        Ok(())
    }

    /// Line numbers shown beside the buffer.
    pub fn gutter(&self) -> Vec<usize> {
        (1..=self.buffer.split('\n').count()).collect()
    }
}

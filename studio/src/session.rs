use crate::action::Action;
use crate::config::Config;
use crate::error::Error;
use crate::file::default_files;
use crate::msg::Msg;
use crate::state::EditorState;
use crate::store::{FileStore, KvStore};

/// Owns the editor state and the store; every action goes through `dispatch`.
pub struct Session<K: KvStore> {
    store: FileStore<K>,
    state: EditorState,
    verbose: bool,
}

impl<K: KvStore> Session<K> {
    pub fn open(kv: K, config: &Config, verbose: bool) -> Self {
        let store = FileStore::new(kv);
        let files = match store.try_load() {
            Some(files) => files,
            None => {
                if verbose {
                    Msg::Note("store: no usable file list, using default files".to_string())
                        .print();
                }
                default_files()
            }
        };

        let mut state = EditorState::new(files);
        state.set_arch(config.arch);
        for (reg, value) in &config.registers {
            state.set_register(*reg, value);
        }

        Session {
            store,
            state,
            verbose,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn store(&self) -> &FileStore<K> {
        &self.store
    }

    /// Applies `action`. File-touching actions that took effect are written to the store.
    pub fn dispatch(&mut self, action: Action) -> Result<(), Error> {
        let touches_files = action.touches_files();
        let applied = match action {
            Action::NewFile => {
                self.state.create_file();
                true
            }
            Action::SelectFile(id) => {
                self.state.select_file(&id);
                true
            }
            Action::RenameFile { id, name } => self.state.rename_file(&id, &name),
            Action::Edit(edit) => {
                self.state.edit(edit)?;
                true
            }
            Action::Save => self.state.save_active_file(),
            Action::Assemble | Action::Run => self.state.run_assembly().is_some(),
            Action::Debug => {
                self.state.debug();
                true
            }
            Action::SetArch(arch) => {
                self.state.set_arch(arch);
                true
            }
            Action::SetRegister(reg, text) => {
                self.state.set_register(reg, &text);
                true
            }
            Action::ResetRegisters => {
                self.state.reset_registers();
                true
            }
            Action::ShowBottom(tab) => {
                self.state.bottom_tab = tab;
                true
            }
            Action::ShowInspector(tab) => {
                self.state.inspector_tab = tab;
                true
            }
        };

        if touches_files && applied {
            self.store.save(&self.state.files)?;
            if self.verbose {
                Msg::Note(format!("store: saved {} files", self.state.files.len())).print();
            }
        }
        Ok(())
    }
}

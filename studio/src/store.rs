use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::Error;
use crate::file::{default_files, SourceFile};

/// Key under which the file collection is stored.
pub const FILES_KEY: &str = "asmstudio.files.v1";

pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

// ----------------------------------------------------------------------------
// Backends

/// One file per key under `root`.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirStore { root: root.into() }
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KvStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path(key), value)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// File collection

#[derive(Debug)]
pub struct FileStore<K: KvStore> {
    kv: K,
}

impl<K: KvStore> FileStore<K> {
    pub fn new(kv: K) -> Self {
        FileStore { kv }
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Stored files, or the two seed files when nothing usable is stored.
    pub fn load(&self) -> Vec<SourceFile> {
        self.try_load().unwrap_or_else(default_files)
    }

    /// `None` when the record is absent, unreadable, malformed or empty.
    pub fn try_load(&self) -> Option<Vec<SourceFile>> {
        let raw = self.kv.get(FILES_KEY).ok()??;
        let files: Vec<SourceFile> = serde_yaml::from_str(&raw).ok()?;
        if files.is_empty() {
            None
        } else {
            Some(files)
        }
    }

    /// Overwrites the stored record with `files`.
    pub fn save(&mut self, files: &[SourceFile]) -> Result<(), Error> {
        let text = serde_yaml::to_string(files)?;
        self.kv.set(FILES_KEY, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(raw: &str) -> FileStore<MemoryStore> {
        let mut kv = MemoryStore::default();
        kv.set(FILES_KEY, raw).unwrap();
        FileStore::new(kv)
    }

    fn seed_ids(files: &[SourceFile]) -> Vec<&str> {
        files.iter().map(|f| f.id.as_str()).collect()
    }

    macro_rules! test_fallback {
        ($($name:ident: $raw:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let store = store_with($raw);
                    assert_eq!(store.try_load(), None);
                    let files = store.load();
                    assert_eq!(seed_ids(&files), vec!["hello.asm", "macros.inc"]);
                    assert_eq!(files, default_files());
                }
            )*
        }
    }

    test_fallback! {
        empty_text: "",
        empty_list: "[]",
        not_a_list: "id: hello.asm",
        missing_fields: "- id: a.asm\n",
        garbage: "{{{ not yaml",
        json_object: "{\"files\": []}",
    }

    #[test]
    fn absent_record() {
        let store = FileStore::new(MemoryStore::default());
        assert_eq!(store.load(), default_files());
    }

    #[test]
    fn save_then_load() {
        let mut store = FileStore::new(MemoryStore::default());
        let files = vec![
            SourceFile::new("b.asm", "push rbp\n  mov rbp, rsp"),
            SourceFile::new("a.asm", ""),
        ];
        store.save(&files).unwrap();
        assert_eq!(store.load(), files);
    }

    #[test]
    fn json_record_is_accepted() {
        let store = store_with(r#"[{"id":"x.asm","name":"x.asm","content":"mov rax, 1"}]"#);
        assert_eq!(store.load(), vec![SourceFile::new("x.asm", "mov rax, 1")]);
    }

    #[test]
    fn save_overwrites() {
        let mut store = FileStore::new(MemoryStore::default());
        store.save(&default_files()).unwrap();
        store.save(&[SourceFile::new("only.asm", "")]).unwrap();
        assert_eq!(seed_ids(&store.load()), vec!["only.asm"]);
    }

    #[test]
    fn dir_store() {
        let root = std::env::temp_dir().join(format!("asmstudio-store-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);

        let mut kv = DirStore::new(&root);
        assert_eq!(kv.get(FILES_KEY).unwrap(), None);
        kv.set(FILES_KEY, "hello").unwrap();
        assert_eq!(kv.get(FILES_KEY).unwrap(), Some("hello".to_string()));
        assert!(kv.path(FILES_KEY).ends_with(FILES_KEY));

        let mut store = FileStore::new(kv);
        store.save(&[SourceFile::new("d.asm", "syscall")]).unwrap();
        let store = FileStore::new(DirStore::new(&root));
        assert_eq!(store.load(), vec![SourceFile::new("d.asm", "syscall")]);

        let _ = std::fs::remove_dir_all(&root);
    }
}

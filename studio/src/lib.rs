pub mod action;
pub mod command;
pub mod config;
mod error;
pub mod file;
pub mod msg;
pub mod session;
pub mod state;
pub mod store;
pub mod view;

pub use action::{Action, Edit};
pub use command::Command;
pub use config::Config;
pub use error::Error;
pub use file::SourceFile;
pub use session::Session;
pub use state::{BottomTab, EditorState, Focus, InspectorTab};
pub use store::{DirStore, FileStore, KvStore, MemoryStore};

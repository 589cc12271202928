pub mod mnemonic;
pub mod reg;
pub mod target;

pub use mnemonic::Mnemonic;
pub use reg::{Reg, RegisterSnapshot};
pub use target::Arch;

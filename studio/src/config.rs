use arch::{Arch, Reg};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::error::Error;

pub const DEFAULT_STORE: &str = ".asmstudio";

/// Optional YAML settings. Every field has a default.
///
/// ```yaml
/// arch: arm64
/// store: ./work
/// registers:
///   RSP: 7FFF0000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arch: Arch,
    pub store: PathBuf,
    pub registers: HashMap<Reg, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            arch: Arch::default(),
            store: PathBuf::from(DEFAULT_STORE),
            registers: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load(file: Option<&str>) -> Result<Self, Error> {
        match file {
            Some(fname) => {
                let file =
                    File::open(fname).map_err(|e| Error::FileOpen(fname.to_string(), e))?;
                Ok(serde_yaml::from_reader(BufReader::new(file))?)
            }
            None => Ok(Config::default()),
        }
    }

    pub fn parse(text: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(text)?)
    }
}

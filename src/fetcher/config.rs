extern crate home;
extern crate serde;
extern crate serde_yaml;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::{fs::File, io::Read, path::PathBuf};

pub mod fetch {
    use std::time::Duration;
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const MAX_CONCURRENT_FETCHES: usize = 8;
}
pub mod cache {
    pub const DIR_NAME: &str = "acedit";
}

/// User settings, read from `~/.config/acedit/settings.yaml`. The file is
/// optional; a missing file means no defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    pub default_site: Option<String>,
}

impl Settings {
    pub fn path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".config").join("acedit").join("settings.yaml"))
    }
    pub fn load() -> Result<Self> {
        let path = match Self::path() {
            Some(p) if p.is_file() => p,
            _ => return Ok(Self::default()),
        };
        serde_yaml::from_reader(File::open(&path)?).map_err(|e| {
            Error::Config(format!("malformed settings file {}: {}", path.display(), e))
        })
    }
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        serde_yaml::from_reader(rdr).map_err(|e| Error::Config(format!("malformed settings: {}", e)))
    }
}

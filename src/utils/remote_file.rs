use chrono::prelude::*;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where a cached file came from, stored next to it as JSON.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RemoteFile {
    pub url: String,
    pub local_path: PathBuf,
    pub date_downloaded: DateTime<Utc>,
}

impl Default for RemoteFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteFile {
    pub fn new() -> Self {
        RemoteFile {
            url: String::new(),
            local_path: PathBuf::new(),
            date_downloaded: DateTime::default(),
        }
    }

    pub fn read(path: &Path) -> Result<RemoteFile, Report> {
        let file = File::open(path)
            .wrap_err_with(|| eyre!("Unable to read remote file record: {path:?}"))?;
        let remote_file = serde_json::from_reader(file)?;
        Ok(remote_file)
    }

    pub fn write(&self, path: &Path) -> Result<(), Report> {
        let output = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)
            .wrap_err_with(|| eyre!("Unable to create file: {path:?}"))?;
        file.write_all(output.as_bytes())
            .wrap_err_with(|| eyre!("Unable to write file: {path:?}"))?;
        Ok(())
    }
}

pub mod remote_file;
pub mod table;

use color_eyre::eyre::{eyre, Report, Result};
use log::debug;
use reqwest::header::USER_AGENT;

fn get(url: &str) -> Result<reqwest::blocking::Response, Report> {
    let user_agent = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let client = reqwest::blocking::Client::new();

    debug!("GET {url}");
    let response = client.get(url).header(USER_AGENT, user_agent).send()?;
    if !response.status().is_success() {
        return Err(eyre!(
            "Unable to download file: {url}\nStatus code {}.",
            response.status()
        ));
    }
    Ok(response)
}

/// Download a text document.
pub fn download_text(url: &str) -> Result<String, Report> {
    Ok(get(url)?.text()?)
}

/// Download a binary file into memory.
pub fn download_bytes(url: &str) -> Result<Vec<u8>, Report> {
    Ok(get(url)?.bytes()?.to_vec())
}

/// Source of remote documents.
pub trait Fetch {
    fn fetch_text(&self, url: &str) -> Result<String, Report>;

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, Report>;
}

/// Fetch over HTTP(S).
#[derive(Clone, Copy, Debug, Default)]
pub struct Http;

impl Fetch for Http {
    fn fetch_text(&self, url: &str) -> Result<String, Report> {
        download_text(url)
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, Report> {
        download_bytes(url)
    }
}

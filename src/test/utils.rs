use super::minimal_font;
use crate::style::font::{font_url, FontProvider, GoogleFonts};
use crate::utils::remote_file::RemoteFile;
use crate::utils::table::{DistinctValues, Table};
use crate::utils::Fetch;
use chrono::prelude::*;
use color_eyre::eyre::{eyre, Report, Result};
use std::cell::RefCell;
use std::fs::{read, write};
use std::path::PathBuf;
use tempfile::TempDir;

const FONT_FILE_URL: &str = "https://fonts.gstatic.com/s/funnelsans/v1/abc.ttf";

/// Serves a fixed stylesheet and font file, recording every url requested.
struct FakeFetch {
    font: Vec<u8>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetch {
    fn new(font: Vec<u8>) -> Self {
        FakeFetch {
            font,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn n_requests(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Fetch for FakeFetch {
    fn fetch_text(&self, url: &str) -> Result<String, Report> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(format!("@font-face {{ src: url({FONT_FILE_URL}) format('truetype'); }}"))
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, Report> {
        self.requests.borrow_mut().push(url.to_string());
        if url != FONT_FILE_URL {
            return Err(eyre!("Unexpected url: {url}"));
        }
        Ok(self.font.clone())
    }
}

#[test]
fn table_distinct_values() -> Result<(), Report> {
    let tmp_dir = TempDir::new()?;
    let path = tmp_dir.path().join("sales.tsv");
    write(
        &path,
        "region\tquarter\tvalue\nnorth\tQ1\t10\nsouth\tQ1\t12\nnorth\tQ2\t8\neast\tQ2\t3\n",
    )?;

    let table = Table::from_tsv(&path)?;
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.header_position("value")?, 2);
    assert_eq!(table.n_unique("region")?, 3);
    assert_eq!(table.n_unique("quarter")?, 2);
    assert!(table.n_unique("country").is_err());
    Ok(())
}

#[test]
fn table_from_csv() -> Result<(), Report> {
    let tmp_dir = TempDir::new()?;
    let path = tmp_dir.path().join("sales.csv");
    write(&path, "series,value\na,1\nb,2\na,3\n")?;

    let table = Table::from_csv(&path)?;
    assert_eq!(table.headers, vec!["series", "value"]);
    assert_eq!(table.n_unique("series")?, 2);
    Ok(())
}

#[test]
fn google_fonts_urls() -> Result<(), Report> {
    let fonts = GoogleFonts::new(&PathBuf::from("cache"));
    assert_eq!(
        fonts.cache_path("Funnel Sans", 800),
        PathBuf::from("cache").join("funnel-sans-800.ttf")
    );
    // family names never escape the cache directory
    assert_eq!(
        fonts.cache_path("../../etc/Some Font", 400),
        PathBuf::from("cache").join("etc-some-font-400.ttf")
    );

    let url = fonts.stylesheet_url("Funnel Sans", 800)?;
    assert_eq!(url.host_str(), Some("fonts.googleapis.com"));
    assert_eq!(url.query(), Some("family=Funnel+Sans%3Awght%40800"));
    Ok(())
}

#[test]
fn google_fonts_stylesheet_parsing() -> Result<(), Report> {
    let stylesheet = "@font-face {\n  font-family: 'Funnel Sans';\n  font-weight: 800;\n  \
        src: url(https://fonts.gstatic.com/s/funnelsans/v1/abc.ttf) format('truetype');\n}\n";
    assert_eq!(
        font_url(stylesheet)?,
        "https://fonts.gstatic.com/s/funnelsans/v1/abc.ttf"
    );
    assert!(font_url("/* no fonts */").is_err());
    Ok(())
}

#[test]
fn downloaded_font_is_cached() -> Result<(), Report> {
    let tmp_dir = TempDir::new()?;
    let cache_dir = tmp_dir.path().join("fonts");
    let mut fonts = GoogleFonts::with_fetch(&cache_dir, FakeFetch::new(minimal_font()));

    let font = fonts.load_font("Funnel Sans", 800)?;
    assert_eq!(font.family, "Funnel Sans");
    assert_eq!(font.weight, 800);
    assert_eq!(font.path, cache_dir.join("funnel-sans-800.ttf"));
    assert_eq!(fonts.fetch.n_requests(), 2);
    assert_eq!(read(&font.path)?, minimal_font());

    let record = RemoteFile::read(&font.path.with_extension("json"))?;
    assert_eq!(record.url, FONT_FILE_URL);
    assert_eq!(record.local_path, font.path);

    // second load is served from the cache
    fonts.load_font("Funnel Sans", 800)?;
    assert_eq!(fonts.fetch.n_requests(), 2);
    Ok(())
}

#[test]
fn corrupt_cached_font_is_downloaded_again() -> Result<(), Report> {
    let tmp_dir = TempDir::new()?;
    let mut fonts = GoogleFonts::with_fetch(tmp_dir.path(), FakeFetch::new(minimal_font()));
    let path = fonts.cache_path("Funnel Sans", 400);
    write(&path, b"not a font")?;
    write(path.with_extension("json"), b"{}")?;

    let font = fonts.load_font("Funnel Sans", 400)?;
    assert_eq!(font.path, path);
    assert_eq!(fonts.fetch.n_requests(), 2);
    assert_eq!(read(&path)?, minimal_font());
    assert_eq!(RemoteFile::read(&path.with_extension("json"))?.url, FONT_FILE_URL);
    Ok(())
}

#[test]
fn unusable_download_is_not_cached() -> Result<(), Report> {
    let tmp_dir = TempDir::new()?;
    let fetch = FakeFetch::new(b"wOF2 not a truetype font".to_vec());
    let mut fonts = GoogleFonts::with_fetch(tmp_dir.path(), fetch);
    let path = fonts.cache_path("Funnel Sans", 400);

    assert!(fonts.load_font("Funnel Sans", 400).is_err());
    assert!(!path.exists());
    assert!(!path.with_extension("json").exists());

    // nothing was cached, so the next attempt downloads again
    assert!(fonts.load_font("Funnel Sans", 400).is_err());
    assert_eq!(fonts.fetch.n_requests(), 4);
    Ok(())
}

#[test]
fn remote_file_record() -> Result<(), Report> {
    let tmp_dir = TempDir::new()?;
    let path = tmp_dir.path().join("font.json");
    let remote_file = RemoteFile {
        url: "https://fonts.gstatic.com/s/funnelsans/v1/abc.ttf".to_string(),
        local_path: tmp_dir.path().join("font.ttf"),
        date_downloaded: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    };
    remote_file.write(&path)?;
    assert_eq!(RemoteFile::read(&path)?, remote_file);
    Ok(())
}

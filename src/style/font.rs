use crate::plot::rc::RcParams;
use crate::utils::remote_file::RemoteFile;
use crate::utils::{Fetch, Http};
use chrono::Utc;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::Help;
use itertools::Itertools;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_fontconfig::{FcFontCache, FcPattern, PatternMatch};
use std::fmt;
use std::fs::{create_dir_all, remove_file, write};
use std::path::{Path, PathBuf};

pub const GOOGLE_FONTS_API: &str = "https://fonts.googleapis.com/css2";

// first font file referenced by a Google Fonts stylesheet
static FONT_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"url\((https://[^)]+)\)").expect("valid font url regex"));

/// A font face loaded for a family and weight.
#[derive(Clone)]
pub struct LoadedFont {
    pub family: String,
    pub weight: u16,
    pub path: PathBuf,
    pub font: rusttype::Font<'static>,
}

impl fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedFont")
            .field("family", &self.family)
            .field("weight", &self.weight)
            .field("path", &self.path)
            .finish()
    }
}

/// The regular and bold faces installed by a style, both absent when font
/// installation was skipped or failed.
#[derive(Clone, Debug, Default)]
pub struct PlotFonts {
    pub base: Option<LoadedFont>,
    pub bold: Option<LoadedFont>,
}

impl PlotFonts {
    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.bold.is_none()
    }
}

/// Source of fonts by family name and weight.
pub trait FontProvider {
    /// Whether the provider can be used at all. Unavailable providers are
    /// skipped without being called.
    fn is_available(&self) -> bool {
        true
    }

    fn load_font(&mut self, family: &str, weight: u16) -> Result<LoadedFont, Report>;

    /// Make `font` the default font family for all later text.
    fn set_default_font(&mut self, rc: &mut RcParams, font: &LoadedFont) -> Result<(), Report> {
        rc.set("font.family", font.family.clone());
        Ok(())
    }
}

/// Stand-in for an absent font provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFonts;

impl FontProvider for NoFonts {
    fn is_available(&self) -> bool {
        false
    }

    fn load_font(&mut self, family: &str, _weight: u16) -> Result<LoadedFont, Report> {
        Err(eyre!("No font provider is available to load: {family}"))
    }
}

/// Load font from file path
pub fn load_font(path: &Path) -> Result<rusttype::Font<'static>, Report> {
    load_font_index(path, 0)
}

/// Load one face of a (possibly multi-face) font file.
pub fn load_font_index(path: &Path, index: usize) -> Result<rusttype::Font<'static>, Report> {
    let font_bytes = std::fs::read(path).wrap_err_with(|| {
        format!("Could not load font from file path: {}", path.display())
    })?;
    let font = rusttype::Font::try_from_vec_and_index(font_bytes, index as u32)
        .ok_or_else(|| eyre!("Could not convert file to Font: {}", path.display()))?;

    Ok(font)
}

/// Extract the font file url from a Google Fonts stylesheet.
pub fn font_url(stylesheet: &str) -> Result<String, Report> {
    let captures = FONT_URL.captures(stylesheet).ok_or_else(|| {
        eyre!("No font file was found in the stylesheet.")
            .suggestion("Check that the font family name is spelled correctly.")
    })?;
    Ok(captures[1].to_string())
}

/// Fonts downloaded from Google Fonts, cached on disk after the first
/// download.
#[derive(Clone, Debug)]
pub struct GoogleFonts<F = Http> {
    pub cache_dir: PathBuf,
    pub api_url: String,
    pub fetch: F,
}

impl GoogleFonts {
    pub fn new(cache_dir: &Path) -> Self {
        GoogleFonts::with_fetch(cache_dir, Http)
    }
}

impl<F: Fetch> GoogleFonts<F> {
    pub fn with_fetch(cache_dir: &Path, fetch: F) -> Self {
        GoogleFonts {
            cache_dir: cache_dir.to_path_buf(),
            api_url: GOOGLE_FONTS_API.to_string(),
            fetch,
        }
    }

    /// Local file a family/weight is cached at, ex. funnel-sans-800.ttf
    pub fn cache_path(&self, family: &str, weight: u16) -> PathBuf {
        let slug = family
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
            .join("-");
        self.cache_dir.join(format!("{slug}-{weight}.ttf"))
    }

    pub fn stylesheet_url(&self, family: &str, weight: u16) -> Result<url::Url, Report> {
        let url = url::Url::parse_with_params(
            &self.api_url,
            &[("family", format!("{family}:wght@{weight}"))],
        )?;
        Ok(url)
    }

    /// Load a previously cached font, removing it (and its record) when it
    /// can no longer be parsed.
    fn load_cached(&self, path: &Path) -> Result<Option<rusttype::Font<'static>>, Report> {
        if !path.exists() {
            return Ok(None);
        }
        match load_font(path) {
            Ok(font) => {
                debug!("Using cached font: {path:?}");
                Ok(Some(font))
            }
            Err(e) => {
                warn!("Removing unreadable cached font {path:?}: {e}");
                remove_file(path)?;
                let record = path.with_extension("json");
                if record.exists() {
                    remove_file(record)?;
                }
                Ok(None)
            }
        }
    }
}

impl<F: Fetch> FontProvider for GoogleFonts<F> {
    fn load_font(&mut self, family: &str, weight: u16) -> Result<LoadedFont, Report> {
        let path = self.cache_path(family, weight);

        let font = match self.load_cached(&path)? {
            Some(font) => font,
            None => {
                if !self.cache_dir.exists() {
                    info!("Creating font cache directory: {:?}", self.cache_dir);
                    create_dir_all(&self.cache_dir)?;
                }
                let stylesheet_url = self.stylesheet_url(family, weight)?;
                info!("Downloading font: {family} ({weight})");
                let stylesheet = self
                    .fetch
                    .fetch_text(stylesheet_url.as_str())
                    .wrap_err_with(|| format!("Unable to find font: {family} ({weight})"))?;
                let file_url = font_url(&stylesheet)?;
                let bytes = self.fetch.fetch_bytes(&file_url)?;

                // parse before writing, the cache only holds usable fonts
                let font = rusttype::Font::try_from_vec(bytes.clone()).ok_or_else(|| {
                    eyre!("Downloaded file is not a usable font: {file_url}")
                        .suggestion("Only TrueType and OpenType fonts are supported.")
                })?;
                write(&path, bytes)
                    .wrap_err_with(|| format!("Unable to write file: {path:?}"))?;
                let remote_file = RemoteFile {
                    url: file_url,
                    local_path: path.clone(),
                    date_downloaded: Utc::now(),
                };
                remote_file.write(&path.with_extension("json"))?;
                font
            }
        };

        Ok(LoadedFont {
            family: family.to_string(),
            weight,
            path,
            font,
        })
    }
}

/// Fonts already installed on this system.
pub struct SystemFonts {
    cache: FcFontCache,
}

impl fmt::Debug for SystemFonts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemFonts").finish()
    }
}

impl Default for SystemFonts {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemFonts {
    pub fn new() -> Self {
        debug!("Indexing system fonts.");
        SystemFonts {
            cache: FcFontCache::build(),
        }
    }
}

impl FontProvider for SystemFonts {
    fn load_font(&mut self, family: &str, weight: u16) -> Result<LoadedFont, Report> {
        // weights of semi-bold and heavier ask for a bold face
        let bold = if weight >= 600 {
            PatternMatch::True
        } else {
            PatternMatch::DontCare
        };
        let pattern = FcPattern {
            family: Some(family.to_string()),
            bold,
            ..Default::default()
        };

        let found = self
            .cache
            .query(&pattern)
            .ok_or_else(|| eyre!("Font is not installed on this system: {family} ({weight})"))?;
        let path = PathBuf::from(&found.path);
        let font = load_font_index(&path, found.font_index)?;

        Ok(LoadedFont {
            family: family.to_string(),
            weight,
            path,
            font,
        })
    }
}

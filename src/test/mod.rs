mod colormap;
mod utils;

use crate::utils::table::DistinctValues;
use color_eyre::eyre::{eyre, Report, Result};

/// Dataset stand-in with a fixed number of distinct values per column.
pub struct FixedCounts {
    pub column: &'static str,
    pub n: usize,
}

impl DistinctValues for FixedCounts {
    fn n_unique(&self, column: &str) -> Result<usize, Report> {
        if column == self.column {
            Ok(self.n)
        } else {
            Err(eyre!("Column '{column}' was not found."))
        }
    }
}

/// Smallest TrueType file rusttype will parse: a `head`, `hhea` and
/// `maxp` table and no glyph outlines.
pub fn minimal_font() -> Vec<u8> {
    let mut head = vec![0u8; 54];
    head[0..4].copy_from_slice(&0x0001_0000_u32.to_be_bytes());
    head[12..16].copy_from_slice(&0x5F0F_3CF5_u32.to_be_bytes());
    // units per em
    head[18..20].copy_from_slice(&1000_u16.to_be_bytes());

    let mut hhea = vec![0u8; 36];
    hhea[0..4].copy_from_slice(&0x0001_0000_u32.to_be_bytes());
    // number of horizontal metrics
    hhea[34..36].copy_from_slice(&1_u16.to_be_bytes());

    let mut maxp = vec![0u8; 6];
    maxp[0..4].copy_from_slice(&0x0000_5000_u32.to_be_bytes());
    // number of glyphs
    maxp[4..6].copy_from_slice(&1_u16.to_be_bytes());

    let tables = [(b"head", head), (b"hhea", hhea), (b"maxp", maxp)];

    let mut font: Vec<u8> = Vec::new();
    font.extend(0x0001_0000_u32.to_be_bytes());
    font.extend((tables.len() as u16).to_be_bytes());
    // search range, entry selector, range shift
    font.extend([0u8; 6]);

    let padded = |len: usize| (len + 3) / 4 * 4;
    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in &tables {
        font.extend(*tag);
        font.extend(0_u32.to_be_bytes());
        font.extend((offset as u32).to_be_bytes());
        font.extend((data.len() as u32).to_be_bytes());
        offset += padded(data.len());
    }
    for (_, data) in &tables {
        font.extend(data);
        font.resize(padded(font.len()), 0);
    }
    font
}

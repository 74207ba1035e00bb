use crate::plot::color::Rgba;
use crate::plot::constants;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Built-in colormap derived from the sorted Okabe-Ito palette.
pub static OKABE_ITO_CMAP: Lazy<Colormap> = Lazy::new(|| {
    Colormap::from_list(
        constants::OKABE_ITO_CMAP_NAME,
        &sorted_hex(&constants::OKABE_ITO),
        constants::CMAP_RESOLUTION,
    )
    .expect("built-in palette is valid hex")
});

/// Built-in colormap derived from the sorted kiwi-ish palette.
pub static KIWIISH_CMAP: Lazy<Colormap> = Lazy::new(|| {
    Colormap::from_list(
        constants::KIWIISH_CMAP_NAME,
        &sorted_hex(&constants::KIWIISH),
        constants::CMAP_RESOLUTION,
    )
    .expect("built-in palette is valid hex")
});

/// Sort hex colors case-insensitively, for order-independent colormaps.
pub fn sorted_hex<S: AsRef<str>>(colors: &[S]) -> Vec<String> {
    colors
        .iter()
        .map(|c| c.as_ref().to_string())
        .sorted_by_key(|c| c.to_lowercase())
        .collect_vec()
}

/// A continuous colormap: a lookup table linearly interpolated between
/// evenly spaced color nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Colormap {
    name: String,
    nodes: Vec<Rgba>,
    lut: Vec<Rgba>,
}

impl Colormap {
    /// Build a colormap from hex colors in the given order, with `n` entries.
    pub fn from_list<S: AsRef<str>>(name: &str, colors: &[S], n: usize) -> Result<Self, Report> {
        if colors.is_empty() {
            return Err(eyre!("Cannot build colormap {name:?} from an empty color list."));
        }
        if n == 0 {
            return Err(eyre!("Colormap {name:?} needs at least one entry."));
        }

        let nodes = colors
            .iter()
            .map(|c| Rgba::from_hex(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .wrap_err_with(|| format!("Unable to build colormap: {name}"))?;

        let lut = (0..n)
            .map(|i| {
                let x = match n {
                    1 => 0.0,
                    _ => i as f64 / (n - 1) as f64,
                };
                interpolate(&nodes, x)
            })
            .collect_vec();

        Ok(Colormap {
            name: name.to_string(),
            nodes,
            lut,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[Rgba] {
        &self.nodes
    }

    pub fn lut(&self) -> &[Rgba] {
        &self.lut
    }

    /// Number of lookup table entries.
    pub fn n(&self) -> usize {
        self.lut.len()
    }

    /// Map a value in [0, 1] to a color, clamping out of range values.
    pub fn sample(&self, x: f64) -> Rgba {
        let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
        let i = ((x * self.n() as f64) as usize).min(self.n() - 1);
        self.lut[i]
    }

    /// `k` evenly spaced samples across the whole map.
    pub fn samples(&self, k: usize) -> Vec<Rgba> {
        match k {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..k)
                .map(|i| self.sample(i as f64 / (k - 1) as f64))
                .collect_vec(),
        }
    }
}

// nodes are placed at evenly spaced positions across [0, 1]
fn interpolate(nodes: &[Rgba], x: f64) -> Rgba {
    if nodes.len() == 1 {
        return nodes[0];
    }
    let segments = (nodes.len() - 1) as f64;
    let pos = x * segments;
    let i = (pos.floor() as usize).min(nodes.len() - 2);
    let t = pos - i as f64;
    nodes[i].lerp(&nodes[i + 1], t)
}

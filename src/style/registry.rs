use crate::plot::colormap::Colormap;
use color_eyre::eyre::{eyre, Report, Result};
use color_eyre::Help;
use std::collections::BTreeMap;

/// Named colormap registry that styles are installed into.
pub trait ColormapRegistry {
    /// Register `cmap` under its own name. Without `force`, an existing
    /// registration of the same name is an error.
    fn register(&mut self, cmap: &Colormap, force: bool) -> Result<(), Report>;

    /// Older registration entry point, tried when `register` fails.
    fn register_legacy(&mut self, name: &str, _cmap: &Colormap) -> Result<(), Report> {
        Err(eyre!("Legacy colormap registration is not supported for: {name}"))
    }

    fn get(&self, name: &str) -> Option<&Colormap>;
}

/// In-memory colormap registry.
#[derive(Clone, Debug, Default)]
pub struct Colormaps {
    cmaps: BTreeMap<String, Colormap>,
}

impl Colormaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&str> {
        self.cmaps.keys().map(|k| k.as_str()).collect()
    }
}

impl ColormapRegistry for Colormaps {
    fn register(&mut self, cmap: &Colormap, force: bool) -> Result<(), Report> {
        if !force && self.cmaps.contains_key(cmap.name()) {
            return Err(eyre!("A colormap named {:?} is already registered.", cmap.name())
                .suggestion("Register with force to overwrite it."));
        }
        self.cmaps.insert(cmap.name().to_string(), cmap.clone());
        Ok(())
    }

    fn register_legacy(&mut self, name: &str, cmap: &Colormap) -> Result<(), Report> {
        self.cmaps.insert(name.to_string(), cmap.clone());
        Ok(())
    }

    fn get(&self, name: &str) -> Option<&Colormap> {
        self.cmaps.get(name)
    }
}

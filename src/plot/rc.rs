use color_eyre::eyre::{Report, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single value in the settings registry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RcValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Pair(f64, f64),
    Cycle(Vec<String>),
}

impl fmt::Display for RcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RcValue::Bool(v) => write!(f, "{v}"),
            RcValue::Int(v) => write!(f, "{v}"),
            RcValue::Float(v) => write!(f, "{v}"),
            RcValue::Text(v) => write!(f, "{v}"),
            RcValue::Pair(a, b) => write!(f, "({a}, {b})"),
            RcValue::Cycle(v) => write!(f, "[{}]", v.join(", ")),
        }
    }
}

impl From<bool> for RcValue {
    fn from(v: bool) -> Self {
        RcValue::Bool(v)
    }
}

impl From<i64> for RcValue {
    fn from(v: i64) -> Self {
        RcValue::Int(v)
    }
}

impl From<f64> for RcValue {
    fn from(v: f64) -> Self {
        RcValue::Float(v)
    }
}

impl From<&str> for RcValue {
    fn from(v: &str) -> Self {
        RcValue::Text(v.to_string())
    }
}

impl From<String> for RcValue {
    fn from(v: String) -> Self {
        RcValue::Text(v)
    }
}

impl From<(f64, f64)> for RcValue {
    fn from(v: (f64, f64)) -> Self {
        RcValue::Pair(v.0, v.1)
    }
}

impl From<Vec<String>> for RcValue {
    fn from(v: Vec<String>) -> Self {
        RcValue::Cycle(v)
    }
}

/// Flat key -> value registry of plot appearance settings.
///
/// Writes always overwrite: the last writer of a key wins, and nothing is
/// merged.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RcParams {
    params: BTreeMap<String, RcValue>,
}

impl Default for RcParams {
    fn default() -> Self {
        let mut rc = RcParams::new();
        rc.update([
            ("figure.figsize", RcValue::Pair(6.4, 4.8)),
            ("figure.dpi", RcValue::Int(100)),
            ("font.family", "sans-serif".into()),
            ("font.size", RcValue::Float(10.0)),
            ("text.color", "#000000".into()),
            ("axes.titlelocation", "center".into()),
            ("axes.titlesize", RcValue::Float(12.0)),
            ("axes.titleweight", "normal".into()),
            ("axes.titlecolor", "#000000".into()),
            ("axes.grid", false.into()),
            ("image.cmap", "viridis".into()),
            (
                "axes.prop_cycle",
                RcValue::Cycle(
                    [
                        "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B",
                        "#E377C2", "#7F7F7F", "#BCBD22", "#17BECF",
                    ]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
                ),
            ),
        ]);
        rc
    }
}

impl RcParams {
    /// An empty registry, with no keys at all.
    pub fn new() -> Self {
        RcParams {
            params: BTreeMap::new(),
        }
    }

    pub fn set<K: Into<String>, V: Into<RcValue>>(&mut self, key: K, value: V) {
        self.params.insert(key.into(), value.into());
    }

    pub fn update<K, V, I>(&mut self, values: I)
    where
        K: Into<String>,
        V: Into<RcValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in values {
            self.set(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&RcValue> {
        self.params.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RcValue)> {
        self.params.iter()
    }

    /// Text value of `key`, if it is set and is text.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.params.get(key) {
            Some(RcValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Numeric value of `key`, accepting both integers and floats.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.params.get(key) {
            Some(RcValue::Float(v)) => Some(*v),
            Some(RcValue::Int(v)) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.params.get(key) {
            Some(RcValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_cycle(&self, key: &str) -> Option<&[String]> {
        match self.params.get(key) {
            Some(RcValue::Cycle(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Render the registry as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Report> {
        Ok(serde_json::to_string_pretty(&self)?)
    }
}

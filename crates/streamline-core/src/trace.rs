// File: crates/streamline-core/src/trace.rs
// Summary: Line-series output handed to the chart layer: flattened x/y with None breaks plus passthrough style.

use std::collections::BTreeMap;

/// Chart trace kind. Streamlines always render as a scatter trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceType {
    #[default]
    Scatter,
}

impl TraceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TraceType::Scatter => "scatter",
        }
    }
}

/// Drawing mode. Streamlines are connected line segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceMode {
    #[default]
    Lines,
}

impl TraceMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TraceMode::Lines => "lines",
        }
    }
}

/// Opaque styling options (e.g. `line.color`, `name`) carried through to the
/// chart layer unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineStyle {
    entries: BTreeMap<String, String>,
}

impl LineStyle {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> { self.entries.get(key).map(String::as_str) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Flattened streamline output. `None` in `x`/`y` is a pen-up break between
/// segments. Contract: `x.len() == y.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct LineTrace {
    pub trace_type: TraceType,
    pub mode: TraceMode,
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub style: LineStyle,
}

impl LineTrace {
    pub fn new(x: Vec<Option<f64>>, y: Vec<Option<f64>>, style: LineStyle) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { trace_type: TraceType::Scatter, mode: TraceMode::Lines, x, y, style }
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// First drawable point, if any.
    pub fn first_point(&self) -> Option<(f64, f64)> {
        self.x.iter().zip(&self.y).find_map(|(x, y)| Some(((*x)?, (*y)?)))
    }

    /// Number of breaks in the sequence.
    pub fn break_count(&self) -> usize {
        self.x.iter().zip(&self.y).filter(|(x, y)| x.is_none() || y.is_none()).count()
    }

    /// Split the flattened sequence back into connected runs. Paths and
    /// arrowheads both come out as separate runs.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut out = Vec::new();
        let mut run = Vec::new();
        for (x, y) in self.x.iter().zip(&self.y) {
            match (x, y) {
                (Some(x), Some(y)) => run.push((*x, *y)),
                _ => {
                    if !run.is_empty() { out.push(std::mem::take(&mut run)); }
                }
            }
        }
        if !run.is_empty() { out.push(run); }
        out
    }
}

// File: crates/streamline-demo/src/main.rs
// Summary: Demo loads a gridded vector field from CSV (or builds a sample one), traces streamlines, writes them as CSV.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use streamline_core::{create_streamline, linspace, Array2, LineStyle, LineTrace, StreamlineOptions};

struct Field {
    x: Vec<f64>,
    y: Vec<f64>,
    u: Array2,
    v: Array2,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage: streamline-demo [field.csv|-] [density] [arrow_scale]
    let mut args = std::env::args().skip(1);
    let input = args.next().filter(|a| a != "-");
    let density = parse_arg(args.next(), "density", 1.0)?;
    let arrow_scale = parse_arg(args.next(), "arrow_scale", 0.09)?;

    let (field, stem) = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            let field = load_field_csv(path).with_context(|| format!("failed to load field '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("field").to_string();
            (field, stem)
        }
        None => {
            log::info!("no input given; using the built-in saddle field");
            (sample_field(60), "sample".to_string())
        }
    };
    log::info!("field grid: {} x {} nodes", field.x.len(), field.y.len());

    let opts = StreamlineOptions::default()
        .with_density(density)
        .with_arrow_scale(arrow_scale)
        .with_style(LineStyle::new().with("name", stem.as_str()));
    let trace = create_streamline(&field.x, &field.y, &field.u, &field.v, &opts)
        .context("streamline computation rejected the input")?;

    if !trace.style.is_empty() {
        for (key, value) in trace.style.iter() {
            log::debug!("style {key} = {value}");
        }
    }
    let runs = trace.segments();
    log::info!("{} runs (streamlines and arrowheads), {} trace entries", runs.len(), trace.len());
    if trace.is_empty() {
        log::warn!("no streamline survived; is the field zero everywhere?");
    }

    let out = out_name_with(&stem);
    write_trace_csv(&trace, &out).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn parse_arg(raw: Option<String>, name: &str, default: f64) -> Result<f64> {
    match raw {
        Some(s) => s.trim().parse::<f64>().with_context(|| format!("{name} must be a number, got '{s}'")),
        None => Ok(default),
    }
}

/// u = -1 - y^2 + x, v = 1 + y - x^2 over [-3, 3]^2.
fn sample_field(n: usize) -> Field {
    let axis = linspace(-3.0, 3.0, n);
    let u = Array2::from_fn(n, n, |r, c| -1.0 - axis[r] * axis[r] + axis[c]);
    let v = Array2::from_fn(n, n, |r, c| 1.0 + axis[r] - axis[c] * axis[c]);
    Field { x: axis.clone(), y: axis, u, v }
}

/// Produce output file name like target/out/streamlines_<stem>.csv
fn out_name_with(stem: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("streamlines_{}.csv", stem));
    out
}

/// Load a long-format CSV (one row per grid node: x, y, u, v) into a grid.
/// Every (x, y) combination must be present exactly once.
fn load_field_csv(path: &Path) -> Result<Field> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    log::debug!("headers: {:?}", headers);
    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };
    let (Some(ix), Some(iy), Some(iu), Some(iv)) =
        (idx(&["x", "lon"]), idx(&["y", "lat"]), idx(&["u", "vx"]), idx(&["v", "vy"]))
    else {
        anyhow::bail!("expected x, y, u, v columns, found {:?}", headers);
    };

    // Keyed by bit pattern so the node coordinates round-trip exactly.
    let mut nodes: BTreeMap<(u64, u64), (f64, f64)> = BTreeMap::new();
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let get = |i: usize, name: &str| -> Result<f64> {
            let s = rec.get(i).unwrap_or("");
            s.parse::<f64>().with_context(|| format!("row {}: bad {name} value '{s}'", line + 1))
        };
        let (x, y) = (get(ix, "x")?, get(iy, "y")?);
        let (u, v) = (get(iu, "u")?, get(iv, "v")?);
        if nodes.insert((x.to_bits(), y.to_bits()), (u, v)).is_some() {
            anyhow::bail!("row {}: duplicate node ({x}, {y})", line + 1);
        }
        xs.push(x);
        ys.push(y);
    }
    if nodes.is_empty() {
        anyhow::bail!("no grid nodes loaded; check headers/delimiter.");
    }

    let x = sorted_unique(xs);
    let y = sorted_unique(ys);
    if nodes.len() != x.len() * y.len() {
        anyhow::bail!("{} nodes do not form a full {} x {} grid", nodes.len(), x.len(), y.len());
    }
    let node = |r: usize, c: usize| nodes[&(x[c].to_bits(), y[r].to_bits())];
    let u = Array2::from_fn(y.len(), x.len(), |r, c| node(r, c).0);
    let v = Array2::from_fn(y.len(), x.len(), |r, c| node(r, c).1);
    Ok(Field { x, y, u, v })
}

fn sorted_unique(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup_by(|a, b| a.to_bits() == b.to_bits());
    values
}

/// Two columns, one row per trace entry; breaks are written as empty cells.
fn write_trace_csv(trace: &LineTrace, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["x", "y"])?;
    let cell = |v: &Option<f64>| v.map(|f| f.to_string()).unwrap_or_default();
    for (x, y) in trace.x.iter().zip(&trace.y) {
        wtr.write_record([cell(x), cell(y)])?;
    }
    wtr.flush()?;
    Ok(())
}

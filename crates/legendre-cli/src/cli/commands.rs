use super::CliError;
use anyhow::Context;
use legendre_core::numerics::special::{index_of, nm_of, size, LegendreNm, SurfaceHarmonics};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct EvalArgs {
    /// Maximum spherical-harmonic degree
    #[arg(long)]
    pub(super) nmax: usize,

    /// Cosine of colatitude, in [-1, 1]
    #[arg(long, allow_negative_numbers = true)]
    pub(super) costheta: f64,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args)]
pub(super) struct BasisArgs {
    /// Maximum spherical-harmonic degree
    #[arg(long)]
    pub(super) nmax: usize,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub(super) lon: f64,

    /// Latitude in degrees, in [-90, 90]
    #[arg(long, allow_negative_numbers = true)]
    pub(super) lat: f64,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args)]
pub(super) struct IndexArgs {
    /// Maximum spherical-harmonic degree
    #[arg(long)]
    nmax: usize,

    /// Degree
    #[arg(value_name = "n")]
    degree: usize,

    /// Order
    #[arg(value_name = "m")]
    order: usize,
}

#[derive(clap::Args)]
pub(super) struct InvertArgs {
    /// Maximum spherical-harmonic degree
    #[arg(long)]
    nmax: usize,

    /// Linear storage slot
    #[arg(value_name = "index")]
    index: usize,
}

#[derive(clap::Args, Default)]
struct OutputArgs {
    /// Emit a JSON report on stdout instead of rows
    #[arg(long)]
    json: bool,

    /// Write the JSON report to this path
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct EvalReport {
    nmax: usize,
    costheta: f64,
    entries: Vec<EvalEntry>,
}

#[derive(Debug, Serialize)]
struct EvalEntry {
    degree: usize,
    order: usize,
    value: f64,
}

#[derive(Debug, Serialize)]
struct BasisReport {
    nmax: usize,
    lon: f64,
    lat: f64,
    entries: Vec<BasisEntry>,
}

#[derive(Debug, Serialize)]
struct BasisEntry {
    degree: usize,
    order: usize,
    cosine: f64,
    sine: f64,
}

pub(super) fn run_eval_command(args: EvalArgs) -> Result<i32, CliError> {
    let table = LegendreNm::<f64>::new(args.nmax);
    let pnm = table.values(args.costheta)?;
    tracing::debug!(slots = pnm.len(), "evaluated normalized ALF table");

    let entries: Vec<EvalEntry> = pnm
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let (degree, order) = nm_of(idx, args.nmax);
            EvalEntry {
                degree,
                order,
                value,
            }
        })
        .collect();

    let mut rows = String::new();
    for entry in &entries {
        let _ = writeln!(
            rows,
            "{:5} {:5} {:>24.15e}",
            entry.degree, entry.order, entry.value
        );
    }

    let report = EvalReport {
        nmax: args.nmax,
        costheta: args.costheta,
        entries,
    };
    emit_report(&report, rows, &args.output)
}

pub(super) fn run_basis_command(args: BasisArgs) -> Result<i32, CliError> {
    let mut harmonics = SurfaceHarmonics::new(args.nmax);
    let basis = harmonics.basis(args.lon, args.lat)?;
    tracing::debug!(slots = basis.cosine().len(), "evaluated surface basis");

    let mut entries = Vec::with_capacity(basis.cosine().len());
    let mut rows = String::new();
    for m in 0..=args.nmax {
        for n in m..=args.nmax {
            let (cosine, sine) = basis.at(n, m);
            let _ = writeln!(rows, "{n:5} {m:5} {cosine:>24.15e} {sine:>24.15e}");
            entries.push(BasisEntry {
                degree: n,
                order: m,
                cosine,
                sine,
            });
        }
    }

    let report = BasisReport {
        nmax: args.nmax,
        lon: args.lon,
        lat: args.lat,
        entries,
    };
    emit_report(&report, rows, &args.output)
}

pub(super) fn run_index_command(args: IndexArgs) -> Result<i32, CliError> {
    if args.order > args.degree || args.degree > args.nmax {
        return Err(CliError::Usage(format!(
            "degree/order pair ({}, {}) violates 0 <= m <= n <= {}",
            args.degree, args.order, args.nmax
        )));
    }

    println!("{}", index_of(args.degree, args.order, args.nmax));
    Ok(0)
}

pub(super) fn run_invert_command(args: InvertArgs) -> Result<i32, CliError> {
    if args.index >= size(args.nmax) {
        return Err(CliError::Usage(format!(
            "index {} exceeds the {} slots of maximum degree {}",
            args.index,
            size(args.nmax),
            args.nmax
        )));
    }

    let (degree, order) = nm_of(args.index, args.nmax);
    println!("{degree} {order}");
    Ok(0)
}

fn emit_report<T: Serialize>(
    report: &T,
    rows: String,
    output: &OutputArgs,
) -> Result<i32, CliError> {
    if output.json || output.output.is_some() {
        let payload =
            serde_json::to_string_pretty(report).context("serializing JSON report")?;
        if let Some(path) = &output.output {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("creating report directory '{}'", parent.display())
                })?;
            }
            fs::write(path, &payload)
                .with_context(|| format!("writing report to '{}'", path.display()))?;
        }
        if output.json {
            println!("{payload}");
        }
    }
    if !output.json {
        print!("{rows}");
    }

    Ok(0)
}

//! The benchmark pipeline: load each configured input size, time every
//! algorithm against it, render the charts, and write the JSON report.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::chart::LineChart;
use crate::dataset;
use crate::harness;
use crate::schema::{ChartPaths, Complexity, MachineInfo, Report, TimingSample};
use crate::Algorithm;

/// Citation list carried verbatim into every report.
const REFERENCES: [&str; 1] = ["Aula 06 - Algoritmos de Ordenação - Prof. André Chaves Lima"];

/// File name of the chart overlaying all algorithms.
const COMPARATIVE_CHART: &str = "grafico_comparativo.svg";

const X_LABEL: &str = "Tamanho da Entrada";
const Y_LABEL: &str = "Tempo (ms)";

/// Everything a run needs; no flags, no environment variables.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Input sizes to process, in order. A size whose file is missing is
    /// skipped with a warning.
    pub input_sizes: Vec<usize>,
    /// Directory holding the `entrada_<size>.json` files.
    pub input_dir: PathBuf,
    /// Directory the chart files are written into (created if absent).
    pub chart_dir: PathBuf,
    /// Where the JSON report lands.
    pub report_path: PathBuf,
    /// Static machine descriptor for the report header.
    pub machine: MachineInfo,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_sizes: vec![10, 100, 1000, 5000, 10000, 50000, 100000],
            input_dir: PathBuf::from("jsons"),
            chart_dir: PathBuf::from("grafico_resultados"),
            report_path: PathBuf::from("relatorio_resultados.json"),
            machine: MachineInfo::default(),
        }
    }
}

/// Wall-clock samples for every processed input size.
#[derive(Clone, Debug)]
pub struct TimingRuns {
    /// Measured length of each input that was actually found, in run order.
    pub sizes: Vec<usize>,
    /// Parallel to [`Algorithm::ALL`]: `samples[i][j]` is the timing of
    /// algorithm `i` on the input of `sizes[j]` elements.
    pub samples: Vec<Vec<TimingSample>>,
}

/// Load and time every configured size. A missing input file is the one
/// recoverable condition: it gets a warning on stderr and is dropped from
/// both the size axis and every algorithm's samples, so the two stay
/// index-aligned. Anything else propagates.
pub fn collect_timings(config: &RunConfig) -> io::Result<TimingRuns> {
    let mut sizes = Vec::new();
    let mut samples = vec![Vec::new(); Algorithm::ALL.len()];

    for &size in &config.input_sizes {
        let path = dataset::input_path(&config.input_dir, size);
        if !path.exists() {
            eprintln!("⚠ Arquivo {} não encontrado!", path.display());
            continue;
        }

        let data = dataset::load_input(&path)?;
        sizes.push(data.len());
        for (slot, algorithm) in samples.iter_mut().zip(Algorithm::ALL) {
            slot.push(harness::measure(algorithm, &data));
        }
    }

    Ok(TimingRuns { sizes, samples })
}

fn render_charts(config: &RunConfig, runs: &TimingRuns) -> io::Result<ChartPaths> {
    fs::create_dir_all(&config.chart_dir)?;

    let xs: Vec<f64> = runs.sizes.iter().map(|&s| s as f64).collect();
    let points_for = |samples: &[TimingSample]| -> Vec<(f64, f64)> {
        xs.iter()
            .copied()
            .zip(samples.iter().map(TimingSample::as_millis))
            .collect()
    };

    let mut individual = Vec::new();
    for (algorithm, samples) in Algorithm::ALL.into_iter().zip(&runs.samples) {
        let mut chart = LineChart::new(
            format!("{} - Tempo x Tamanho", algorithm.display_name()),
            X_LABEL,
            Y_LABEL,
        );
        chart.push_series(algorithm.display_name(), points_for(samples));
        let path = config.chart_dir.join(algorithm.chart_file_name());
        chart.write_svg(&path)?;
        individual.push(path.display().to_string());
    }

    let mut comparative = LineChart::new("Comparativo de Algoritmos de Ordenação", X_LABEL, Y_LABEL);
    for (algorithm, samples) in Algorithm::ALL.into_iter().zip(&runs.samples) {
        comparative.push_series(algorithm.display_name(), points_for(samples));
    }
    let comparative_path = config.chart_dir.join(COMPARATIVE_CHART);
    comparative.write_svg(&comparative_path)?;

    Ok(ChartPaths {
        individual,
        comparative: comparative_path.display().to_string(),
    })
}

/// Run the whole pipeline: measure, chart, assemble the report, and write it
/// pretty-printed to the configured path. Returns the assembled report.
pub fn run(config: &RunConfig) -> io::Result<Report> {
    let runs = collect_timings(config)?;
    let charts = render_charts(config, &runs)?;

    let results: BTreeMap<String, Vec<TimingSample>> = Algorithm::ALL
        .into_iter()
        .zip(runs.samples)
        .map(|(algorithm, samples)| (algorithm.display_name().to_string(), samples))
        .collect();
    let complexities: BTreeMap<String, Complexity> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| (algorithm.display_name().to_string(), algorithm.complexity()))
        .collect();

    let report = Report {
        machine: config.machine.clone(),
        results,
        complexities,
        charts,
        references: REFERENCES.iter().map(|s| s.to_string()).collect(),
    };

    let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    fs::write(&config.report_path, json)?;

    Ok(report)
}

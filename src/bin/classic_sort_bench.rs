use classic_sort_bench::pipeline::{self, RunConfig};
use std::io;

fn main() -> io::Result<()> {
    let config = RunConfig::default();
    pipeline::run(&config)?;
    println!("Relatório gerado: {}", config.report_path.display());
    Ok(())
}

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Unit a measured duration is reported in. On the wire: `"s"` / `"ms"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "ms")]
    Milliseconds,
}

/// One measured duration for one (algorithm, input size) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "unidade")]
    pub unit: TimeUnit,
}

impl TimingSample {
    /// Normalize an elapsed duration: a second or more stays in seconds,
    /// anything shorter is reported in milliseconds.
    pub fn from_duration(elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        if secs >= 1.0 {
            Self {
                value: secs,
                unit: TimeUnit::Seconds,
            }
        } else {
            Self {
                value: secs * 1000.0,
                unit: TimeUnit::Milliseconds,
            }
        }
    }

    /// The sample in milliseconds regardless of stored unit (chart y-axis).
    pub fn as_millis(&self) -> f64 {
        match self.unit {
            TimeUnit::Seconds => self.value * 1000.0,
            TimeUnit::Milliseconds => self.value,
        }
    }
}

/// Static machine descriptor written under `"maquina"`; never measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineInfo {
    #[serde(rename = "processador")]
    pub processor: String,
    #[serde(rename = "memoria_gb")]
    pub memory_gb: String,
    #[serde(rename = "sistema_operacional")]
    pub operating_system: String,
}

impl Default for MachineInfo {
    fn default() -> Self {
        Self {
            processor: "AMD Ryzen™ 5 3500U".to_string(),
            memory_gb: "12,0 GB".to_string(),
            operating_system: "Ubuntu 24.04.3 LTS".to_string(),
        }
    }
}

/// Big-O classification of one algorithm, best/average/worst case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    #[serde(rename = "melhor")]
    pub best: String,
    #[serde(rename = "medio")]
    pub average: String,
    #[serde(rename = "pior")]
    pub worst: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPaths {
    #[serde(rename = "individuais")]
    pub individual: Vec<String>,
    #[serde(rename = "comparativo")]
    pub comparative: String,
}

/// The full report document written at the end of a run.
///
/// `results` maps each algorithm's display name to its samples, one per
/// processed input size and index-aligned with the size axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "maquina")]
    pub machine: MachineInfo,
    #[serde(rename = "resultados")]
    pub results: BTreeMap<String, Vec<TimingSample>>,
    #[serde(rename = "complexidades")]
    pub complexities: BTreeMap<String, Complexity>,
    #[serde(rename = "graficos")]
    pub charts: ChartPaths,
    #[serde(rename = "referencias")]
    pub references: Vec<String>,
}

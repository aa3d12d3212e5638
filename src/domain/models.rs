use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub workflow: WorkflowConfig,
    pub tools: ToolVersions,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct WorkflowConfig {
    pub venv_dir: String,
    pub reports_dir: String,
    pub generated_tests_dir: String,
    pub tests_dir: String,
    pub module_namespace: String,
    pub search_time_secs: u64,
    pub algorithm: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            venv_dir: "lab5_venv".to_string(),
            reports_dir: "lab5_reports".to_string(),
            generated_tests_dir: "generated_tests".to_string(),
            tests_dir: "tests".to_string(),
            module_namespace: "algorithms".to_string(),
            search_time_secs: 300,
            algorithm: "DYNAMOSA".to_string(),
        }
    }
}

/// Pinned versions installed into the virtualenv.
/// Changing one changes what every subsequent run measures with.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ToolVersions {
    pub pytest: String,
    pub coverage: String,
    pub pynguin: String,
}

impl Default for ToolVersions {
    fn default() -> Self {
        Self {
            pytest: "7.4.4".to_string(),
            coverage: "7.4.4".to_string(),
            pynguin: "0.30.0".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct StepReport {
    pub step: String,
    pub status: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct CoverageSummary {
    pub percent_covered: f64,
    pub covered_lines: u64,
    pub num_statements: u64,
}

#[derive(Serialize)]
pub struct RunReport {
    pub project: String,
    pub module: Option<String>,
    pub generation_ran: bool,
    pub steps: Vec<StepReport>,
    pub baseline: Option<CoverageSummary>,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}

#[derive(Serialize)]
pub struct CleanReport {
    pub removed: Vec<String>,
}

//! Run configuration: defaults, optional YAML file, then command-line flags.

use std::path::Path;

use clap::Args;
use ep_model::{ModelKind, ModelParams};
use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// Everything needed for one simulation run.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub model: ModelKind,
    #[serde(flatten)]
    pub params: ModelParams,
    pub cycles: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            params: ModelParams::default(),
            cycles: 100,
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Keys missing from the document keep their defaults.
    pub fn from_yaml(content: &str) -> CliResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Flags that override the file / default configuration when given.
#[derive(Args, Clone, Debug, Default)]
pub struct Overrides {
    /// Model parameter alpha (infection rate)
    #[arg(long)]
    pub alpha: Option<f64>,
    /// Model parameter beta (recovery rate)
    #[arg(long)]
    pub beta: Option<f64>,
    /// Model parameter rho (re-susceptibility rate)
    #[arg(long)]
    pub rho: Option<f64>,
    /// Model parameter delta (death rate)
    #[arg(long)]
    pub delta: Option<f64>,
    /// Initial infected fraction
    #[arg(long)]
    pub i0: Option<f64>,
    /// Simulation cycle count
    #[arg(long)]
    pub cycles: Option<usize>,
    /// Re-susceptibility latency in cycles
    #[arg(long)]
    pub tau: Option<usize>,
    /// Model variant (sir or sirx)
    #[arg(long)]
    pub model: Option<ModelKind>,
}

impl Overrides {
    pub fn apply(&self, config: &mut RunConfig) {
        let params = &mut config.params;
        if let Some(v) = self.alpha {
            params.alpha = v;
        }
        if let Some(v) = self.beta {
            params.beta = v;
        }
        if let Some(v) = self.rho {
            params.rho = v;
        }
        if let Some(v) = self.delta {
            params.delta = v;
        }
        if let Some(v) = self.i0 {
            params.i0 = v;
        }
        if let Some(v) = self.tau {
            params.tau = v;
        }
        if let Some(v) = self.cycles {
            config.cycles = v;
        }
        if let Some(v) = self.model {
            config.model = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(RunConfig::from_yaml("").unwrap(), RunConfig::default());
        let config = RunConfig::default();
        assert_eq!(config.cycles, 100);
        assert_eq!(config.model, ModelKind::Sirx);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = RunConfig::from_yaml("model: sir\nalpha: 0.4\ncycles: 20\n").unwrap();
        assert_eq!(config.model, ModelKind::Sir);
        assert_eq!(config.params.alpha, 0.4);
        assert_eq!(config.params.beta, 0.1);
        assert_eq!(config.params.tau, 5);
        assert_eq!(config.cycles, 20);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = RunConfig::from_yaml("alpha: [not, a, number]").unwrap_err();
        assert!(matches!(err, CliError::Yaml(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RunConfig::load(Path::new("does/not/exist.yaml")).unwrap_err();
        match err {
            CliError::ConfigRead { path, .. } => assert!(path.ends_with("exist.yaml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn flags_override_file_values() {
        let mut config = RunConfig::from_yaml("alpha: 0.4\ntau: 2\n").unwrap();
        let overrides = Overrides {
            alpha: Some(0.3),
            cycles: Some(7),
            model: Some(ModelKind::Sir),
            ..Overrides::default()
        };
        overrides.apply(&mut config);

        assert_eq!(config.params.alpha, 0.3);
        assert_eq!(config.params.tau, 2);
        assert_eq!(config.cycles, 7);
        assert_eq!(config.model, ModelKind::Sir);
    }
}

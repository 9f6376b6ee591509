use rubik::scramble::DEFAULT_LENGTH;
use rubik::{CommandSolver, LabelScheme};
use std::time::Duration;
use std::{env, path::PathBuf};

/// Configuration for the rubik server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address and port the server binds to (e.g. `127.0.0.1:5000`).
    pub bind_address: String,
    /// External solver invocation.
    pub solver: SolverConfig,
    /// Moves per scramble served by `/api/scramble`.
    pub scramble_length: usize,
}

impl ServerConfig {
    /// Builds a configuration from `RUBIK_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a caller-supplied variable
    /// source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_address = lookup("RUBIK_BIND").unwrap_or_else(|| "127.0.0.1:5000".into());
        let solver = SolverConfig::from_lookup(&lookup)?;

        let scramble_length = match lookup("RUBIK_SCRAMBLE_LENGTH") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid RUBIK_SCRAMBLE_LENGTH {v:?}: {e}"))?,
            None => DEFAULT_LENGTH,
        };
        anyhow::ensure!(scramble_length >= 1, "scramble length must be >= 1");

        Ok(Self {
            bind_address,
            solver,
            scramble_length,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".into(),
            solver: SolverConfig::default(),
            scramble_length: DEFAULT_LENGTH,
        }
    }
}

/// How the external solver is run and how cubes are labelled for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub labels: LabelScheme,
    /// Per-solve limit; `None` waits as long as the program runs.
    pub timeout: Option<Duration>,
}

impl SolverConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let program = lookup("RUBIK_SOLVER")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CommandSolver::DEFAULT_PROGRAM));
        let args = lookup("RUBIK_SOLVER_ARGS")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        let labels = match lookup("RUBIK_LABELS") {
            Some(v) => v
                .parse()
                .map_err(|e: String| anyhow::anyhow!("invalid RUBIK_LABELS: {e}"))?,
            None => LabelScheme::default(),
        };
        // 0 disables the limit.
        let timeout = match lookup("RUBIK_SOLVER_TIMEOUT_SECS") {
            Some(v) => {
                let secs: u64 = v.trim().parse().map_err(|e| {
                    anyhow::anyhow!("invalid RUBIK_SOLVER_TIMEOUT_SECS {v:?}: {e}")
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => Some(CommandSolver::DEFAULT_TIMEOUT),
        };

        Ok(Self {
            program,
            args,
            labels,
            timeout,
        })
    }

    pub fn command(&self) -> CommandSolver {
        CommandSolver::new(&self.program)
            .with_args(self.args.iter().cloned())
            .with_timeout(self.timeout)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(CommandSolver::DEFAULT_PROGRAM),
            args: Vec::new(),
            labels: LabelScheme::default(),
            timeout: Some(CommandSolver::DEFAULT_TIMEOUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address, "127.0.0.1:5000");
        assert_eq!(config.solver.program, PathBuf::from("kociemba"));
        assert_eq!(config.solver.labels, LabelScheme::Center);
        assert_eq!(config.scramble_length, 25);
        assert_eq!(config.solver.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("RUBIK_BIND", "0.0.0.0:8080"),
            ("RUBIK_SOLVER", "/opt/bin/solve"),
            ("RUBIK_SOLVER_ARGS", "-m  kociemba"),
            ("RUBIK_LABELS", "fixed"),
            ("RUBIK_SCRAMBLE_LENGTH", "12"),
            ("RUBIK_SOLVER_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.solver.args, ["-m", "kociemba"]);
        assert_eq!(config.solver.labels, LabelScheme::Fixed);
        assert_eq!(config.scramble_length, 12);

        let command = config.solver.command();
        assert_eq!(command.program(), std::path::Path::new("/opt/bin/solve"));
        assert_eq!(command.args(), ["-m", "kociemba"]);
        assert_eq!(command.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_timeout_disables_limit() {
        let config = config(&[("RUBIK_SOLVER_TIMEOUT_SECS", "0")]).unwrap();
        assert_eq!(config.solver.timeout, None);
        assert_eq!(config.solver.command().timeout(), None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config(&[("RUBIK_SCRAMBLE_LENGTH", "0")]).is_err());
        assert!(config(&[("RUBIK_SCRAMBLE_LENGTH", "many")]).is_err());
        assert!(config(&[("RUBIK_LABELS", "sideways")]).is_err());
        assert!(config(&[("RUBIK_SOLVER_TIMEOUT_SECS", "soon")]).is_err());
    }
}

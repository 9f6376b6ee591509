use super::SolveAlgorithm;
use crate::encode::FaceletString;
use crate::error::AlgorithmError;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs an external solver program once per cube
///
/// The program is called as `<program> <args...> <facelets>` and must print
/// the move sequence on stdout. A non-zero exit status, or output starting
/// with `Error`, means the cube was rejected. The default program is the
/// `kociemba` command installed by the Python package of the same name.
///
/// A program still running when the timeout elapses is killed and reported
/// as unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSolver {
    program: PathBuf,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl CommandSolver {
    pub const DEFAULT_PROGRAM: &'static str = "kociemba";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandSolver {
            program: program.into(),
            args: Vec::new(),
            timeout: Some(Self::DEFAULT_TIMEOUT),
        }
    }

    /// Arguments placed before the facelet string (builder pattern)
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Time limit per solve; `None` waits indefinitely
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn unavailable(&self, what: impl std::fmt::Display) -> AlgorithmError {
        AlgorithmError::Unavailable(format!("{} {what}", self.program.display()))
    }

    /// Wait for the child, killing it once the deadline passes
    fn wait(&self, child: &mut Child) -> Result<ExitStatus, AlgorithmError> {
        let Some(timeout) = self.timeout else {
            return child
                .wait()
                .map_err(|e| self.unavailable(format_args!("could not be waited on: {e}")));
        };

        let deadline = Instant::now() + timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if Instant::now() >= deadline => {
                    // kill fails if the child exited meanwhile; wait reaps it either way.
                    let _ = child.kill();
                    let _ = child.wait();
                    tracing::warn!(program = %self.program.display(), ?timeout, "solver timed out");
                    return Err(self.unavailable(format_args!(
                        "did not finish within {timeout:?}"
                    )));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    return Err(self.unavailable(format_args!("could not be waited on: {e}")))
                }
            }
        }
    }
}

/// Read a child pipe to the end on its own thread
fn drain(pipe: Option<impl Read + Send + 'static>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

fn collect(reader: JoinHandle<Vec<u8>>) -> String {
    let bytes = reader.join().unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

impl Default for CommandSolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl SolveAlgorithm for CommandSolver {
    fn solve(&self, facelets: &FaceletString) -> Result<String, AlgorithmError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(facelets.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                AlgorithmError::Unavailable(format!(
                    "failed to run {}: {e}",
                    self.program.display()
                ))
            })?;
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        // Readers of a killed program are left to finish on their own.
        let status = self.wait(&mut child)?;
        let stdout = collect(stdout).trim().to_string();
        if !status.success() {
            let stderr = collect(stderr);
            // Python tracebacks end with the exception message.
            let reason = stderr
                .lines()
                .rev()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("solver exited with {status}"));
            return Err(AlgorithmError::Rejected(reason));
        }
        if stdout.starts_with("Error") {
            return Err(AlgorithmError::Rejected(stdout));
        }
        Ok(stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> CommandSolver {
        CommandSolver::new("sh").with_args(["-c", script, "solver"])
    }

    #[test]
    fn test_reads_stdout() {
        let solver = shell("echo \"R U2 F'\"");
        assert_eq!(
            solver.solve(&FaceletString::solved()),
            Ok("R U2 F'".to_string())
        );
    }

    #[test]
    fn test_passes_facelets_as_last_argument() {
        let solver = shell("printf '%s' \"$1\"");
        let facelets = FaceletString::solved();
        assert_eq!(solver.solve(&facelets), Ok(facelets.to_string()));
    }

    #[test]
    fn test_non_zero_exit_is_rejection() {
        let solver = shell("echo 'Traceback' >&2; echo 'ValueError: Error. Probably cubestring is invalid' >&2; exit 1");
        assert_eq!(
            solver.solve(&FaceletString::solved()),
            Err(AlgorithmError::Rejected(
                "ValueError: Error. Probably cubestring is invalid".to_string()
            ))
        );
    }

    #[test]
    fn test_error_output_is_rejection() {
        let solver = shell("echo 'Error 8'");
        assert_eq!(
            solver.solve(&FaceletString::solved()),
            Err(AlgorithmError::Rejected("Error 8".to_string()))
        );
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let solver = CommandSolver::new("/nonexistent/kociemba-solver");
        assert!(matches!(
            solver.solve(&FaceletString::solved()),
            Err(AlgorithmError::Unavailable(_))
        ));
    }

    #[test]
    fn test_default_program() {
        let solver = CommandSolver::default();
        assert_eq!(solver.program(), Path::new("kociemba"));
        assert!(solver.args().is_empty());
        assert_eq!(solver.timeout(), Some(CommandSolver::DEFAULT_TIMEOUT));
    }

    #[test]
    fn test_hung_program_times_out() {
        let solver = shell("exec sleep 5").with_timeout(Some(Duration::from_millis(100)));
        let started = Instant::now();
        let result = solver.solve(&FaceletString::solved());
        assert!(started.elapsed() < Duration::from_secs(4));
        match result {
            Err(AlgorithmError::Unavailable(reason)) => {
                assert!(reason.contains("did not finish"), "{reason}")
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_without_timeout_waits_for_exit() {
        let solver = shell("sleep 0.2; echo R").with_timeout(None);
        assert_eq!(solver.solve(&FaceletString::solved()), Ok("R".to_string()));
    }
}

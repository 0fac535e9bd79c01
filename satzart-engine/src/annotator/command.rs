//! Annotation through an external program
//!
//! The program receives raw text on stdin and must write CoNLL-U to stdout.
//! Typical wrappers are a small spaCy script or `udpipe --tokenize --tag
//! --parse <model>`.

use super::conllu::parse_conllu;
use super::Annotator;
use crate::document::{align_offsets, AnnotatedDocument};
use crate::error::AnnotatorError;
use std::env;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// Placeholder in program arguments replaced by the model path
pub const MODEL_PLACEHOLDER: &str = "{model}";

const DEFAULT_INSTALL_HINT: &str =
    "install an annotator that reads text on stdin and writes CoNLL-U to stdout";

/// External annotator settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandConfig {
    /// Program name or path
    pub program: String,
    /// Arguments; `{model}` is replaced by the model path
    pub args: Vec<String>,
    /// Model file or directory the program needs
    pub model: Option<PathBuf>,
    /// Shown when the program or model is missing
    pub install_hint: Option<String>,
}

impl CommandConfig {
    /// Settings for a program without arguments or model
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the model path
    pub fn model(mut self, model: impl Into<PathBuf>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the installation hint
    pub fn install_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    fn hint(&self) -> String {
        self.install_hint
            .clone()
            .unwrap_or_else(|| DEFAULT_INSTALL_HINT.to_string())
    }
}

/// Annotator running an external program per request
#[derive(Debug, Clone)]
pub struct CommandAnnotator {
    program: PathBuf,
    args: Vec<String>,
    name: String,
}

impl CommandAnnotator {
    /// Resolve the program and check the model.
    ///
    /// Fails when the program cannot be found on disk or in `PATH`, or when a
    /// configured model path does not exist.
    pub fn new(config: CommandConfig) -> Result<Self, AnnotatorError> {
        let program =
            resolve_program(&config.program).ok_or_else(|| AnnotatorError::ProgramNotFound {
                program: config.program.clone(),
                hint: config.hint(),
            })?;

        let model = match &config.model {
            Some(model) if !model.exists() => {
                return Err(AnnotatorError::ModelUnavailable {
                    path: model.clone(),
                    hint: config.hint(),
                });
            }
            Some(model) => Some(model.display().to_string()),
            None => None,
        };

        let args = config
            .args
            .iter()
            .map(|arg| match &model {
                Some(model) => arg.replace(MODEL_PLACEHOLDER, model),
                None => arg.clone(),
            })
            .collect();

        log::info!("using annotator program {}", program.display());
        Ok(Self {
            name: config.program,
            program,
            args,
        })
    }

    /// Resolved program path
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments after model substitution
    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn run(&self, text: &str) -> Result<String, AnnotatorError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // stdout is drained while stdin is still being written
        let writer = child.stdin.take().map(|mut stdin| {
            let input = text.as_bytes().to_vec();
            thread::spawn(move || stdin.write_all(&input))
        });

        let output = child.wait_with_output()?;

        if let Some(writer) = writer {
            let written = writer
                .join()
                .map_err(|_| io::Error::other("annotator input writer panicked"))?;
            // A program may exit before consuming all input; its exit status
            // decides success
            match written {
                Err(e) if e.kind() != ErrorKind::BrokenPipe && output.status.success() => {
                    return Err(e.into())
                }
                _ => {}
            }
        }

        if !output.status.success() {
            return Err(AnnotatorError::ProcessFailed {
                program: self.name.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

impl Annotator for CommandAnnotator {
    fn name(&self) -> &str {
        &self.name
    }

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, AnnotatorError> {
        let conllu = self.run(text)?;
        let sentences = parse_conllu(&conllu)?;
        log::debug!("{} produced {} sentences", self.name, sentences.len());
        Ok(AnnotatedDocument::new(text, align_offsets(text, sentences)))
    }
}

/// Resolve a program given as a path or looked up in `PATH`
fn resolve_program(program: &str) -> Option<PathBuf> {
    if program.trim().is_empty() {
        return None;
    }

    let path = Path::new(program);
    if path.components().count() > 1 || path.is_absolute() {
        return path.is_file().then(|| path.to_path_buf());
    }

    let search = env::var_os("PATH")?;
    env::split_paths(&search)
        .flat_map(|dir| executable_candidates(&dir, program))
        .find(|candidate| candidate.is_file())
}

fn executable_candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    let mut candidates = vec![dir.join(program)];
    if cfg!(windows) && Path::new(program).extension().is_none() {
        candidates.push(dir.join(format!("{program}.exe")));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program() {
        let config = CommandConfig::new("satzart-no-such-annotator").install_hint("pip install it");
        match CommandAnnotator::new(config) {
            Err(AnnotatorError::ProgramNotFound { program, hint }) => {
                assert_eq!(program, "satzart-no-such-annotator");
                assert_eq!(hint, "pip install it");
            }
            other => panic!("expected ProgramNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_program_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let program = dir.path().join("annotate.sh");
        let config = CommandConfig::new(program.display().to_string());
        assert!(matches!(
            CommandAnnotator::new(config),
            Err(AnnotatorError::ProgramNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_model() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = CommandConfig::new("sh").model(dir.path().join("de.udpipe"));
        match CommandAnnotator::new(config) {
            Err(AnnotatorError::ModelUnavailable { path, hint }) => {
                assert!(path.ends_with("de.udpipe"));
                assert_eq!(hint, DEFAULT_INSTALL_HINT);
            }
            other => panic!("expected ModelUnavailable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_model_placeholder_substituted() {
        let dir = tempfile::TempDir::new().unwrap();
        let model = dir.path().join("model.bin");
        std::fs::write(&model, b"").unwrap();

        let annotator = CommandAnnotator::new(
            CommandConfig::new("sh")
                .arg("--model={model}")
                .model(&model),
        )
        .unwrap();
        assert_eq!(
            annotator.args(),
            &[format!("--model={}", model.display())]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_run_program() {
        let script = "cat > /dev/null; printf '1\\tJa\\tja\\tINTJ\\tITJ\\t_\\t0\\troot\\t_\\t_\\n'";
        let annotator =
            CommandAnnotator::new(CommandConfig::new("sh").arg("-c").arg(script)).unwrap();
        let document = annotator.annotate("  Ja").unwrap();
        assert_eq!(document.len(), 1);
        assert_eq!(document.sentences()[0].start(), 2);
        assert_eq!(annotator.name(), "sh");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program() {
        let annotator = CommandAnnotator::new(
            CommandConfig::new("sh")
                .arg("-c")
                .arg("echo model missing >&2; exit 3"),
        )
        .unwrap();
        match annotator.annotate("Hallo.") {
            Err(AnnotatorError::ProcessFailed { stderr, .. }) => {
                assert_eq!(stderr, "model missing")
            }
            other => panic!("expected ProcessFailed, got {other:?}"),
        }
    }
}

use std::ffi::OsString;
use std::io::{self, ErrorKind, Write};
use std::process::{ChildStdin, Command, Stdio};
use std::thread;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{AppError, BuildRequest};
use crate::ports::BuildExecutor;

/// Runs an external program as the build executor.
///
/// The request is written to the child's stdin as one JSON document and the
/// child's stdout is parsed as the JSON result. Stderr is inherited.
#[derive(Debug, Clone)]
pub struct CommandBuildExecutor {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandBuildExecutor {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn error(&self, details: impl Into<String>) -> AppError {
        AppError::Executor { command: self.command_line(), details: details.into() }
    }
}

impl BuildExecutor for CommandBuildExecutor {
    fn execute(&self, request: &BuildRequest) -> Result<Value, AppError> {
        let payload = serde_json::to_vec(request).map_err(|e| self.error(e.to_string()))?;

        info!(command = %self.command_line(), "Spawning build executor");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| self.error(e.to_string()))?;

        // The request is written while stdout is drained, so a child that
        // streams output before reading all of its input cannot stall the pipe.
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || write_request(stdin, &payload));
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output = output.map_err(|e| self.error(e.to_string()))?;
        match written {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(self.error(e.to_string())),
            Err(_) => return Err(self.error("request writer thread panicked")),
        }
        debug!(status = %output.status, bytes = output.stdout.len(), "Build executor exited");

        if !output.status.success() {
            return Err(self.error(format!("exited with {}", output.status)));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| self.error(format!("stdout is not valid JSON: {}", e)))
    }
}

/// Write the request and close stdin so the child sees EOF.
///
/// A child that exits without reading its input is not a failure by itself.
fn write_request(stdin: Option<ChildStdin>, payload: &[u8]) -> io::Result<()> {
    let Some(mut stdin) = stdin else {
        return Ok(());
    };
    match stdin.write_all(payload) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("Build executor closed stdin before reading the request");
            Ok(())
        }
        result => result,
    }
}

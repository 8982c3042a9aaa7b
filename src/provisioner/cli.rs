//! Provisioning tool command execution.

use colored::Colorize;
use std::process::Command;

/// Largest stdout accepted from the provisioning tool.
pub const MAX_OUTPUT_BYTES: usize = 5_000_000;

/// Run a command and return its stdout.
///
/// The command string is split with POSIX shell quoting rules, but no shell
/// is involved: no globbing, variables or pipes.
///
/// # Returns
/// * `Ok(String)` - stdout on success
/// * `Err(String)` - the command has unbalanced quotes, could not start,
///   exited non-zero, printed too much or printed invalid UTF-8
pub fn run(cmd: &str) -> Result<String, String> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<String> = split_command(cmd)?;
    log::trace!("split cmds={:?}", cmds);

    let program = match cmds.first() {
        Some(program) if !program.is_empty() => program,
        _ => return Err("empty command".to_string()),
    };
    let output = Command::new(program)
        .args(cmds.iter().skip(1))
        .output()
        .map_err(|e| {
            log::error!("Command execution failed: {}", e);
            format!("Failed to execute command: {}", e)
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("exit {}: {}", output.status, stderr.trim()));
    }

    log::debug!("Success cmd: {cmd} stdout.len()={}", output.stdout.len());
    if output.stdout.len() > MAX_OUTPUT_BYTES {
        return Err(format!(
            "Response too large: {} bytes for command: {:?}",
            output.stdout.len(),
            cmds
        ));
    }

    String::from_utf8(output.stdout).map_err(|e| format!("Invalid UTF-8: {}", e))
}

/// Split a command string into program and arguments, honouring quotes.
fn split_command(input: &str) -> Result<Vec<String>, String> {
    shell_words::split(input).map_err(|e| format!("Invalid command '{input}': {e}"))
}

//! Thin wrappers over the OS process tools (`ps`/`kill`, or
//! `tasklist`/`taskkill` on Windows).

use std::io;
use std::process::{Command, Output};

fn process_table_command() -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("tasklist");
        cmd.args(["/FO", "CSV"]);
        cmd
    } else {
        let mut cmd = Command::new("ps");
        cmd.args(["-Ao", "pid,comm"]);
        cmd
    }
}

fn kill_command(pid: u32) -> Command {
    let pid = pid.to_string();
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("taskkill");
        cmd.args(["/PID", pid.as_str(), "/T"]);
        cmd
    } else {
        let mut cmd = Command::new("kill");
        cmd.arg(pid);
        cmd
    }
}

/// Raw process table as printed by the OS tool.
pub fn capture_process_table() -> io::Result<String> {
    let output = process_table_command().output()?;
    check_status(&output)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

pub fn kill(pid: u32) -> io::Result<()> {
    let output = kill_command(pid).output()?;
    check_status(&output)
}

fn check_status(output: &Output) -> io::Result<()> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(io::Error::other(format!(
        "{}: {}",
        output.status,
        stderr.trim()
    )))
}

/// First `limit` non-blank lines of the table (header included).
pub fn top_lines(table: &str, limit: usize) -> Vec<&str> {
    table
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(limit)
        .collect()
}

/// Lines containing `keyword`, ignoring case.
pub fn search_lines<'a>(table: &'a str, keyword: &str) -> Vec<&'a str> {
    let needle = keyword.to_lowercase();
    table
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| line.to_lowercase().contains(&needle))
        .collect()
}

/// A PID must be a positive integer; `0` and negatives address process
/// groups on Unix and are refused.
pub fn parse_pid(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|pid| *pid > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "  PID COMMAND\n    1 init\n\n  42 bash\n  43 Bash-helper\n  99 sshd\n";

    #[test]
    fn top_lines_skip_blanks_and_respect_limit() {
        assert_eq!(top_lines(TABLE, 3), vec!["  PID COMMAND", "    1 init", "  42 bash"]);
        assert_eq!(top_lines(TABLE, 100).len(), 5);
    }

    #[test]
    fn search_is_case_insensitive() {
        assert_eq!(
            search_lines(TABLE, "BASH"),
            vec!["  42 bash", "  43 Bash-helper"]
        );
        assert!(search_lines(TABLE, "nginx").is_empty());
    }

    #[test]
    fn pids_must_be_positive_integers() {
        assert_eq!(parse_pid(" 1234 "), Some(1234));
        assert_eq!(parse_pid("0"), None);
        assert_eq!(parse_pid("-1"), None);
        assert_eq!(parse_pid("abc"), None);
    }
}

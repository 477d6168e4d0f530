use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use log::debug;
use owo_colors::OwoColorize;

use lexis_analyzer::{analyze, Analysis};

use crate::render::{render_diagnostic, render_summary, render_tokens};
use crate::write_log;

const SOURCE_NAME: &str = "<session>";

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Commands:".bold())?;
    writeln!(out, "  {}         Show this help", ":help".yellow())?;
    writeln!(out, "  {}         Leave the session", ":quit".yellow())?;
    writeln!(out, "  {}        Discard everything entered so far", ":reset".yellow())?;
    writeln!(out, "  {}       Show the tokens of the current program", ":tokens".yellow())?;
    writeln!(out, "  {} {}  Write a log report of the current program", ":log".yellow(), "<path>".dimmed())?;
    writeln!(out, "Any other line is appended to the program, which is analyzed again.")?;
    Ok(())
}

/// Interactive session: every entered line is appended to a buffer and the
/// whole buffer is analyzed again.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Lexis session. Type :help for help, :quit to exit.".bold().green())?;

    let mut buffer = String::new();
    let mut analysis = Analysis::default();
    let mut lines = input.lines();

    loop {
        write!(out, "{}", "lexis> ".cyan())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out, "\nGoodbye.")?;
            break;
        };
        let line = line?;
        let trimmed = line.trim();

        if let Some(command) = trimmed.strip_prefix(':') {
            let (name, arg) = match command.split_once(char::is_whitespace) {
                Some((name, arg)) => (name, arg.trim()),
                None => (command, ""),
            };
            match name {
                "quit" | "q" | "exit" => {
                    writeln!(out, "Goodbye.")?;
                    break;
                }
                "help" | "h" => print_help(out)?,
                "reset" => {
                    buffer.clear();
                    analysis = Analysis::default();
                    writeln!(out, "{}", "Program cleared.".yellow())?;
                }
                "tokens" => {
                    if analysis.tokens.is_empty() {
                        writeln!(out, "{}", "<no tokens>".dimmed())?;
                    } else {
                        write!(out, "{}", render_tokens(&analysis.tokens))?;
                    }
                }
                "log" if arg.is_empty() => writeln!(out, "{}", "usage: :log <path>".red())?,
                "log" => match write_log(&analysis, SOURCE_NAME, Path::new(arg)) {
                    Ok(path) => writeln!(out, "log written to {}", path.display())?,
                    Err(e) => writeln!(out, "{} {:#}", "error:".red().bold(), e)?,
                },
                _ => writeln!(out, "{}", "Unknown command. Type :help.".red())?,
            }
            continue;
        }

        buffer.push_str(&line);
        buffer.push('\n');
        analysis = analyze(&buffer);
        debug!("session buffer has {} lines", buffer.lines().count());

        for diag in &analysis.diagnostics {
            write!(out, "{}", render_diagnostic(&buffer, diag))?;
        }
        writeln!(out, "{}", render_summary(&analysis, SOURCE_NAME))?;
    }
    Ok(())
}

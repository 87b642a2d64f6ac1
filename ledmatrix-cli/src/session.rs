//! Line-oriented drawing session: reads one command per line and answers on
//! the output stream.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use ledmatrix::editor::Editor;
use ledmatrix::render::{self, PreviewStyle};
use thiserror::Error;
use tracing::info;

use crate::output::{self, DeviceSettings};

const HELP: &str = "\
commands:
  toggle R C   flip the pixel at row R, column C (alias: t)
  get R C      show the state of a pixel (alias: g)
  show         draw the grid
  export [FMT] print the bitmap (c, hex, json, ht16k33; default c)
  reset        turn every pixel off
  help         show this text
  quit         leave the session (alias: exit)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle { row: usize, col: usize },
    Get { row: usize, col: usize },
    Show,
    Export { format: String },
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{0}' needs a row and a column")]
    MissingCoordinates(String),

    #[error("'{0}' is not a valid index")]
    InvalidIndex(String),

    #[error("too many arguments for '{0}'")]
    TooManyArguments(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match name.as_str() {
            "toggle" | "t" => {
                let (row, col) = coordinates(&name, &args)?;
                Command::Toggle { row, col }
            }
            "get" | "g" => {
                let (row, col) = coordinates(&name, &args)?;
                Command::Get { row, col }
            }
            "export" => match args.as_slice() {
                [] => Command::Export {
                    format: "c".to_string(),
                },
                [format] => Command::Export {
                    format: format.to_ascii_lowercase(),
                },
                _ => return Err(CommandError::TooManyArguments(name)),
            },
            "show" => no_args(&name, &args, Command::Show)?,
            "reset" => no_args(&name, &args, Command::Reset)?,
            "help" | "?" => no_args(&name, &args, Command::Help)?,
            "quit" | "exit" => no_args(&name, &args, Command::Quit)?,
            _ => return Err(CommandError::Unknown(name)),
        };
        Ok(command)
    }
}

fn coordinates(name: &str, args: &[&str]) -> Result<(usize, usize), CommandError> {
    match args {
        [row, col] => Ok((index(row)?, index(col)?)),
        [] | [_] => Err(CommandError::MissingCoordinates(name.to_string())),
        _ => Err(CommandError::TooManyArguments(name.to_string())),
    }
}

fn index(word: &str) -> Result<usize, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidIndex(word.to_string()))
}

fn no_args(name: &str, args: &[&str], command: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::TooManyArguments(name.to_string()))
    }
}

/// Drive `editor` from `input` until `quit` or end of input.
///
/// Bad commands and out-of-range pixels are reported on `out` and the
/// session carries on; only I/O failures end it early.
pub fn run<R: BufRead, W: Write>(
    editor: &mut Editor,
    preview: &PreviewStyle,
    mut input: R,
    mut out: W,
    prompt: bool,
) -> Result<()> {
    info!("starting edit session");
    let mut buf = Vec::new();

    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            writeln!(out, "error: input is not valid UTF-8")?;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        match command {
            Command::Toggle { row, col } => match editor.on_pixel_activated(row, col) {
                Ok(_) => write!(out, "{}", render::preview(editor.grid(), preview))?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Get { row, col } => match editor.grid().get(row, col) {
                Ok(on) => writeln!(out, "({row}, {col}) is {}", if on { "on" } else { "off" })?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Show => write!(out, "{}", render::preview(editor.grid(), preview))?,
            Command::Export { format } if format == "c" => {
                write!(out, "{}", editor.on_export_requested())?
            }
            Command::Export { format } => {
                let device = DeviceSettings::default();
                match output::render(&editor.bitmap(), editor.style(), &format, &device) {
                    Ok(text) => write!(out, "{text}")?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::Reset => {
                editor.reset();
                writeln!(out, "cleared")?;
            }
            Command::Help => write!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }

    info!(lit = editor.grid().lit_count(), "edit session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Editor, String) {
        run_bytes(script.as_bytes())
    }

    fn run_bytes(script: &[u8]) -> (Editor, String) {
        let mut editor = Editor::default();
        let mut out = Vec::new();
        run(&mut editor, &PreviewStyle::default(), script, &mut out, false).unwrap();
        (editor, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!("t 1 2".parse::<Command>(), Ok(Command::Toggle { row: 1, col: 2 }));
        assert_eq!("TOGGLE 7 15".parse::<Command>(), Ok(Command::Toggle { row: 7, col: 15 }));
        assert_eq!("get 0 0".parse::<Command>(), Ok(Command::Get { row: 0, col: 0 }));
        assert_eq!(
            "export".parse::<Command>(),
            Ok(Command::Export {
                format: "c".to_string()
            })
        );
        assert_eq!(
            "export JSON".parse::<Command>(),
            Ok(Command::Export {
                format: "json".to_string()
            })
        );
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "draw 1 1".parse::<Command>(),
            Err(CommandError::Unknown("draw".to_string()))
        );
        assert_eq!(
            "toggle 3".parse::<Command>(),
            Err(CommandError::MissingCoordinates("toggle".to_string()))
        );
        assert_eq!(
            "toggle a 3".parse::<Command>(),
            Err(CommandError::InvalidIndex("a".to_string()))
        );
        assert_eq!(
            "toggle -1 3".parse::<Command>(),
            Err(CommandError::InvalidIndex("-1".to_string()))
        );
        assert_eq!(
            "show now".parse::<Command>(),
            Err(CommandError::TooManyArguments("show".to_string()))
        );
    }

    #[test]
    fn toggle_and_export() {
        let (editor, out) = run_script("toggle 0 0\ntoggle 0 15\nexport\nquit\n");
        assert_eq!(editor.grid().lit_count(), 2);
        assert!(out.contains("0 #..............#\n"));
        assert!(out.contains("    bitmap[] = {\n        0b1000000000000001,\n"));
    }

    #[test]
    fn out_of_range_is_reported_and_session_continues() {
        let (editor, out) = run_script("toggle 8 0\ntoggle 0 16\ntoggle 1 1\n");
        assert!(out.contains("error: pixel (8, 0) is outside the 8x16 grid"));
        assert!(out.contains("error: pixel (0, 16) is outside the 8x16 grid"));
        assert_eq!(editor.grid().get(1, 1), Ok(true));
        assert_eq!(editor.grid().lit_count(), 1);
    }

    #[test]
    fn get_reports_state() {
        let (_, out) = run_script("t 2 3\nget 2 3\nget 2 4\n");
        assert!(out.contains("(2, 3) is on\n"));
        assert!(out.contains("(2, 4) is off\n"));
    }

    #[test]
    fn quit_stops_reading() {
        let (editor, _) = run_script("quit\ntoggle 0 0\n");
        assert_eq!(editor.grid().lit_count(), 0);
    }

    #[test]
    fn reset_and_bad_lines() {
        let (editor, out) = run_script("t 4 4\n\nbogus\nreset\nexport hex\n");
        assert_eq!(editor.grid().lit_count(), 0);
        assert!(out.contains("error: unknown command 'bogus'"));
        assert!(out.contains("cleared\n"));
        assert!(out.contains("        0x0000,\n"));
    }

    #[test]
    fn export_unknown_format_is_reported() {
        let (_, out) = run_script("export svg\n");
        assert!(out.contains("error: unknown format 'svg'"));
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_session_continues() {
        let (editor, out) = run_bytes(b"toggle 0 0\n\xff\xfe\ntoggle 1 1\n");
        assert!(out.contains("error: input is not valid UTF-8\n"));
        assert_eq!(editor.grid().get(0, 0), Ok(true));
        assert_eq!(editor.grid().get(1, 1), Ok(true));
        assert_eq!(editor.grid().lit_count(), 2);
    }

    #[test]
    fn last_line_without_newline_runs() {
        let (editor, _) = run_script("toggle 2 2");
        assert_eq!(editor.grid().get(2, 2), Ok(true));
    }
}

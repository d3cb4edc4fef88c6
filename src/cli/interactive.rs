//! Line-oriented session: load and save commands read from a reader.
//!
//! Every failure is reported on the output and the session keeps going,
//! so a bad path or an unwritable file never loses the current text.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::session::Session;

const HELP: &str = "\
Commands:
  load <path>   Convert an image and show it
  save <path>   Write the current text to a file
  width <n>     Set the output width in characters
  show          Print the current text again
  help          Show this help
  quit          Leave the session
";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Load(PathBuf),
    Save(PathBuf),
    Width(u32),
    Show,
    Help,
    Quit,
    /// Blank line
    Empty,
}

impl SessionCommand {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Ok(SessionCommand::Empty),
            "load" | "open" => {
                if rest.is_empty() {
                    Err("Usage: load <path>".to_string())
                } else {
                    Ok(SessionCommand::Load(PathBuf::from(rest)))
                }
            }
            "save" => {
                if rest.is_empty() {
                    Err("Usage: save <path>".to_string())
                } else {
                    Ok(SessionCommand::Save(PathBuf::from(rest)))
                }
            }
            "width" => match rest.parse::<u32>() {
                Ok(n) if n >= 1 => Ok(SessionCommand::Width(n)),
                _ => Err(format!("Width must be a positive integer, got '{}'", rest)),
            },
            "show" => Ok(SessionCommand::Show),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help' for a list.", other)),
        }
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Interactive session state.
pub struct Interactive {
    session: Session,
    columns: u32,
}

impl Interactive {
    pub fn new(session: Session, columns: u32) -> Self {
        Self { session, columns }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Handle one input line, writing results and errors to `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match SessionCommand::parse(line) {
            Ok(c) => c,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            SessionCommand::Empty => {}
            SessionCommand::Load(path) => match self.session.load(&path, self.columns) {
                Ok(_) => out.write_all(self.session.text().as_bytes())?,
                Err(e) => writeln!(out, "Error loading image: {}", e)?,
            },
            SessionCommand::Save(path) => match self.session.save(&path) {
                Ok(()) => writeln!(out, "Saved to {}", path.display())?,
                Err(e) => writeln!(out, "Error saving file: {}", e)?,
            },
            SessionCommand::Width(n) => {
                self.columns = n;
                writeln!(out, "Width set to {} columns", n)?;
            }
            SessionCommand::Show => out.write_all(self.session.text().as_bytes())?,
            SessionCommand::Help => out.write_all(HELP.as_bytes())?,
            SessionCommand::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    /// Read commands until end of input or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let flow = self.handle_line(&line, out)?;
            out.flush()?;
            if flow == Flow::Stop {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            SessionCommand::parse("load  /tmp/my cat.png "),
            Ok(SessionCommand::Load(PathBuf::from("/tmp/my cat.png")))
        );
        assert_eq!(
            SessionCommand::parse("SAVE out.txt"),
            Ok(SessionCommand::Save(PathBuf::from("out.txt")))
        );
        assert_eq!(SessionCommand::parse("width 40"), Ok(SessionCommand::Width(40)));
        assert_eq!(SessionCommand::parse("   "), Ok(SessionCommand::Empty));
        assert_eq!(SessionCommand::parse("quit"), Ok(SessionCommand::Quit));
        assert_eq!(SessionCommand::parse("show"), Ok(SessionCommand::Show));
    }

    #[test]
    fn test_parse_errors() {
        assert!(SessionCommand::parse("load").is_err());
        assert!(SessionCommand::parse("save").is_err());
        assert!(SessionCommand::parse("width 0").is_err());
        assert!(SessionCommand::parse("width -3").is_err());
        assert!(SessionCommand::parse("dance").is_err());
    }

    #[test]
    fn test_bad_command_keeps_running() {
        let mut app = Interactive::new(Session::default(), 10);
        let mut out = Vec::new();
        let flow = app.handle_line("dance", &mut out).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(String::from_utf8(out).unwrap().contains("Unknown command"));
    }

    #[test]
    fn test_width_and_quit() {
        let mut app = Interactive::new(Session::default(), 10);
        let mut out = Vec::new();
        app.run("width 33\nquit\nwidth 5\n".as_bytes(), &mut out).unwrap();
        assert_eq!(app.columns(), 33);
    }
}

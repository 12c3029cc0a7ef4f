use std::{
    io::{BufRead, Write},
    path::Path,
};

use horn_prover::prover::Prover;

use crate::{
    misc::load_kb,
    render::{render, TraceStyle},
};

const HELP: &str = "Available commands:
* loadkb <filename>: Load a knowledge base in horn clause form
* ask <query>: Ask for a proof in horn clause form
* trace <query>: Same as 'ask' with a tree of the execution
* help: Display a list of commands
* exit";

/// Whether to keep reading commands.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A loop reading commands, with output written to `out` and errors written to `err`.
pub struct Repl<O: Write, E: Write> {
    pub prover: Prover,
    style: TraceStyle,
    out: O,
    err: E,
}

impl<O: Write, E: Write> Repl<O, E> {
    pub fn new(prover: Prover, style: TraceStyle, out: O, err: E) -> Self {
        Repl {
            prover,
            style,
            out,
            err,
        }
    }

    /// Reads and handles commands until the input ends or an exit is requested.
    pub fn run(&mut self, input: impl BufRead) -> std::io::Result<()> {
        self.prompt()?;
        for line in input.lines() {
            if self.handle(&line?)? == Flow::Exit {
                break;
            }
            self.prompt()?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    pub fn handle(&mut self, line: &str) -> std::io::Result<Flow> {
        let mut parts = line.split_whitespace();
        let command = parts.next();
        let argument = parts.next();

        match (command, argument) {
            (None, _) => {}

            (Some("loadkb"), Some(path)) => {
                let _ = self.load(Path::new(path))?;
            }

            (Some("ask"), Some(query)) => self.ask(query, false)?,

            (Some("trace"), Some(query)) => self.ask(query, true)?,

            (Some(command @ ("loadkb" | "ask" | "trace")), None) => {
                let argument = match command {
                    "loadkb" => "<filename>",
                    _ => "<query>",
                };
                writeln!(self.err, "Usage: {command} {argument}")?;
            }

            (Some("help"), _) => writeln!(self.out, "{HELP}")?,

            (Some("exit"), _) => return Ok(Flow::Exit),

            (Some(unknown), _) => writeln!(
                self.err,
                "Unknown command: '{unknown}'\nType 'help' to get a list of commands."
            )?,
        }

        Ok(Flow::Continue)
    }

    /// Loads a knowledge base, keeping the current knowledge base on failure.
    ///
    /// Returns whether the knowledge base was loaded.
    pub fn load(&mut self, path: &Path) -> std::io::Result<bool> {
        match load_kb(path) {
            Ok(kb) => {
                writeln!(self.out, "{kb}")?;
                self.prover.set_knowledge_base(kb);
                writeln!(self.out, "Knowledge base loaded successfully")?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.err, "{e}")?;
                Ok(false)
            }
        }
    }

    /// Answers a query, with a trace if requested.
    pub fn ask(&mut self, query: &str, trace: bool) -> std::io::Result<()> {
        match self.prover.ask(query, trace) {
            Ok(answer) => {
                if let Some(trace) = answer.trace {
                    write!(self.out, "{}", render(&trace, self.style))?;
                    if self.style.json {
                        writeln!(self.out)?;
                    }
                }
                writeln!(self.out, "{}", answer.result)
            }
            Err(e) => writeln!(self.err, "{e}"),
        }
    }
}

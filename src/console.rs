//! Line-oriented prompts and styled messages.
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so the
//! interactive flows run the same against a terminal or a test buffer. End of
//! input on any prompt is treated as the user cancelling.

use crossterm::style::{style, Stylize};
use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{FolderForgeError, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Writer the diagram lines go to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Free-text answer, trimmed. An empty answer is returned as `""`.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        self.read_answer(&format!("{}: ", question))
    }

    /// Yes/no question, repeated until the answer is one of y, yes, n, no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.read_answer(&format!("{} [y/n]: ", question))?;
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please enter Y or N")?,
            }
        }
    }

    /// One of `choices`, repeated until the answer matches exactly.
    pub fn choose(&mut self, question: &str, choices: &[&str]) -> Result<String> {
        let prompt = format!("{} [{}]: ", question, choices.join("/"));
        loop {
            let answer = self.read_answer(&prompt)?;
            if choices.contains(&answer.as_str()) {
                return Ok(answer);
            }
            self.say("Please select one of the available options")?;
        }
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn heading(&mut self, line: &str) -> Result<()> {
        if self.color {
            self.say(style(line).bold())
        } else {
            self.say(line)
        }
    }

    pub fn success(&mut self, line: &str) -> Result<()> {
        if self.color {
            self.say(style(line).bold().green())
        } else {
            self.say(line)
        }
    }

    pub fn notice(&mut self, line: &str) -> Result<()> {
        if self.color {
            self.say(style(line).bold().yellow())
        } else {
            self.say(line)
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the cursor off the prompt line for whatever is printed next
            writeln!(self.output)?;
            return Err(FolderForgeError::Cancelled);
        }

        Ok(line.trim().to_string())
    }
}

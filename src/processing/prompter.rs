use std::io::{self, BufRead, Write};

use log::debug;

/// Operator interaction of the add command.
pub trait Prompter {
    /// Shows `message` and returns the trimmed answer, empty when nothing could be read.
    fn prompt(&mut self, message: &str) -> String;
    fn print(&mut self, message: &str);
}

pub struct ConsolePrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl ConsolePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn prompt(&mut self, message: &str) -> String {
        if let Err(err) = write!(self.output, "{message}").and_then(|()| self.output.flush()) {
            debug!("cant write prompt: {err}");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => line.trim().to_string(),
            Err(err) => {
                debug!("cant read answer: {err}");
                String::new()
            }
        }
    }

    fn print(&mut self, message: &str) {
        if let Err(err) = writeln!(self.output, "{message}") {
            debug!("cant write message: {err}");
        }
    }
}

#[cfg(test)]
pub(crate) struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
    pub printed: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|answer| (*answer).to_string()).collect(),
            prompts: Vec::new(),
            printed: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> String {
        self.prompts.push(message.to_string());
        self.answers.pop_front().unwrap_or_default().trim().to_string()
    }

    fn print(&mut self, message: &str) {
        self.printed.push(message.to_string());
    }
}

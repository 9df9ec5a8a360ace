/*
 * Copyright (C) 2024 Clownvin <123clownvin@gmail.com>
 *
 * This file is part of Flashq.
 *
 * Flashq is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Flashq is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Flashq.  If not, see <http://www.gnu.org/licenses/>.
 */

use std::{
    fs,
    io::{BufRead, Write},
    path::PathBuf,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("End of input")]
    Eof,
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
}

///Line-at-a-time conversation with the user.
pub trait LineIo {
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError>;

    fn read_line(&mut self) -> Result<String, ConsoleError>;
}

pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> LineIo for StdConsole<R, W> {
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Eof);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

///Wraps another [`LineIo`] and remembers every line that passes through it,
///in both directions.
pub struct Transcript<C> {
    inner: C,
    lines: Vec<String>,
}

impl<C: LineIo> Transcript<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            lines: vec![],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    pub fn save(&self, path: impl Into<PathBuf>) -> Result<(), std::io::Error> {
        let mut contents = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in self.lines.iter() {
            contents.push_str(line);
            contents.push('\n');
        }
        fs::write(path.into(), contents)
    }
}

impl<C: LineIo> LineIo for Transcript<C> {
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.inner.write_line(text)?;
        self.lines.push(text.to_owned());
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let line = self.inner.read_line()?;
        self.lines.push(line.clone());
        Ok(line)
    }
}

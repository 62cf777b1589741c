use std::iter::Enumerate;
use std::str::Split;

/// One script line split at its first space.
///
/// The command is lower-cased here; the argument keeps its case because
/// literal characters and strings depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the original text
    pub number: usize,
    pub command: String,
    pub argument: Option<&'a str>,
}

pub struct Lexer<'a> {
    lines: Enumerate<Split<'a, char>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.split('\n').enumerate(),
        }
    }

    pub fn collect_all(self) -> Vec<SourceLine<'a>> {
        self.collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw) in self.lines.by_ref() {
            let line = raw.trim_end_matches(|c: char| c == '\r' || c == '\n');

            let (command, argument) = match line.split_once(' ') {
                Some((command, argument)) => (command, Some(argument)),
                None => (line, None),
            };

            // Blank lines and lines starting with a space carry no command
            if command.is_empty() {
                continue;
            }

            return Some(SourceLine {
                number: index + 1,
                command: command.to_lowercase(),
                argument,
            });
        }

        None
    }
}

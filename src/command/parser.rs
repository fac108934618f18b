// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

//! Turns program text into [`Statement`]s.
//!
//! Statements are separated by `;`. Each one is trimmed and lowercased, then split into
//! whitespace separated words. `repeat N` opens a block that runs up to the matching `end`,
//! blocks may nest. Nothing here fails: a statement that can't be understood becomes a
//! [`Statement::Ignored`] carrying the reason.


use super::Limits;
use crate::turtle::Ignored;
use itertools::Itertools;
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Word {
    #[token("fd", priority = 4)]
    Forward,
    #[token("bk", priority = 4)]
    Backward,
    #[token("rt", priority = 4)]
    Right,
    #[token("lt", priority = 4)]
    Left,
    #[token("ut", priority = 4)]
    Up,
    #[token("dt", priority = 4)]
    Down,
    #[token("pu", priority = 4)]
    PenUp,
    #[token("pd", priority = 4)]
    PenDown,
    #[token("sc", priority = 4)]
    SetColor,
    #[token("ss", priority = 4)]
    SetThickness,
    #[token("koch", priority = 4)]
    Koch,
    #[token("sierp", priority = 4)]
    Sierpinski,
    #[token("cs", priority = 4)]
    ClearScreen,
    #[token("repeat", priority = 4)]
    Repeat,
    #[token("end", priority = 4)]
    End,
    #[regex(r"[+-]?[0-9]+(\.[0-9]+)?", priority = 3)]
    Number,
    #[regex(r"[^ \t\r\n\f]+", priority = 1)]
    Text,
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Skip,
}

/// One turtle instruction with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `fd d`
    Forward(f64),
    /// `bk d`
    Backward(f64),
    /// `rt a`
    Right(f64),
    /// `lt a`
    Left(f64),
    /// `ut a`, 3D only
    Up(f64),
    /// `dt a`, 3D only
    Down(f64),
    /// `pu`
    PenUp,
    /// `pd`
    PenDown,
    /// `sc color`
    SetColor(String),
    /// `ss width`
    SetThickness(f64),
    /// `koch level length`
    Koch { level: u32, length: f64 },
    /// `sierp level length`
    Sierpinski { level: u32, length: f64 },
    /// `cs`, 3D only
    ClearScreen,
}

impl Command {
    /// The keyword of the command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Forward(_) => "fd",
            Command::Backward(_) => "bk",
            Command::Right(_) => "rt",
            Command::Left(_) => "lt",
            Command::Up(_) => "ut",
            Command::Down(_) => "dt",
            Command::PenUp => "pu",
            Command::PenDown => "pd",
            Command::SetColor(_) => "sc",
            Command::SetThickness(_) => "ss",
            Command::Koch { .. } => "koch",
            Command::Sierpinski { .. } => "sierp",
            Command::ClearScreen => "cs",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Command {
        /// normalized source text
        text: String,
        command: Command,
    },
    Repeat {
        /// normalized source text of the `repeat` line
        text: String,
        count: u32,
        body: Vec<Statement>,
    },
    Ignored {
        /// normalized source text
        text: String,
        reason: Ignored,
    },
}

/// Parses a whole program, accepting `repeat` blocks nested up to the default depth of
/// [`Limits`].
pub fn parse(input: &str) -> Vec<Statement> {
    parse_with_depth(input, Limits::default().repeat_depth)
}

/// Parses a whole program.
///
/// A `repeat` without a matching `end` runs to the end of the program. A `repeat` with a bad
/// count, or one nested deeper than `max_depth`, is dropped together with its block.
pub fn parse_with_depth(input: &str, max_depth: u32) -> Vec<Statement> {
    let mut segments = input
        .split(';')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let mut program = Vec::new();
    parse_block(&mut segments, &mut program, 0, max_depth);
    program
}

fn parse_block<I: Iterator<Item = String>>(
    segments: &mut I,
    block: &mut Vec<Statement>,
    depth: u32,
    max_depth: u32,
) {
    while let Some(segment) = segments.next() {
        let words = lex(&segment);
        let text = words.iter().map(|(_, slice)| slice).join(" ");

        match words.first().map(|(word, _)| *word) {
            Some(Word::End) if depth > 0 => return,
            Some(Word::End) => block.push(Statement::Ignored {
                text,
                reason: Ignored::StrayEnd,
            }),
            Some(Word::Repeat) if depth >= max_depth => {
                skip_block(segments);
                block.push(Statement::Ignored {
                    text,
                    reason: Ignored::NestingTooDeep { ceiling: max_depth },
                });
            }
            Some(Word::Repeat) => {
                let count = argument(&words[1..], 0).and_then(parse_count);
                let mut body = Vec::new();
                parse_block(segments, &mut body, depth + 1, max_depth);
                block.push(match count {
                    Ok(count) => Statement::Repeat { text, count, body },
                    Err(reason) => Statement::Ignored { text, reason },
                });
            }
            _ => block.push(match parse_command(&words) {
                Ok(command) => Statement::Command { text, command },
                Err(reason) => Statement::Ignored { text, reason },
            }),
        }
    }
}

/// Consumes segments up to the `end` closing an already opened block, without descending.
fn skip_block<I: Iterator<Item = String>>(segments: &mut I) {
    let mut open = 1_usize;
    for segment in segments {
        match lex(&segment).first().map(|(word, _)| *word) {
            Some(Word::Repeat) => open += 1,
            Some(Word::End) => {
                open -= 1;
                if open == 0 {
                    return;
                }
            }
            _ => {}
        }
    }
}

/// Splits a statement into words. Anything the lexer can't classify counts as text.
fn lex(segment: &str) -> Vec<(Word, &str)> {
    let mut lexer = Word::lexer(segment);
    let mut words = Vec::new();
    while let Some(token) = lexer.next() {
        words.push((token.unwrap_or(Word::Text), lexer.slice()));
    }
    words
}

fn parse_command(words: &[(Word, &str)]) -> Result<Command, Ignored> {
    let Some(&(head, keyword)) = words.first() else {
        return Err(Ignored::UnknownCommand(String::new()));
    };
    let args = &words[1..];
    Ok(match head {
        Word::Forward => Command::Forward(number(args, 0)?),
        Word::Backward => Command::Backward(number(args, 0)?),
        Word::Right => Command::Right(number(args, 0)?),
        Word::Left => Command::Left(number(args, 0)?),
        Word::Up => Command::Up(number(args, 0)?),
        Word::Down => Command::Down(number(args, 0)?),
        Word::PenUp => Command::PenUp,
        Word::PenDown => Command::PenDown,
        Word::SetColor => Command::SetColor(argument(args, 0)?.1.to_string()),
        Word::SetThickness => Command::SetThickness(number(args, 0)?),
        Word::Koch => Command::Koch {
            level: argument(args, 0).and_then(parse_count)?,
            length: number(args, 1)?,
        },
        Word::Sierpinski => Command::Sierpinski {
            level: argument(args, 0).and_then(parse_count)?,
            length: number(args, 1)?,
        },
        Word::ClearScreen => Command::ClearScreen,
        Word::Repeat | Word::End | Word::Number | Word::Text | Word::Skip => {
            return Err(Ignored::UnknownCommand(keyword.to_string()));
        }
    })
}

fn argument<'a>(args: &[(Word, &'a str)], index: usize) -> Result<(Word, &'a str), Ignored> {
    args.get(index).copied().ok_or(Ignored::MissingArgument)
}

fn number(args: &[(Word, &str)], index: usize) -> Result<f64, Ignored> {
    let (word, slice) = argument(args, index)?;
    if word != Word::Number {
        return Err(Ignored::InvalidArgument(slice.to_string()));
    }
    slice
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Ignored::InvalidArgument(slice.to_string()))
}

/// Repeat counts and fractal levels: non negative integers
fn parse_count((word, slice): (Word, &str)) -> Result<u32, Ignored> {
    match word {
        Word::Number => slice
            .parse::<u32>()
            .map_err(|_| Ignored::InvalidArgument(slice.to_string())),
        _ => Err(Ignored::InvalidArgument(slice.to_string())),
    }
}

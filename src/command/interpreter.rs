// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

//! Runs parsed programs against a [`Session`].


use super::{
    Limits,
    parser::{Command, Statement, parse_with_depth},
};
use crate::turtle::{Ignored, Outcome};

/// Something that carries out turtle commands, one at a time.
pub trait Session {
    fn apply(&mut self, command: &Command) -> Outcome;

    /// Called once after every batch
    fn finish(&mut self) {}
}

/// The fate of one executed statement. Statements inside a `repeat` are reported once per
/// iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementReport {
    pub statement: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    limits: Limits,
}

impl Interpreter {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Parses and executes `input` in order. Bad statements are reported and skipped, they
    /// never stop the batch.
    pub fn run<S: Session + ?Sized>(&self, session: &mut S, input: &str) -> Vec<StatementReport> {
        let program = parse_with_depth(input, self.limits.repeat_depth);
        let mut reports = Vec::new();
        self.execute(session, &program, &mut reports, 1);
        session.finish();
        reports
    }

    /// `enclosing` is the number of times the enclosing blocks run `statements`.
    fn execute<S: Session + ?Sized>(
        &self,
        session: &mut S,
        statements: &[Statement],
        reports: &mut Vec<StatementReport>,
        enclosing: u64,
    ) {
        for statement in statements {
            match statement {
                Statement::Command { text, command } => {
                    let outcome = match self.limits.check(command) {
                        Ok(()) => session.apply(command),
                        Err(reason) => reason.into(),
                    };
                    Self::report(reports, text, outcome);
                }
                Statement::Repeat { text, count, body } => {
                    let iterations = enclosing * u64::from(*count);
                    let ceiling = self.limits.repeat_iterations;
                    if iterations > u64::from(ceiling) {
                        let reason = Ignored::TooManyIterations {
                            iterations,
                            ceiling,
                        };
                        Self::report(reports, text, reason.into());
                        continue;
                    }
                    for _ in 0..*count {
                        self.execute(session, body, reports, iterations);
                    }
                }
                Statement::Ignored { text, reason } => {
                    Self::report(reports, text, reason.clone().into());
                }
            }
        }
    }

    fn report(reports: &mut Vec<StatementReport>, text: &str, outcome: Outcome) {
        if let Outcome::Ignored(reason) = &outcome {
            log::debug!("\"{text}\" ignored: {reason}");
        }
        reports.push(StatementReport {
            statement: text.to_string(),
            outcome,
        });
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.

//! Lookups into the string map that configures a run.

use crate::{TurtlrError, command::Options};
use std::{collections::HashMap, str::FromStr};

impl Options for HashMap<String, String> {
    fn get_mandatory_parsed_option<T: FromStr>(
        &self,
        key: &str,
        default: Option<T>,
    ) -> Result<T, TurtlrError> {
        match (self.get_parsed_option(key)?, default) {
            (Some(value), _) | (None, Some(value)) => Ok(value),
            (None, None) => Err(TurtlrError::MissingParameter(format!(
                "The mandatory parameter \"{key}\" was missing"
            ))),
        }
    }

    fn get_parsed_option<T: FromStr>(&self, key: &str) -> Result<Option<T>, TurtlrError> {
        match self.get(key) {
            Some(v) => match v.trim().parse() {
                Ok(val) => Ok(Some(val)),
                Err(_) => Err(TurtlrError::InvalidParameter(format!(
                    "Invalid value for parameter {{\"{key}\"}}: {{\"{v}\"}}"
                ))),
            },
            None => Ok(None),
        }
    }

    fn get_mandatory_option(&self, key: &str) -> Result<&str, TurtlrError> {
        match self.get(key) {
            Some(v) => Ok(v),
            None => Err(TurtlrError::MissingParameter(format!(
                "The parameter {{\"{key}\"}} was missing"
            ))),
        }
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error;
use std::fmt;

/// Errors returned when a single group can't be decoded.
///
/// Decoding a complete report never fails. The errors are only returned by
/// the per-group decoders and a [`Metar`](crate::Metar) skips any group that
/// fails to decode.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    UnexpectedGroup {
        group: String,
        expected: &'static str,
    },
    NotANumber {
        group: String,
    },
    UnknownPhenomenon {
        group: String,
        code: String,
    },
    DivisionByZero {
        group: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedGroup { group, expected } => {
                write!(f, "group \"{group}\" should be {expected}")
            }
            Self::NotANumber { group } => {
                write!(f, "group \"{group}\" should contain a number")
            }
            Self::UnknownPhenomenon { group, code } => {
                write!(f, "found unknown phenomenon \"{code}\" in group \"{group}\"")
            }
            Self::DivisionByZero { group } => {
                write!(f, "group \"{group}\" has a fraction with zero denominator")
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_errors() {
        let err = Error::UnknownPhenomenon {
            group: "RAXX".to_string(),
            code: "XX".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "found unknown phenomenon \"XX\" in group \"RAXX\""
        );

        let err = Error::UnexpectedGroup {
            group: "A30".to_string(),
            expected: "an altimeter setting",
        };
        assert_eq!(err.to_string(), "group \"A30\" should be an altimeter setting");
    }
}

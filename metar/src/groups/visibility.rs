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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::group::{number, unexpected, Group};
use crate::pattern::matches;
use crate::Error;

coded_enum! {
    /// Unit of the prevailing visibility.
    pub enum DistanceUnit {
        Meters = "M", "meters",
        StatuteMiles = "SM", "statute miles",
    }
}

/// Prevailing visibility.
///
/// The visibility is given either in meters (`1400`), in whole or fractional
/// statute miles (`10SM`, `M1/4SM`) or as `CAVOK`. A leading `M` marks less
/// than the value for whole miles too, so `M1SM` is less than 1 mile.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Visibility {
    /// Ceiling and visibility OK.
    Cavok,
    Distance {
        value: f64,
        unit: DistanceUnit,
        /// The visibility is less than the value (`M` prefix).
        less_than: bool,
    },
}

impl Visibility {
    /// Decodes the visibility with the group that preceded it in the report.
    ///
    /// A fraction of statute miles that follows a single digit is the
    /// fractional part of a mixed number, e.g. `2 1/2SM` is 2.5 miles.
    ///
    /// # Errors
    ///
    /// Returns an error if the group is no visibility, contains no number or
    /// a fraction with zero denominator.
    pub fn decode_after(group: &str, previous: Option<&str>) -> Result<Self, Error> {
        if !Self::matches(group) {
            return Err(unexpected::<Self>(group));
        }

        if group == "CAVOK" {
            return Ok(Self::Cavok);
        }

        let Some(body) = group.strip_suffix(DistanceUnit::StatuteMiles.code()) else {
            return Ok(Self::Distance {
                value: number::<u32>(group, 0, 4)?.into(),
                unit: DistanceUnit::Meters,
                less_than: false,
            });
        };

        let (less_than, body) = match body.strip_prefix('M') {
            Some(body) => (true, body),
            None => (false, body),
        };

        let value = match body.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator: f64 = number::<u32>(numerator, 0, usize::MAX)?.into();
                let denominator: f64 = number::<u32>(denominator, 0, usize::MAX)?.into();

                if denominator == 0.0 {
                    return Err(Error::DivisionByZero {
                        group: group.to_string(),
                    });
                }

                let whole: f64 = previous
                    .filter(|previous| matches("#", previous))
                    .map_or(Ok(0), |previous| number::<u32>(previous, 0, 1))?
                    .into();

                whole + numerator / denominator
            }
            None => number::<u32>(body, 0, usize::MAX)?.into(),
        };

        Ok(Self::Distance {
            value,
            unit: DistanceUnit::StatuteMiles,
            less_than,
        })
    }
}

impl Group for Visibility {
    const NAME: &'static str = "a visibility";

    fn matches(group: &str) -> bool {
        if group == "CAVOK" {
            return true;
        }

        match group.find(DistanceUnit::StatuteMiles.code()) {
            None => matches("####", group),
            Some(pos) if pos + 2 == group.len() => match group.as_bytes()[..pos].split_first() {
                Some((first, rest)) => {
                    (first.is_ascii_digit() || *first == b'M')
                        && rest.iter().all(|b| b.is_ascii_digit() || *b == b'/')
                }
                None => false,
            },
            Some(_) => false,
        }
    }

    fn decode(group: &str) -> Result<Self, Error> {
        Self::decode_after(group, None)
    }
}

/// Vertical visibility into an obscured sky in feet (`VV007`).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VerticalVisibility(pub u32);

impl Group for VerticalVisibility {
    const NAME: &'static str = "a vertical visibility";

    fn matches(group: &str) -> bool {
        matches("VV###", group)
    }

    fn decode(group: &str) -> Result<Self, Error> {
        if !Self::matches(group) {
            return Err(unexpected::<Self>(group));
        }

        Ok(Self(number::<u32>(group, 2, 3)? * 100))
    }
}

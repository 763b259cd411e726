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

/// Air temperature and dew point in whole degrees Celsius (`09/06`, `M04/M07`).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    pub air: i16,
    /// The dew point is missing in groups like `15/`.
    pub dew_point: Option<i16>,
}

/// Reads whole degrees where a leading `M` marks a negative value.
fn degrees(group: &str, value: &str) -> Result<i16, Error> {
    let (sign, digits) = match value.strip_prefix('M') {
        Some(digits) => (-1, digits),
        None => (1, value),
    };

    number::<i16>(digits, 0, usize::MAX)
        .map(|deg| sign * deg)
        .map_err(|_| Error::NotANumber {
            group: group.to_string(),
        })
}

impl Group for Temperature {
    const NAME: &'static str = "a temperature and dew point";

    fn matches(group: &str) -> bool {
        matches("##/##", group)
            || matches("##/M##", group)
            || matches("M##/M##", group)
            || matches("##/", group)
            || matches("M##/", group)
    }

    fn decode(group: &str) -> Result<Self, Error> {
        let (air, dew_point) = group
            .split_once('/')
            .filter(|_| Self::matches(group))
            .ok_or_else(|| unexpected::<Self>(group))?;

        Ok(Self {
            air: degrees(group, air)?,
            dew_point: match dew_point {
                "" => None,
                dew_point => Some(degrees(group, dew_point)?),
            },
        })
    }
}

/// Air temperature and dew point in tenths of degrees Celsius from the
/// remarks (`T00940061`).
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PreciseTemperature {
    pub air: f64,
    pub dew_point: f64,
}

/// Reads four digits of tenths of degrees where a leading `1` marks a negative
/// value.
fn tenths(group: &str, start: usize) -> Result<f64, Error> {
    let value: f64 = if group.get(start..start + 1) == Some("1") {
        -f64::from(number::<u16>(group, start + 1, 3)?)
    } else {
        f64::from(number::<u16>(group, start, 4)?)
    };

    Ok(value / 10.0)
}

impl Group for PreciseTemperature {
    const NAME: &'static str = "a precise temperature and dew point";

    fn matches(group: &str) -> bool {
        matches("T########", group)
    }

    fn decode(group: &str) -> Result<Self, Error> {
        if !Self::matches(group) {
            return Err(unexpected::<Self>(group));
        }

        Ok(Self {
            air: tenths(group, 1)?,
            dew_point: tenths(group, 5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature(air: i16, dew_point: Option<i16>) -> Temperature {
        Temperature { air, dew_point }
    }

    #[test]
    fn decodes_temperature() {
        assert_eq!(Temperature::decode("08/06"), Ok(temperature(8, Some(6))));
        assert_eq!(Temperature::decode("01/M01"), Ok(temperature(1, Some(-1))));
        assert_eq!(Temperature::decode("M14/M15"), Ok(temperature(-14, Some(-15))));
    }

    #[test]
    fn decodes_missing_dew_point() {
        assert_eq!(Temperature::decode("15/"), Ok(temperature(15, None)));
        assert_eq!(Temperature::decode("M07/"), Ok(temperature(-7, None)));
    }

    #[test]
    fn rejects_malformed_temperature() {
        assert!(!Temperature::matches("M14/15"));
        assert!(!Temperature::matches("1/2"));
        assert!(Temperature::decode("R04/P1500N").is_err());
    }

    #[test]
    fn decodes_precise_temperature() {
        assert_eq!(
            PreciseTemperature::decode("T00830067"),
            Ok(PreciseTemperature {
                air: 8.3,
                dew_point: 6.7
            })
        );
        assert_eq!(
            PreciseTemperature::decode("T01830167"),
            Ok(PreciseTemperature {
                air: 18.3,
                dew_point: 16.7
            })
        );
    }

    #[test]
    fn decodes_negative_precise_temperature() {
        assert_eq!(
            PreciseTemperature::decode("T10171018"),
            Ok(PreciseTemperature {
                air: -1.7,
                dew_point: -1.8
            })
        );
        assert_eq!(
            PreciseTemperature::decode("T01561006"),
            Ok(PreciseTemperature {
                air: 15.6,
                dew_point: -0.6
            })
        );
    }
}

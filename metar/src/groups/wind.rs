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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::group::{number, unexpected, Group};
use crate::pattern::{matches, starts_with};
use crate::Error;

coded_enum! {
    /// Unit of the wind speed.
    pub enum SpeedUnit {
        Knots = "KT", "knots",
        MetersPerSecond = "MPS", "meters per second",
        KilometersPerHour = "KPH", "kilometers per hour",
    }
}

/// Direction the wind is blowing from.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindDirection {
    /// True direction in degrees.
    Degrees(u16),
    /// Variable direction (`VRB`).
    Variable,
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees(deg) => write!(f, "{deg:03}°"),
            Self::Variable => write!(f, "VRB"),
        }
    }
}

/// Surface wind, e.g. `27009KT` or `VRB105G121KT`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    pub direction: WindDirection,
    pub speed: u16,
    pub gust: Option<u16>,
    pub unit: SpeedUnit,
}

impl Group for Wind {
    const NAME: &'static str = "a wind group";

    fn matches(group: &str) -> bool {
        starts_with("#####", group)
            || starts_with("#####G##", group)
            || starts_with("######G###", group)
            || starts_with("VRB", group)
    }

    fn decode(group: &str) -> Result<Self, Error> {
        if !Self::matches(group) {
            return Err(unexpected::<Self>(group));
        }

        let unit = if group.contains("MPS") {
            SpeedUnit::MetersPerSecond
        } else if group.contains("KPH") {
            SpeedUnit::KilometersPerHour
        } else {
            SpeedUnit::Knots
        };

        let direction = if group.starts_with("VRB") {
            WindDirection::Variable
        } else {
            WindDirection::Degrees(number(group, 0, 3)?)
        };

        // a gust without digits is dropped but keeps the mean wind
        let gust = group
            .find('G')
            .and_then(|pos| number(group, pos + 1, 3).ok());

        Ok(Self {
            direction,
            speed: number(group, 3, 3)?,
            gust,
            unit,
        })
    }
}

/// Range of a variable wind direction (`dddVddd`).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindVariation {
    pub min: u16,
    pub max: u16,
}

impl Group for WindVariation {
    const NAME: &'static str = "a variable wind direction";

    fn matches(group: &str) -> bool {
        matches("###V###", group)
    }

    fn decode(group: &str) -> Result<Self, Error> {
        if !Self::matches(group) {
            return Err(unexpected::<Self>(group));
        }

        Ok(Self {
            min: number(group, 0, 3)?,
            max: number(group, 4, 3)?,
        })
    }
}

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

/// Altimeter setting in inches of mercury (`A3029`).
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Altimeter(pub f64);

impl Group for Altimeter {
    const NAME: &'static str = "an altimeter setting in inches of mercury";

    fn matches(group: &str) -> bool {
        matches("A####", group)
    }

    fn decode(group: &str) -> Result<Self, Error> {
        if !Self::matches(group) {
            return Err(unexpected::<Self>(group));
        }

        // two implied decimals
        Ok(Self(f64::from(number::<u16>(group, 1, 4)?) / 100.0))
    }
}

/// Altimeter setting in hectopascal (`Q1020`).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Qnh(pub u16);

impl Group for Qnh {
    const NAME: &'static str = "an altimeter setting in hectopascal";

    fn matches(group: &str) -> bool {
        matches("Q####", group)
    }

    fn decode(group: &str) -> Result<Self, Error> {
        if !Self::matches(group) {
            return Err(unexpected::<Self>(group));
        }

        Ok(Self(number(group, 1, 4)?))
    }
}

/// Sea level pressure in hectopascal from the remarks (`SLP177`).
///
/// The group holds the tens, units and tenths of the pressure which is
/// always taken to be above 1000 hPa.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeaLevelPressure(pub f64);

impl Group for SeaLevelPressure {
    const NAME: &'static str = "a sea level pressure";

    fn matches(group: &str) -> bool {
        matches("SLP###", group)
    }

    fn decode(group: &str) -> Result<Self, Error> {
        if !Self::matches(group) {
            return Err(unexpected::<Self>(group));
        }

        Ok(Self(f64::from(number::<u16>(group, 3, 3)?) / 10.0 + 1000.0))
    }
}

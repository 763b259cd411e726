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

use crate::group::{unexpected, Group};
use crate::pattern::matches;
use crate::Error;

coded_enum! {
    /// Kind of the report.
    pub enum ReportType {
        /// Routine report.
        Metar = "METAR", "routine report",
        /// Special report issued between routine reports.
        Speci = "SPECI", "special report",
    }
}

impl Group for ReportType {
    const NAME: &'static str = "a report type";

    fn matches(group: &str) -> bool {
        Self::from_code(group).is_some()
    }

    fn decode(group: &str) -> Result<Self, Error> {
        Self::from_code(group).ok_or_else(|| unexpected::<Self>(group))
    }
}

/// ICAO location indicator of the reporting station.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station(String);

impl Station {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Group for Station {
    const NAME: &'static str = "an ICAO location indicator";

    fn matches(group: &str) -> bool {
        matches("$$$$", group)
    }

    fn decode(group: &str) -> Result<Self, Error> {
        if Self::matches(group) {
            Ok(Self(group.to_string()))
        } else {
            Err(unexpected::<Self>(group))
        }
    }
}

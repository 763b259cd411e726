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

/// Day of month and UTC time of the observation (`DDHHMMZ`).
///
/// The values are not range checked and malformed reports may contain e.g. an
/// hour of 34.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationTime {
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl Group for ObservationTime {
    const NAME: &'static str = "an observation time";

    fn matches(group: &str) -> bool {
        matches("######Z", group)
    }

    fn decode(group: &str) -> Result<Self, Error> {
        if !Self::matches(group) {
            return Err(unexpected::<Self>(group));
        }

        Ok(Self {
            day: number(group, 0, 2)?,
            hour: number(group, 2, 2)?,
            minute: number(group, 4, 2)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_observation_time() {
        assert_eq!(
            ObservationTime::decode("231751Z"),
            Ok(ObservationTime {
                day: 23,
                hour: 17,
                minute: 51
            })
        );
    }

    #[test]
    fn keeps_out_of_range_values() {
        assert_eq!(
            ObservationTime::decode("123456Z"),
            Ok(ObservationTime {
                day: 12,
                hour: 34,
                minute: 56
            })
        );
    }

    #[test]
    fn requires_zulu_suffix() {
        assert!(!ObservationTime::matches("231751"));
        assert!(!ObservationTime::matches("2317Z"));
    }
}

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
use crate::Error;

coded_enum! {
    /// Cloud cover of a sky condition.
    pub enum Cover {
        /// No layers at all.
        SkyClear = "SKC", "sky clear",
        /// No layers below the ceilometer limit.
        Clear = "CLR", "clear",
        NoSignificantCloud = "NSC", "no significant cloud",
        Few = "FEW", "few",
        Scattered = "SCT", "scattered",
        Broken = "BKN", "broken",
        Overcast = "OVC", "overcast",
    }
}

coded_enum! {
    /// Convective cloud type of a layer.
    pub enum CloudType {
        ToweringCumulus = "TCU", "towering cumulus",
        Cumulonimbus = "CB", "cumulonimbus",
        AltocumulusCastellanus = "ACC", "altocumulus castellanus",
    }
}

/// A cloud layer or clear sky, e.g. `OVC007CB`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyCondition {
    cover: Cover,
    altitude: Option<u32>,
    cloud_type: Option<CloudType>,
    temporary: bool,
}

impl SkyCondition {
    pub fn cover(&self) -> Cover {
        self.cover
    }

    /// Height of the layer's base above ground in feet.
    pub fn altitude(&self) -> Option<u32> {
        self.altitude
    }

    pub fn has_altitude(&self) -> bool {
        self.altitude.is_some()
    }

    pub fn cloud_type(&self) -> Option<CloudType> {
        self.cloud_type
    }

    pub fn has_cloud_type(&self) -> bool {
        self.cloud_type.is_some()
    }

    /// Returns `true` if the layer was reported in a `TEMPO` trend.
    pub fn temporary(&self) -> bool {
        self.temporary
    }

    pub(crate) fn into_temporary(self) -> Self {
        Self {
            temporary: true,
            ..self
        }
    }
}

impl Group for SkyCondition {
    const NAME: &'static str = "a sky condition";

    fn matches(group: &str) -> bool {
        Cover::from_prefix(group).is_some()
    }

    fn decode(group: &str) -> Result<Self, Error> {
        let cover = Cover::from_prefix(group).ok_or_else(|| unexpected::<Self>(group))?;

        // the base is missing (e.g. BKN///) for some automated reports
        let (altitude, cloud_type) = match group.len() {
            3 => (None, None),
            6 => (number::<u32>(group, 3, 3).ok().map(|alt| alt * 100), None),
            _ => (
                number::<u32>(group, 3, 3).ok().map(|alt| alt * 100),
                group.get(6..).and_then(CloudType::from_code),
            ),
        };

        Ok(Self {
            cover,
            altitude,
            cloud_type,
            temporary: false,
        })
    }
}

impl fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cover.description())?;

        if let Some(altitude) = self.altitude {
            write!(f, " at {altitude} ft")?;
        }

        if let Some(cloud_type) = self.cloud_type {
            write!(f, " ({})", cloud_type.description())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_clear_sky() {
        for (code, cover) in [
            ("SKC", Cover::SkyClear),
            ("CLR", Cover::Clear),
            ("NSC", Cover::NoSignificantCloud),
        ] {
            let sky = SkyCondition::decode(code).expect("sky condition should decode");
            assert_eq!(sky.cover(), cover);
            assert!(!sky.has_altitude());
            assert!(!sky.has_cloud_type());
        }
    }

    #[test]
    fn decodes_layer() {
        let sky = SkyCondition::decode("FEW105").expect("sky condition should decode");
        assert_eq!(sky.cover(), Cover::Few);
        assert_eq!(sky.altitude(), Some(10500));
        assert_eq!(sky.cloud_type(), None);

        let sky = SkyCondition::decode("BKN005").expect("sky condition should decode");
        assert_eq!(sky.cover(), Cover::Broken);
        assert_eq!(sky.altitude(), Some(500));
    }

    #[test]
    fn decodes_cloud_type() {
        let sky = SkyCondition::decode("OVC120ACC").expect("sky condition should decode");
        assert_eq!(sky.cover(), Cover::Overcast);
        assert_eq!(sky.altitude(), Some(12000));
        assert_eq!(sky.cloud_type(), Some(CloudType::AltocumulusCastellanus));

        let sky = SkyCondition::decode("SCT080CB").expect("sky condition should decode");
        assert_eq!(sky.cloud_type(), Some(CloudType::Cumulonimbus));
    }

    #[test]
    fn ignores_unknown_cloud_type() {
        let sky = SkyCondition::decode("FEW004XYZ").expect("sky condition should decode");
        assert_eq!(sky.altitude(), Some(400));
        assert_eq!(sky.cloud_type(), None);
    }

    #[test]
    fn decodes_missing_base() {
        let sky = SkyCondition::decode("BKN///").expect("sky condition should decode");
        assert_eq!(sky.cover(), Cover::Broken);
        assert_eq!(sky.altitude(), None);
    }

    #[test]
    fn displays_layer() {
        let sky = SkyCondition::decode("OVC007CB").expect("sky condition should decode");
        assert_eq!(sky.to_string(), "overcast at 700 ft (cumulonimbus)");
    }
}

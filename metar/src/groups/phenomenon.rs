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

//! Present weather phenomena.
//!
//! A present weather group is composed of an optional intensity, any number of
//! modifiers and one or more 2-letter phenomenon codes:
//!
//! ```text
//!   -  VC BL  TS  RA SN
//!   |  |  |   |   |  |
//!   |  |  |   |   +--+-- phenomena (rain and snow as sleet)
//!   |  |  |   +--------- thunderstorm
//!   |  +--+------------- modifiers (vicinity, blowing)
//!   +------------------- intensity (light)
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

coded_enum! {
    /// Weather phenomenon.
    pub enum PhenomenonCode {
        Mist = "BR", "mist",
        DustStorm = "DS", "dust storm",
        Dust = "DU", "dust",
        Drizzle = "DZ", "drizzle",
        FunnelCloud = "FC", "funnel cloud",
        Fog = "FG", "fog",
        Smoke = "FU", "smoke",
        Hail = "GR", "hail",
        SmallHail = "GS", "small hail",
        Haze = "HZ", "haze",
        IceCrystals = "IC", "ice crystals",
        /// Ice pellets, also coded as `PE` by older reports.
        IcePellets = "PL", "ice pellets",
        DustSandWhorls = "PO", "dust/sand whorls",
        Spray = "PY", "spray",
        Rain = "RA", "rain",
        Sand = "SA", "sand",
        SnowGrains = "SG", "snow grains",
        Shower = "SH", "shower",
        Snow = "SN", "snow",
        Squalls = "SQ", "squalls",
        SandStorm = "SS", "sand storm",
        /// Thunderstorm without precipitation, e.g. `TS` or `VCTS`.
        Thunderstorm = "TS", "thunderstorm",
        UnknownPrecipitation = "UP", "unknown precipitation",
        VolcanicAsh = "VA", "volcanic ash",
        /// Rain and snow mixed.
        Sleet = "RASN", "sleet",
    }
}

coded_enum! {
    /// Modifier that describes a phenomenon.
    pub enum Modifier {
        Vicinity = "VC", "in the vicinity",
        Blowing = "BL", "blowing",
        Freezing = "FZ", "freezing",
        Drifting = "DR", "low drifting",
        Shower = "SH", "shower",
        Partial = "PR", "partial",
        Shallow = "MI", "shallow",
        Patches = "BC", "patches of",
    }
}

/// Codes that aren't used anymore but may still be found in reports.
const LEGACY_CODES: &[(&str, PhenomenonCode)] = &[("PE", PhenomenonCode::IcePellets)];

/// Consecutive phenomena reported as one composite phenomenon.
const COMPOSITES: &[(PhenomenonCode, PhenomenonCode, PhenomenonCode)] = &[
    (
        PhenomenonCode::Rain,
        PhenomenonCode::Snow,
        PhenomenonCode::Sleet,
    ),
    (
        PhenomenonCode::Snow,
        PhenomenonCode::Rain,
        PhenomenonCode::Sleet,
    ),
];

/// Marks a thunderstorm within the phenomenon codes.
const THUNDERSTORM: &str = "TS";

impl PhenomenonCode {
    fn lookup(code: &str) -> Option<Self> {
        Self::from_code(code).or_else(|| {
            LEGACY_CODES
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, phenomenon)| *phenomenon)
        })
    }
}

/// Collapses consecutive codes with a composite meaning.
fn compose(codes: Vec<PhenomenonCode>) -> Vec<PhenomenonCode> {
    let mut composed = Vec::with_capacity(codes.len());
    let mut i = 0;

    while i < codes.len() {
        let composite = codes.get(i + 1).and_then(|next| {
            COMPOSITES
                .iter()
                .find(|(first, second, _)| *first == codes[i] && second == next)
                .map(|(_, _, composite)| *composite)
        });

        match composite {
            Some(composite) => {
                composed.push(composite);
                i += 2;
            }
            None => {
                composed.push(codes[i]);
                i += 1;
            }
        }
    }

    composed
}

/// Intensity of a phenomenon.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intensity {
    /// Light (`-`).
    Light,
    /// Moderate, without any intensity marker.
    #[default]
    Normal,
    /// Heavy (`+`).
    Heavy,
}

impl Intensity {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Light => "-",
            Self::Normal => "",
            Self::Heavy => "+",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Normal => "moderate",
            Self::Heavy => "heavy",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One present weather group.
///
/// The phenomenon bundles all phenomenon codes of a group, e.g. `RABR` is rain
/// and mist. All codes share the intensity and modifiers of the group. A
/// phenomenon has at least one code.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPhenomenon"))]
pub struct Phenomenon {
    codes: Vec<PhenomenonCode>,
    intensity: Intensity,
    modifiers: Vec<Modifier>,
    thunderstorm: bool,
    temporary: bool,
}

/// Deserialized phenomenon that is checked to have codes.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPhenomenon {
    codes: Vec<PhenomenonCode>,
    intensity: Intensity,
    modifiers: Vec<Modifier>,
    thunderstorm: bool,
    temporary: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPhenomenon> for Phenomenon {
    type Error = &'static str;

    fn try_from(raw: RawPhenomenon) -> Result<Self, Self::Error> {
        if raw.codes.is_empty() {
            return Err("phenomenon should have at least one code");
        }

        Ok(Self {
            codes: raw.codes,
            intensity: raw.intensity,
            modifiers: raw.modifiers,
            thunderstorm: raw.thunderstorm,
            temporary: raw.temporary,
        })
    }
}

impl Phenomenon {
    /// Returns the first, defining phenomenon of the group.
    pub fn phenomenon(&self) -> PhenomenonCode {
        // decoding and deserializing both reject a phenomenon without codes
        self.codes[0]
    }

    /// Returns the phenomenon at `index` or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<PhenomenonCode> {
        self.codes.get(index).copied()
    }

    pub fn codes(&self) -> &[PhenomenonCode] {
        &self.codes
    }

    pub fn num_codes(&self) -> usize {
        self.codes.len()
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Returns the modifiers in the order they are reported.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn blowing(&self) -> bool {
        self.has(Modifier::Blowing)
    }

    pub fn freezing(&self) -> bool {
        self.has(Modifier::Freezing)
    }

    pub fn drifting(&self) -> bool {
        self.has(Modifier::Drifting)
    }

    pub fn vicinity(&self) -> bool {
        self.has(Modifier::Vicinity)
    }

    pub fn partial(&self) -> bool {
        self.has(Modifier::Partial)
    }

    pub fn shallow(&self) -> bool {
        self.has(Modifier::Shallow)
    }

    pub fn patches(&self) -> bool {
        self.has(Modifier::Patches)
    }

    pub fn shower(&self) -> bool {
        self.has(Modifier::Shower)
    }

    pub fn thunderstorm(&self) -> bool {
        self.thunderstorm
    }

    /// Returns `true` if the phenomenon was reported in a `TEMPO` trend.
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

impl FromStr for Phenomenon {
    type Err = Error;

    /// Decodes a present weather group like `-TSRA` or `VCBLSN`.
    fn from_str(group: &str) -> Result<Self, Self::Err> {
        let unexpected = || Error::UnexpectedGroup {
            group: group.to_string(),
            expected: "a present weather group",
        };

        let (intensity, mut rest) = match group.as_bytes().first() {
            Some(b'-') => (Intensity::Light, &group[1..]),
            Some(b'+') => (Intensity::Heavy, &group[1..]),
            _ => (Intensity::Normal, group),
        };

        // the last two letters are always a phenomenon e.g. the shower of VCSH
        let mut modifiers = Vec::new();
        while rest.len() > 2 {
            match rest.get(..2).and_then(Modifier::from_code) {
                Some(modifier) => {
                    modifiers.push(modifier);
                    rest = &rest[2..];
                }
                None => break,
            }
        }

        if rest.len() % 2 != 0 {
            return Err(unexpected());
        }

        let mut thunderstorm = false;
        let mut codes = Vec::with_capacity(rest.len() / 2);

        for i in (0..rest.len()).step_by(2) {
            let code = rest.get(i..i + 2).ok_or_else(unexpected)?;

            if code == THUNDERSTORM {
                thunderstorm = true;
            } else {
                codes.push(PhenomenonCode::lookup(code).ok_or_else(|| {
                    Error::UnknownPhenomenon {
                        group: group.to_string(),
                        code: code.to_string(),
                    }
                })?);
            }
        }

        if codes.is_empty() {
            if !thunderstorm {
                return Err(unexpected());
            }

            codes.push(PhenomenonCode::Thunderstorm);
        }

        if codes.contains(&PhenomenonCode::Shower) && !modifiers.contains(&Modifier::Shower) {
            modifiers.push(Modifier::Shower);
        }

        Ok(Self {
            codes: compose(codes),
            intensity,
            modifiers,
            thunderstorm,
            temporary: false,
        })
    }
}

impl fmt::Display for Phenomenon {
    /// Writes a short English phrase like "light thunderstorm rain".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words: Vec<&'static str> = Vec::new();

        if self.intensity != Intensity::Normal {
            words.push(self.intensity.description());
        }

        let shower_only = self.codes == [PhenomenonCode::Shower];
        words.extend(
            self.modifiers
                .iter()
                .filter(|m| **m != Modifier::Vicinity)
                .filter(|m| !(shower_only && **m == Modifier::Shower))
                .map(Modifier::description),
        );

        if self.thunderstorm && self.codes != [PhenomenonCode::Thunderstorm] {
            words.push(PhenomenonCode::Thunderstorm.description());
        }

        for word in words {
            write!(f, "{word} ")?;
        }

        for (i, code) in self.codes.iter().enumerate() {
            if i > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{}", code.description())?;
        }

        if self.vicinity() {
            write!(f, " {}", Modifier::Vicinity.description())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(group: &str) -> Phenomenon {
        group.parse().expect("phenomenon should decode")
    }

    #[test]
    fn decodes_every_code() {
        for (code, phenomenon) in PhenomenonCode::CODES
            .iter()
            .filter(|(_, p)| *p != PhenomenonCode::Sleet)
        {
            let decoded = decode(code);
            assert_eq!(decoded.phenomenon(), *phenomenon, "decoding {code}");
            assert_eq!(decoded.intensity(), Intensity::Normal);
            assert!(decoded.modifiers().is_empty() || *phenomenon == PhenomenonCode::Shower);
            assert_eq!(
                decoded.thunderstorm(),
                *phenomenon == PhenomenonCode::Thunderstorm
            );
        }
    }

    #[test]
    fn decodes_legacy_ice_pellets() {
        assert_eq!(decode("PE").phenomenon(), PhenomenonCode::IcePellets);
        assert_eq!(decode("PL").phenomenon(), PhenomenonCode::IcePellets);
    }

    #[test]
    fn decodes_intensity() {
        assert_eq!(decode("RA").intensity(), Intensity::Normal);
        assert_eq!(decode("-RA").intensity(), Intensity::Light);

        let heavy_rain = decode("+RA");
        assert_eq!(heavy_rain.phenomenon(), PhenomenonCode::Rain);
        assert_eq!(heavy_rain.intensity(), Intensity::Heavy);
    }

    #[test]
    fn decodes_modifiers() {
        let p = decode("VCFG");
        assert_eq!(p.phenomenon(), PhenomenonCode::Fog);
        assert!(p.vicinity());

        assert!(decode("BLSN").blowing());
        assert!(decode("DRSA").drifting());
        assert!(decode("FZDZ").freezing());
        assert!(decode("SHRA").shower());
        assert!(decode("PRFG").partial());
        assert!(decode("MIFG").shallow());
        assert!(decode("BCFG").patches());
    }

    #[test]
    fn stacks_modifiers() {
        let p = decode("VCBLSN");
        assert_eq!(p.phenomenon(), PhenomenonCode::Snow);
        assert_eq!(p.num_codes(), 1);
        assert!(p.vicinity());
        assert!(p.blowing());
        assert!(!p.freezing());
    }

    #[test]
    fn decodes_shower_in_vicinity() {
        let p = decode("VCSH");
        assert_eq!(p.phenomenon(), PhenomenonCode::Shower);
        assert!(p.shower());
        assert!(p.vicinity());
    }

    #[test]
    fn decodes_thunderstorm() {
        let p = decode("-TSRA");
        assert_eq!(p.phenomenon(), PhenomenonCode::Rain);
        assert_eq!(p.intensity(), Intensity::Light);
        assert!(p.thunderstorm());
    }

    #[test]
    fn decodes_thunderstorm_without_precipitation() {
        let p = decode("TS");
        assert_eq!(p.phenomenon(), PhenomenonCode::Thunderstorm);
        assert_eq!(p.num_codes(), 1);
        assert_eq!(p.intensity(), Intensity::Normal);
        assert!(p.thunderstorm());

        let p = decode("VCTS");
        assert_eq!(p.codes(), &[PhenomenonCode::Thunderstorm]);
        assert!(p.vicinity());
        assert!(p.thunderstorm());

        assert_eq!(decode("+TS").intensity(), Intensity::Heavy);
    }

    #[test]
    fn thunderstorm_with_precipitation_is_a_flag() {
        let p = decode("TSRA");
        assert_eq!(p.codes(), &[PhenomenonCode::Rain]);
        assert!(p.thunderstorm());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_phenomenon_without_codes() {
        let raw = RawPhenomenon {
            codes: Vec::new(),
            intensity: Intensity::Normal,
            modifiers: Vec::new(),
            thunderstorm: true,
            temporary: false,
        };
        assert!(Phenomenon::try_from(raw).is_err());

        let raw = RawPhenomenon {
            codes: vec![PhenomenonCode::Rain],
            intensity: Intensity::Light,
            modifiers: Vec::new(),
            thunderstorm: false,
            temporary: false,
        };
        assert_eq!(Phenomenon::try_from(raw), Ok(decode("-RA")));
    }

    #[test]
    fn bundles_codes_of_group() {
        let p = decode("-RABR");
        assert_eq!(p.num_codes(), 2);
        assert_eq!(p.get(0), Some(PhenomenonCode::Rain));
        assert_eq!(p.get(1), Some(PhenomenonCode::Mist));
        assert_eq!(p.get(2), None);
    }

    #[test]
    fn composes_sleet() {
        let p = decode("RASN");
        assert_eq!(p.codes(), &[PhenomenonCode::Sleet]);

        let p = decode("+SNRABR");
        assert_eq!(p.codes(), &[PhenomenonCode::Sleet, PhenomenonCode::Mist]);
        assert_eq!(p.intensity(), Intensity::Heavy);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            "RAB06".parse::<Phenomenon>(),
            Err(Error::UnexpectedGroup {
                group: "RAB06".to_string(),
                expected: "a present weather group"
            })
        );
        assert_eq!(
            "DSNT".parse::<Phenomenon>(),
            Err(Error::UnknownPhenomenon {
                group: "DSNT".to_string(),
                code: "NT".to_string()
            })
        );
        assert!("-".parse::<Phenomenon>().is_err());
        assert!("VC".parse::<Phenomenon>().is_err());
        assert!("PRESFR".parse::<Phenomenon>().is_err());
        assert!("TSB0854".parse::<Phenomenon>().is_err());
    }

    #[test]
    fn displays_phenomenon() {
        assert_eq!(decode("-TSRA").to_string(), "light thunderstorm rain");
        assert_eq!(decode("VCSH").to_string(), "shower in the vicinity");
        assert_eq!(decode("+BLSN").to_string(), "heavy blowing snow");
        assert_eq!(decode("RABR").to_string(), "rain and mist");
        assert_eq!(decode("TS").to_string(), "thunderstorm");
        assert_eq!(decode("VCTS").to_string(), "thunderstorm in the vicinity");
        assert_eq!(decode("+SNRABR").to_string(), "heavy sleet and mist");
    }
}

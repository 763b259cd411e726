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

use std::convert::Infallible;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::decoder;
use crate::groups::*;

/// Maximum number of sky conditions kept per report.
pub const MAX_CLOUD_LAYERS: usize = 3;

/// A decoded METAR or SPECI.
///
/// Every field is optional and is `None` if the report contains no group for
/// it. The report is decoded group by group and any group that can't be
/// decoded is skipped. Thus, decoding never fails and an empty report has all
/// fields absent.
///
/// # Examples
///
/// ```
/// use metar::{Cover, Metar, SpeedUnit};
///
/// let metar = Metar::new("KSTL 231751Z 27009KT 10SM OVC015 09/06 A3029");
///
/// assert_eq!(metar.icao(), Some("KSTL"));
/// assert_eq!(metar.wind_direction(), Some(270));
/// assert_eq!(metar.wind_speed_units(), Some(SpeedUnit::Knots));
/// assert_eq!(metar.layer(0).map(|layer| layer.cover()), Some(Cover::Overcast));
/// assert!(!metar.has_sea_level_pressure());
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metar {
    pub(crate) report_type: Option<ReportType>,
    pub(crate) station: Option<Station>,
    pub(crate) time: Option<ObservationTime>,
    pub(crate) wind: Option<Wind>,
    pub(crate) wind_variation: Option<WindVariation>,
    pub(crate) visibility: Option<Visibility>,
    pub(crate) vertical_visibility: Option<VerticalVisibility>,
    pub(crate) layers: Vec<SkyCondition>,
    pub(crate) temperature: Option<Temperature>,
    pub(crate) precise_temperature: Option<PreciseTemperature>,
    pub(crate) altimeter: Option<Altimeter>,
    pub(crate) qnh: Option<Qnh>,
    pub(crate) sea_level_pressure: Option<SeaLevelPressure>,
    pub(crate) phenomena: Vec<Phenomenon>,
}

impl Metar {
    /// Decodes the report.
    pub fn new(report: &str) -> Self {
        let mut metar = Self::default();
        metar.parse(report);
        metar
    }

    /// Decodes the report into this metar.
    ///
    /// Fields that are already present are kept, while sky conditions (up to
    /// [`MAX_CLOUD_LAYERS`]) and phenomena are added to the present ones.
    pub fn parse(&mut self, report: &str) {
        decoder::decode(self, report);
    }

    presence! {
        has_report_type => report_type,
        has_icao => icao,
        has_day => day,
        has_hour => hour,
        has_minute => minute,
        has_wind_direction => wind_direction,
        has_wind_speed => wind_speed,
        has_wind_gust => wind_gust,
        has_wind_speed_units => wind_speed_units,
        has_min_wind_direction => min_wind_direction,
        has_max_wind_direction => max_wind_direction,
        has_visibility => visibility,
        has_visibility_units => visibility_units,
        has_vertical_visibility => vertical_visibility,
        has_temperature => temperature,
        has_dew_point => dew_point,
        has_precise_temperature => precise_temperature,
        has_precise_dew_point => precise_dew_point,
        has_altimeter_a => altimeter_a,
        has_altimeter_q => altimeter_q,
        has_sea_level_pressure => sea_level_pressure,
    }

    pub fn report_type(&self) -> Option<ReportType> {
        self.report_type
    }

    /// ICAO location indicator of the station.
    pub fn icao(&self) -> Option<&str> {
        self.station.as_ref().map(Station::as_str)
    }

    pub fn day(&self) -> Option<u8> {
        self.time.map(|time| time.day)
    }

    pub fn hour(&self) -> Option<u8> {
        self.time.map(|time| time.hour)
    }

    pub fn minute(&self) -> Option<u8> {
        self.time.map(|time| time.minute)
    }

    pub fn wind(&self) -> Option<&Wind> {
        self.wind.as_ref()
    }

    /// Wind direction in degrees.
    ///
    /// The direction is `None` if the wind [is variable].
    ///
    /// [is variable]: Self::is_variable_wind_direction
    pub fn wind_direction(&self) -> Option<u16> {
        match self.wind?.direction {
            WindDirection::Degrees(deg) => Some(deg),
            WindDirection::Variable => None,
        }
    }

    pub fn is_variable_wind_direction(&self) -> bool {
        self.wind
            .is_some_and(|wind| wind.direction == WindDirection::Variable)
    }

    pub fn wind_speed(&self) -> Option<u16> {
        self.wind.map(|wind| wind.speed)
    }

    pub fn wind_gust(&self) -> Option<u16> {
        self.wind.and_then(|wind| wind.gust)
    }

    pub fn wind_speed_units(&self) -> Option<SpeedUnit> {
        self.wind.map(|wind| wind.unit)
    }

    pub fn min_wind_direction(&self) -> Option<u16> {
        self.wind_variation.map(|variation| variation.min)
    }

    pub fn max_wind_direction(&self) -> Option<u16> {
        self.wind_variation.map(|variation| variation.max)
    }

    /// Prevailing visibility in [`visibility_units`](Self::visibility_units).
    ///
    /// The visibility is `None` if the report is [CAVOK](Self::is_cavok).
    pub fn visibility(&self) -> Option<f64> {
        match self.visibility? {
            Visibility::Distance { value, .. } => Some(value),
            Visibility::Cavok => None,
        }
    }

    pub fn visibility_units(&self) -> Option<DistanceUnit> {
        match self.visibility? {
            Visibility::Distance { unit, .. } => Some(unit),
            Visibility::Cavok => None,
        }
    }

    /// Returns `true` if the visibility is less than the reported value.
    pub fn is_visibility_less_than(&self) -> bool {
        matches!(
            self.visibility,
            Some(Visibility::Distance {
                less_than: true,
                ..
            })
        )
    }

    pub fn is_cavok(&self) -> bool {
        self.visibility == Some(Visibility::Cavok)
    }

    /// Vertical visibility in feet.
    pub fn vertical_visibility(&self) -> Option<u32> {
        self.vertical_visibility.map(|vv| vv.0)
    }

    pub fn num_cloud_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns the sky condition at `index` or `None` if out of bounds.
    pub fn layer(&self, index: usize) -> Option<&SkyCondition> {
        self.layers.get(index)
    }

    /// Returns the sky conditions in report order.
    pub fn layers(&self) -> &[SkyCondition] {
        &self.layers
    }

    /// Air temperature in degrees Celsius.
    pub fn temperature(&self) -> Option<i16> {
        self.temperature.map(|t| t.air)
    }

    /// Dew point in degrees Celsius.
    pub fn dew_point(&self) -> Option<i16> {
        self.temperature.and_then(|t| t.dew_point)
    }

    /// Air temperature in degrees Celsius with one decimal from the remarks.
    pub fn precise_temperature(&self) -> Option<f64> {
        self.precise_temperature.map(|t| t.air)
    }

    /// Dew point in degrees Celsius with one decimal from the remarks.
    pub fn precise_dew_point(&self) -> Option<f64> {
        self.precise_temperature.map(|t| t.dew_point)
    }

    /// Altimeter setting in inches of mercury.
    pub fn altimeter_a(&self) -> Option<f64> {
        self.altimeter.map(|a| a.0)
    }

    /// Altimeter setting in hectopascal.
    pub fn altimeter_q(&self) -> Option<u16> {
        self.qnh.map(|q| q.0)
    }

    /// Sea level pressure in hectopascal.
    pub fn sea_level_pressure(&self) -> Option<f64> {
        self.sea_level_pressure.map(|slp| slp.0)
    }

    pub fn num_phenomena(&self) -> usize {
        self.phenomena.len()
    }

    /// Returns the phenomenon at `index` or `None` if out of bounds.
    pub fn phenomenon(&self, index: usize) -> Option<&Phenomenon> {
        self.phenomena.get(index)
    }

    /// Returns the present weather in report order.
    pub fn phenomena(&self) -> &[Phenomenon] {
        &self.phenomena
    }
}

impl From<&str> for Metar {
    fn from(report: &str) -> Self {
        Self::new(report)
    }
}

impl FromStr for Metar {
    type Err = Infallible;

    fn from_str(report: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(report))
    }
}

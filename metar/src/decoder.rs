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

//! Dispatches the groups of a report to their decoders.
//!
//! Each group is classified by the first kind of group in report order whose
//! shape it has and whose field isn't decoded yet. Groups of no known kind
//! are tried as present weather and dropped if that fails too. Every group is
//! decoded at most once and decoding never goes back to a previous group, but
//! the previous group is kept to complete a visibility like `2 1/2SM`.

use log::{debug, trace};

use crate::group::Group;
use crate::groups::*;
use crate::metar::MAX_CLOUD_LAYERS;
use crate::{Error, Metar};

/// Kind of a group that maps to a field of the [`Metar`].
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum GroupKind {
    ReportType,
    Station,
    ObservationTime,
    Wind,
    WindVariation,
    Visibility,
    SkyCondition,
    VerticalVisibility,
    Temperature,
    Altimeter,
    Qnh,
    SeaLevelPressure,
    PreciseTemperature,
}

/// Section of the report a group is in.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
enum Section {
    #[default]
    Observation,
    /// Trend of temporary changes following `TEMPO`.
    Temporary,
    /// Remarks following `RMK`.
    Remarks,
}

fn classify(metar: &Metar, group: &str) -> Option<GroupKind> {
    // just a convenience...
    macro_rules! kind {
        ($field:ident, $kind:ident) => {
            if metar.$field.is_none() && $kind::matches(group) {
                return Some(GroupKind::$kind);
            }
        };
    }

    kind!(report_type, ReportType);
    kind!(station, Station);
    kind!(time, ObservationTime);
    kind!(wind, Wind);
    kind!(wind_variation, WindVariation);
    kind!(visibility, Visibility);

    if metar.layers.len() < MAX_CLOUD_LAYERS && SkyCondition::matches(group) {
        return Some(GroupKind::SkyCondition);
    }

    kind!(vertical_visibility, VerticalVisibility);
    kind!(temperature, Temperature);
    kind!(altimeter, Altimeter);
    kind!(qnh, Qnh);
    kind!(sea_level_pressure, SeaLevelPressure);
    kind!(precise_temperature, PreciseTemperature);

    None
}

/// Returns the decoded value or logs why the group is skipped.
fn logged<T>(group: &str, result: Result<T, Error>) -> Option<T> {
    result
        .map_err(|err| debug!("skipping group {group}: {err}"))
        .ok()
}

fn decoded<G: Group>(group: &str) -> Option<G> {
    logged(group, G::decode(group))
}

/// Decodes all groups of the report into the metar.
///
/// Fields that are already decoded are kept.
pub(crate) fn decode(metar: &mut Metar, report: &str) {
    let mut previous: Option<&str> = None;
    let mut section = Section::default();

    for group in report.split_whitespace() {
        match classify(metar, group) {
            Some(kind) => {
                trace!("decoding {group} as {kind:?}");
                decode_group(metar, kind, group, previous, section);
            }
            None => match group {
                "TEMPO" => section = Section::Temporary,
                "RMK" => section = Section::Remarks,
                _ => decode_phenomenon(metar, group, section),
            },
        }

        previous = Some(group);
    }
}

fn decode_group(
    metar: &mut Metar,
    kind: GroupKind,
    group: &str,
    previous: Option<&str>,
    section: Section,
) {
    match kind {
        GroupKind::ReportType => metar.report_type = decoded(group),
        GroupKind::Station => metar.station = decoded(group),
        GroupKind::ObservationTime => metar.time = decoded(group),
        GroupKind::Wind => metar.wind = decoded(group),
        GroupKind::WindVariation => metar.wind_variation = decoded(group),
        GroupKind::Visibility => {
            metar.visibility = logged(group, Visibility::decode_after(group, previous));
        }
        GroupKind::SkyCondition => {
            if let Some(layer) = decoded::<SkyCondition>(group) {
                metar.layers.push(match section {
                    Section::Temporary => layer.into_temporary(),
                    _ => layer,
                });
            }
        }
        GroupKind::VerticalVisibility => metar.vertical_visibility = decoded(group),
        GroupKind::Temperature => metar.temperature = decoded(group),
        GroupKind::Altimeter => metar.altimeter = decoded(group),
        GroupKind::Qnh => metar.qnh = decoded(group),
        GroupKind::SeaLevelPressure => metar.sea_level_pressure = decoded(group),
        GroupKind::PreciseTemperature => metar.precise_temperature = decoded(group),
    }
}

fn decode_phenomenon(metar: &mut Metar, group: &str, section: Section) {
    let Some(phenomenon) = logged(group, group.parse::<Phenomenon>()) else {
        return;
    };

    // remarks like "TS SE MOV NE" locate a thunderstorm already reported
    if section == Section::Remarks && phenomenon.codes() == [PhenomenonCode::Thunderstorm] {
        debug!("skipping thunderstorm {group} in remarks");
        return;
    }

    trace!("decoding {group} as {phenomenon}");
    metar.phenomena.push(match section {
        Section::Temporary => phenomenon.into_temporary(),
        _ => phenomenon,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_in_report_order() {
        let metar = Metar::default();
        assert_eq!(classify(&metar, "METAR"), Some(GroupKind::ReportType));
        assert_eq!(classify(&metar, "KSTL"), Some(GroupKind::Station));
        assert_eq!(classify(&metar, "231751Z"), Some(GroupKind::ObservationTime));
        assert_eq!(classify(&metar, "27009KT"), Some(GroupKind::Wind));
        assert_eq!(classify(&metar, "090V150"), Some(GroupKind::WindVariation));
        assert_eq!(classify(&metar, "1400"), Some(GroupKind::Visibility));
        assert_eq!(classify(&metar, "OVC015"), Some(GroupKind::SkyCondition));
        assert_eq!(classify(&metar, "VV007"), Some(GroupKind::VerticalVisibility));
        assert_eq!(classify(&metar, "M04/M07"), Some(GroupKind::Temperature));
        assert_eq!(classify(&metar, "A3029"), Some(GroupKind::Altimeter));
        assert_eq!(classify(&metar, "Q1020"), Some(GroupKind::Qnh));
        assert_eq!(classify(&metar, "SLP260"), Some(GroupKind::SeaLevelPressure));
        assert_eq!(
            classify(&metar, "T00940061"),
            Some(GroupKind::PreciseTemperature)
        );
        assert_eq!(classify(&metar, "-RA"), None);
    }

    #[test]
    fn skips_decoded_fields() {
        let metar = Metar::new("231751Z");

        // the same shape falls through to the wind
        assert_eq!(classify(&metar, "241751Z"), Some(GroupKind::Wind));

        let metar = Metar::new("KSTL");
        assert_eq!(classify(&metar, "RASN"), None);
    }

    #[test]
    fn skips_layers_above_limit() {
        let metar = Metar::new("FEW010 SCT020 BKN030");
        assert_eq!(classify(&metar, "OVC040"), None);
    }

    #[test]
    fn marks_temporary_trend() {
        let metar = Metar::new("KSTL -RA FEW010 TEMPO +TSRA BKN005CB RMK VCSH");

        assert!(!metar.layers[0].temporary());
        assert!(metar.layers[1].temporary());

        assert!(!metar.phenomena[0].temporary());
        assert!(metar.phenomena[1].temporary());
        assert!(!metar.phenomena[2].temporary());
    }

    #[test]
    fn decodes_thunderstorm_outside_remarks() {
        let metar = Metar::new("KSTL TS VCTS TEMPO +TS RMK TS SE MOV NE");

        assert_eq!(metar.phenomena.len(), 3);
        assert!(metar
            .phenomena
            .iter()
            .all(|p| p.phenomenon() == PhenomenonCode::Thunderstorm));
        assert!(metar.phenomena[1].vicinity());
        assert!(metar.phenomena[2].temporary());
    }

    #[test]
    fn keeps_previous_group_for_visibility() {
        let metar = Metar::new("KSTL 2 1/2SM");
        assert_eq!(metar.visibility(), Some(2.5));

        // the previous group is kept even if it isn't decoded
        let metar = Metar::new("2 X 1/2SM");
        assert_eq!(metar.visibility(), Some(0.5));
    }
}

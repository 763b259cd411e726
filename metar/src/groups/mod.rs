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

//! The groups of a report.

mod phenomenon;
mod pressure;
mod sky;
mod station;
mod temperature;
mod time;
mod visibility;
mod wind;

pub use phenomenon::{Intensity, Modifier, Phenomenon, PhenomenonCode};
pub use pressure::{Altimeter, Qnh, SeaLevelPressure};
pub use sky::{CloudType, Cover, SkyCondition};
pub use station::{ReportType, Station};
pub use temperature::{PreciseTemperature, Temperature};
pub use time::ObservationTime;
pub use visibility::{DistanceUnit, VerticalVisibility, Visibility};
pub use wind::{SpeedUnit, Wind, WindDirection, WindVariation};

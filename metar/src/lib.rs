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

//! METAR and SPECI decoder.
//!
//! This crate decodes the aviation routine weather report (METAR) and the
//! special report (SPECI) into a [`Metar`]. A report is decoded group by group
//! where each [group] is classified by its shape and decoded into the
//! corresponding field. Groups that are unknown or malformed are skipped, thus
//! decoding never fails and every field is optional.
//!
//! # Examples
//!
//! Lets decode a report of St. Louis Lambert Intl:
//!
//! ```
//! use metar::{Cover, Metar, PhenomenonCode};
//!
//! let metar = Metar::new(
//!     "METAR KSTL 231751Z 27009G17KT 2 1/2SM -RA BR OVC015 09/06 A3029 RMK SLP260 T00940061",
//! );
//!
//! assert_eq!(metar.icao(), Some("KSTL"));
//! assert_eq!(metar.wind_gust(), Some(17));
//! assert_eq!(metar.visibility(), Some(2.5));
//! assert_eq!(metar.altimeter_a(), Some(30.29));
//! assert_eq!(metar.precise_temperature(), Some(9.4));
//!
//! // the present weather is kept in report order
//! let weather: Vec<String> = metar.phenomena().iter().map(|p| p.to_string()).collect();
//! assert_eq!(weather, ["light rain", "mist"]);
//! assert_eq!(metar.phenomenon(1).map(|p| p.phenomenon()), Some(PhenomenonCode::Mist));
//!
//! for layer in metar.layers() {
//!     println!("{layer}"); // => "overcast at 1500 ft"
//! }
//! # assert_eq!(metar.layer(0).map(|layer| layer.cover()), Some(Cover::Overcast));
//! ```
//!
//! [group]: crate::Group

#[macro_use]
mod macros;

mod decoder;
mod error;
mod group;
pub mod groups;
mod metar;
pub mod pattern;

pub use error::Error;
pub use group::Group;
pub use groups::*;
pub use metar::{Metar, MAX_CLOUD_LAYERS};

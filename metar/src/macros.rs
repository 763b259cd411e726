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

/// Defines an enum of report codes with a constant code table.
///
/// Each variant is listed with the code as written in a report and an English
/// description, e.g. `Overcast = "OVC", "overcast"`. The generated enum gets
/// a `CODES` table, `code`, `description`, `from_code`, `from_prefix` and a
/// `Display` that writes the code.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal, $desc:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// All variants with their code as written in a report.
            pub const CODES: &'static [(&'static str, Self)] = &[$(($code, Self::$variant),)+];

            /// Returns the code as written in a report.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Returns an English description.
            pub fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $desc,)+
                }
            }

            /// Looks up the variant whose code equals `code`.
            #[allow(dead_code)]
            pub(crate) fn from_code(code: &str) -> Option<Self> {
                Self::CODES
                    .iter()
                    .find(|(c, _)| *c == code)
                    .map(|(_, variant)| *variant)
            }

            /// Looks up the variant whose code `group` starts with.
            #[allow(dead_code)]
            pub(crate) fn from_prefix(group: &str) -> Option<Self> {
                Self::CODES
                    .iter()
                    .find(|(c, _)| group.starts_with(*c))
                    .map(|(_, variant)| *variant)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

/// Implements `has_*` predicates for optional getters of a record.
macro_rules! presence {
    ($($has:ident => $get:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Returns `true` if [`", stringify!($get), "`](Self::", stringify!($get), ") is present.")]
            #[inline]
            pub fn $has(&self) -> bool {
                self.$get().is_some()
            }
        )+
    };
}

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

//! Group patterns.
//!
//! A pattern is a literal string where `#` matches any decimal digit and `$`
//! matches any ASCII letter. All other characters must match literally, e.g.
//! `"SLP###"` matches the sea level pressure group `SLP177`.

#[inline]
fn match_byte(pattern: u8, byte: u8) -> bool {
    match pattern {
        b'#' => byte.is_ascii_digit(),
        b'$' => byte.is_ascii_alphabetic(),
        _ => pattern == byte,
    }
}

#[inline]
fn match_bytes(pattern: &[u8], bytes: &[u8]) -> bool {
    pattern
        .iter()
        .zip(bytes)
        .all(|(&p, &b)| match_byte(p, b))
}

/// Returns `true` if the group has the same length as the pattern and every
/// character matches.
pub fn matches(pattern: &str, group: &str) -> bool {
    pattern.len() == group.len() && match_bytes(pattern.as_bytes(), group.as_bytes())
}

/// Returns `true` if the group starts with the pattern.
///
/// Any characters following the pattern's length are ignored.
pub fn starts_with(pattern: &str, group: &str) -> bool {
    pattern.len() <= group.len() && match_bytes(pattern.as_bytes(), group.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_wildcards() {
        assert!(matches("######Z", "231751Z"));
        assert!(matches("$$$$", "KSTL"));
        assert!(matches("M##/M##", "M04/M07"));
        assert!(!matches("$$$$", "KST1"));
        assert!(!matches("####", "1400M"));
        assert!(!matches("#", ""));
        assert!(matches("", ""));
    }

    #[test]
    fn matches_prefix() {
        assert!(starts_with("#####", "27009KT"));
        assert!(starts_with("VRB", "VRB04KT"));
        assert!(starts_with("VRB", "VRB"));
        assert!(!starts_with("#####", "2700"));
        assert!(!starts_with("OVC", "OV"));
    }

    #[test]
    fn digit_wildcard_rejects_letters() {
        assert!(!matches("A####", "AB006"));
        assert!(!matches("$", "1"));
    }
}

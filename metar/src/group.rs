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

use std::str::FromStr;

use crate::Error;

/// A group of a report.
///
/// Each kind of group that maps to a field of a [`Metar`](crate::Metar)
/// implements this trait. The group is first [classified](Group::matches) by
/// its shape and then [decoded](Group::decode).
pub trait Group: Sized {
    /// Name of the group used in logs and errors.
    const NAME: &'static str;

    /// Returns `true` if the group has the shape of this kind of group.
    fn matches(group: &str) -> bool;

    /// Decodes the group.
    ///
    /// # Errors
    ///
    /// Returns an error if the group doesn't have the expected shape or
    /// contains no number where one is expected.
    fn decode(group: &str) -> Result<Self, Error>;
}

/// Reads the decimal number starting at `start` from up to `len` digits.
///
/// The number ends at the first non-digit, so `"05KT"` reads as `5` when
/// three digits are requested.
pub(crate) fn number<T: FromStr>(group: &str, start: usize, len: usize) -> Result<T, Error> {
    let digits = group
        .get(start..)
        .map(|rest| {
            let end = rest
                .bytes()
                .take(len)
                .take_while(u8::is_ascii_digit)
                .count();
            &rest[..end]
        })
        .unwrap_or_default();

    digits.parse().map_err(|_| Error::NotANumber {
        group: group.to_string(),
    })
}

/// Returns an error that the group isn't of kind `G`.
pub(crate) fn unexpected<G: Group>(group: &str) -> Error {
    Error::UnexpectedGroup {
        group: group.to_string(),
        expected: G::NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_numbers() {
        assert_eq!(number::<u16>("27009KT", 0, 3), Ok(270));
        assert_eq!(number::<u16>("27009KT", 3, 3), Ok(9));
        assert_eq!(number::<u16>("VRB105G121KT", 3, 3), Ok(105));
        assert_eq!(number::<u32>("A3029", 1, usize::MAX), Ok(3029));
    }

    #[test]
    fn fails_without_digits() {
        assert_eq!(
            number::<u16>("VRB", 3, 3),
            Err(Error::NotANumber {
                group: "VRB".to_string()
            })
        );
        assert!(number::<u16>("BKN///", 3, 3).is_err());
        assert!(number::<u16>("FEW", 10, 3).is_err());
    }
}

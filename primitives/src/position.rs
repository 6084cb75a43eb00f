// Copyright 2026 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// The side of a binary market a bet is placed on.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
#[derive(
    Clone,
    Copy,
    Decode,
    Encode,
    Eq,
    MaxEncodedLen,
    Ord,
    PartialEq,
    PartialOrd,
    RuntimeDebug,
    TypeInfo,
)]
pub enum Position {
    Yes,
    No,
}

impl Position {
    pub fn opposite(self) -> Self {
        match self {
            Position::Yes => Position::No,
            Position::No => Position::Yes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Position::Yes, Position::No)]
    #[test_case(Position::No, Position::Yes)]
    fn opposite_flips_the_side(position: Position, expected: Position) {
        assert_eq!(position.opposite(), expected);
        assert_eq!(position.opposite().opposite(), position);
    }

    #[test]
    fn position_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Position::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::from_str::<Position>("\"no\"").unwrap(), Position::No);
        assert!(serde_json::from_str::<Position>("\"maybe\"").is_err());
    }
}

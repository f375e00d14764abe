// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use crate::Error;

/// Power-of-two size suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Suffix {
    /// Kibibytes
    Kibi = 10,
    /// Mebibytes
    Mebi = 20,
    /// Gibibytes
    Gibi = 30,
    /// Tebibytes
    Tebi = 40,
    /// Pebibytes
    Pebi = 50,
}

impl Suffix {
    /// Look up the suffix for a single character, ignoring case
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'K' => Some(Self::Kibi),
            'M' => Some(Self::Mebi),
            'G' => Some(Self::Gibi),
            'T' => Some(Self::Tebi),
            'P' => Some(Self::Pebi),
            _ => None,
        }
    }

    /// Left-shift applied to the numeral
    pub fn shift(self) -> u32 {
        self as u32
    }

    /// Number of bytes in one unit of this suffix
    pub fn multiplier(self) -> i64 {
        1 << self.shift()
    }
}

impl TryFrom<char> for Suffix {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value).ok_or(Error::InvalidSuffix { suffix: value })
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suffix::Kibi => f.write_str("K"),
            Suffix::Mebi => f.write_str("M"),
            Suffix::Gibi => f.write_str("G"),
            Suffix::Tebi => f.write_str("T"),
            Suffix::Pebi => f.write_str("P"),
        }
    }
}

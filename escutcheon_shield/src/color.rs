// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use peniko::Color;

/// One of the nine canonical shield colors.
///
/// Every color token accepted in a badge spec, including the aliases, maps
/// onto exactly one of these variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    /// `brightgreen`, `#44cc11`.
    BrightGreen,
    /// `green`, `#97ca00`.
    Green,
    /// `yellow`, `#dfb317`.
    Yellow,
    /// `yellowgreen`, `#a4a61d`.
    YellowGreen,
    /// `orange`, `#fe7d37`.
    Orange,
    /// `red`, `#e05d44`.
    Red,
    /// `blue`, `#007ec6`.
    Blue,
    /// `grey`, `#555555`.
    Grey,
    /// `lightgrey`, `#9f9f9f`.
    LightGrey,
}

/// Alias tokens and the canonical color each one stands for.
///
/// Consulted before the canonical tokens in [`NamedColor::resolve`].
const ALIASES: &[(&str, NamedColor)] = &[
    ("gray", NamedColor::Grey),
    ("lightgray", NamedColor::LightGrey),
    ("critical", NamedColor::Red),
    ("important", NamedColor::Orange),
    ("success", NamedColor::BrightGreen),
    ("informational", NamedColor::Blue),
    ("inactive", NamedColor::LightGrey),
];

impl NamedColor {
    /// All canonical colors, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::BrightGreen,
        Self::Green,
        Self::Yellow,
        Self::YellowGreen,
        Self::Orange,
        Self::Red,
        Self::Blue,
        Self::Grey,
        Self::LightGrey,
    ];

    /// Resolve a color token, ignoring ASCII case.
    ///
    /// Returns `None` when the token is neither a canonical name nor a known
    /// alias.
    pub fn resolve(name: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|color| color.token().eq_ignore_ascii_case(name))
            })
    }

    /// The canonical lowercase token for this color.
    pub const fn token(self) -> &'static str {
        match self {
            Self::BrightGreen => "brightgreen",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::YellowGreen => "yellowgreen",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Grey => "grey",
            Self::LightGrey => "lightgrey",
        }
    }

    /// The 8-bit sRGB components of this color.
    pub const fn rgb8(self) -> [u8; 3] {
        match self {
            Self::BrightGreen => [0x44, 0xcc, 0x11],
            Self::Green => [0x97, 0xca, 0x00],
            Self::Yellow => [0xdf, 0xb3, 0x17],
            Self::YellowGreen => [0xa4, 0xa6, 0x1d],
            Self::Orange => [0xfe, 0x7d, 0x37],
            Self::Red => [0xe0, 0x5d, 0x44],
            Self::Blue => [0x00, 0x7e, 0xc6],
            Self::Grey => [0x55, 0x55, 0x55],
            Self::LightGrey => [0x9f, 0x9f, 0x9f],
        }
    }

    /// The opaque paint color.
    pub fn color(self) -> Color {
        let [r, g, b] = self.rgb8();
        Color::from_rgb8(r, g, b)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

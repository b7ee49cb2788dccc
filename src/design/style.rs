//! Closed style vocabularies for a quote design.
//!
//! Every option is a plain enum serialized under its kebab-case name, so the
//! wire names match the names used in routes and query strings. `FromStr` is
//! strict; callers that must accept arbitrary input fall back through
//! `Default`, which is the documented default option of each vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A style name that is not part of its vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownStyle {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownStyle {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

macro_rules! style_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $($variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant,)+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name, identical to the serde representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Human-readable label for option pickers.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parses `value`, falling back to the default option.
            pub fn parse_or_default(value: &str) -> Self {
                value.parse().unwrap_or_default()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownStyle;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(UnknownStyle::new($kind, other)),
                }
            }
        }
    };
}

style_vocabulary! {
    /// Type family and treatment of the quote text.
    Typography, "typography", default = ClassicSerif {
        ClassicSerif => ("classic-serif", "Classic Serif"),
        BoldStatement => ("bold-statement", "Bold Statement"),
        MinimalModern => ("minimal-modern", "Minimal Modern"),
        Handwritten => ("handwritten", "Handwritten"),
        Editorial => ("editorial", "Editorial"),
        Poetic => ("poetic", "Poetic"),
    }
}

style_vocabulary! {
    /// How the print area behind the quote is filled.
    Background, "background", default = Solid {
        Solid => ("solid", "Solid"),
        Gradient => ("gradient", "Gradient"),
        Textured => ("textured", "Textured"),
        Photographic => ("photographic", "Photo"),
        Dark => ("dark", "Dark"),
    }
}

style_vocabulary! {
    /// Named color palette.
    Palette, "palette", default = WarmNeutrals {
        WarmNeutrals => ("warm-neutrals", "Warm Neutrals"),
        Midnight => ("midnight", "Midnight"),
        Ocean => ("ocean", "Ocean"),
        Earth => ("earth", "Earth"),
        Blush => ("blush", "Blush"),
        Monochrome => ("monochrome", "Monochrome"),
    }
}

style_vocabulary! {
    /// Horizontal text alignment.
    Alignment, "alignment", default = Center {
        Left => ("left", "Left"),
        Center => ("center", "Center"),
        Right => ("right", "Right"),
    }
}

style_vocabulary! {
    /// Three-tier quote size scale.
    QuoteSize, "quote size", default = Standard {
        Compact => ("compact", "Compact"),
        Standard => ("standard", "Standard"),
        Oversized => ("oversized", "Oversized"),
    }
}

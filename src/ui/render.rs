//! Render policy: pure functions from design style choices to concrete
//! visual parameters.
//!
//! Every function has a typed entry point that matches exhaustively over the
//! closed vocabularies, and a `*_named` entry point for untrusted names that
//! falls back to the documented default (`warm-neutrals`, `standard`, neutral
//! serif) instead of failing.

use serde::Serialize;

use crate::design::{Background, Palette, QuoteSize, Typography};
use crate::ui::theme::{
    DARK_ACCENT, DARK_FILL, DARK_TEXT, GRADIENT_ANGLE_DEG, PHOTO_OVERLAY_IMAGE,
    PHOTO_OVERLAY_OPACITY_PCT, TEXTURE_OVERLAY,
};

/// Base colors of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColors {
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

/// Two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientSpec {
    pub angle_deg: u16,
    pub from: &'static str,
    pub to: &'static str,
}

impl GradientSpec {
    pub fn css(&self) -> String {
        format!(
            "linear-gradient({}deg, {} 0%, {} 100%)",
            self.angle_deg, self.from, self.to
        )
    }
}

/// Instruction to compose a translucent photograph over the base fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoOverlay {
    pub image: &'static str,
    pub opacity_pct: u8,
}

/// How the print area is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FillSpec {
    Solid {
        color: &'static str,
    },
    Gradient(GradientSpec),
    Textured {
        color: &'static str,
        overlay: &'static str,
    },
    Photographic {
        color: &'static str,
        overlay: PhotoOverlay,
    },
}

impl FillSpec {
    /// Base color under any overlay. Gradients report their first stop.
    pub fn base_color(&self) -> &'static str {
        match self {
            FillSpec::Solid { color }
            | FillSpec::Textured { color, .. }
            | FillSpec::Photographic { color, .. } => *color,
            FillSpec::Gradient(gradient) => gradient.from,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    Serif,
    Sans,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    Light,
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tracking {
    Normal,
    Wide,
    Wider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Leading {
    Tight,
    Snug,
    Relaxed,
    Loose,
}

/// Resolved type treatment for the quote text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub italic: bool,
    pub uppercase: bool,
    pub tracking: Tracking,
    pub leading: Leading,
    /// Responsive size classes for the chosen family and size tier.
    pub size: &'static str,
}

impl StyleDescriptor {
    /// Utility class list for the web preview.
    pub fn class_list(&self) -> String {
        let mut classes = vec![
            match self.family {
                FontFamily::Serif => "font-serif",
                FontFamily::Sans => "font-sans",
            },
            self.size,
        ];
        if self.italic {
            classes.push("italic");
        }
        if self.uppercase {
            classes.push("uppercase");
        }
        match self.weight {
            FontWeight::Light => classes.push("font-light"),
            FontWeight::Regular => {}
            FontWeight::Bold => classes.push("font-bold"),
        }
        match self.tracking {
            Tracking::Normal => {}
            Tracking::Wide => classes.push("tracking-wide"),
            Tracking::Wider => classes.push("tracking-wider"),
        }
        classes.push(match self.leading {
            Leading::Tight => "leading-tight",
            Leading::Snug => "leading-snug",
            Leading::Relaxed => "leading-relaxed",
            Leading::Loose => "leading-loose",
        });
        classes.join(" ")
    }
}

pub fn resolve_palette(palette: Palette) -> PaletteColors {
    let (background, text, accent) = match palette {
        Palette::WarmNeutrals => ("#f5f0e8", "#2a2520", "#c4a882"),
        Palette::Midnight => ("#141414", "#f5f5f0", "#d4a853"),
        Palette::Ocean => ("#0f1c2e", "#f5f5f0", "#5eadb7"),
        Palette::Earth => ("#1a2e1a", "#f5f0e8", "#95b88a"),
        Palette::Blush => ("#f9eff2", "#3a2530", "#c08090"),
        Palette::Monochrome => ("#ffffff", "#111111", "#666666"),
    };
    PaletteColors {
        background,
        text,
        accent,
    }
}

pub fn resolve_palette_named(palette: &str) -> PaletteColors {
    resolve_palette(Palette::parse_or_default(palette))
}

pub fn resolve_gradient(palette: Palette) -> GradientSpec {
    let to = match palette {
        Palette::WarmNeutrals => "#e8ddd0",
        Palette::Midnight => "#2a2520",
        Palette::Ocean => "#1a3a4a",
        Palette::Earth => "#2a4020",
        Palette::Blush => "#f0dce5",
        Palette::Monochrome => "#e0e0e0",
    };
    GradientSpec {
        angle_deg: GRADIENT_ANGLE_DEG,
        from: resolve_palette(palette).background,
        to,
    }
}

pub fn resolve_gradient_named(palette: &str) -> GradientSpec {
    resolve_gradient(Palette::parse_or_default(palette))
}

pub fn resolve_background_fill(background: Background, palette: Palette) -> FillSpec {
    let base = resolve_palette(palette).background;
    match background {
        Background::Solid => FillSpec::Solid { color: base },
        Background::Gradient => FillSpec::Gradient(resolve_gradient(palette)),
        Background::Textured => FillSpec::Textured {
            color: base,
            overlay: TEXTURE_OVERLAY,
        },
        Background::Photographic => FillSpec::Photographic {
            color: base,
            overlay: PhotoOverlay {
                image: PHOTO_OVERLAY_IMAGE,
                opacity_pct: PHOTO_OVERLAY_OPACITY_PCT,
            },
        },
        Background::Dark => FillSpec::Solid { color: DARK_FILL },
    }
}

/// Unknown backgrounds resolve to a solid palette fill.
pub fn resolve_background_fill_named(background: &str, palette: &str) -> FillSpec {
    resolve_background_fill(
        Background::parse_or_default(background),
        Palette::parse_or_default(palette),
    )
}

fn size_scale(quote_size: QuoteSize, family: FontFamily) -> &'static str {
    match (quote_size, family) {
        (QuoteSize::Compact, FontFamily::Serif) => "text-lg md:text-xl",
        (QuoteSize::Compact, FontFamily::Sans) => "text-base md:text-lg",
        (QuoteSize::Standard, FontFamily::Serif) => "text-xl md:text-2xl lg:text-3xl",
        (QuoteSize::Standard, FontFamily::Sans) => "text-lg md:text-xl lg:text-2xl",
        (QuoteSize::Oversized, FontFamily::Serif) => "text-2xl md:text-4xl lg:text-5xl",
        (QuoteSize::Oversized, FontFamily::Sans) => "text-xl md:text-3xl lg:text-4xl",
    }
}

fn descriptor(
    family: FontFamily,
    weight: FontWeight,
    italic: bool,
    uppercase: bool,
    tracking: Tracking,
    leading: Leading,
    quote_size: QuoteSize,
) -> StyleDescriptor {
    StyleDescriptor {
        family,
        weight,
        italic,
        uppercase,
        tracking,
        leading,
        size: size_scale(quote_size, family),
    }
}

pub fn resolve_typography_style(typography: Typography, quote_size: QuoteSize) -> StyleDescriptor {
    use FontFamily::{Sans, Serif};
    use FontWeight::{Bold, Light, Regular};

    match typography {
        Typography::ClassicSerif => descriptor(
            Serif,
            Regular,
            true,
            false,
            Tracking::Normal,
            Leading::Relaxed,
            quote_size,
        ),
        Typography::BoldStatement => descriptor(
            Sans,
            Bold,
            false,
            true,
            Tracking::Wider,
            Leading::Tight,
            quote_size,
        ),
        Typography::MinimalModern => descriptor(
            Sans,
            Light,
            false,
            false,
            Tracking::Wide,
            Leading::Relaxed,
            quote_size,
        ),
        Typography::Handwritten => descriptor(
            Serif,
            Regular,
            true,
            false,
            Tracking::Normal,
            Leading::Loose,
            quote_size,
        ),
        Typography::Editorial => descriptor(
            Serif,
            Bold,
            false,
            false,
            Tracking::Normal,
            Leading::Snug,
            quote_size,
        ),
        Typography::Poetic => descriptor(
            Serif,
            Regular,
            true,
            false,
            Tracking::Wide,
            Leading::Loose,
            quote_size,
        ),
    }
}

/// Upright regular serif used when the typography name is not recognized.
pub fn neutral_serif(quote_size: QuoteSize) -> StyleDescriptor {
    descriptor(
        FontFamily::Serif,
        FontWeight::Regular,
        false,
        false,
        Tracking::Normal,
        Leading::Relaxed,
        quote_size,
    )
}

pub fn resolve_typography_style_named(typography: &str, quote_size: &str) -> StyleDescriptor {
    let quote_size = QuoteSize::parse_or_default(quote_size);
    match typography.parse::<Typography>() {
        Ok(typography) => resolve_typography_style(typography, quote_size),
        Err(_) => neutral_serif(quote_size),
    }
}

pub fn resolve_text_color(background: Background, palette: Palette) -> &'static str {
    match background {
        Background::Dark => DARK_TEXT,
        _ => resolve_palette(palette).text,
    }
}

pub fn resolve_accent_color(background: Background, palette: Palette) -> &'static str {
    match background {
        Background::Dark => DARK_ACCENT,
        _ => resolve_palette(palette).accent,
    }
}

pub fn resolve_text_color_named(background: &str, palette: &str) -> &'static str {
    resolve_text_color(
        Background::parse_or_default(background),
        Palette::parse_or_default(palette),
    )
}

pub fn resolve_accent_color_named(background: &str, palette: &str) -> &'static str {
    resolve_accent_color(
        Background::parse_or_default(background),
        Palette::parse_or_default(palette),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_starts_at_palette_background() {
        for palette in Palette::ALL {
            assert_eq!(
                resolve_gradient(*palette).from,
                resolve_palette(*palette).background
            );
        }
    }

    #[test]
    fn gradient_css() {
        assert_eq!(
            resolve_gradient(Palette::Ocean).css(),
            "linear-gradient(135deg, #0f1c2e 0%, #1a3a4a 100%)"
        );
    }

    #[test]
    fn class_list_for_classic_serif_standard() {
        let style = resolve_typography_style(Typography::ClassicSerif, QuoteSize::Standard);
        assert_eq!(
            style.class_list(),
            "font-serif text-xl md:text-2xl lg:text-3xl italic leading-relaxed"
        );
    }

    #[test]
    fn class_list_for_bold_statement_compact() {
        let style = resolve_typography_style(Typography::BoldStatement, QuoteSize::Compact);
        assert_eq!(
            style.class_list(),
            "font-sans text-base md:text-lg uppercase font-bold tracking-wider leading-tight"
        );
    }

    #[test]
    fn base_color_of_fills() {
        assert_eq!(
            resolve_background_fill(Background::Gradient, Palette::Blush).base_color(),
            "#f9eff2"
        );
        assert_eq!(
            resolve_background_fill(Background::Dark, Palette::Blush).base_color(),
            DARK_FILL
        );
    }

    #[test]
    fn fill_serializes_with_kind_tag() {
        let json = serde_json::to_value(resolve_background_fill(
            Background::Photographic,
            Palette::Earth,
        ))
        .unwrap();
        assert_eq!(json["kind"], "photographic");
        assert_eq!(json["color"], "#1a2e1a");
        assert_eq!(json["overlay"]["opacityPct"], 30);
    }
}

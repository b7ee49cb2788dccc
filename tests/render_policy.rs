use muse_inspire::design::{Background, Palette, QuoteSize, Typography};
use muse_inspire::ui::render::{
    neutral_serif, resolve_accent_color, resolve_accent_color_named, resolve_background_fill,
    resolve_gradient, resolve_palette, resolve_palette_named, resolve_text_color,
    resolve_text_color_named, resolve_typography_style, resolve_typography_style_named, FillSpec,
    FontFamily, FontWeight,
};

#[test]
fn palette_golden_values() {
    let warm = resolve_palette(Palette::WarmNeutrals);
    assert_eq!(
        (warm.background, warm.text, warm.accent),
        ("#f5f0e8", "#2a2520", "#c4a882")
    );
    let mono = resolve_palette(Palette::Monochrome);
    assert_eq!(
        (mono.background, mono.text, mono.accent),
        ("#ffffff", "#111111", "#666666")
    );
}

#[test]
fn unknown_palette_falls_back_to_warm_neutrals() {
    let warm = resolve_palette(Palette::WarmNeutrals);
    for name in ["", "neon", "MIDNIGHT ", "warm_neutrals", "🎨"] {
        assert_eq!(resolve_palette_named(name), warm, "input {name:?}");
    }
}

#[test]
fn gradient_runs_from_palette_base() {
    for palette in Palette::ALL {
        let gradient = resolve_gradient(*palette);
        assert_eq!(gradient.from, resolve_palette(*palette).background);
        assert_eq!(gradient.angle_deg, 135);
    }
    assert_eq!(
        resolve_gradient(Palette::Ocean).css(),
        "linear-gradient(135deg, #0f1c2e 0%, #1a3a4a 100%)"
    );
}

#[test]
fn background_fill_variants() {
    assert_eq!(
        resolve_background_fill(Background::Solid, Palette::Blush),
        FillSpec::Solid { color: "#f9eff2" }
    );
    assert!(matches!(
        resolve_background_fill(Background::Gradient, Palette::Blush),
        FillSpec::Gradient(_)
    ));
    assert!(matches!(
        resolve_background_fill(Background::Textured, Palette::Blush),
        FillSpec::Textured { color: "#f9eff2", .. }
    ));
    assert!(matches!(
        resolve_background_fill(Background::Photographic, Palette::Blush),
        FillSpec::Photographic { color: "#f9eff2", .. }
    ));
}

#[test]
fn dark_fill_ignores_palette() {
    let fills: Vec<FillSpec> = Palette::ALL
        .iter()
        .map(|p| resolve_background_fill(Background::Dark, *p))
        .collect();
    assert!(fills.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(fills[0].base_color(), "#141414");
}

#[test]
fn dark_background_overrides_text_and_accent() {
    for palette in Palette::ALL {
        assert_eq!(resolve_text_color(Background::Dark, *palette), "#f5f5f0");
        assert_eq!(resolve_accent_color(Background::Dark, *palette), "#d4a853");
    }
    assert_eq!(resolve_text_color_named("dark", "nonsense"), "#f5f5f0");
    assert_eq!(resolve_accent_color_named("dark", "blush"), "#d4a853");
}

#[test]
fn light_backgrounds_defer_to_palette() {
    for background in Background::ALL.iter().filter(|b| **b != Background::Dark) {
        for palette in Palette::ALL {
            let colors = resolve_palette(*palette);
            assert_eq!(resolve_text_color(*background, *palette), colors.text);
            assert_eq!(resolve_accent_color(*background, *palette), colors.accent);
        }
    }
}

#[test]
fn typography_descriptors() {
    let bold = resolve_typography_style(Typography::BoldStatement, QuoteSize::Standard);
    assert_eq!(bold.family, FontFamily::Sans);
    assert_eq!(bold.weight, FontWeight::Bold);
    assert!(bold.uppercase);

    let classic = resolve_typography_style(Typography::ClassicSerif, QuoteSize::Oversized);
    assert_eq!(classic.family, FontFamily::Serif);
    assert!(classic.italic);
    assert_eq!(classic.size, "text-2xl md:text-4xl lg:text-5xl");
}

#[test]
fn unknown_typography_and_size_fall_back() {
    assert_eq!(
        resolve_typography_style_named("gothic", "huge"),
        neutral_serif(QuoteSize::Standard)
    );
    assert_eq!(
        resolve_typography_style_named("poetic", "huge"),
        resolve_typography_style(Typography::Poetic, QuoteSize::Standard)
    );
    assert_eq!(
        resolve_typography_style_named("nope", "compact"),
        neutral_serif(QuoteSize::Compact)
    );
}

#[test]
fn policies_are_deterministic() {
    for typography in Typography::ALL {
        for size in QuoteSize::ALL {
            assert_eq!(
                resolve_typography_style(*typography, *size),
                resolve_typography_style(*typography, *size)
            );
        }
    }
    for background in Background::ALL {
        for palette in Palette::ALL {
            assert_eq!(
                resolve_background_fill(*background, *palette),
                resolve_background_fill(*background, *palette)
            );
        }
    }
}

mod common;

use muse_inspire::design::{
    Alignment, Background, Design, DesignPatch, Palette, QuoteSize, Typography,
};
use muse_inspire::session::DesignStore;

fn style(design: &Design) -> (Typography, Background, Palette, bool, Alignment, QuoteSize) {
    (
        design.typography,
        design.background,
        design.palette,
        design.show_author,
        design.alignment,
        design.quote_size,
    )
}

#[test]
fn initialize_generates_unique_ids() {
    let store = DesignStore::new();
    let first = store.initialize(common::curated("q-1"));
    let second = store.initialize(common::curated("q-1"));
    assert_ne!(first.id, second.id);
    assert!(first.id.as_str().starts_with("design-"));
    assert_eq!(store.current_design().unwrap().id, second.id);
}

#[test]
fn initialize_replaces_prior_design_without_merging() {
    let store = DesignStore::new();
    store.initialize(common::curated("q-1"));
    store.update(DesignPatch::new().palette(Palette::Ocean).typography(Typography::Poetic));

    let fresh = store.initialize(common::curated("q-2"));
    assert_eq!(fresh.palette, Palette::WarmNeutrals);
    assert_eq!(fresh.typography, Typography::ClassicSerif);
    assert_eq!(store.current_quote().unwrap().id, "q-2");
}

#[test]
fn quote_and_design_are_held_together() {
    let store = DesignStore::new();
    assert!(store.current_quote().is_none() && store.current_design().is_none());

    store.initialize(common::curated("q-3"));
    assert!(store.current_quote().is_some() && store.current_design().is_some());

    store.clear();
    assert!(store.current_quote().is_none() && store.current_design().is_none());
}

#[test]
fn partial_update_changes_only_named_fields() {
    let patches = [
        DesignPatch::new().typography(Typography::Editorial),
        DesignPatch::new().background(Background::Gradient),
        DesignPatch::new().show_author(false),
        DesignPatch::new()
            .alignment(Alignment::Left)
            .quote_size(QuoteSize::Oversized),
        DesignPatch::new(),
    ];

    for patch in patches {
        let store = DesignStore::new();
        let before = store.initialize(common::curated("q-5"));
        let after = store.update(patch.clone()).expect("design is active");

        let (t, b, p, s, a, q) = style(&before);
        assert_eq!(after.typography, patch.typography.unwrap_or(t));
        assert_eq!(after.background, patch.background.unwrap_or(b));
        assert_eq!(after.palette, patch.palette.unwrap_or(p));
        assert_eq!(after.show_author, patch.show_author.unwrap_or(s));
        assert_eq!(after.alignment, patch.alignment.unwrap_or(a));
        assert_eq!(after.quote_size, patch.quote_size.unwrap_or(q));
        assert_eq!(after.id, before.id);
        assert_eq!(after.quote, before.quote);
    }
}

#[test]
fn edit_changes_only_quote_text() {
    let store = DesignStore::new();
    let before = store.initialize(common::curated("q-10"));
    let after = store.edit_quote_text("  A new line of text.  ").unwrap();

    assert_eq!(after.quote.text, "A new line of text.");
    assert_eq!(after.quote.id, before.quote.id);
    assert_eq!(after.quote.author, before.quote.author);
    assert_eq!(after.quote.category, before.quote.category);
    assert_eq!(after.quote.tags, before.quote.tags);
    assert_eq!(after.id, before.id);
    assert_eq!(style(&after), style(&before));
}

#[test]
fn over_long_edit_is_rejected() {
    let store = DesignStore::new();
    let before = store.initialize(common::curated("q-10"));
    assert!(store.edit_quote_text(&"x".repeat(301)).is_none());
    assert_eq!(store.current_design().unwrap().quote.text, before.quote.text);
}

#[test]
fn clones_share_one_session() {
    let store = DesignStore::new();
    let view = store.clone();
    store.initialize(common::curated("q-6"));
    assert!(view.is_active());
    view.clear();
    assert!(!store.is_active());
}

#[test]
fn scenario_a_select_curated_quote() {
    let controller = common::controller();
    let design = controller.select("q-1").unwrap().design().clone();
    assert_eq!(design.quote.id, "q-1");
    assert_eq!(
        style(&design),
        (
            Typography::ClassicSerif,
            Background::Solid,
            Palette::WarmNeutrals,
            true,
            Alignment::Center,
            QuoteSize::Standard
        )
    );
}

#[test]
fn scenario_b_palette_and_alignment_update() {
    let controller = common::controller();
    controller.select("q-1").unwrap();
    let design = controller
        .change_style(
            DesignPatch::new()
                .palette(Palette::Midnight)
                .alignment(Alignment::Right),
        )
        .unwrap();
    assert_eq!(design.palette, Palette::Midnight);
    assert_eq!(design.alignment, Alignment::Right);
    assert_eq!(design.typography, Typography::ClassicSerif);
}

#[test]
fn scenario_c_blank_edit_changes_nothing() {
    let controller = common::controller();
    let before = controller.select("q-1").unwrap().design().clone();
    assert!(controller.edit_text("  ").is_none());
    let after = controller.store().current_design().unwrap();
    assert_eq!(after.quote, before.quote);
    assert_eq!(style(&after), style(&before));
}

#[test]
fn scenario_d_custom_quote_without_author() {
    let controller = common::controller();
    let design = controller.write_own("Make it count.", "   ").unwrap();
    assert_eq!(design.quote.author, "You");
    assert!(design.quote.id.starts_with("custom-"));
    assert_eq!(design.quote.tags, vec!["custom".to_string()]);
}

#[test]
fn scenario_e_update_after_abandon_is_noop() {
    let controller = common::controller();
    controller.select("q-1").unwrap();
    controller.abandon();
    assert!(controller
        .change_style(DesignPatch::new().palette(Palette::Blush))
        .is_none());
    assert!(!controller.store().is_active());
}

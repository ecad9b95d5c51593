use pretty_assertions::assert_eq;
use scalar_tokens::{
    ControlSize, FallbackPolicy, FontWeight, OverlayLevel, SemanticCategory, ThemeMode,
    TokenError, TokenSet, TokenState,
};

#[test]
fn shipped_tables_pass_the_integrity_check() {
    let report = TokenSet::default().validate();
    assert!(report.is_ok(), "{report}");
}

#[test]
fn global_state_defaults_to_builtin_tables() {
    let state = TokenState::get();
    assert_eq!(state.tokens(), &TokenSet::default());
    assert_eq!(state.fallback(), FallbackPolicy::Lenient);
    // Later initialization is ignored
    assert!(!TokenState::init(TokenSet::default(), FallbackPolicy::Strict));
    assert_eq!(TokenState::get().fallback(), FallbackPolicy::Lenient);
}

#[test]
fn spacing_and_sizing_accessors() {
    let spacing = scalar_tokens::spacing();
    assert_eq!(spacing.button_padding(ControlSize::Md).horizontal, 16.0);
    assert_eq!(spacing.radius(ControlSize::Sm), 4.0);

    let sizing = scalar_tokens::sizing();
    assert_eq!(sizing.button_height(ControlSize::Md), 40.0);
    assert_eq!(sizing.spacing("3xl"), Some(48.0));
}

const CUSTOM_TOKENS: &str = r##"
[colors.ink]
"100" = "#F0F0F0"
"900" = "#101010"

[semantic.light.text]
primary = "{Color/ink/900}"
broken = "{Color/ink/500}"

[semantic.light.overlay]
"30" = "{Color/ink/900}"

[semantic.dark.text]
primary = "{Color/ink/100}"

[composite.desktopLarge.heading.m.bold]
family = "{Typography/Family/Inter}"
size = "{Typography/Size/M}"
weight = "{Typography/Weight/Heavy}"
lineHeight = "{Typography/Line Height/M}"
letterSpacing = "{Typography/Letter Spacing/Tight}"
"##;

#[test]
fn substitute_tables_through_a_resolver() {
    let tokens = TokenSet::from_toml_str(CUSTOM_TOKENS).unwrap();
    let resolver = tokens.resolver();

    assert_eq!(
        resolver.resolve_semantic_color(SemanticCategory::Text, "primary", ThemeMode::Light),
        Ok("#101010")
    );
    // The dangling reference surfaces as the missing primitive
    assert_eq!(
        resolver.resolve_semantic_color(SemanticCategory::Text, "broken", ThemeMode::Light),
        Err(TokenError::UnknownShade {
            family: "ink".into(),
            shade: "500".into()
        })
    );
    assert_eq!(
        resolver.resolve_overlay_color(OverlayLevel::L30, ThemeMode::Light),
        Ok("rgba(16, 16, 16, 0.3)".to_string())
    );
    assert_eq!(
        resolver.resolve_overlay_color(OverlayLevel::L50, ThemeMode::Light),
        Err(TokenError::UnknownOverlayLevel("50".into()))
    );
    assert_eq!(
        resolver.resolve_semantic_color(SemanticCategory::Background, "brand", ThemeMode::Light),
        Err(TokenError::UnknownCategory("background".into()))
    );
}

#[test]
fn fallback_policy_on_substitute_composite() {
    let tokens = TokenSet::from_toml_str(CUSTOM_TOKENS).unwrap();

    let lenient = tokens
        .resolver()
        .get_typography_style("desktopLarge", "heading", "m", FontWeight::Bold)
        .unwrap();
    assert_eq!(lenient.weight, 700);
    assert_eq!(lenient.letter_spacing, -0.5);

    let strict = tokens
        .resolver()
        .with_fallback(FallbackPolicy::Strict)
        .get_typography_style("desktopLarge", "heading", "m", FontWeight::Bold);
    assert_eq!(
        strict,
        Err(TokenError::UnknownValue {
            property: "weight".into(),
            value: "Heavy".into()
        })
    );

    assert_eq!(
        tokens
            .resolver()
            .get_typography_style("desktopLarge", "heading", "m", FontWeight::Regular),
        Err(TokenError::WeightVariantNotFound {
            breakpoint: "desktopLarge".into(),
            category: "heading".into(),
            scale: "m".into(),
            weight: "regular".into()
        })
    );
}

#[test]
fn integrity_report_lists_substitute_breakage() {
    let report = TokenSet::from_toml_str(CUSTOM_TOKENS).unwrap().validate();
    let paths: Vec<&str> = report.failures.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "semantic.light.text.broken",
            "composite.desktopLarge.heading.m.bold",
        ]
    );
}

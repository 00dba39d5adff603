//! Style session integration tests

use implore_style::{
    AspectRatio, CycleProperty, FigureStyle, Marker, Runtime, StyleConfig, StyleError,
    StyleRegistry, StyleSession, StyleValue, DASHES, MARKERS, PALETTE,
};
use rstest::rstest;

fn session() -> StyleSession {
    StyleSession::with_runtime(StyleRegistry::library_defaults(), Runtime::Terminal)
}

fn figsize(session: &StyleSession) -> (f64, f64) {
    let dims = session
        .get("figure.figsize")
        .and_then(StyleValue::as_tuple)
        .expect("figure.figsize is a tuple");
    (dims[0], dims[1])
}

// === Base preset ===

#[rstest]
#[case("lines.linewidth", StyleValue::Float(1.0))]
#[case("lines.markeredgewidth", StyleValue::Float(0.0))]
#[case("lines.markersize", StyleValue::Int(6))]
#[case("font.size", StyleValue::Float(9.0))]
#[case("axes.linewidth", StyleValue::Float(0.5))]
#[case("axes.titlesize", StyleValue::Text("medium".into()))]
#[case("xtick.top", StyleValue::Bool(true))]
#[case("xtick.major.size", StyleValue::Float(3.2))]
#[case("xtick.minor.size", StyleValue::Float(1.8))]
#[case("xtick.major.width", StyleValue::Float(0.5))]
#[case("xtick.minor.width", StyleValue::Float(0.5))]
#[case("ytick.right", StyleValue::Bool(true))]
#[case("ytick.major.size", StyleValue::Float(3.2))]
#[case("ytick.minor.size", StyleValue::Float(1.8))]
#[case("ytick.major.width", StyleValue::Float(0.5))]
#[case("ytick.minor.width", StyleValue::Float(0.5))]
#[case("grid.linewidth", StyleValue::Float(0.5))]
#[case("legend.framealpha", StyleValue::Float(0.7))]
#[case("legend.edgecolor", StyleValue::Text("none".into()))]
#[case("legend.fancybox", StyleValue::Bool(true))]
#[case("legend.numpoints", StyleValue::Int(1))]
#[case("legend.handlelength", StyleValue::Float(3.0))]
#[case("figure.titlesize", StyleValue::Text("medium".into()))]
#[case("figure.figsize", StyleValue::Tuple(vec![6.89, 4.59]))]
#[case("figure.dpi", StyleValue::Int(100))]
#[case("savefig.dpi", StyleValue::Int(150))]
#[case("svg.fonttype", StyleValue::Text("none".into()))]
fn test_base_preset_value(#[case] key: &str, #[case] expected: StyleValue) {
    assert_eq!(session().get(key), Some(&expected));
}

#[test]
fn test_base_preset_overrides_existing_registry() {
    let mut registry = StyleRegistry::new();
    registry.set("font.size", 14.0);
    registry.set("image.cmap", "viridis");

    let session = StyleSession::with_runtime(registry, Runtime::Terminal);
    assert_eq!(session.registry().get_f64("font.size"), Some(9.0));
    assert_eq!(
        session.get("image.cmap").and_then(StyleValue::as_str),
        Some("viridis")
    );
}

// === Figure size ===

#[test]
fn test_normal_figure_size() {
    let mut session = session();
    session.set_figure_size("normal", None).unwrap();

    let (w, h) = figsize(&session);
    assert!((w - 6.8898).abs() < 1e-4);
    assert!((h - 4.5932).abs() < 1e-4);
    assert_eq!(session.registry().get_f64("xtick.major.size"), Some(3.2));
    assert_eq!(session.registry().get_f64("ytick.minor.size"), Some(1.8));
}

#[test]
fn test_small_figure_size() {
    let mut session = session();
    session.set_figure_size("S", None).unwrap();

    let (w, h) = figsize(&session);
    assert!((w - 3.3465).abs() < 1e-4);
    assert!((w / h - 1.5).abs() < 1e-9);
    for key in ["xtick.major.size", "ytick.major.size"] {
        assert_eq!(session.registry().get_f64(key), Some(2.0));
    }
    for key in ["xtick.minor.size", "ytick.minor.size"] {
        assert_eq!(session.registry().get_f64(key), Some(1.1));
    }
}

#[test]
fn test_figure_size_with_aspect() {
    let mut session = session();
    let aspect = AspectRatio::new(16.0, 9.0).unwrap();
    session.set_figure_size("n", Some(aspect)).unwrap();

    let (w, h) = figsize(&session);
    assert!((w - 175.0 / 25.4).abs() < 1e-12);
    assert!((h - 175.0 * 9.0 / 16.0 / 25.4).abs() < 1e-12);
}

#[rstest]
#[case("huge")]
#[case("")]
#[case("normal ")]
fn test_unknown_figure_size_changes_nothing(#[case] size: &str) {
    let mut session = session();
    let before = session.registry().clone();

    let err = session.set_figure_size(size, None).unwrap_err();
    assert_eq!(
        err,
        StyleError::UnknownFigureSize {
            name: size.to_string()
        }
    );
    assert!(err.to_string().contains("Unknown size"));
    assert_eq!(session.registry(), &before);
}

// === Line/marker style ===

#[rstest]
#[case("color")]
#[case("C")]
#[case("col")]
fn test_color_style_without_markers(#[case] style: &str) {
    let mut session = session();
    session.set_line_marker_style(style, true).unwrap();

    let cycle = session.registry().prop_cycle().unwrap();
    let colors: Vec<&str> = cycle.iter().filter_map(|e| e.color.as_deref()).collect();
    assert_eq!(colors, PALETTE.to_vec());
    assert_eq!(cycle.properties(), vec![CycleProperty::Color]);
    assert!(cycle.iter().all(|e| e.marker.is_none() && e.dashes.is_none()));
}

#[test]
fn test_color_style_pairs_markers() {
    let mut session = session();
    session.set_line_marker_style("color", false).unwrap();

    let cycle = session.registry().prop_cycle().unwrap();
    assert_eq!(cycle.len(), 10);
    for (i, entry) in cycle.iter().enumerate() {
        assert_eq!(entry.color.as_deref(), Some(PALETTE[i]));
        assert_eq!(entry.marker, Some(MARKERS[i]));
        assert!(entry.dashes.is_none());
    }
    assert_eq!(cycle.entries()[0].marker, Some(Marker::Circle));
}

#[rstest]
#[case("bw")]
#[case("BlackWhite")]
#[case("blacknwhite")]
#[case("black")]
fn test_black_white_style(#[case] style: &str) {
    let mut session = session();
    session.set_line_marker_style(style, false).unwrap();

    let cycle = session.registry().prop_cycle().unwrap();
    assert_eq!(cycle.len(), 10);
    for (i, entry) in cycle.iter().enumerate() {
        assert_eq!(entry.color.as_deref(), Some("k"));
        assert_eq!(entry.dashes.as_ref().unwrap().segments(), DASHES[i]);
        assert_eq!(entry.marker, Some(MARKERS[i]));
    }
}

#[rstest]
#[case("both", true)]
#[case("egal", false)]
#[case("Dunno", false)]
fn test_both_style(#[case] style: &str, #[case] omit_markers: bool) {
    let mut session = session();
    session.set_line_marker_style(style, omit_markers).unwrap();

    let cycle = session.registry().prop_cycle().unwrap();
    for (i, entry) in cycle.iter().enumerate() {
        assert_eq!(entry.color.as_deref(), Some(PALETTE[i]));
        assert_eq!(entry.dashes.as_ref().unwrap().segments(), DASHES[i]);
        assert_eq!(entry.marker.is_some(), !omit_markers);
    }
}

#[test]
fn test_unknown_line_style_changes_nothing() {
    let mut session = session();
    let before = session.registry().clone();

    let result = session.set_line_marker_style("rainbow", true);
    assert!(matches!(result, Err(StyleError::UnknownLineStyle { .. })));
    assert_eq!(session.registry(), &before);
}

// === Figure style ===

#[test]
fn test_presentation_fontsize() {
    let mut session = session();
    let applied = session.set_figure_style("presentation", Some(20.0));
    assert_eq!(applied, Some(FigureStyle::Presentation));
    assert_eq!(session.registry().get_f64("font.size"), Some(20.0));
}

#[test]
fn test_talk_default_fontsize() {
    let mut session = session();
    session.set_figure_style("t", None);
    assert_eq!(session.registry().get_f64("font.size"), Some(16.0));
}

#[rstest]
#[case("paper")]
#[case("P")]
#[case("publication")]
fn test_paper_fontsize_regardless_of_prior(#[case] style: &str) {
    let mut session = session();
    session.set_figure_style("talk", Some(24.0));
    session.set_figure_style(style, Some(24.0));
    assert_eq!(session.registry().get_f64("font.size"), Some(9.0));
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(0.0)]
#[case(-12.0)]
fn test_invalid_presentation_fontsize_changes_nothing(#[case] fontsize: f64) {
    let mut session = session();
    let before = session.registry().clone();

    assert_eq!(session.set_figure_style("talk", Some(fontsize)), None);
    assert_eq!(session.registry(), &before);

    let json = session.registry().to_json().unwrap();
    assert_eq!(StyleRegistry::from_json(&json).unwrap(), before);
}

#[test]
fn test_apply_invalid_fontsize_is_typed_error() {
    let mut session = session();
    let err = session
        .apply_figure_style(FigureStyle::Presentation, Some(f64::NAN))
        .unwrap_err();
    assert!(matches!(err, StyleError::InvalidFontSize { .. }));
    assert_eq!(session.registry().get_f64("font.size"), Some(9.0));
}

#[test]
fn test_unknown_figure_style_changes_nothing() {
    let mut session = session();
    let before = session.registry().clone();
    assert_eq!(session.set_figure_style("poster", None), None);
    assert_eq!(session.registry(), &before);
}

// === Snapshot swap ===

#[test]
fn test_double_swap_restores_registry() {
    let mut session = session();
    session.set_line_marker_style("bw", false).unwrap();
    session.set_figure_size("small", None).unwrap();
    let before = session.registry().clone();

    session.swap_snapshot();
    assert_ne!(session.registry(), &before);
    session.swap_snapshot();
    assert_eq!(session.registry(), &before);
}

#[test]
fn test_swap_returns_to_preset_state() {
    let mut session = session();
    let preset = session.registry().clone();

    session.set_figure_style("talk", Some(18.0));
    session.swap_snapshot();
    assert_eq!(session.registry(), &preset);
    assert_eq!(session.snapshot().get_f64("font.size"), Some(18.0));
}

// === Config and export ===

#[test]
fn test_apply_toml_config() {
    let config = StyleConfig::from_toml(
        r#"
        line_style = "both"
        omit_markers = true
        figure_size = "small"
        figure_style = "talk"
        fontsize = 14

        [overrides]
        "lines.linewidth" = 1.5
        "#,
    )
    .unwrap();

    let mut session = session();
    session.apply_config(&config).unwrap();

    assert_eq!(session.registry().get_f64("font.size"), Some(14.0));
    assert_eq!(session.registry().get_f64("lines.linewidth"), Some(1.5));
    assert_eq!(session.registry().get_f64("xtick.major.size"), Some(2.0));
    let cycle = session.registry().prop_cycle().unwrap();
    assert_eq!(
        cycle.properties(),
        vec![CycleProperty::Color, CycleProperty::Dashes]
    );
}

#[test]
fn test_registry_toml_roundtrip() {
    let mut session = session();
    session.set_line_marker_style("both", false).unwrap();
    session.set("image.cmap", "viridis");

    let toml = session.registry().to_toml().unwrap();
    let restored = StyleRegistry::from_toml(&toml).unwrap();
    assert_eq!(&restored, session.registry());
    assert_eq!(restored.prop_cycle().map(|c| c.len()), Some(10));
}

#[test]
fn test_config_toml_roundtrip() {
    let mut config = StyleConfig::new();
    config.line_style = Some("bw".to_string());
    config.omit_markers = true;
    config.figure_size = Some("small".to_string());
    config.aspect = Some(AspectRatio::new(16.0, 9.0).unwrap());
    config.figure_style = Some("talk".to_string());
    config.fontsize = Some(18.0);
    config
        .overrides
        .insert("lines.linewidth".to_string(), StyleValue::Float(1.5));

    let toml = config.to_toml().unwrap();
    let parsed = StyleConfig::from_toml(&toml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_rc_export_contains_cycle() {
    let mut session = session();
    session.set_line_marker_style("color", true).unwrap();

    let rc = session.registry().to_rc_string();
    assert!(rc.contains("axes.prop_cycle: cycler('color', ['k', '#1f77b4',"));
    assert!(rc.contains("figure.figsize: 6.89, 4.59\n"));
    assert!(rc.contains("xtick.top: True\n"));
}

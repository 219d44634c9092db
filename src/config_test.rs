#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_flag_defaults() {
    let parsed = EditorConfig::try_parse_from(["scene-editor"]);
    assert_eq!(parsed.ok(), Some(EditorConfig::default()));
}

#[test]
fn flags_override_defaults() {
    let cfg = EditorConfig::try_parse_from([
        "scene-editor",
        "--width",
        "1600",
        "--play-speed",
        "2.5",
        "--hide-grid",
        "--empty",
    ])
    .unwrap();
    assert_eq!(cfg.width, 1600);
    assert_eq!(cfg.height, DEFAULT_HEIGHT);
    assert_eq!(cfg.play_speed, 2.5);
    assert!(cfg.hide_grid);
    assert!(!cfg.hide_origin);
    assert!(cfg.empty);
}

#[test]
fn rejects_non_numeric_flag() {
    assert!(EditorConfig::try_parse_from(["scene-editor", "--fps", "fast"]).is_err());
}

#[test]
fn default_layout() {
    let layout = EditorConfig::default().validate().unwrap();
    assert_eq!(layout.window, Rect::new(0.0, 0.0, 1200.0, 800.0));
    assert_eq!(layout.menu, Rect::new(0.0, 0.0, 1200.0, 40.0));
    assert_eq!(layout.hierarchy, Rect::new(0.0, 40.0, 250.0, 610.0));
    assert_eq!(layout.scene, Rect::new(250.0, 40.0, 650.0, 610.0));
    assert_eq!(layout.inspector, Rect::new(900.0, 40.0, 300.0, 610.0));
    assert_eq!(layout.console, Rect::new(0.0, 650.0, 1200.0, 150.0));
}

#[test]
fn panels_tile_the_window() {
    let layout = EditorConfig { width: 1000, height: 700, ..EditorConfig::default() }.validate().unwrap();
    assert_eq!(layout.hierarchy.right(), layout.scene.x);
    assert_eq!(layout.scene.right(), layout.inspector.x);
    assert_eq!(layout.inspector.right(), layout.window.right());
    assert_eq!(layout.scene.bottom(), layout.console.y);
    assert_eq!(layout.console.bottom(), layout.window.bottom());
}

#[test]
fn rejects_too_narrow() {
    let cfg = EditorConfig { width: 550, ..EditorConfig::default() };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::SceneViewTooNarrow { width: 550, hierarchy: 250, inspector: 300 })
    );
}

#[test]
fn rejects_too_short() {
    let cfg = EditorConfig { height: 100, ..EditorConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::SceneViewTooShort { height: 100, menu: 40, console: 150 }));
}

#[test]
fn rejects_zero_fps_and_bad_speed() {
    assert_eq!(EditorConfig { fps: 0, ..EditorConfig::default() }.validate(), Err(ConfigError::ZeroFps));
    let bad = EditorConfig { play_speed: -1.0, ..EditorConfig::default() };
    assert_eq!(bad.validate(), Err(ConfigError::InvalidPlaySpeed(-1.0)));
    let nan = EditorConfig { play_speed: f64::NAN, ..EditorConfig::default() };
    assert!(matches!(nan.validate(), Err(ConfigError::InvalidPlaySpeed(_))));
}

#[test]
fn error_messages() {
    let e = ConfigError::SceneViewTooNarrow { width: 500, hierarchy: 250, inspector: 300 };
    assert_eq!(
        e.to_string(),
        "window 500px wide leaves no room for the scene view (hierarchy 250px + inspector 300px)"
    );
    assert_eq!(ConfigError::ZeroFps.to_string(), "target fps must be positive");
}

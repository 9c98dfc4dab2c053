//! Scene files and bracket-derived connectors, end to end

use std::fs;

use pretty_assertions::assert_eq;

use bracket_connectors::{
    connections_for, layout_scene, render_scene, to_path_lines, BracketMatch, ConnectorStyle,
    RenderConfig, Scene, SceneError, SvgConfig,
};

/// Eight-team knockout: quarter-finals, semi-finals, final, and bronze match
const KNOCKOUT: &str = r##"
[container]
left = 40
top = 100
width = 900
height = 400

[anchors]
qf-1 = { left = 40, top = 100, width = 160, height = 60 }
qf-2 = { left = 40, top = 200, width = 160, height = 60 }
qf-3 = { left = 40, top = 300, width = 160, height = 60 }
qf-4 = { left = 40, top = 400, width = 160, height = 60 }
sf-1 = { left = 300, top = 150, width = 160, height = 60 }
sf-2 = { left = 300, top = 350, width = 160, height = 60 }
final = { left = 560, top = 250, width = 160, height = 60 }
bronze = { left = 560, top = 400, width = 160, height = 60 }

[[matches]]
id = "qf-1"
next_win = "sf-1"

[[matches]]
id = "qf-2"
next_win = "sf-1"

[[matches]]
id = "qf-3"
next_win = "sf-2"

[[matches]]
id = "qf-4"
next_win = "sf-2"

[[matches]]
id = "sf-1"
next_win = "final"
next_lose = "bronze"

[[matches]]
id = "sf-2"
next_win = "final"
next_lose = "bronze"

[[matches]]
id = "final"

[[matches]]
id = "bronze"

[render]
stroke = "#64748b"
dash_pattern = "4,4"
"##;

#[test]
fn test_knockout_connectors() {
    let scene = Scene::from_str(KNOCKOUT).expect("Should parse");
    let paths = layout_scene(&scene);

    let summary: Vec<(&str, &ConnectorStyle)> =
        paths.iter().map(|p| (p.key.as_str(), &p.style)).collect();
    assert_eq!(
        summary,
        vec![
            ("qf-1-sf-1", &ConnectorStyle::Orthogonal),
            ("qf-2-sf-1", &ConnectorStyle::Orthogonal),
            ("qf-3-sf-2", &ConnectorStyle::Orthogonal),
            ("qf-4-sf-2", &ConnectorStyle::Orthogonal),
            ("sf-1-final", &ConnectorStyle::Orthogonal),
            ("sf-1-bronze", &ConnectorStyle::Dashed),
            ("sf-2-final", &ConnectorStyle::Orthogonal),
            ("sf-2-bronze", &ConnectorStyle::Dashed),
        ]
    );
}

#[test]
fn test_knockout_path_data() {
    let scene = Scene::from_str(KNOCKOUT).expect("Should parse");
    let lines = to_path_lines(&layout_scene(&scene));

    insta::assert_snapshot!(lines, @r"
    qf-1-sf-1	M160 30 L210 30 L210 80 L260 80
    qf-2-sf-1	M160 130 L210 130 L210 80 L260 80
    qf-3-sf-2	M160 230 L210 230 L210 280 L260 280
    qf-4-sf-2	M160 330 L210 330 L210 280 L260 280
    sf-1-final	M420 80 L470 80 L470 180 L520 180
    sf-1-bronze	M420 80 L470 80 L470 330 L520 330
    sf-2-final	M420 280 L470 280 L470 180 L520 180
    sf-2-bronze	M420 280 L470 280 L470 330 L520 330
    ");
}

#[test]
fn test_knockout_svg() {
    let scene = Scene::from_str(KNOCKOUT).expect("Should parse");
    let svg = render_scene(&scene, &RenderConfig::default());

    assert!(svg.contains(r#"viewBox="0 0 900 400""#));
    assert_eq!(svg.matches("<path").count(), 8);
    assert_eq!(svg.matches(r#"stroke-dasharray="4,4""#).count(), 2);
    assert_eq!(svg.matches(r##"stroke="#64748b""##).count(), 8);
}

#[test]
fn test_scene_settings_override_config() {
    let scene = Scene::from_str(KNOCKOUT).expect("Should parse");
    let config = RenderConfig::new().with_svg(
        SvgConfig::new()
            .with_stroke("black")
            .with_stroke_width(3.0)
            .with_pretty_print(false),
    );
    let svg = render_scene(&scene, &config);

    // Scene stroke wins, config width survives
    assert!(svg.contains(r##"stroke="#64748b" stroke-width="3""##));
    assert!(!svg.contains('\n'));
}

#[test]
fn test_bronze_missing_from_screen() {
    let mut scene = Scene::from_str(KNOCKOUT).expect("Should parse");
    scene.anchors.remove("bronze");
    let paths = layout_scene(&scene);

    assert_eq!(paths.len(), 6);
    assert!(paths.iter().all(|p| p.style != ConnectorStyle::Dashed));
}

#[test]
fn test_explicit_connections_precede_bracket() {
    let mut scene = Scene::from_str(KNOCKOUT).expect("Should parse");
    scene.connections.push(bracket_connectors::ConnectionRequest::new(
        "qf-1", "bronze", "straight",
    ));
    let requests = scene.connection_requests();

    assert_eq!(requests[0].key(), "qf-1-bronze");
    assert_eq!(requests.len(), 9);
}

#[test]
fn test_connections_for_matches_scene() {
    let scene = Scene::from_str(KNOCKOUT).expect("Should parse");
    let built = connections_for(&[
        BracketMatch::new("sf-1")
            .with_next_win("final")
            .with_next_lose("bronze"),
    ]);
    let from_scene: Vec<_> = scene
        .connection_requests()
        .into_iter()
        .filter(|r| r.source == "sf-1")
        .collect();

    assert_eq!(built, from_scene);
}

#[test]
fn test_scene_from_json_file() {
    let dir = std::env::temp_dir().join(format!("bracket-connectors-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Should create temp dir");
    let path = dir.join("scene.json");
    fs::write(
        &path,
        r#"{
            "container": {"left": 0, "top": 0, "width": 300, "height": 100},
            "anchors": {
                "a": {"left": 0, "top": 0, "width": 100, "height": 40},
                "b": {"left": 200, "top": 60, "width": 100, "height": 40}
            },
            "matches": [{"id": "a", "next_win": "b"}]
        }"#,
    )
    .expect("Should write scene");

    let scene = Scene::from_file(&path).expect("Should load");
    let paths = layout_scene(&scene);
    fs::remove_dir_all(&dir).ok();

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].to_svg_d(), "M100 20 L150 20 L150 80 L200 80");
}

#[test]
fn test_missing_scene_file() {
    let result = Scene::from_file(std::path::Path::new("/definitely/not/here.toml"));
    assert!(matches!(result, Err(SceneError::Io(_))));
}

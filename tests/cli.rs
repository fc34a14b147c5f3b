use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkshape_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inkshape").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", temp.path());
    cmd
}

const LINE_STROKE: &str = "[[0, 50], [25, 51], [50, 50], [75, 51], [100, 50]]";

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand shape recognition and pixel-grid shape rasterization",
        ));
}

#[test]
fn rasterize_lists_line_cells() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .args(["rasterize", "line", "--from", "0,0", "--to", "2,2"])
        .assert()
        .success()
        .stdout("0,0\n1,1\n2,2\n");
}

#[test]
fn rasterize_renders_outline_grid() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .args(["rasterize", "rect", "--from", "0,0", "--to", "2,3", "--grid"])
        .assert()
        .success()
        .stdout("####\n#..#\n####\n");
}

#[test]
fn rasterize_flood_fills_inside_outline() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .args([
            "rasterize",
            "rectangle",
            "--from",
            "0,0",
            "--to",
            "2,3",
            "--grid",
            "--fill-at",
            "1,1",
        ])
        .assert()
        .success()
        .stdout("####\n#++#\n####\n");
}

#[test]
fn rasterize_rejects_unknown_shape() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .args(["rasterize", "hexagon", "--from", "0,0", "--to", "2,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hexagon"));
}

#[test]
fn fill_at_requires_grid() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .args([
            "rasterize",
            "square",
            "--from",
            "0,0",
            "--to",
            "4,4",
            "--fill-at",
            "1,1",
        ])
        .assert()
        .failure();
}

#[test]
fn recognize_reads_stroke_from_stdin() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .arg("recognize")
        .write_stdin(LINE_STROKE)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "line""#))
        .stdout(predicate::str::contains(r#""y": 50.0"#));
}

#[test]
fn recognize_reads_stroke_from_file() {
    let temp = TempDir::new().unwrap();
    let stroke = temp.path().join("stroke.json");
    std::fs::write(&stroke, LINE_STROKE).unwrap();

    inkshape_cmd(&temp)
        .args(["recognize", "--outline"])
        .arg(&stroke)
        .assert()
        .success()
        .stdout(predicate::str::contains("time_offset"));
}

#[test]
fn recognize_prints_null_for_short_stroke() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .arg("recognize")
        .write_stdin("[[0, 0], [10, 0], [20, 0]]")
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn recognize_reports_bad_json() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .arg("recognize")
        .write_stdin("[[0, 0], \"oops\"]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid stroke JSON"));
}

#[test]
fn recognize_honours_disabled_shapes() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[recognizer]\ndisabled_shapes = [\"line\"]\n").unwrap();

    inkshape_cmd(&temp)
        .args(["--config"])
        .arg(&config)
        .arg("recognize")
        .write_stdin(LINE_STROKE)
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn outline_prints_two_point_line() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .args(["outline", "line", "--from", "-5,0", "--to", "10,20"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""x": -5.0"#))
        .stdout(predicate::str::contains(r#""time_offset": 0.1"#));
}

#[test]
fn config_init_writes_file_once() {
    let temp = TempDir::new().unwrap();
    let expected = temp.path().join("inkshape").join("config.toml");

    inkshape_cmd(&temp)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));
    assert!(expected.exists());

    inkshape_cmd(&temp)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_show_clamps_values() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[outline]\nellipse_segments = 2\n").unwrap();

    inkshape_cmd(&temp)
        .args(["config", "--show", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("ellipse_segments = 8"));
}

#[test]
fn config_schema_is_json() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp)
        .args(["config", "--schema"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("disabled_shapes"));
}

#[test]
fn config_requires_an_action() {
    let temp = TempDir::new().unwrap();
    inkshape_cmd(&temp).arg("config").assert().failure();
}

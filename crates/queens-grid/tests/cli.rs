#![cfg(feature = "cli")]

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use queens_grid::io::{BoardFile, PuzzleReport, SolveConfig};
use queens_grid::{Board, PuzzleErrorKind, Rgb8};

/// 4x4 puzzle whose only answer is columns 1, 3, 0, 2.
const LABELS: [[u8; 4]; 4] = [[1, 0, 1, 1], [1, 1, 2, 2], [3, 1, 2, 2], [3, 3, 1, 2]];

fn label_color(label: u8) -> Rgb8 {
    Rgb8::new(40 + label * 60, 220 - label * 50, 100)
}

fn write_puzzle_png(dir: &std::path::Path) -> std::path::PathBuf {
    let img = RgbImage::from_fn(100, 100, |x, y| {
        let c = label_color(LABELS[(y / 25) as usize][(x / 25) as usize]);
        Rgb(c.to_array())
    });
    let path = dir.join("puzzle.png");
    img.save(&path).expect("save png");
    path
}

fn cmd() -> Command {
    Command::cargo_bin("queens-grid").expect("binary")
}

#[test]
fn image_command_prints_one_line_per_queen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png = write_puzzle_png(dir.path());
    cmd()
        .arg("image")
        .arg(&png)
        .args(["--grid-size", "4"])
        .assert()
        .success()
        .stdout("0 1\n1 3\n2 0\n3 2\n");
}

#[test]
fn image_command_rejects_non_numeric_grid_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = dir.path().join("report.json");
    cmd()
        .arg("image")
        .arg(dir.path().join("missing.png"))
        .args(["-n", "abc"])
        .arg("--report")
        .arg(&report)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number"));

    let report = PuzzleReport::load_json(&report).expect("report");
    assert_eq!(report.error_kind, Some(PuzzleErrorKind::InvalidGridSize));
    assert!(report.placements.is_none());
}

#[test]
fn image_command_writes_report_and_render() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png = write_puzzle_png(dir.path());
    let report_path = dir.path().join("report.json");
    let render_path = dir.path().join("solved.png");
    cmd()
        .arg("image")
        .arg(&png)
        .args(["-n", "4", "--cell-px", "10"])
        .arg("--report")
        .arg(&report_path)
        .arg("--render")
        .arg(&render_path)
        .assert()
        .success();

    let report = PuzzleReport::load_json(&report_path).expect("report");
    assert_eq!(report.grid_size, Some(4));
    assert!(report.error.is_none());
    let cols: Vec<usize> = report
        .placements
        .expect("placements")
        .iter()
        .map(|p| p.col)
        .collect();
    assert_eq!(cols, vec![1, 3, 0, 2]);

    let rendered = image::open(&render_path).expect("render").to_rgb8();
    assert_eq!(rendered.dimensions(), (40, 40));
}

#[test]
fn board_command_solves_json_board() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rows = LABELS
        .iter()
        .map(|row| row.iter().map(|&l| label_color(l)).collect())
        .collect();
    let board = Board::from_rows(rows).expect("board");
    let path = dir.path().join("board.json");
    BoardFile::from_board(&board).write_json(&path).expect("write");

    cmd()
        .arg("board")
        .arg(&path)
        .assert()
        .success()
        .stdout("0 1\n1 3\n2 0\n3 2\n");
}

#[test]
fn board_command_reports_unsolvable_board() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = BoardFile {
        rows: vec![
            vec![label_color(0), label_color(1)],
            vec![label_color(0), label_color(1)],
        ],
    };
    let path = dir.path().join("board.json");
    file.write_json(&path).expect("write");

    cmd()
        .arg("board")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid queen placement"));
}

#[test]
fn board_command_reports_malformed_board_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("board.json");
    std::fs::write(&path, r##"{"rows": [["#000000", "#ffffff"]]}"##).expect("write");
    let report_path = dir.path().join("report.json");

    cmd()
        .arg("board")
        .arg(&path)
        .arg("--report")
        .arg(&report_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));

    let report = PuzzleReport::load_json(&report_path).expect("report");
    assert!(report.error.is_some());
    assert_eq!(report.error_kind, None);
    assert!(report.placements.is_none());
}

#[test]
fn oversized_render_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png = write_puzzle_png(dir.path());
    let render_path = dir.path().join("solved.png");
    cmd()
        .arg("image")
        .arg(&png)
        .args(["-n", "4", "--cell-px", "4294967295"])
        .arg("--render")
        .arg(&render_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("px per side"));
    assert!(!render_path.exists());
}

#[test]
fn log_level_flag_is_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png = write_puzzle_png(dir.path());
    cmd()
        .args(["--log-level", "debug", "image"])
        .arg(&png)
        .args(["-n", "4"])
        .assert()
        .success()
        .stdout("0 1\n1 3\n2 0\n3 2\n");
}

#[test]
fn config_command_uses_json_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png = write_puzzle_png(dir.path());
    let report_path = dir.path().join("cfg_report.json");
    let cfg = SolveConfig {
        image_path: png.to_string_lossy().into_owned(),
        grid_size: 4,
        crop: None,
        tolerance: 10,
        report_path: Some(report_path.to_string_lossy().into_owned()),
        render_path: None,
        cell_px: 50,
    };
    let cfg_path = dir.path().join("cfg.json");
    cfg.write_json(&cfg_path).expect("write config");

    cmd()
        .arg("config")
        .arg(&cfg_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0 1\n"));

    let report = PuzzleReport::load_json(&report_path).expect("report");
    assert_eq!(report.stats.map(|s| s.nodes >= 4), Some(true));
}

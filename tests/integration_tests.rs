//! End-to-end CLI tests: argument handling, exit codes, and the
//! dimensions and content of the written PNG.

use assert_cmd::Command;
use predicates::prelude::*;

use calimg::layout::Layout;
use calimg::types::{CELL_HEIGHT, CELL_WIDTH};

fn calimg() -> Command {
    Command::cargo_bin("calimg").unwrap()
}

fn decode(path: &std::path::Path) -> image::RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

mod help {
    use super::*;

    #[test]
    fn help_flags_print_usage_and_exit_zero() {
        for flag in ["-h", "--help", "/?", "-H", "--HELP"] {
            calimg()
                .arg(flag)
                .assert()
                .success()
                .stdout(predicate::str::contains("Usage:"))
                .stdout(predicate::str::contains("outputPath"));
        }
    }

    #[test]
    fn help_only_recognized_as_first_argument() {
        // As a second positional, "/?" is a startDay and must be rejected.
        let dir = tempfile::tempdir().unwrap();
        calimg()
            .current_dir(dir.path())
            .args(["out.png", "/?"])
            .assert()
            .failure()
            .code(2);
    }

    #[test]
    fn help_tokens_after_first_position_are_title_words() {
        // "-h" and "--help" past the first argument belong to the title
        // and must still produce a render.
        let dir = tempfile::tempdir().unwrap();
        for (name, token) in [("a.png", "-h"), ("b.png", "--help")] {
            let out = dir.path().join(name);
            calimg()
                .args([out.to_str().unwrap(), "0", "Test", token])
                .assert()
                .success()
                .stdout(predicate::str::contains("Wrote: "));
            assert!(out.exists(), "{token} suppressed the render");
        }
    }
}

mod defaults {
    use super::*;

    #[test]
    fn no_arguments_writes_calendar_png() {
        let dir = tempfile::tempdir().unwrap();
        calimg()
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote: "));

        let out = dir.path().join("calendar.png");
        assert!(out.exists(), "default calendar.png not written");

        let layout = Layout::new(0);
        let img = decode(&out);
        assert_eq!((img.width(), img.height()), (layout.width, layout.height));
    }

    #[test]
    fn success_reports_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let expected = dir.path().join("calendar.png");
        calimg()
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(expected.display().to_string()));
    }
}

mod start_day_argument {
    use super::*;

    #[test]
    fn monday_start_places_day_one_in_first_column() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        calimg()
            .args([out.to_str().unwrap(), "0", "Test"])
            .assert()
            .success();

        let img = decode(&out);
        let layout = Layout::new(0);
        let (x, y) = layout.cell_origin(0);
        assert!(
            has_dark_pixel(&img, x + 5, y + 5, 45, 35),
            "day 1 missing from row 0, column 0"
        );
    }

    #[test]
    fn codexday_start_shifts_day_one_to_column_seven() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        calimg()
            .args([out.to_str().unwrap(), "codexday", "X"])
            .assert()
            .success();

        let img = decode(&out);
        let layout = Layout::new(7);

        // Day 1 in column 7 of row 0; columns 0-6 blank.
        let (x, y) = layout.cell_origin(7);
        assert!(has_dark_pixel(&img, x + 5, y + 5, 45, 35));
        for col in 0..7 {
            let (cx, cy) = layout.cell_origin(col);
            assert!(
                !has_dark_pixel(&img, cx + 2, cy + 2, CELL_WIDTH - 4, CELL_HEIGHT - 4),
                "column {col} should be empty"
            );
        }

        // Days 2 and 3 continue across row 0 into row 1.
        let (x8, y8) = layout.cell_origin(8);
        assert!(has_dark_pixel(&img, x8 + 5, y8 + 5, 45, 35), "day 2");
        let (x9, y9) = layout.cell_origin(9);
        assert!(has_dark_pixel(&img, x9 + 5, y9 + 5, 45, 35), "day 3");
    }

    #[test]
    fn weekday_names_accepted_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        calimg()
            .args([out.to_str().unwrap(), "FRIDAY"])
            .assert()
            .success();
        assert!(out.exists());
    }

    #[test]
    fn out_of_range_index_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        calimg()
            .current_dir(dir.path())
            .args(["out.png", "9"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("between 0 and 8"))
            .stderr(predicate::str::contains("Usage:"));
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn invalid_name_exits_two_with_usage() {
        let dir = tempfile::tempdir().unwrap();
        calimg()
            .current_dir(dir.path())
            .args(["out.png", "frisday"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid startDay"))
            .stderr(predicate::str::contains("Usage:"));
    }

    #[test]
    fn negative_index_reaches_parser_with_range_message() {
        let dir = tempfile::tempdir().unwrap();
        calimg()
            .current_dir(dir.path())
            .args(["out.png", "-1"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("between 0 and 8"))
            .stderr(predicate::str::contains("Usage:"));
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn hyphenated_start_day_is_not_a_flag() {
        // "-V" is an invalid start day, not a version switch.
        let dir = tempfile::tempdir().unwrap();
        calimg()
            .current_dir(dir.path())
            .args(["out.png", "-V"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid startDay"));
    }

    #[test]
    fn whitespace_only_start_day_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        calimg()
            .current_dir(dir.path())
            .args(["out.png", "  "])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("empty"));
    }

    fn has_dark_pixel(img: &image::RgbaImage, x: u32, y: u32, w: u32, h: u32) -> bool {
        (y..y + h).any(|py| {
            (x..x + w).any(|px| {
                let p = img.get_pixel(px, py);
                p[0] < 100 && p[1] < 100 && p[2] < 100
            })
        })
    }
}

mod output_path {
    use super::*;

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b").join("cal.png");
        calimg()
            .args([out.to_str().unwrap()])
            .assert()
            .success();
        assert!(out.exists());
    }

    #[test]
    fn dimensions_match_layout_for_each_start_extreme() {
        let dir = tempfile::tempdir().unwrap();
        for start in ["0", "8"] {
            let out = dir.path().join(format!("cal-{start}.png"));
            calimg()
                .args([out.to_str().unwrap(), start])
                .assert()
                .success();

            let layout = Layout::new(start.parse().unwrap());
            let img = decode(&out);
            assert_eq!(
                (img.width(), img.height()),
                (layout.width, layout.height),
                "start {start}"
            );
        }
    }

    #[test]
    fn output_is_valid_rgba_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cal.png");
        calimg().args([out.to_str().unwrap()]).assert().success();

        let reader = image::ImageReader::open(&out).unwrap();
        assert_eq!(reader.format(), Some(image::ImageFormat::Png));
        let decoded = reader.decode().unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
    }
}

mod title_argument {
    use super::*;

    #[test]
    fn multi_word_title_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cal.png");
        calimg()
            .args([out.to_str().unwrap(), "0", "Several", "Words", "Here"])
            .assert()
            .success();
        assert!(out.exists());
    }
}

use anyhow::Result;
use insta::assert_snapshot;

use crate::CliTest;

const CN_STRINGS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="a">甲</string>
    <string name="b">乙</string>
    <string name="c">丙</string>
</resources>
"#;

const EN_STRINGS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="a">A</string>
    <string name="b">B</string>
    <string name="d">D</string>
</resources>
"#;

fn android_project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("app/src/main/res/values/strings.xml", CN_STRINGS)?;
    test.write_file("app/src/main/res/values-en/strings.xml", EN_STRINGS)?;
    Ok(test)
}

#[test]
fn test_reports_unused_strings() -> Result<()> {
    let test = android_project()?;
    test.write_file(
        "app/src/main/kotlin/top/app/MainActivity.kt",
        r#"
  class MainActivity {
      fun title() = getString(R.string.a)
  }
  "#,
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "");
    assert_snapshot!(output.stdout, @r"
    === Unused string resources ===

    cn (values/strings.xml): 3 strings
    en (values-en/strings.xml): 3 strings

    Referenced in project: 1 string

    === Unused strings ===

    Unused in cn: 2
    Unused in en: 2
    Unused in both: 1
    Only unused in cn: 1
    Only unused in en: 1

    --- Unused in cn (values/strings.xml) ---
      b
      c

    --- Unused in en (values-en/strings.xml) ---
      b
      d

    --- Unused in both files (1) ---
      b
    ");

    Ok(())
}

#[test]
fn test_markup_references_count() -> Result<()> {
    let test = android_project()?;
    test.write_file(
        "app/src/main/res/layout/activity_main.xml",
        r#"<LinearLayout>
    <TextView android:text="@string/b" />
    <TextView android:text="@string/c" />
</LinearLayout>"#,
    )?;
    test.write_file("app/src/main/kotlin/Main.kt", "R.string.a + R.string.d")?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Referenced in project: 4 strings\n"));
    assert!(output.stdout.contains("Unused in cn: 0\n"));
    assert!(output.stdout.contains("Unused in en: 0\n"));
    assert!(
        output
            .stdout
            .ends_with("\u{2713} All declared strings are referenced\n")
    );

    Ok(())
}

#[test]
fn test_malformed_resource_file_does_not_stop_the_run() -> Result<()> {
    let test = android_project()?;
    test.write_file(
        "app/src/main/res/values-en/strings.xml",
        "<resources><string name=\"a\">A</resources>",
    )?;
    test.write_file("app/src/main/kotlin/Main.kt", "R.string.a")?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.starts_with("warning: Failed to parse resource file:"));
    assert!(output.stderr.contains("values-en"));
    assert!(output.stdout.contains("en (values-en/strings.xml): 0 strings\n"));
    assert!(output.stdout.contains("Unused in cn: 2\n"));
    assert!(output.stdout.contains("Unused in both: 0\n"));

    Ok(())
}

#[test]
fn test_missing_source_tree_is_a_warning() -> Result<()> {
    let test = android_project()?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("warning: Directory not found, skipping:"));
    assert!(output.stderr.contains("kotlin"));
    assert!(output.stdout.contains("Unused in both: 2\n"));

    Ok(())
}

#[test]
fn test_missing_app_dir_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("Error: Application directory"));
    assert!(output.stderr.contains("does not exist"));

    Ok(())
}

#[test]
fn test_config_file_is_used() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".unstrungrc.json",
        r#"{
         "appDir": "mobile",
         "sourceDir": "java",
         "sourceExtension": "java",
         "primaryLocale": { "label": "de", "path": "values-de/strings.xml" },
         "secondaryLocale": { "label": "fr", "path": "values-fr/strings.xml" },
         "ignores": ["**/generated/**"]
     }"#,
    )?;
    test.write_file(
        "mobile/res/values-de/strings.xml",
        r#"<resources><string name="hallo">Hallo</string><string name="tschuess">Tschuess</string></resources>"#,
    )?;
    test.write_file(
        "mobile/res/values-fr/strings.xml",
        r#"<resources><string name="hallo">Bonjour</string></resources>"#,
    )?;
    test.write_file("mobile/java/Main.java", "getString(R.string.hallo);")?;
    test.write_file("mobile/java/generated/Refs.java", "R.string.tschuess")?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("de (values-de/strings.xml): 2 strings\n"));
    assert!(output.stdout.contains("fr (values-fr/strings.xml): 1 string\n"));
    assert!(output.stdout.contains("--- Unused in de (values-de/strings.xml) ---\n  tschuess\n"));
    assert!(output.stdout.contains("Unused in fr: 0\n"));

    Ok(())
}

#[test]
fn test_ignores_accept_literal_and_anchored_entries() -> Result<()> {
    for entry in [
        "generated",
        "kotlin/generated",
        "app/src/main/kotlin/generated/*",
    ] {
        let test = android_project()?;
        test.write_file(
            ".unstrungrc.json",
            &format!(r#"{{ "ignores": ["{}"] }}"#, entry),
        )?;
        test.write_file("app/src/main/kotlin/Main.kt", "R.string.a")?;
        test.write_file("app/src/main/kotlin/generated/Refs.kt", "R.string.c")?;

        let output = test.run(&[])?;

        assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
        assert!(
            output
                .stdout
                .contains("--- Unused in cn (values/strings.xml) ---\n  b\n  c\n"),
            "entry {:?}:\n{}",
            entry,
            output.stdout
        );
    }

    Ok(())
}

#[test]
fn test_text_after_root_is_malformed() -> Result<()> {
    let test = android_project()?;
    test.write_file(
        "app/src/main/res/values-en/strings.xml",
        "<resources><string name=\"a\">A</string></resources> junk",
    )?;
    test.write_file("app/src/main/kotlin/Main.kt", "R.string.a")?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.starts_with("warning: Failed to parse resource file:"));
    assert!(output.stdout.contains("en (values-en/strings.xml): 0 strings\n"));

    Ok(())
}

#[test]
fn test_project_root_is_not_taken_from_environment() -> Result<()> {
    let test = android_project()?;
    test.write_file("app/src/main/kotlin/Main.kt", "R.string.a")?;

    let output = test
        .command()
        .env("UNSTRUNG_PROJECT_ROOT", "does-not-exist")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Unused in cn: 2\n"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".unstrungrc.json", r#"{ "sourceExtension": ".kt" }"#)?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid config file"));
    assert!(output.stderr.contains("sourceExtension"));

    Ok(())
}

#[test]
fn test_project_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "android/app/src/main/res/values/strings.xml",
        r#"<resources><string name="only">Only</string></resources>"#,
    )?;
    test.write_file("android/.git/HEAD", "")?;

    let output = test.run(&["--project-root", "android"])?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("--- Unused in cn (values/strings.xml) ---\n  only\n"));

    Ok(())
}

#[test]
fn test_verbose_lists_unreadable_files() -> Result<()> {
    let test = android_project()?;
    test.write_file("app/src/main/kotlin/Good.kt", "R.string.a")?;
    std::fs::write(
        test.root().join("app/src/main/kotlin/Bad.kt"),
        [0xff_u8, 0xfe, 0x00],
    )?;

    let quiet = test.run(&[])?;
    assert!(
        quiet
            .stderr
            .contains("warning: 1 file(s) could not be read (use -v for details)")
    );

    let verbose = test.run(&["--verbose"])?;
    assert_eq!(verbose.code, Some(0));
    assert!(verbose.stderr.contains("warning: Cannot read "));
    assert!(verbose.stderr.contains("Bad.kt"));
    assert!(verbose.stderr.contains("Note: No .unstrungrc.json found"));
    // Good.kt plus both locale files
    assert!(verbose.stderr.contains("Scanned 3 files"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("--project-root"));
    assert!(output.stdout.contains("--app-dir"));
    assert!(output.stdout.contains("init"));

    Ok(())
}

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Test that runs `shield-icons` with no arguments in a temporary working
/// directory and asserts that all three extension icons come out as valid
/// RGBA PNGs with a single success line on stdout.
#[test]
fn test_default_run_generates_three_icons() {
    // Create a temporary directory for the test
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let temp_path = temp_dir.path();

    // Run shield-icons with no arguments, writing into the temp cwd
    let output = Command::new(shield_icons_binary())
        .current_dir(temp_path)
        .output()
        .expect("Failed to run shield-icons command");

    // Check that command succeeded
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("shield-icons command failed");
    }

    // Exactly one human-readable confirmation line
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().count(),
        1,
        "expected a single success line, got: {stdout:?}"
    );
    assert_eq!(stdout.trim(), "Icons created successfully!");

    for size in [16u32, 48, 128] {
        let icon_path = temp_path.join(format!("icon{size}.png"));
        assert!(
            icon_path.exists(),
            "icon file should exist at: {}",
            icon_path.display()
        );

        let img = image::open(&icon_path).expect("icon should decode as a valid PNG");
        assert_eq!(img.width(), size, "icon{size}.png should be {size}px wide");
        assert_eq!(img.height(), size, "icon{size}.png should be {size}px tall");
        assert!(
            img.color().has_alpha(),
            "icon{size}.png should carry an alpha channel"
        );

        let rgba = img.to_rgba8();
        assert_eq!(
            rgba.get_pixel(0, 0)[3],
            0,
            "icon{size}.png corner should stay transparent"
        );
        assert_eq!(
            rgba.get_pixel(size / 2, size / 2)[3],
            255,
            "icon{size}.png center should be opaque shield fill"
        );
    }
}

/// Test that `--manifest -o <dir>` also writes a valid icons.json snippet
/// next to the three PNG files.
#[test]
fn test_manifest_flag_writes_icons_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("icon_assets");

    let output = Command::new(shield_icons_binary())
        .arg("-o")
        .arg(&output_dir)
        .arg("--manifest")
        .output()
        .expect("Failed to run shield-icons command");

    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("shield-icons command with --manifest failed");
    }

    // The output directory gets created on demand
    for size in [16u32, 48, 128] {
        assert!(output_dir.join(format!("icon{size}.png")).exists());
    }

    let manifest_path = output_dir.join("icons.json");
    assert!(
        manifest_path.exists(),
        "icons.json should exist at: {}",
        manifest_path.display()
    );

    let manifest_content =
        std::fs::read_to_string(&manifest_path).expect("Failed to read icons.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&manifest_content).expect("icons.json should contain valid JSON");

    let icons = parsed["icons"]
        .as_object()
        .expect("icons.json should have an 'icons' object");
    assert_eq!(icons.len(), 3);
    assert_eq!(icons["16"], "icon16.png");
    assert_eq!(icons["48"], "icon48.png");
    assert_eq!(icons["128"], "icon128.png");
}

/// Gets the path to the shield-icons binary built for this test run
fn shield_icons_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shield-icons"))
}

use std::path::Path;
use std::process::{Command, Output};

fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_allrgb-cli"))
        .args(args)
        .output()
        .expect("run allrgb-cli")
}

fn ok(args: &[&str]) -> Output {
    let out = cli(args);
    assert!(
        out.status.success(),
        "{args:?} failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn p(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

#[test]
fn render_then_verify_reduced_cube() {
    let dir = tempfile::tempdir().unwrap();
    let img = p(dir.path(), "a.ppm");

    let out = ok(&["render", "--bits", "4", "--out", &img, "--verify"]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("size            = 64x64"), "{stderr}");

    let bytes = std::fs::read(&img).unwrap();
    assert!(bytes.starts_with(b"P6\n64 64\n15\n"));
    assert_eq!(bytes.len(), b"P6\n64 64\n15\n".len() + 64 * 64 * 3);

    let out = ok(&["verify", "--in", &img]);
    assert!(String::from_utf8_lossy(&out.stderr).contains("allrgb          = ok"));
}

#[test]
fn render_is_repeatable_and_seed_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let a = p(dir.path(), "a.ppm");
    let b = p(dir.path(), "b.ppm");
    let c = p(dir.path(), "c.ppm");

    ok(&["render", "--bits", "5", "--seed", "7", "--out", &a]);
    ok(&["render", "--bits", "5", "--seed", "7", "--out", &b]);
    ok(&["render", "--bits", "5", "--seed", "8", "--out", &c]);

    let ha = blake3::hash(&std::fs::read(&a).unwrap());
    let hb = blake3::hash(&std::fs::read(&b).unwrap());
    let hc = blake3::hash(&std::fs::read(&c).unwrap());
    assert_eq!(ha, hb);
    assert_ne!(ha, hc);

    ok(&["verify", "--in", &c]);
}

#[test]
fn saved_plan_reproduces_flag_render() {
    let dir = tempfile::tempdir().unwrap();
    let plan = p(dir.path(), "p.arp");
    let a = p(dir.path(), "a.ppm");
    let b = p(dir.path(), "b.ppm");

    ok(&[
        "plan", "new", "--out", &plan, "--bits", "4", "--ordering", "sequential", "--no-shuffle",
        "--c-re", "-0.8",
    ]);
    let out = ok(&["plan", "inspect", "--plan", &plan]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("ordering     = Sequential"), "{stdout}");
    assert!(stdout.contains("shuffle      = false"), "{stdout}");

    ok(&["render", "--plan", &plan, "--out", &a]);
    ok(&[
        "render", "--bits", "4", "--ordering", "sequential", "--no-shuffle", "--c-re", "-0.8",
        "--out", &b,
    ]);
    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}

#[test]
fn image_field_drives_render() {
    let dir = tempfile::tempdir().unwrap();
    let grey = p(dir.path(), "grey.ppm");
    let img = p(dir.path(), "img.ppm");

    ok(&["field", "--bits", "4", "--out", &grey]);
    ok(&["render", "--bits", "4", "--field-image", &grey, "--out", &img, "--verify"]);
    ok(&["verify", "--in", &img]);
}

#[test]
fn mismatched_size_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let img = p(dir.path(), "bad.ppm");

    let out = cli(&["render", "--bits", "4", "--width", "32", "--out", &img]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot hold"));
    assert!(!Path::new(&img).exists());
}

#[test]
fn verify_rejects_non_allrgb_image() {
    let dir = tempfile::tempdir().unwrap();
    let img = p(dir.path(), "grey.ppm");

    // A greyscale preview repeats colours.
    ok(&["field", "--bits", "4", "--out", &img]);
    let out = cli(&["verify", "--in", &img, "--bits", "4"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(report_count(&stderr, "duplicates") > 0, "{stderr}");
    assert!(report_count(&stderr, "missing") > 0, "{stderr}");
}

/// Value of a `key = N` report line.
fn report_count(report: &str, key: &str) -> u64 {
    report
        .lines()
        .find_map(|l| {
            let (k, v) = l.split_once('=')?;
            (k.trim() == key).then(|| v.trim().parse().ok()).flatten()
        })
        .unwrap_or_else(|| panic!("no {key} line in:\n{report}"))
}

#[test]
fn ascending_overrides_a_descending_plan() {
    let dir = tempfile::tempdir().unwrap();
    let plan = p(dir.path(), "desc.arp");
    let a = p(dir.path(), "a.ppm");
    let b = p(dir.path(), "b.ppm");
    let c = p(dir.path(), "c.ppm");

    ok(&["plan", "new", "--out", &plan, "--bits", "4", "--descending"]);
    let out = ok(&["plan", "inspect", "--plan", &plan]);
    assert!(String::from_utf8_lossy(&out.stdout).contains("descending   = true"));

    ok(&["render", "--plan", &plan, "--ascending", "--out", &a]);
    ok(&["render", "--bits", "4", "--out", &b]);
    ok(&["render", "--plan", &plan, "--out", &c]);
    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    assert_ne!(std::fs::read(&a).unwrap(), std::fs::read(&c).unwrap());

    let out = cli(&["render", "--bits", "4", "--ascending", "--descending", "--out", &a]);
    assert!(!out.status.success());
}

#[test]
fn failed_render_leaves_no_plan_behind() {
    let dir = tempfile::tempdir().unwrap();
    let grey = p(dir.path(), "grey.ppm");
    let plan = p(dir.path(), "p.arp");
    let img = p(dir.path(), "img.ppm");

    // 64x64 preview against a 5-bit (256x128) plan.
    ok(&["field", "--bits", "4", "--out", &grey]);
    let out = cli(&[
        "render", "--bits", "5", "--field-image", &grey, "--save-plan", &plan, "--out", &img,
    ]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("plan wants 256x128"));
    assert!(!Path::new(&plan).exists());
    assert!(!Path::new(&img).exists());
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let plan = p(dir.path(), "p.arp");
    let img = p(dir.path(), "no_such_dir/out.ppm");

    let out = cli(&["render", "--bits", "3", "--save-plan", &plan, "--out", &img]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("write ppm"), "{stderr}");
    assert!(!Path::new(&plan).exists());

    let out = cli(&["verify", "--in", &p(dir.path(), "missing.ppm")]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("read "));
}

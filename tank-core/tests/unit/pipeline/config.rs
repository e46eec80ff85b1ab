use super::*;

#[test]
fn png_suffix_is_appended_once() {
    assert_eq!(normalize_output_path("out"), PathBuf::from("out.png"));
    assert_eq!(normalize_output_path("out.png"), PathBuf::from("out.png"));
    assert_eq!(normalize_output_path("out.jpg"), PathBuf::from("out.jpg.png"));
    assert_eq!(
        normalize_output_path("dir/out.PNG"),
        PathBuf::from("dir/out.PNG.png")
    );
}

#[test]
fn new_normalizes_and_defaults_to_sequential() {
    let cfg = MakeConfig::new("a.jpg", "b.png", "result");
    assert_eq!(cfg.top, PathBuf::from("a.jpg"));
    assert_eq!(cfg.bottom, PathBuf::from("b.png"));
    assert_eq!(cfg.output, PathBuf::from("result.png"));
    assert_eq!(cfg.threading, Threading::default());
    assert!(!cfg.threading.parallel);
}

#[test]
fn with_threading_overrides() {
    let cfg = MakeConfig::new("a", "b", DEFAULT_OUTPUT).with_threading(Threading {
        parallel: true,
        threads: Some(2),
    });
    assert_eq!(cfg.output, PathBuf::from("output.png"));
    assert!(cfg.threading.parallel);
    assert_eq!(cfg.threading.threads, Some(2));
}

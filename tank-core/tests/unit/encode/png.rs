use super::*;

fn sample() -> CompositeImage {
    CompositeImage {
        width: 3,
        height: 2,
        data: vec![
            200, 200, 200, 127, 0, 0, 0, 0, 255, 255, 255, 9, //
            0, 0, 0, 127, 127, 127, 127, 254, 12, 12, 12, 1,
        ],
    }
}

fn unit_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("png_unit").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn png_decodes_back_to_identical_straight_rgba() {
    let img = sample();
    let bytes = encode_png(&img).unwrap();
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Png
    );

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgba8);
    let decoded = decoded.to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.into_raw(), img.data);
}

#[test]
fn encode_rejects_short_buffer() {
    let mut img = sample();
    img.data.pop();
    let err = encode_png(&img).unwrap_err();
    assert!(matches!(err, TankError::Encode(_)), "{err}");
}

#[test]
fn write_png_creates_parents_and_leaves_no_temp() {
    let dir = unit_dir("write_ok");
    let path = dir.join("nested").join("out.png");

    write_png(&sample(), &path).unwrap();
    assert!(path.is_file());

    let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("out.png")]);
}

#[test]
fn write_png_failure_cleans_up_temp() {
    let dir = unit_dir("write_fail");
    // Renaming a file over a non-empty directory fails on every platform.
    let target = dir.join("taken.png");
    std::fs::create_dir_all(target.join("inner")).unwrap();

    let err = write_png(&sample(), &target).unwrap_err();
    assert!(matches!(err, TankError::Io(_)), "{err}");

    let leftovers: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("taken.png")]);
}

#[test]
fn write_png_under_a_file_is_io_error() {
    let dir = unit_dir("parent_is_file");
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let err = write_png(&sample(), &blocker.join("out.png")).unwrap_err();
    assert!(matches!(err, TankError::Io(_)), "{err}");
}

#[test]
fn temp_path_is_hidden_sibling() {
    let tmp = temp_path_for(Path::new("a/b/out.png")).unwrap();
    assert_eq!(tmp.parent(), Some(Path::new("a/b")));
    let name = tmp.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with(".out.png."));
    assert!(name.ends_with(".tmp"));

    assert!(temp_path_for(Path::new("/")).is_err());
}

use ideadash::app::prd_export::{default_prd_filename, save_prd_to_markdown, save_prd_to_path};
use pretty_assertions::assert_eq;

#[test]
fn default_filename_matches_the_timestamp_pattern() {
    let filename = default_prd_filename();

    let stem = filename
        .strip_prefix("streamlit_app_prd_")
        .expect("missing prefix")
        .strip_suffix(".md")
        .expect("missing extension");

    // <YYYYMMDD>_<HHMMSS>
    let (date, time) = stem.split_once('_').expect("missing timestamp separator");
    assert_eq!(date.len(), 8);
    assert_eq!(time.len(), 6);
    assert!(date.chars().all(|c| c.is_ascii_digit()));
    assert!(time.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn saved_bytes_equal_the_content_exactly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prd.md");

    let content = "# 프로젝트명 (MVP 버전)\n\n## 📋 프로젝트 개요\n- **목적**: 한 줄 설명\n";
    save_prd_to_path(&path, content).expect("save failed");

    let written = std::fs::read(&path).expect("read back");
    assert_eq!(written, content.as_bytes());
}

#[test]
fn existing_file_is_overwritten_without_protection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prd.md");

    save_prd_to_path(&path, "첫 번째 내용").expect("first save");
    save_prd_to_path(&path, "두 번째 내용").expect("second save");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, "두 번째 내용");
}

#[test]
fn save_without_filename_resolves_into_the_working_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    // The other tests in this binary use absolute paths, so changing the
    // working directory here cannot race them.
    std::env::set_current_dir(dir.path()).expect("chdir");

    let content = "## 생성된 PRD";
    let path = save_prd_to_markdown(content, None).expect("save failed");

    assert!(path.exists());
    let basename = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("basename");
    assert!(basename.starts_with("streamlit_app_prd_"));
    assert!(basename.ends_with(".md"));

    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, content);
}

#[test]
fn explicit_filename_is_respected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom_prd.md");

    save_prd_to_path(&path, "내용").expect("save failed");
    assert!(path.exists());
}

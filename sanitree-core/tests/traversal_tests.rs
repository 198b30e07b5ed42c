use sanitree_core::{
    ContentOutcome, SanitizeError, Sanitizer, SanitizerConfig, TextEncoding, TextExtensionSet,
};
use std::fs;
use tempfile::tempdir;

fn default_sanitizer() -> Sanitizer {
    Sanitizer::new(SanitizerConfig::default()).unwrap()
}

#[test_log::test]
fn renames_and_sanitizes_a_single_text_file() -> Result<(), SanitizeError> {
    let dir = tempdir()?;
    fs::write(dir.path().join("A.TXT"), "Hi! #1")?;

    default_sanitizer().run(dir.path())?;

    assert!(!dir.path().join("A.TXT").exists());
    assert_eq!(fs::read_to_string(dir.path().join("a.txt"))?, "hi 1");
    Ok(())
}

#[test_log::test]
fn non_text_files_are_renamed_but_content_untouched() -> Result<(), SanitizeError> {
    let dir = tempdir()?;
    let payload = [0xde, 0xad, b'!', b'A', 0x00];
    fs::write(dir.path().join("Data-File.BIN"), payload)?;

    let summary = default_sanitizer().run(dir.path())?;

    assert_eq!(fs::read(dir.path().join("data file.bin"))?, payload);
    assert!(matches!(summary.files[0].content, ContentOutcome::NotText));
    Ok(())
}

#[test_log::test]
fn undecodable_file_is_renamed_skipped_and_run_continues() -> Result<(), SanitizeError> {
    let dir = tempdir()?;
    let garbage = [0xff, 0xfe, b'X', b'!'];
    fs::write(dir.path().join("Bad.TXT"), garbage)?;
    fs::write(dir.path().join("Good.TXT"), "Fine!")?;
    let config = SanitizerConfig::default().with_encodings(TextEncoding::Utf8, Some(TextEncoding::Ascii));

    let summary = Sanitizer::new(config)?.run(dir.path())?;

    assert_eq!(fs::read(dir.path().join("bad.txt"))?, garbage);
    assert_eq!(fs::read_to_string(dir.path().join("good.txt"))?, "fine");

    let skipped: Vec<_> = summary.skipped().collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].0, dir.path().join("bad.txt"));
    assert!(matches!(skipped[0].1, SanitizeError::Decode { .. }));
    Ok(())
}

#[test_log::test]
fn word_removal_applies_to_names_only() -> Result<(), SanitizeError> {
    let dir = tempdir()?;
    fs::write(dir.path().join("Report_Draft.md"), "Draft: draft copy")?;
    let config = SanitizerConfig::default().with_word_to_remove(Some("draft"));

    Sanitizer::new(config)?.run(dir.path())?;

    assert_eq!(fs::read_to_string(dir.path().join("report .md"))?, "draft draft copy");
    Ok(())
}

#[test_log::test]
fn nested_directories_are_processed_but_not_renamed() -> Result<(), SanitizeError> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("Sub Dir/Inner"))?;
    fs::write(dir.path().join("Sub Dir/Inner/Deep_File.CSV"), "A,B\n1,2\n")?;

    let summary = default_sanitizer().run(dir.path())?;

    assert_eq!(summary.visited(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("Sub Dir/Inner/deep file.csv"))?,
        "ab\n12\n"
    );
    Ok(())
}

#[test_log::test]
fn second_pass_changes_nothing() -> Result<(), SanitizeError> {
    let dir = tempdir()?;
    fs::write(dir.path().join("Mixed-Case_Name.HTML"), "<h1>Title!</h1>")?;
    fs::write(dir.path().join("photo (1).JPG"), [1u8, 2, 3])?;
    let sanitizer = default_sanitizer();

    sanitizer.run(dir.path())?;
    let second = sanitizer.run(dir.path())?;

    assert_eq!(second.renamed(), 0);
    assert_eq!(second.content_sanitized(), 0);
    assert_eq!(fs::read_to_string(dir.path().join("mixed case name.html"))?, "h1titleh1");
    assert!(dir.path().join("photo 1.jpg").exists());
    Ok(())
}

#[test_log::test]
fn empty_extension_set_disables_content_rewrites() -> Result<(), SanitizeError> {
    let dir = tempdir()?;
    fs::write(dir.path().join("Notes.TXT"), "Keep THIS!")?;
    let config = SanitizerConfig::default().with_text_extensions(TextExtensionSet::empty());

    Sanitizer::new(config)?.run(dir.path())?;

    assert_eq!(fs::read_to_string(dir.path().join("notes.txt"))?, "Keep THIS!");
    Ok(())
}

#[test_log::test]
fn collision_aborts_the_run() -> Result<(), SanitizeError> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a-b.bin"), "first")?;
    fs::write(dir.path().join("a_b.bin"), "second")?;

    let err = default_sanitizer().run(dir.path()).unwrap_err();

    assert!(matches!(err, SanitizeError::RenameCollision { .. }));
    assert_eq!(fs::read_to_string(dir.path().join("a b.bin"))?, "first");
    assert_eq!(fs::read_to_string(dir.path().join("a_b.bin"))?, "second");
    Ok(())
}

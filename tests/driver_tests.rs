//! File driver tests: inputs and outputs on disk.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use wrenbind::{EmitOptions, GenerateError, GeneratorConfig, Output, run};

fn write_header(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let list = write_header(&dir, "ObjList.h", include_str!("../test_headers/ObjList.h"));
    let range = write_header(&dir, "ObjRange.cpp", include_str!("../test_headers/ObjRange.h"));
    let output = dir.path().join("bindings.gen.cpp");

    let config = GeneratorConfig::new([list, range.clone()]).with_output(Output::File(output.clone()));
    let summary = run(&config).unwrap();

    assert_eq!(summary.files, 2);
    assert_eq!(summary.classes, 2);
    assert_eq!(summary.methods, 9 + 6);

    let code = fs::read_to_string(&output).unwrap();
    assert_eq!(code.len(), summary.bytes);
    assert!(code.starts_with("// Auto-generated file"));
    let range_include = range.with_extension("h");
    assert!(code.contains(&format!("#include \"{}\"", range_include.display())));
    assert!(code.contains("static void register_ObjList("));
    assert!(code.contains("static void register_ObjRange("));
}

#[test]
fn test_failed_generation_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let good = write_header(&dir, "ObjList.h", include_str!("../test_headers/ObjList.h"));
    let bad = write_header(&dir, "ObjBad.h", "class ObjBad {\n\tWREN_METHOD(setter) void Set(Value v);\n");
    let output = dir.path().join("bindings.gen.cpp");

    let config = GeneratorConfig::new([good, bad.clone()]).with_output(Output::File(output.clone()));
    match run(&config) {
        Err(GenerateError::Parse { path, source }) => {
            assert_eq!(path, bad);
            assert_eq!(source.line(), 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_existing_output_is_kept_on_failure() {
    let dir = TempDir::new().unwrap();
    let bad = write_header(&dir, "ObjFoo.h", "class ObjFoo {\n\tWREN_METHOD() void Set(float value);\n");
    let output = dir.path().join("bindings.gen.cpp");
    fs::write(&output, "previous").unwrap();

    let config = GeneratorConfig::new([bad]).with_output(Output::File(output.clone()));
    assert!(matches!(run(&config), Err(GenerateError::Binding(_))));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_duplicate_class_across_files() {
    let dir = TempDir::new().unwrap();
    let first = write_header(&dir, "A.h", include_str!("../test_headers/ObjFn.h"));
    let second = write_header(&dir, "B.h", include_str!("../test_headers/ObjFn.h"));

    let config = GeneratorConfig::new([first.clone(), second.clone()])
        .with_output(Output::File(dir.path().join("out.cpp")));
    let err = run(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "class 'ObjFn' is declared in both {} and {}",
            first.display(),
            second.display()
        )
    );
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("ObjMissing.h");
    let config = GeneratorConfig::new([missing.clone()]);
    match run(&config) {
        Err(GenerateError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_unwritable_output() {
    let dir = TempDir::new().unwrap();
    let list = write_header(&dir, "ObjList.h", include_str!("../test_headers/ObjList.h"));
    let output = dir.path().join("no-such-dir").join("out.cpp");

    let config = GeneratorConfig::new([list]).with_output(Output::File(output.clone()));
    match run(&config) {
        Err(GenerateError::Io { path, .. }) => assert_eq!(path, output),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_emit_options_reach_output() {
    let dir = TempDir::new().unwrap();
    let list = write_header(&dir, "ObjList.h", include_str!("../test_headers/ObjList.h"));
    let output = dir.path().join("out.cpp");

    let config = GeneratorConfig::new([list])
        .with_output(Output::File(output.clone()))
        .with_emit_options(EmitOptions::default().with_debug_gc(true).with_include_sources(false));
    run(&config).unwrap();

    let code = fs::read_to_string(&output).unwrap();
    assert!(code.contains("#include \"WrenRuntime.h\""));
    assert!(code.contains("WrenRuntime::Instance().RunGC("));
    assert!(!code.contains("ObjList.h"));
}

use anyhow::Result;

use crate::CliTest;

const KEYWORD_CONFIG: &str = r#"{
    "sourceRoot": "./kernel32/",
    "outputRoot": "./api",
    "umbrellaFile": "kernel.h"
}"#;

const MARKER_CONFIG: &str = r#"{
    "sourceRoot": "./kernel32/",
    "outputRoot": "./api",
    "umbrellaFile": "kernel.h",
    "strategy": "markers"
}"#;

#[test]
fn test_keyword_roundtrip_exact_output() -> Result<()> {
    let test = CliTest::with_file("kernel32/foo.h", "EXPORT int foo(void);\n\n")?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    let status = test.export_command().status()?;
    assert!(status.success());

    let header = test.read_file("api/foo.h")?;
    assert_eq!(
        header,
        concat!(
            "//This header file is generated automatically\n",
            "#ifndef EXPORTED_FOO_H_\n",
            "#define EXPORTED_FOO_H_\n",
            "\n",
            "#ifdef __cplusplus\n",
            "extern \"C\"\n",
            "{\n",
            "#endif\n",
            "\n",
            "int foo(void);\n",
            "\n",
            "\n",
            "#ifdef __cplusplus\n",
            "}\n",
            "#endif\n",
            "#endif\n",
        )
    );

    Ok(())
}

#[test]
fn test_bracket_depth_blank_inside_braces() -> Result<()> {
    let test = CliTest::with_file(
        "kernel32/f.h",
        "EXPORT void f() {\n    int x;\n\n    return;\n}\n\n",
    )?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    let status = test.export_command().status()?;
    assert!(status.success());

    let header = test.read_file("api/f.h")?;
    assert!(header.contains("void f() {\n    int x;\n\n    return;\n}\n"));

    Ok(())
}

#[test]
fn test_extern_keyword_rewritten() -> Result<()> {
    let test = CliTest::with_file(
        "kernel32/ob.h",
        "EXPORT\nEXTERN bool ObIsObjectLocked(void *object);\n\n",
    )?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    let output = test.export_command().output()?;
    assert!(output.status.success());

    let header = test.read_file("api/ob.h")?;
    assert!(header.contains("extern bool ObIsObjectLocked(void *object);"));
    assert!(!header.contains("EXTERN"));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("extern lines rewritten: 1"));

    Ok(())
}

#[test]
fn test_keyword_strategy_keeps_file_without_exports() -> Result<()> {
    let test = CliTest::with_file("kernel32/internal.h", "static int hidden;\n")?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    let status = test.export_command().status()?;
    assert!(status.success());

    // Header is written with an empty body: guards and linkage only
    let header = test.read_file("api/internal.h")?;
    assert!(header.contains("#ifndef EXPORTED_INTERNAL_H_"));
    assert!(!header.contains("hidden"));

    Ok(())
}

#[test]
fn test_marker_strategy_exact_body() -> Result<()> {
    let test = CliTest::with_file("kernel32/g.h", "EXPORT_API\nint g();\nEND_EXPORT_API\n")?;
    test.write_file(".hexportrc.json", MARKER_CONFIG)?;

    let output = test.export_command().output()?;
    assert!(output.status.success());

    let header = test.read_file("api/g.h")?;
    assert!(header.contains("\nint g();\n"));
    assert!(!header.contains("EXPORT_API"));
    assert!(!header.contains("END_EXPORT_API"));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Exported 1 block(s)"));

    Ok(())
}

#[test]
fn test_marker_strategy_discards_files_without_blocks() -> Result<()> {
    let test = CliTest::with_file("kernel32/internal.h", "static int hidden;\n")?;
    test.write_file(
        "kernel32/public.h",
        "EXPORT_API\nint g();\nEND_EXPORT_API\n",
    )?;
    test.write_file(".hexportrc.json", MARKER_CONFIG)?;

    let status = test.export_command().status()?;
    assert!(status.success());

    assert!(test.file_exists("api/public.h"));
    assert!(!test.file_exists("api/internal.h"));

    // The umbrella only references files that actually exist
    let umbrella = test.read_file("api/kernel.h")?;
    assert!(umbrella.contains("#include \"public.h\""));
    assert!(!umbrella.contains("internal.h"));

    Ok(())
}

#[test]
fn test_include_prefix_rewriting() -> Result<()> {
    let test = CliTest::with_file(
        "kernel32/sub/inner.h",
        "EXPORT int inner(void);\n\n",
    )?;
    test.write_file(
        "kernel32/outer.h",
        "#include \"./kernel32/sub/inner.h\"\n#include \"defines.h\"\nEXPORT int outer(void);\n\n",
    )?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    let status = test.export_command().status()?;
    assert!(status.success());

    let header = test.read_file("api/outer.h")?;
    assert!(header.contains("#include \"sub/inner.h\"\n"));
    // Already-relative includes pass through unchanged
    assert!(header.contains("#include \"defines.h\"\n"));

    Ok(())
}

#[test]
fn test_umbrella_wraps_relative_includes() -> Result<()> {
    let test = CliTest::with_file("kernel32/ke/mutex.h", "EXPORT void m(void);\n\n")?;
    test.write_file("kernel32/hal/cpu.h", "EXPORT void c(void);\n\n")?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    let status = test.export_command().status()?;
    assert!(status.success());

    let umbrella = test.read_file("api/kernel.h")?;
    assert!(umbrella.starts_with("//This header file is generated automatically\n"));
    assert!(umbrella.contains("#ifndef EXPORTED_KERNEL_H_\n"));
    assert!(umbrella.contains("#define EXPORTED_KERNEL_H_\n"));
    assert!(umbrella.contains("#include \"ke/mutex.h\"\n"));
    assert!(umbrella.contains("#include \"hal/cpu.h\"\n"));
    assert!(umbrella.contains("extern \"C\"\n"));

    Ok(())
}

#[test]
fn test_guard_token_from_nested_path() -> Result<()> {
    let test = CliTest::with_file("kernel32/a/b.h", "EXPORT int ab(void);\n\n")?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    let status = test.export_command().status()?;
    assert!(status.success());

    let header = test.read_file("api/a/b.h")?;
    assert!(header.contains("#ifndef EXPORTED_A_B_H_\n"));
    assert!(header.contains("#define EXPORTED_A_B_H_\n"));

    Ok(())
}

#[test]
fn test_export_twice_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("kernel32/a.h", "EXPORT int a(void);\n\n")?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    assert!(test.export_command().status()?.success());
    let first_header = test.read_file("api/a.h")?;
    let first_umbrella = test.read_file("api/kernel.h")?;

    assert!(test.export_command().status()?.success());
    assert_eq!(test.read_file("api/a.h")?, first_header);
    assert_eq!(test.read_file("api/kernel.h")?, first_umbrella);

    Ok(())
}

#[test]
fn test_clean_flag_removes_stale_outputs() -> Result<()> {
    let test = CliTest::with_file("kernel32/a.h", "EXPORT int a(void);\n\n")?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;
    test.write_file("api/stale.h", "//leftover from a previous run\n")?;

    assert!(test.export_command().status()?.success());
    assert!(test.file_exists("api/stale.h"));

    assert!(test.export_command().arg("--clean").status()?.success());
    assert!(!test.file_exists("api/stale.h"));
    assert!(test.file_exists("api/a.h"));

    Ok(())
}

#[test]
fn test_cli_flags_override_config() -> Result<()> {
    let test = CliTest::with_file("headers/x.h", "EXPORT int x(void);\n\n")?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    let status = test
        .export_command()
        .args(["--source-root", "./headers"])
        .args(["--output-root", "./out"])
        .args(["--umbrella", "public.h"])
        .status()?;
    assert!(status.success());

    assert!(test.file_exists("out/x.h"));
    let umbrella = test.read_file("out/public.h")?;
    assert!(umbrella.contains("#ifndef EXPORTED_PUBLIC_H_\n"));
    assert!(umbrella.contains("#include \"x.h\"\n"));

    Ok(())
}

#[test]
fn test_strategy_flag_override() -> Result<()> {
    let test = CliTest::with_file(
        "kernel32/g.h",
        "EXPORT_API\nint g();\nEND_EXPORT_API\n",
    )?;
    // Config says keyword; the flag switches to markers
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    let status = test
        .export_command()
        .args(["--strategy", "markers"])
        .status()?;
    assert!(status.success());

    let header = test.read_file("api/g.h")?;
    assert!(header.contains("\nint g();\n"));
    assert!(!header.contains("EXPORT_API"));

    Ok(())
}

#[test]
fn test_export_without_config_uses_defaults() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("kernel32/a.h", "EXPORT int a(void);\n\n")?;

    // Defaults scan "./" and write to "./api" - pass the source root explicitly
    let status = test
        .export_command()
        .args(["--source-root", "./kernel32"])
        .status()?;
    assert!(status.success());

    assert!(test.file_exists("api/a.h"));
    assert!(test.file_exists("api/kernel.h"));

    Ok(())
}

#[test]
fn test_verbose_prints_banner() -> Result<()> {
    let test = CliTest::with_file("kernel32/a.h", "EXPORT int a(void);\n\n")?;
    test.write_file(".hexportrc.json", KEYWORD_CONFIG)?;

    let output = test.export_command().arg("--verbose").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Headers from ./kernel32/ (recursively)"));
    assert!(stdout.contains("Export keyword is \"EXPORT\""));
    assert!(stdout.contains("Extern keyword is \"EXTERN\", replacing with \"extern\""));

    Ok(())
}

#[test]
fn test_invalid_config_exits_with_error() -> Result<()> {
    let test = CliTest::with_file("kernel32/a.h", "EXPORT int a(void);\n\n")?;
    test.write_file(".hexportrc.json", r#"{ "exportKeyword": "" }"#)?;

    let output = test.export_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("exportKeyword"));

    Ok(())
}

#[test]
fn test_missing_source_root_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .export_command()
        .args(["--source-root", "./nonexistent"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Source root is not a directory"));
    assert!(!test.file_exists("api/kernel.h"));

    Ok(())
}

#[test]
fn test_help_without_command() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("export"));
    assert!(stdout.contains("init"));

    Ok(())
}

#[test]
fn test_ignores_from_config() -> Result<()> {
    let test = CliTest::with_file("kernel32/public.h", "EXPORT int a(void);\n\n")?;
    test.write_file("kernel32/i686/lapic.h", "EXPORT int b(void);\n\n")?;
    test.write_file(
        ".hexportrc.json",
        r#"{
            "sourceRoot": "./kernel32/",
            "outputRoot": "./api",
            "ignores": ["**/i686/**"]
        }"#,
    )?;

    let status = test.export_command().status()?;
    assert!(status.success());

    assert!(test.file_exists("api/public.h"));
    assert!(!test.file_exists("api/i686/lapic.h"));

    let umbrella = test.read_file("api/kernel.h")?;
    assert!(!umbrella.contains("lapic.h"));

    Ok(())
}

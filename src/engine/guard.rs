//! Include-guard derivation and output header composition.
//!
//! Every generated header, the umbrella included, is wrapped in the same
//! notice / guard / C-linkage scaffolding. The guard token is a naive string
//! normalization of the output-relative path; collisions between paths that
//! normalize to the same token are deliberately not detected, to keep the
//! output format compatible with the original tool.

/// First line of every generated file.
pub const GENERATED_NOTICE: &str = "//This header file is generated automatically";

const FILE_PROLOGUE: &str = "#ifdef __cplusplus\nextern \"C\"\n{\n#endif\n";
const FILE_EPILOGUE: &str = "#ifdef __cplusplus\n}\n#endif\n";

/// Derive the include-guard token for an output-relative path.
///
/// Uppercase, with path separators, dots and hyphens replaced by
/// underscores: `a/b.h` becomes `EXPORTED_A_B_H_`.
pub fn guard_token(relative_path: &str) -> String {
    let normalized: String = relative_path
        .chars()
        .map(|c| match c {
            '/' | '\\' | '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect();
    format!("EXPORTED_{}_", normalized)
}

/// Assemble the full text of one output header from its transformed body.
pub fn compose_header(relative_path: &str, body: &str) -> String {
    let guard = guard_token(relative_path);
    let mut out = String::new();

    out.push_str(GENERATED_NOTICE);
    out.push('\n');
    out.push_str(&format!("#ifndef {guard}\n"));
    out.push_str(&format!("#define {guard}\n"));
    out.push('\n');
    out.push_str(FILE_PROLOGUE);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
    out.push_str(FILE_EPILOGUE);
    out.push_str("#endif\n");

    out
}

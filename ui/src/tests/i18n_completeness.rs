use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Bundle file expected in every locale folder.
const FTL_FILENAME: &str = "tydesigns_ui.ftl";

/// Message IDs defined in a Fluent file. Comments, terms and attribute lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of every `t!(` call under `root`.
///
/// Dynamically built IDs or direct `fl!` calls are not seen; the crate does not use either.
fn referenced_keys(root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![root.to_path_buf()];
    let needle = concat!("t!", "(\"");

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}

#[test]
fn every_referenced_key_exists_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback_file = crate_root.join("i18n").join("en-US").join(FTL_FILENAME);
    let fallback = fs::read_to_string(&fallback_file).expect("fallback bundle readable");
    let defined = parse_ftl_keys(&fallback);
    assert!(!defined.is_empty(), "no keys parsed from {fallback_file:?}");

    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(referenced.contains("nav-home"), "key scan found nothing");

    let mut missing: Vec<_> = referenced.iter().filter(|k| !defined.contains(*k)).collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "keys used in sources but missing from en-US:\n{}",
        missing.iter().map(|k| k.as_str()).collect::<Vec<_>>().join("\n")
    );

    let unused: Vec<_> = defined.iter().filter(|k| !referenced.contains(*k)).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] {} fallback keys unused in sources: {unused:?}", unused.len());
    }
}

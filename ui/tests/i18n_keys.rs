//! Fluent catalogue checks.
//!
//! - every locale defines exactly the message ids of the en-US fallback
//! - every `t!("…")` id used under `src/` exists in the fallback
//! - translations use the same `$variables` as the fallback message
//!
//! The parser is shallow: one `id = value` per line, comments
//! and attributes skipped. Multi-line patterns are not used in these files.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "brightline-ui.ftl";
const FALLBACK: &str = "en-US";

type Catalogue = BTreeMap<String, String>;

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn parse_catalogue(src: &str, locale: &str) -> Catalogue {
    let mut messages = Catalogue::new();
    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || !id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) {
            continue;
        }
        let previous = messages.insert(id.to_string(), value.trim().to_string());
        assert!(previous.is_none(), "{locale}: duplicate message id `{id}`");
    }
    messages
}

fn load_locales() -> BTreeMap<String, Catalogue> {
    let root = crate_root().join("i18n");
    let mut locales = BTreeMap::new();
    for entry in fs::read_dir(&root).expect("i18n/ directory").flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let locale = path
            .file_name()
            .and_then(|s| s.to_str())
            .expect("utf-8 locale dir")
            .to_string();
        let file = path.join(FTL_FILENAME);
        let src = fs::read_to_string(&file)
            .unwrap_or_else(|err| panic!("{locale}: cannot read {}: {err}", file.display()));
        let catalogue = parse_catalogue(&src, &locale);
        locales.insert(locale, catalogue);
    }
    locales
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

fn referenced_ids(dir: &Path, found: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).expect("readable source dir").flatten() {
        let path = entry.path();
        if path.is_dir() {
            referenced_ids(&path, found);
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let src = fs::read_to_string(&path).unwrap_or_default();
        for chunk in src.split("t!(\"").skip(1) {
            if let Some(id) = chunk.split('"').next() {
                if !id.is_empty() && id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) {
                    found.insert(id.to_string());
                }
            }
        }
    }
}

#[test]
fn fallback_locale_is_present_and_non_empty() {
    let locales = load_locales();
    let fallback = locales.get(FALLBACK).expect("en-US catalogue");
    assert!(!fallback.is_empty(), "en-US catalogue has no messages");
}

#[test]
fn all_locales_define_the_fallback_ids() {
    let locales = load_locales();
    let fallback: BTreeSet<_> = locales[FALLBACK].keys().cloned().collect();

    let mut failures = Vec::new();
    for (locale, catalogue) in &locales {
        let ids: BTreeSet<_> = catalogue.keys().cloned().collect();
        let missing: Vec<_> = fallback.difference(&ids).cloned().collect();
        let extra: Vec<_> = ids.difference(&fallback).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} missing: {}", missing.join(", ")));
        }
        if !extra.is_empty() {
            failures.push(format!("{locale} not in fallback: {}", extra.join(", ")));
        }
    }

    assert!(failures.is_empty(), "catalogue mismatch:\n  {}", failures.join("\n  "));
}

#[test]
fn source_references_exist_in_fallback() {
    let locales = load_locales();
    let fallback = &locales[FALLBACK];

    let mut used = BTreeSet::new();
    referenced_ids(&crate_root().join("src"), &mut used);
    assert!(!used.is_empty(), "no t!() usages found; did the scanner break?");

    let missing: Vec<_> = used.iter().filter(|id| !fallback.contains_key(*id)).cloned().collect();
    assert!(
        missing.is_empty(),
        "ids used in src/ but absent from en-US: {}",
        missing.join(", ")
    );
}

#[test]
fn translations_keep_fallback_variables() {
    let locales = load_locales();
    let fallback = &locales[FALLBACK];

    let mut failures = Vec::new();
    for (locale, catalogue) in locales.iter().filter(|(l, _)| l.as_str() != FALLBACK) {
        for (id, value) in catalogue {
            let Some(reference) = fallback.get(id) else {
                continue;
            };
            if variables(value) != variables(reference) {
                failures.push(format!("{locale}/{id}: `{value}` vs `{reference}`"));
            }
        }
    }

    assert!(failures.is_empty(), "placeholder drift:\n  {}", failures.join("\n  "));
}

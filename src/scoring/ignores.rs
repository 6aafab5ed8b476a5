//! Config-driven diagnostic filtering applied before scoring

use crate::config::VueDoctorConfig;
use crate::models::Diagnostic;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};

/// Drop diagnostics the project config asks to ignore.
///
/// A diagnostic is ignored when its rule (`rule` or `plugin/rule`) appears in
/// `ignore.rules`, or when its `filePath` matches an entry of `ignore.files`.
/// File entries are globs (`**/*.spec.vue`, `src/legacy/**`); an entry with no
/// wildcard also matches everything beneath it as a directory.
pub fn apply_ignores(diagnostics: Vec<Diagnostic>, config: &VueDoctorConfig) -> Vec<Diagnostic> {
    let rules = config.ignored_rules();
    let files = config.ignored_files();
    if rules.is_empty() && files.is_empty() {
        return diagnostics;
    }

    let file_globs = build_file_globs(&files);
    let before = diagnostics.len();
    let kept: Vec<Diagnostic> = diagnostics
        .into_iter()
        .filter(|d| !is_rule_ignored(d, &rules) && !is_file_ignored(d, &file_globs))
        .collect();

    debug!("Ignored {} of {} diagnostics", before - kept.len(), before);
    kept
}

fn is_rule_ignored(diagnostic: &Diagnostic, rules: &[&str]) -> bool {
    let bare = diagnostic.rule.as_deref();
    let qualified = diagnostic.rule_id();
    rules
        .iter()
        .any(|r| Some(*r) == bare || Some(*r) == qualified.as_deref())
}

fn is_file_ignored(diagnostic: &Diagnostic, globs: &GlobSet) -> bool {
    let Some(file) = diagnostic.file_path.as_deref() else {
        return false;
    };
    !globs.is_empty() && globs.is_match(normalize_path(file))
}

/// `./src/a.vue` and `src/a.vue` name the same file
fn normalize_path(path: &str) -> &str {
    let mut path = path;
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path
}

fn build_file_globs(entries: &[&str]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for entry in entries {
        let pattern = normalize_path(entry).trim_end_matches('/');
        if pattern.is_empty() {
            continue;
        }
        let is_literal = !pattern.contains(&['*', '?', '[', '{'][..]);
        let mut patterns = vec![pattern.to_string()];
        if is_literal {
            patterns.push(format!("{pattern}/**"));
        }
        for p in &patterns {
            // `*` stays inside one path segment; `**` crosses segments
            match GlobBuilder::new(p).literal_separator(true).build() {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => warn!("Invalid ignore.files pattern '{}': {}", entry, e),
            }
        }
    }
    builder.build().unwrap_or_else(|e| {
        warn!("Failed to build ignore.files patterns: {}", e);
        GlobSet::empty()
    })
}

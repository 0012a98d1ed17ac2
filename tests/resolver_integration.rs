//! End-to-end resolution tests over the fixture corpus.
//!
//! Fixtures live in `tests/fixtures` and mirror the manifest shapes the
//! resolver is expected to handle: condition matches, default fallback,
//! extra pass-through fields, dependencies, and failure cases.

use std::path::{Path, PathBuf};

use serde_json::Value;

use ballast::util::convert::convert_path;
use ballast::{
    resolve_manifest, Conditions, PathConvention, ResolveError, ResolveOptions, ResolvedConfig,
};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

fn fixture_path(parts: &[&str]) -> String {
    let mut path = fixtures_dir();
    for part in parts {
        path.push(part);
    }
    path.to_string_lossy().into_owned()
}

fn os_conditions(os: &str) -> Conditions {
    [("os".to_string(), Value::from(os))].into()
}

fn resolve(name: &str, conditions: &Conditions) -> Option<ResolvedConfig> {
    resolve_manifest(&fixture(name), conditions, &ResolveOptions::default()).unwrap()
}

#[test]
fn resolves_a_matching_condition_entry() {
    let config = resolve("manifest.json", &os_conditions("mac")).unwrap();

    assert_eq!(
        config.src,
        vec![
            fixture_path(&["src", "foo_mac.f"]),
            fixture_path(&["src", "foo_mac_f.c"]),
        ]
    );
    assert_eq!(config.include, vec![fixture_path(&["include"])]);
    assert!(config.libraries.is_empty());
    assert!(config.libpath.is_empty());
    assert!(config.dependencies.is_empty());
    assert_eq!(config.extra["os"], "mac");
}

#[test]
fn returns_none_when_nothing_matches() {
    assert!(resolve("manifest.json", &os_conditions("beep-boop-bop-foo-bar")).is_none());
}

#[test]
fn falls_back_to_the_default_entry() {
    let config = resolve("default_fallback.json", &os_conditions("linux")).unwrap();

    assert_eq!(config.src, vec![fixture_path(&["src", "foo_generic.c"])]);
    assert!(config.extra.is_empty());
}

#[test]
fn satisfied_entry_beats_an_earlier_default() {
    let config = resolve("default_fallback.json", &os_conditions("mac")).unwrap();

    assert_eq!(
        config.src,
        vec![
            fixture_path(&["src", "foo_mac.f"]),
            fixture_path(&["src", "foo_mac_f.c"]),
        ]
    );
    assert_eq!(config.extra["os"], "mac");
}

#[test]
fn passes_extra_fields_through() {
    let config = resolve("extra_fields.json", &os_conditions("win")).unwrap();
    assert_eq!(config.extra["os"], "win");
    assert_eq!(config.extra["foo"], "bat");

    let config = resolve("extra_fields.json", &os_conditions("plan9")).unwrap();
    assert!(config.extra.get("os").is_none());
    assert_eq!(config.extra["foo"], "baz");
}

#[test]
fn resolves_and_merges_dependencies() {
    let config = resolve("dependency.json", &os_conditions("linux")).unwrap();

    assert_eq!(
        config.src,
        vec![
            fixture_path(&["src", "foo_linux.f"]),
            fixture_path(&["src", "foo_linux.c"]),
            fixture_path(&["beep", "src", "foo_linux.f"]),
            fixture_path(&["beep", "src", "foo_linux.c"]),
        ]
    );
    assert_eq!(
        config.include,
        vec![
            fixture_path(&["include"]),
            fixture_path(&["beep", "include"]),
        ]
    );
    assert_eq!(config.libraries, vec!["-lblas"]);
    assert_eq!(config.libpath, vec!["/usr/local"]);
    // The dependency list stays verbatim; resolution never rewrites it.
    assert_eq!(config.dependencies, vec!["./beep"]);
}

#[test]
fn merges_dependencies_with_extra_fields() {
    let config = resolve("extra_fields_and_deps.json", &os_conditions("win")).unwrap();

    assert_eq!(
        config.src,
        vec![
            fixture_path(&["src", "foo_win.c"]),
            fixture_path(&["beep", "src", "foo_win.c"]),
        ]
    );
    assert_eq!(
        config.include,
        vec![
            fixture_path(&["include"]),
            fixture_path(&["beep", "include"]),
        ]
    );
    assert_eq!(config.dependencies, vec!["./beep"]);
    assert_eq!(config.extra["foo"], "bat");
    // The dependency's own fields do not propagate upward.
    assert_eq!(config.extra.len(), 2);
}

#[test]
fn unmarked_paths_pass_through_byte_identical() {
    let config = resolve("mixed_paths.json", &os_conditions("linux")).unwrap();

    assert_eq!(
        config.src,
        vec![
            fixture_path(&["src", "foo_linux.c"]),
            "src/plain.c".to_string(),
            "/opt/vendored/foo.c".to_string(),
        ]
    );
    assert_eq!(
        config.libpath,
        vec![fixture_path(&["lib"]), "/usr/local".to_string()]
    );
    assert_eq!(config.libraries, vec!["-lm"]);
}

#[test]
fn applies_the_requested_path_convention() {
    let options = ResolveOptions {
        basedir: None,
        paths: Some(PathConvention::Win32),
    };
    let config = resolve_manifest(&fixture("dependency.json"), &os_conditions("linux"), &options)
        .unwrap()
        .unwrap();

    let expected: Vec<String> = [
        fixture_path(&["src", "foo_linux.f"]),
        fixture_path(&["src", "foo_linux.c"]),
        fixture_path(&["beep", "src", "foo_linux.f"]),
        fixture_path(&["beep", "src", "foo_linux.c"]),
    ]
    .iter()
    .map(|p| convert_path(p, PathConvention::Win32))
    .collect();
    assert_eq!(config.src, expected);

    // Dependency-contributed paths use the convention too.
    assert_eq!(
        config.libpath,
        vec![convert_path("/usr/local", PathConvention::Win32)]
    );
    // Linker flags are untouched.
    assert_eq!(config.libraries, vec!["-lblas"]);
    // And so is the dependency token list.
    assert_eq!(config.dependencies, vec!["./beep"]);
}

#[test]
fn explicit_basedir_overrides_the_manifest_directory() {
    let options = ResolveOptions {
        basedir: Some(PathBuf::from("/elsewhere")),
        paths: None,
    };
    let config = resolve_manifest(&fixture("manifest.json"), &os_conditions("mac"), &options)
        .unwrap()
        .unwrap();

    assert_eq!(config.src[0], "/elsewhere/src/foo_mac.f");
}

#[test]
fn fails_on_an_unresolvable_dependency() {
    let err = resolve_manifest(
        &fixture("bad_dependency.json"),
        &os_conditions("mac"),
        &ResolveOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::UnresolvableDependency { ref token, .. } if token == "./bop"
    ));
}

#[test]
fn fails_when_a_dependency_has_no_matching_entry() {
    let err = resolve_manifest(
        &fixture("unmatched_dependency.json"),
        &os_conditions("linux"),
        &ResolveOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::UnresolvableDependency { ref token, source: None, .. } if token == "./quux"
    ));
}

#[test]
fn fails_on_a_dependency_cycle() {
    let err = resolve_manifest(
        &fixture("cycle_a/manifest.json"),
        &Conditions::new(),
        &ResolveOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ResolveError::DependencyCycle { .. }));
}

#[test]
fn fails_on_unparseable_manifests() {
    let err = resolve_manifest(
        &fixture("broken.json"),
        &Conditions::new(),
        &ResolveOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ResolveError::Parse { .. }));
}

#[test]
fn fails_on_missing_manifests() {
    let err = resolve_manifest(
        &fixture("dkjafljdafjdf.ajldjfasjfljs"),
        &Conditions::new(),
        &ResolveOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ResolveError::Io { .. }));
}

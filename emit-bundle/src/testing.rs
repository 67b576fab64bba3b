//! Test utilities for code generators that emit into an output registry.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use eyre::Result;
use jsemit_output::{OutputRegistry, SourceFile};

use crate::{Bundle, BundleConfig};

/// Assert that the file packed under `path` holds exactly `expected`.
///
/// On mismatch, panics with every differing line of the decoded file.
pub fn assert_bundled_eq(bundle: &Bundle, path: &str, expected: &str) {
    let Some(bytes) = bundle.get(path) else {
        panic!("'{path}' is not in the bundle");
    };
    let actual = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => panic!("'{path}' is not valid UTF-8: {err}"),
    };
    if actual == expected {
        return;
    }

    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();
    let mut diff = String::new();
    for line in 1.. {
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => break,
            (exp, act) if exp == act => {}
            (exp, act) => {
                diff.push_str(&format!("line {line}:\n"));
                diff.push_str(&format!("  expected: {}\n", exp.unwrap_or("<missing>")));
                diff.push_str(&format!("  bundled:  {}\n", act.unwrap_or("<missing>")));
            }
        }
    }

    panic!("content mismatch in '{path}':\n{diff}");
}

/// Run a producer against a fresh registry and pack what it emitted.
///
/// The registry is sealed before packing, with the default [`BundleConfig`].
pub fn pack_with<I, S, F>(sources: I, produce: F) -> Result<Bundle>
where
    I: IntoIterator<Item = S>,
    S: Into<SourceFile>,
    F: FnOnce(&mut OutputRegistry) -> Result<()>,
{
    let mut registry = OutputRegistry::with_sources(sources);
    produce(&mut registry)?;

    let bundle = Bundle::pack(&registry.seal(), &BundleConfig::default())?;
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed() -> Bundle {
        pack_with(["main.kt"], |registry| {
            registry.add_output("main.js", "let a = 1;\nconsole.log(a);\n")?;
            Ok(())
        })
        .unwrap()
    }

    #[test]
    fn test_assert_bundled_eq_passes_on_equal() {
        assert_bundled_eq(&packed(), "main.js", "let a = 1;\nconsole.log(a);\n");
    }

    #[test]
    #[should_panic(expected = "line 2:")]
    fn test_assert_bundled_eq_reports_line() {
        assert_bundled_eq(&packed(), "main.js", "let a = 1;\nconsole.log(b);\n");
    }

    #[test]
    #[should_panic(expected = "'other.js' is not in the bundle")]
    fn test_assert_bundled_eq_missing_path() {
        assert_bundled_eq(&packed(), "other.js", "");
    }

    #[test]
    fn test_pack_with_surfaces_producer_errors() {
        let err = pack_with(Vec::<SourceFile>::new(), |registry| {
            registry.add_output("twice.js", "1")?;
            registry.add_output("twice.js", "2")?;
            Ok(())
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "output file 'twice.js' already added");
    }
}

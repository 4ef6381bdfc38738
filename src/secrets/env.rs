use std::collections::HashMap;
use std::env;
use std::ffi::OsString;

/// Collect secrets from environment variables carrying the given prefix.
///
/// The prefix is stripped from the variable name to form the key. Variables
/// whose name or value is not valid UTF-8 are skipped. Never fails; returns
/// an empty map when nothing matches.
pub fn collect_from_env(prefix: &str) -> HashMap<String, String> {
    collect_from_vars(env::vars_os(), prefix)
}

fn collect_from_vars(
    vars: impl Iterator<Item = (OsString, OsString)>,
    prefix: &str,
) -> HashMap<String, String> {
    vars.filter_map(|(name, value)| {
        let name = name.into_string().ok()?;
        let value = value.into_string().ok()?;
        let key = name.strip_prefix(prefix)?;
        Some((key.to_string(), value))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(OsString, OsString)> {
        pairs
            .iter()
            .map(|(name, value)| (OsString::from(name), OsString::from(value)))
            .collect()
    }

    #[test]
    fn test_strips_prefix_from_matching_vars() {
        let collected = collect_from_vars(
            vars(&[("APP_SECRET_TEST1", "value1"), ("APP_SECRET_TEST2", "value2")]).into_iter(),
            "APP_SECRET_",
        );

        assert_eq!(collected["TEST1"], "value1");
        assert_eq!(collected["TEST2"], "value2");
    }

    #[test]
    fn test_ignores_vars_without_prefix() {
        let collected = collect_from_vars(
            vars(&[("APP_SECRET_TEST1", "value1"), ("HOME", "/root"), ("PATH", "/bin")])
                .into_iter(),
            "APP_SECRET_",
        );

        assert_eq!(collected.len(), 1);
        assert!(!collected.contains_key("HOME"));
    }

    #[test]
    fn test_empty_when_nothing_matches() {
        let collected = collect_from_vars(vars(&[("HOME", "/root")]).into_iter(), "APP_SECRET_");
        assert!(collected.is_empty());
    }

    #[test]
    fn test_reads_process_environment() {
        // No variable in the test environment carries this prefix.
        let collected = collect_from_env("SECRET_RENDER_TEST_UNLIKELY_PREFIX_");
        assert!(collected.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_non_utf8_values() {
        use std::os::unix::ffi::OsStringExt;

        let pairs = vec![
            (
                OsString::from("APP_SECRET_BAD"),
                OsString::from_vec(vec![0x66, 0x6f, 0x80]),
            ),
            (OsString::from("APP_SECRET_GOOD"), OsString::from("ok")),
        ];
        let collected = collect_from_vars(pairs.into_iter(), "APP_SECRET_");

        assert_eq!(collected.len(), 1);
        assert_eq!(collected["GOOD"], "ok");
    }
}

//! Short-option group expansion.
//!
//! Splits grouped short options (`-xvf`) into one token per flag (`-x -v -f`)
//! before any matching happens.

use tracing::trace;

/// Returns true for tokens shaped like `-abc`: longer than two characters,
/// a single leading dash, and not a long option.
pub fn is_short_group(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(chars.next(), Some('-'))
        && matches!(chars.next(), Some(second) if second != '-')
        && chars.next().is_some()
}

/// Expands every grouped short option in `tokens`.
///
/// Each `-abc` becomes `-a`, `-b`, `-c` in order. Anything else (long
/// options, single short options, positionals, `--`, bare `-`) passes
/// through unchanged. The expansion is a single pass and does not recurse,
/// which makes it idempotent.
///
/// Grouping is purely syntactic. A token appearing after `--`, or one meant
/// as the value of a value option, is split all the same.
///
/// # Examples
///
/// ```
/// use command_args_core::expand_short_groups;
///
/// let expanded = expand_short_groups(["-xvf", "--long", "-", "file"]);
/// assert_eq!(expanded, ["-x", "-v", "-f", "--long", "-", "file"]);
/// ```
pub fn expand_short_groups<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut expanded = Vec::new();
    for token in tokens {
        let token = token.into();
        if is_short_group(&token) {
            trace!(token = %token, "Expanding short option group");
            expanded.extend(token.chars().skip(1).map(|c| format!("-{c}")));
            continue;
        }
        expanded.push(token);
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_splits_group_in_order() {
        assert_eq!(expand_short_groups(["-abc"]), ["-a", "-b", "-c"]);
    }

    #[test]
    fn test_expand_leaves_non_groups_alone() {
        let tokens = ["--", "-", "-a", "--long", "plain", "--ab", ""];
        assert_eq!(expand_short_groups(tokens), tokens);
    }

    #[test]
    fn test_expand_counts_characters_not_bytes() {
        // Two characters, four bytes: not a group.
        assert_eq!(expand_short_groups(["-é"]), ["-é"]);
        assert_eq!(expand_short_groups(["-éa"]), ["-é", "-a"]);
    }

    #[test]
    fn test_expand_splits_dashes_inside_group() {
        assert_eq!(expand_short_groups(["-a-b"]), ["-a", "--", "-b"]);
    }

    #[test]
    fn test_expand_is_idempotent() {
        let once = expand_short_groups(["-xyz", "--name", "arg", "-q"]);
        let twice = expand_short_groups(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_short_group_boundaries() {
        assert!(is_short_group("-ab"));
        assert!(!is_short_group("-a"));
        assert!(!is_short_group("--ab"));
        assert!(!is_short_group("ab-"));
        assert!(!is_short_group("-"));
    }
}

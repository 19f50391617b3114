//! Credit line formatting and final output assembly.

/// Formats one contributor as a credit line.
///
/// Without a display name the line is the bare `@login`; with one it is a
/// Markdown link to the contributor's profile:
/// `[Display Name (@login)](https://github.com/login)`.
#[must_use]
pub fn credit_line(login: &str, display_name: Option<&str>) -> String {
    display_name.map_or_else(
        || format!("@{login}"),
        |name| format!("[{name} (@{login})](https://github.com/{login})"),
    )
}

/// Joins credit lines into the single output line.
#[must_use]
pub fn render_credits<Lines>(lines: Lines) -> String
where
    Lines: IntoIterator<Item = String>,
{
    lines.into_iter().collect::<Vec<String>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::{credit_line, render_credits};

    #[test]
    fn plain_line_is_bare_login() {
        assert_eq!(credit_line("alice", None), "@alice");
    }

    #[test]
    fn enriched_line_links_the_profile() {
        assert_eq!(
            credit_line("alice", Some("Alice Aardvark")),
            "[Alice Aardvark (@alice)](https://github.com/alice)"
        );
    }

    #[test]
    fn fallback_name_still_links_the_profile() {
        assert_eq!(
            credit_line("ghost", Some("ghost")),
            "[ghost (@ghost)](https://github.com/ghost)"
        );
    }

    #[test]
    fn joins_lines_with_comma_and_space() {
        let line = render_credits(vec!["@alice".to_owned(), "@carol".to_owned()]);
        assert_eq!(line, "@alice, @carol");
    }

    #[test]
    fn no_contributors_renders_an_empty_line() {
        assert_eq!(render_credits(Vec::new()), "");
    }
}

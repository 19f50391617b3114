//! Role classification and contributor set aggregation.
//!
//! Pure functions over the fetched contribution lists: no I/O, no side
//! effects, identical output for identical input.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::github::models::{Issue, IssueComment, Review, ReviewComment};

/// An insertion-ordered, deduplicated set of contributor logins.
///
/// Logins are case-sensitive and keep the platform's canonical casing. The
/// first occurrence of a login across the role lists determines its position
/// in the final output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorSet {
    logins: IndexSet<String>,
}

impl ContributorSet {
    /// Creates an empty contributor set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a login, keeping the first-seen position on duplicates.
    pub fn insert(&mut self, login: &str) {
        if !self.logins.contains(login) {
            self.logins.insert(login.to_owned());
        }
    }

    /// Returns true when the login is already present.
    #[must_use]
    pub fn contains(&self, login: &str) -> bool {
        self.logins.contains(login)
    }

    /// Iterates logins in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.logins.iter().map(String::as_str)
    }

    /// Number of distinct contributors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.logins.len()
    }

    /// Returns true when no contributor was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }

    /// Removes every login present in the exclusion list, preserving the
    /// order of the remaining entries.
    pub fn remove_excluded(&mut self, exclude: &ExclusionList) {
        self.logins.retain(|login| !exclude.contains(login));
    }
}

/// Logins excluded from the final contributor set, independent of role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    logins: HashSet<String>,
}

impl ExclusionList {
    /// Parses a comma-separated login list.
    ///
    /// Entries are trimmed; blank entries are ignored, so an empty
    /// specification excludes nothing.
    #[must_use]
    pub fn from_spec(spec: &str) -> Self {
        let logins = spec
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        Self { logins }
    }

    /// Returns true when the login is excluded (exact string match).
    #[must_use]
    pub fn contains(&self, login: &str) -> bool {
        self.logins.contains(login)
    }

    /// Returns true when nothing is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }
}

/// Classifies roles and unions them into one ordered contributor set.
///
/// Role lists are derived from the inputs and unioned in the fixed order
/// {authors, reviewers, commenters, review commenters}, deduplicating by
/// first occurrence. Comments only count when their parent URL appears in
/// the issue or pull URL set materialised from `issues` in the same run;
/// comments on items outside the fetched window never contribute. Excluded
/// logins are removed last, whatever roles produced them.
#[must_use]
pub fn collect_contributors(
    issues: &[Issue],
    reviews: &[Review],
    comments: &[IssueComment],
    review_comments: &[ReviewComment],
    exclude: &ExclusionList,
) -> ContributorSet {
    let issue_urls: HashSet<&str> = issues.iter().map(|issue| issue.url.as_str()).collect();
    let pull_urls: HashSet<&str> = issues
        .iter()
        .filter_map(|issue| issue.pull_request_url.as_deref())
        .collect();

    let mut contributors = ContributorSet::new();

    for author in issues.iter().filter_map(|issue| issue.author.as_deref()) {
        contributors.insert(author);
    }

    for reviewer in reviews.iter().filter_map(|review| review.author.as_deref()) {
        contributors.insert(reviewer);
    }

    for comment in comments {
        let attributable = comment
            .issue_url
            .as_deref()
            .is_some_and(|url| issue_urls.contains(url));
        if let (true, Some(author)) = (attributable, comment.author.as_deref()) {
            contributors.insert(author);
        }
    }

    for comment in review_comments {
        let attributable = comment
            .pull_request_url
            .as_deref()
            .is_some_and(|url| pull_urls.contains(url));
        if let (true, Some(author)) = (attributable, comment.author.as_deref()) {
            contributors.insert(author);
        }
    }

    contributors.remove_excluded(exclude);
    contributors
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ContributorSet, ExclusionList, collect_contributors};
    use crate::github::models::{Issue, IssueComment, Review, ReviewComment};

    fn issue(number: u64, author: &str) -> Issue {
        Issue {
            number,
            url: format!("https://api.github.com/repos/acme/widget/issues/{number}"),
            pull_request_url: None,
            author: Some(author.to_owned()),
        }
    }

    fn pull(number: u64, author: &str) -> Issue {
        Issue {
            pull_request_url: Some(format!(
                "https://api.github.com/repos/acme/widget/pulls/{number}"
            )),
            ..issue(number, author)
        }
    }

    fn review(author: &str) -> Review {
        Review {
            author: Some(author.to_owned()),
        }
    }

    fn comment_on(issue_number: u64, author: &str) -> IssueComment {
        IssueComment {
            author: Some(author.to_owned()),
            issue_url: Some(format!(
                "https://api.github.com/repos/acme/widget/issues/{issue_number}"
            )),
        }
    }

    fn review_comment_on(pull_number: u64, author: &str) -> ReviewComment {
        ReviewComment {
            author: Some(author.to_owned()),
            pull_request_url: Some(format!(
                "https://api.github.com/repos/acme/widget/pulls/{pull_number}"
            )),
        }
    }

    fn logins(contributors: &ContributorSet) -> Vec<&str> {
        contributors.iter().collect()
    }

    #[test]
    fn unions_roles_in_fixed_order() {
        let issues = vec![issue(1, "alice"), pull(2, "bob")];
        let reviews = vec![review("erin")];
        let comments = vec![comment_on(1, "carol")];
        let review_comments = vec![review_comment_on(2, "dave")];

        let contributors = collect_contributors(
            &issues,
            &reviews,
            &comments,
            &review_comments,
            &ExclusionList::default(),
        );

        assert_eq!(logins(&contributors), vec!["alice", "bob", "erin", "carol", "dave"]);
    }

    #[test]
    fn first_occurrence_wins_across_roles() {
        let issues = vec![issue(1, "alice"), pull(2, "erin")];
        // erin authored a pull and also reviewed; the author slot wins.
        let reviews = vec![review("erin"), review("alice")];
        let comments = vec![comment_on(1, "alice")];

        let contributors = collect_contributors(
            &issues,
            &reviews,
            &comments,
            &[],
            &ExclusionList::default(),
        );

        assert_eq!(logins(&contributors), vec!["alice", "erin"]);
    }

    #[test]
    fn comments_on_unfetched_issues_never_contribute() {
        let issues = vec![issue(1, "alice")];
        // Issue 99 is outside the fetched window (still open, say).
        let comments = vec![comment_on(99, "mallory"), comment_on(1, "carol")];

        let contributors =
            collect_contributors(&issues, &[], &comments, &[], &ExclusionList::default());

        assert_eq!(logins(&contributors), vec!["alice", "carol"]);
        assert!(!contributors.contains("mallory"));
    }

    #[test]
    fn review_comments_need_a_fetched_pull_parent() {
        // Issue 1 is a plain issue; a review comment pointing at a pull URL
        // with the same number must not match the issue URL set.
        let issues = vec![issue(1, "alice")];
        let review_comments = vec![review_comment_on(1, "dave")];

        let contributors =
            collect_contributors(&issues, &[], &[], &review_comments, &ExclusionList::default());

        assert_eq!(logins(&contributors), vec!["alice"]);
    }

    #[rstest]
    #[case::author_role("alice")]
    #[case::reviewer_role("erin")]
    #[case::commenter_role("carol")]
    fn exclusion_removes_login_regardless_of_role(#[case] excluded: &str) {
        let issues = vec![issue(1, "alice"), pull(2, "bob")];
        let reviews = vec![review("erin")];
        let comments = vec![comment_on(1, "carol")];

        let contributors = collect_contributors(
            &issues,
            &reviews,
            &comments,
            &[],
            &ExclusionList::from_spec(excluded),
        );

        assert!(!contributors.contains(excluded));
        assert_eq!(contributors.len(), 3);
    }

    #[test]
    fn exclusion_is_exact_set_difference() {
        let issues = vec![issue(1, "alice"), issue(2, "bob"), issue(3, "carol")];

        let contributors = collect_contributors(
            &issues,
            &[],
            &[],
            &[],
            &ExclusionList::from_spec("bob, mallory ,,"),
        );

        assert_eq!(logins(&contributors), vec!["alice", "carol"]);
    }

    #[test]
    fn empty_exclusion_spec_removes_nothing() {
        let exclude = ExclusionList::from_spec("");
        assert!(exclude.is_empty());

        let issues = vec![issue(1, "alice")];
        let contributors = collect_contributors(&issues, &[], &[], &[], &exclude);
        assert_eq!(contributors.len(), 1);
    }

    #[test]
    fn logins_are_case_sensitive() {
        let issues = vec![issue(1, "Alice"), issue(2, "alice")];

        let contributors =
            collect_contributors(&issues, &[], &[], &[], &ExclusionList::default());

        assert_eq!(logins(&contributors), vec!["Alice", "alice"]);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let issues = vec![issue(1, "alice"), pull(2, "bob")];
        let reviews = vec![review("erin")];
        let comments = vec![comment_on(1, "carol")];
        let review_comments = vec![review_comment_on(2, "dave")];
        let exclude = ExclusionList::from_spec("bob");

        let first =
            collect_contributors(&issues, &reviews, &comments, &review_comments, &exclude);
        let second =
            collect_contributors(&issues, &reviews, &comments, &review_comments, &exclude);

        assert_eq!(first, second);
        assert_eq!(logins(&first), logins(&second));
    }

    #[test]
    fn records_without_logins_are_skipped() {
        let issues = vec![Issue {
            number: 1,
            url: "https://api.github.com/repos/acme/widget/issues/1".to_owned(),
            pull_request_url: None,
            author: None,
        }];
        let reviews = vec![Review { author: None }];

        let contributors =
            collect_contributors(&issues, &reviews, &[], &[], &ExclusionList::default());

        assert!(contributors.is_empty());
    }
}

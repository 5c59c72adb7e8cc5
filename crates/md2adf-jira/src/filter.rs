//! Project-scoped JQL presets.

/// Issue list filter, always scoped to one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueFilter {
    /// Assigned to the current user.
    Mine,
    /// Not done or closed.
    Open,
    /// Updated in the last seven days.
    Recent,
    /// Caller-supplied JQL, combined with the project clause.
    Custom(Option<String>),
}

impl IssueFilter {
    /// Build the JQL query for a project.
    ///
    /// ```
    /// use md2adf_jira::IssueFilter;
    ///
    /// assert_eq!(
    ///     IssueFilter::Custom(Some("labels = infra".to_owned())).jql("OPS"),
    ///     "project = OPS AND (labels = infra)"
    /// );
    /// ```
    pub fn jql(&self, project_key: &str) -> String {
        match self {
            Self::Mine => format!(
                "project = {project_key} AND assignee = currentUser() ORDER BY updated DESC"
            ),
            Self::Open => format!(
                "project = {project_key} AND status != Done AND status != Closed ORDER BY updated DESC"
            ),
            Self::Recent => {
                format!("project = {project_key} AND updated >= -7d ORDER BY updated DESC")
            }
            Self::Custom(Some(jql)) if !jql.trim().is_empty() => {
                format!("project = {project_key} AND ({jql})")
            }
            Self::Custom(_) => format!("project = {project_key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mine() {
        assert_eq!(
            IssueFilter::Mine.jql("OPS"),
            "project = OPS AND assignee = currentUser() ORDER BY updated DESC"
        );
    }

    #[test]
    fn test_open() {
        assert_eq!(
            IssueFilter::Open.jql("OPS"),
            "project = OPS AND status != Done AND status != Closed ORDER BY updated DESC"
        );
    }

    #[test]
    fn test_recent() {
        assert_eq!(
            IssueFilter::Recent.jql("WEB"),
            "project = WEB AND updated >= -7d ORDER BY updated DESC"
        );
    }

    #[test]
    fn test_custom_without_query() {
        assert_eq!(IssueFilter::Custom(None).jql("OPS"), "project = OPS");
        assert_eq!(
            IssueFilter::Custom(Some("  ".to_owned())).jql("OPS"),
            "project = OPS"
        );
    }
}

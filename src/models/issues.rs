use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,

    pub title: String,

    pub html_url: String,

    // Present when the "issue" is actually a pull request.
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct IssueFilter {
    pub owner: String,
    pub repo: String,
    pub state: String,
    pub labels: Vec<String>,
}

impl IssueFilter {
    pub fn open(owner: &str, repo: &str, labels: &[String]) -> Self {
        IssueFilter {
            owner: owner.to_string(),
            repo: repo.to_string(),
            state: "open".to_string(),
            labels: labels.to_vec(),
        }
    }

    /// GitHub treats a comma separated `labels` parameter as an AND filter.
    pub fn labels_param(&self) -> String {
        self.labels.join(",")
    }
}

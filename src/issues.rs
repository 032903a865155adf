use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LINK, USER_AGENT};
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::error::{check_status, TallyResult};
use crate::models::issues::{Issue, IssueFilter};
use crate::utils::constants::{GITHUB_API_VERSION, ISSUES_PER_PAGE, USER_AGENT as AGENT};

pub struct GithubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(api_url: &str, token: Option<String>) -> TallyResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(GITHUB_API_VERSION));
        headers.insert(USER_AGENT, HeaderValue::from_static(AGENT));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Walks every page of open issues matching `filter`, following the `Link` header.
    pub async fn list_open_issues(&self, filter: &IssueFilter) -> TallyResult<Vec<Issue>> {
        let url = format!("{}/repos/{}/{}/issues", self.api_url, filter.owner, filter.repo);
        let labels = filter.labels_param();
        let per_page = ISSUES_PER_PAGE.to_string();

        let mut all_issues = Vec::new();
        let mut page = 1u32;
        loop {
            let mut request = self.client.get(&url).query(&[
                ("state", filter.state.as_str()),
                ("labels", labels.as_str()),
                ("per_page", per_page.as_str()),
                ("page", page.to_string().as_str()),
            ]);
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            let response = check_status("GitHub", request.send().await?).await?;
            let next = next_page(response.headers());
            let issues = response.json::<Vec<Issue>>().await?;
            debug!(page, count = issues.len(), "fetched issue page");
            for issue in &issues {
                debug!(number = issue.number, title = %issue.title, url = %issue.html_url, "matched issue");
            }
            all_issues.extend(issues);

            match next {
                Some(next) => page = next,
                None => break,
            }
        }

        let pull_requests = all_issues.iter().filter(|i| i.is_pull_request()).count();
        info!(
            owner = %filter.owner,
            repo = %filter.repo,
            labels = %labels,
            total = all_issues.len(),
            pull_requests,
            "collected open issues"
        );
        Ok(all_issues)
    }
}

/// Page number of the `rel="next"` entry in a GitHub `Link` header, if any.
pub fn next_page(headers: &HeaderMap) -> Option<u32> {
    let link = headers.get(LINK)?.to_str().ok()?;
    link.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        let is_next = params
            .split(';')
            .any(|p| p.trim().replace(' ', "") == "rel=\"next\"");
        if !is_next {
            return None;
        }
        let target = target.trim().trim_start_matches('<').trim_end_matches('>');
        let url = Url::parse(target).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == "page")
            .and_then(|(_, v)| v.parse().ok())
    })
}

//! Repository listing for the GitHub client.

use folio_core::{RepositoryRecord, sort_newest_first};

use crate::error::GhResult;
use crate::http::HttpBackend;
use crate::models::GhListQuery;
use crate::parsing::parse_repo_list;
use crate::url::build_user_repos_url;

use super::GithubClient;

impl<B: HttpBackend> GithubClient<B> {
    /// List the configured owner's repositories, newest first.
    ///
    /// A single request is made; only the first `per_page` repositories
    /// are returned.
    pub(crate) async fn list_owner_repos(&self) -> GhResult<Vec<RepositoryRecord>> {
        let query = GhListQuery::newest_first(self.config.owner.clone(), self.config.per_page);
        let url = build_user_repos_url(&self.config, &query);

        tracing::debug!(target: "folio.github", url = %url, "Fetching repository listing");

        let body: serde_json::Value = self.backend.get_json(&url).await?;
        let mut records = parse_repo_list(&body)?;
        sort_newest_first(&mut records);

        tracing::info!(
            target: "folio.github",
            owner = %self.config.owner,
            count = records.len(),
            "Fetched repositories"
        );

        Ok(records)
    }
}

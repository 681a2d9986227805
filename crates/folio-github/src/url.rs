//! URL construction helpers for the GitHub API.

use crate::models::{GhConfig, GhListQuery};
use url::Url;

/// Build the listing URL for an owner's repositories.
///
/// `{base}/users/{owner}/repos?per_page=..&sort=created&direction=desc`
pub fn build_user_repos_url(config: &GhConfig, query: &GhListQuery) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!(
        "{base_path}/users/{}/repos",
        urlencoding::encode(query.owner.trim())
    ));

    url.set_query(Some(&format!(
        "per_page={}&sort={}&direction={}",
        query.per_page.clamp(1, 100),
        query.sort(),
        query.direction()
    )));

    url
}

/// Extract the owner from a `/users/{owner}/repos` path.
pub fn owner_from_path(path: &str) -> Option<String> {
    let rest = path.split("/users/").nth(1)?;
    let owner = rest.split('/').next().filter(|o| !o.is_empty())?;
    Some(
        urlencoding::decode(owner)
            .map_or_else(|_| owner.to_string(), |decoded| decoded.into_owned()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_user_repos_url_default() {
        let config = GhConfig::for_owner("octocat");
        let query = GhListQuery::newest_first("octocat", 100);

        let url = build_user_repos_url(&config, &query);

        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/octocat/repos?per_page=100&sort=created&direction=desc"
        );
    }

    #[test]
    fn test_build_user_repos_url_with_base_path() {
        let mut config = GhConfig::for_owner("octocat");
        config.base_url = Url::parse("https://github.example.com/api/v3/").unwrap();
        let query = GhListQuery::newest_first("octocat", 30);

        let url = build_user_repos_url(&config, &query);

        assert_eq!(url.path(), "/api/v3/users/octocat/repos");
        assert!(url.as_str().contains("per_page=30"));
    }

    #[test]
    fn test_owner_is_encoded() {
        let config = GhConfig::for_owner("a b");
        let query = GhListQuery::newest_first("a b", 100);

        let url = build_user_repos_url(&config, &query);
        assert_eq!(url.path(), "/users/a%20b/repos");
    }

    #[test]
    fn test_per_page_is_clamped() {
        let config = GhConfig::for_owner("octocat");
        let query = GhListQuery::newest_first("octocat", 0);
        assert!(build_user_repos_url(&config, &query).as_str().contains("per_page=1&"));
    }

    #[test]
    fn test_owner_from_path() {
        assert_eq!(owner_from_path("/users/octocat/repos"), Some("octocat".to_string()));
        assert_eq!(
            owner_from_path("/api/v3/users/a%20b/repos"),
            Some("a b".to_string())
        );
        assert_eq!(owner_from_path("/orgs/rust-lang/repos"), None);
        assert_eq!(owner_from_path("/users/"), None);
    }
}

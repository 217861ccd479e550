#[derive(Debug, Clone)]
pub struct MeiliUrl(String);

impl AsRef<str> for MeiliUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl MeiliUrl {
    /// Creates a new MeiliUrl from an instance endpoint, e.g. `http://localhost:7700`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self(endpoint.trim_end_matches('/').to_string())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// URL of an index-scoped route, e.g. `index_route("comments", "search")`.
    pub fn index_route(&self, index_uid: &str, route: &str) -> Self {
        self.append_path("/indexes")
            .append_path(index_uid)
            .append_path(route)
    }
}

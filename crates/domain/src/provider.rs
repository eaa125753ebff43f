use std::fmt;
use std::sync::Arc;

/// An upstream DoH endpoint. Defined once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Provider {
    pub name: Arc<str>,
    pub url: Arc<str>,
}

impl Provider {
    pub fn new(name: impl Into<Arc<str>>, url: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Joins the endpoint with a forwarded query string.
    pub fn url_with_query(&self, query_string: &str) -> String {
        if query_string.is_empty() {
            return self.url.to_string();
        }
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, query_string)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

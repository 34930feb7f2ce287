//! Navigation target parsing.
//!
//! Splits `/path?query#hash` into its parts. The path is kept verbatim so
//! literal matching stays an exact comparison; the query is decoded with
//! `form_urlencoded` rules and also kept as written for history entries.

use url::form_urlencoded;

/// A navigation target split into path, query and fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Query string as written, without the leading `?`.
    pub raw_query: Option<String>,
    pub hash: Option<String>,
}

impl Location {
    pub fn parse(target: &str) -> Self {
        let (rest, hash) = match target.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (target, None),
        };
        let (path, raw_query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            path,
            query: form_urlencoded::parse(raw_query.unwrap_or_default().as_bytes())
                .into_owned()
                .collect(),
            raw_query: raw_query.map(str::to_string),
            hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        let location = Location::parse("/GetUser");
        assert_eq!(location.path, "/GetUser");
        assert!(location.query.is_empty());
        assert_eq!(location.hash, None);
    }

    #[test]
    fn test_query_and_hash() {
        let location = Location::parse("/EdiUser?id=7&name=Li%20Lei#form");
        assert_eq!(location.path, "/EdiUser");
        assert_eq!(
            location.query,
            vec![
                ("id".to_string(), "7".to_string()),
                ("name".to_string(), "Li Lei".to_string()),
            ]
        );
        assert_eq!(location.hash.as_deref(), Some("form"));
        assert_eq!(location.raw_query.as_deref(), Some("id=7&name=Li%20Lei"));
    }

    #[test]
    fn test_valueless_query_key() {
        let location = Location::parse("/EdiUser?flag");
        assert_eq!(location.query, vec![("flag".to_string(), String::new())]);
        assert_eq!(location.raw_query.as_deref(), Some("flag"));
        assert_eq!(Location::parse("/EdiUser").raw_query, None);
    }

    #[test]
    fn test_empty_and_relative() {
        assert_eq!(Location::parse("").path, "/");
        assert_eq!(Location::parse("?x=1").path, "/");
        assert_eq!(Location::parse("GetUser").path, "/GetUser");
    }
}

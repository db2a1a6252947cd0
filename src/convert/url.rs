//! URL tracker stripping.

use url::Url;

/// Query parameters used for marketing/analytics attribution; removed
/// regardless of value.
const TRACKER_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
    "mc_cid",
    "mc_eid",
    "igshid",
    "si",
];

/// Remove tracker parameters and empty-valued parameters from a URL's query.
/// An empty remainder drops the query entirely (no trailing `?`). Input that
/// does not parse as an absolute URL is returned unchanged.
pub fn strip_trackers(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(name, value)| {
            !TRACKER_PARAMS.contains(&name.to_lowercase().as_str()) && !value.is_empty()
        })
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(kept)
            .finish();
        parsed.set_query(Some(&query));
    }
    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tracker_keeps_rest() {
        assert_eq!(
            strip_trackers("https://x.com/p?utm_source=fb&id=5"),
            "https://x.com/p?id=5"
        );
    }

    #[test]
    fn test_all_params_stripped_drops_query() {
        assert_eq!(
            strip_trackers("https://x.com/p?utm_source=fb&fbclid=abc"),
            "https://x.com/p"
        );
    }

    #[test]
    fn test_empty_valued_params_dropped() {
        assert_eq!(strip_trackers("https://x.com/p?id=5&empty="), "https://x.com/p?id=5");
    }

    #[test]
    fn test_tracker_names_case_insensitive() {
        assert_eq!(strip_trackers("https://x.com/p?UTM_Source=fb"), "https://x.com/p");
    }

    #[test]
    fn test_unparseable_returned_unchanged() {
        assert_eq!(strip_trackers("example.com/a"), "example.com/a");
        assert_eq!(strip_trackers("not a url"), "not a url");
    }

    #[test]
    fn test_no_query_untouched() {
        assert_eq!(strip_trackers("https://x.com/p"), "https://x.com/p");
    }
}

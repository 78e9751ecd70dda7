//! URL query-string state for the job list.
//!
//! DESIGN
//! ======
//! The query string is the only home of the list's filter, sort, page, and
//! page-size state, which keeps list views bookmarkable and back-button safe.
//! URLs are kept canonical: a key whose value equals its default is never
//! written. `update_params` merges exactly what it is given; callers that
//! change a filter pass `page: 1` alongside it (see `ListQueryUpdate`
//! constructors).

#[cfg(test)]
#[path = "list_query_test.rs"]
mod list_query_test;

pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";
pub const SEARCH_KEY: &str = "search";
pub const JOB_STATUS_KEY: &str = "jobStatus";
pub const JOB_TYPE_KEY: &str = "jobType";
pub const SORT_KEY: &str = "sort";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const ALLOWED_LIMITS: [u32; 3] = [10, 20, 50];
pub const DEFAULT_SORT: &str = "a-z";

/// Sort options offered by the list view, as `(value, label)`.
pub const SORT_OPTIONS: [(&str, &str); 4] = [("newest", "Newest"), ("oldest", "Oldest"), ("a-z", "A-Z"), ("z-a", "Z-A")];

/// Known keys in serialization order.
const KNOWN_KEYS: [&str; 6] = [PAGE_KEY, LIMIT_KEY, SEARCH_KEY, JOB_STATUS_KEY, JOB_TYPE_KEY, SORT_KEY];

/// Parsed list parameters. Empty `job_status`/`job_type` mean "any".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub job_status: String,
    pub job_type: String,
    pub sort: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: String::new(),
            job_status: String::new(),
            job_type: String::new(),
            sort: DEFAULT_SORT.to_owned(),
        }
    }
}

impl ListQuery {
    /// Parse a URL query (with or without the leading `?`), defaulting every
    /// missing or invalid field. Unknown status/type/sort values pass through.
    pub fn parse(query: &str) -> Self {
        let pairs = parse_pairs(query);
        let get = |key: &'static str| last_value(&pairs, key);

        let limit = get(LIMIT_KEY)
            .and_then(parse_at_least_one)
            .filter(|n| ALLOWED_LIMITS.contains(n))
            .unwrap_or(DEFAULT_LIMIT);

        Self {
            page: get(PAGE_KEY).and_then(parse_at_least_one).unwrap_or(DEFAULT_PAGE),
            limit,
            search: get(SEARCH_KEY).unwrap_or_default().to_owned(),
            job_status: get(JOB_STATUS_KEY).unwrap_or_default().to_owned(),
            job_type: get(JOB_TYPE_KEY).unwrap_or_default().to_owned(),
            sort: get(SORT_KEY).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SORT).to_owned(),
        }
    }

    /// Canonical query string (defaults omitted, no leading `?`).
    pub fn to_query_string(&self) -> String {
        update_params("", &ListQueryUpdate::from(self))
    }

    /// Query string sent to `GET /jobs`: paging and sort always explicit,
    /// filters only when set.
    pub fn to_api_query(&self) -> String {
        let page = self.page.to_string();
        let limit = self.limit.to_string();
        let pairs = [
            (PAGE_KEY, page.as_str()),
            (LIMIT_KEY, limit.as_str()),
            (SEARCH_KEY, self.search.trim()),
            (JOB_STATUS_KEY, self.job_status.as_str()),
            (JOB_TYPE_KEY, self.job_type.as_str()),
            (SORT_KEY, self.sort.as_str()),
        ];
        encode_pairs(pairs.iter().filter(|(_, v)| !v.is_empty()).map(|(k, v)| (*k, *v)))
    }

    /// Whether anything `ListQueryUpdate::clear_all` resets, apart from the
    /// page, differs from its default.
    pub fn is_customized(&self) -> bool {
        let defaults = Self::default();
        Self { page: defaults.page, ..self.clone() } != defaults
    }
}

/// Partial update merged into the current query by `update_params`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQueryUpdate {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub job_status: Option<String>,
    pub job_type: Option<String>,
    pub sort: Option<String>,
}

impl ListQueryUpdate {
    pub fn page(page: u32) -> Self {
        Self { page: Some(page), ..Self::default() }
    }

    pub fn limit(limit: u32) -> Self {
        Self { limit: Some(limit), page: Some(DEFAULT_PAGE), ..Self::default() }
    }

    pub fn search(search: impl Into<String>) -> Self {
        Self { search: Some(search.into()), page: Some(DEFAULT_PAGE), ..Self::default() }
    }

    pub fn job_status(status: impl Into<String>) -> Self {
        Self { job_status: Some(status.into()), page: Some(DEFAULT_PAGE), ..Self::default() }
    }

    pub fn job_type(job_type: impl Into<String>) -> Self {
        Self { job_type: Some(job_type.into()), page: Some(DEFAULT_PAGE), ..Self::default() }
    }

    pub fn sort(sort: impl Into<String>) -> Self {
        Self { sort: Some(sort.into()), page: Some(DEFAULT_PAGE), ..Self::default() }
    }

    /// Reset every known parameter to its default.
    pub fn clear_all() -> Self {
        Self::from(&ListQuery::default())
    }

    fn values(&self) -> [(&'static str, Option<String>); 6] {
        [
            (PAGE_KEY, self.page.map(|p| p.to_string())),
            (LIMIT_KEY, self.limit.map(|l| l.to_string())),
            (SEARCH_KEY, self.search.clone()),
            (JOB_STATUS_KEY, self.job_status.clone()),
            (JOB_TYPE_KEY, self.job_type.clone()),
            (SORT_KEY, self.sort.clone()),
        ]
    }
}

impl From<&ListQuery> for ListQueryUpdate {
    fn from(query: &ListQuery) -> Self {
        Self {
            page: Some(query.page),
            limit: Some(query.limit),
            search: Some(query.search.clone()),
            job_status: Some(query.job_status.clone()),
            job_type: Some(query.job_type.clone()),
            sort: Some(query.sort.clone()),
        }
    }
}

/// Update for a debounced search commit, or `None` when the text matches the
/// search already in the URL (committing it would only reset the page).
pub fn search_commit(current: &ListQuery, committed: String) -> Option<ListQueryUpdate> {
    (committed != current.search).then(|| ListQueryUpdate::search(committed))
}

/// Merge `update` into `current` and return the canonical query string.
///
/// Duplicated known keys collapse to their last value, as `ListQuery::parse`
/// reads them. Known keys whose resulting value equals their default are
/// removed; keys this module does not own are preserved in their original
/// order.
pub fn update_params(current: &str, update: &ListQueryUpdate) -> String {
    let mut pairs = parse_pairs(current);
    for key in KNOWN_KEYS {
        if let Some(value) = last_value(&pairs, key).map(str::to_owned) {
            set_pair(&mut pairs, key, value);
        }
    }
    for (key, value) in update.values() {
        if let Some(value) = value {
            set_pair(&mut pairs, key, value);
        }
    }
    pairs.retain(|(key, value)| default_value(key).is_none_or(|default| value != default));

    let known = KNOWN_KEYS
        .iter()
        .filter_map(|key| pairs.iter().find(|(k, _)| k == key))
        .map(|(k, v)| (k.as_str(), v.as_str()));
    let unknown = pairs
        .iter()
        .filter(|(k, _)| !KNOWN_KEYS.contains(&k.as_str()))
        .map(|(k, v)| (k.as_str(), v.as_str()));
    encode_pairs(known.chain(unknown))
}

fn last_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

fn default_value(key: &str) -> Option<&'static str> {
    match key {
        PAGE_KEY => Some("1"),
        LIMIT_KEY => Some("10"),
        SEARCH_KEY | JOB_STATUS_KEY | JOB_TYPE_KEY => Some(""),
        SORT_KEY => Some(DEFAULT_SORT),
        _ => None,
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match pairs.iter().position(|(k, _)| k == key) {
        Some(index) => {
            pairs[index].1 = value;
            let mut seen = 0;
            pairs.retain(|(k, _)| {
                if k != key {
                    return true;
                }
                seen += 1;
                seen == 1
            });
        }
        None => pairs.push((key.to_owned(), value)),
    }
}

fn parse_at_least_one(raw: &str) -> Option<u32> {
    let n = raw.trim().parse::<i64>().ok()?;
    Some(u32::try_from(n.max(1)).unwrap_or(u32::MAX))
}

/// Decode `a=1&b=two%20words` into ordered pairs. `+` decodes to a space.
fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), |v| v.into_owned())
}

fn encode_pairs<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

use super::*;

fn contains_default_key(query: &str) -> bool {
    parse_pairs(query)
        .iter()
        .any(|(k, v)| default_value(k).is_some_and(|default| v == default))
}

// =============================================================
// parse
// =============================================================

#[test]
fn parse_empty_query_yields_defaults() {
    assert_eq!(ListQuery::parse(""), ListQuery::default());
    assert_eq!(ListQuery::parse("?"), ListQuery::default());
}

#[test]
fn parse_status_and_page_scenario() {
    let query = ListQuery::parse("?jobStatus=interview&page=3");
    assert_eq!(
        query,
        ListQuery {
            page: 3,
            limit: 10,
            search: String::new(),
            job_status: "interview".to_owned(),
            job_type: String::new(),
            sort: "a-z".to_owned(),
        }
    );
}

#[test]
fn parse_clamps_page_to_at_least_one() {
    assert_eq!(ListQuery::parse("page=0").page, 1);
    assert_eq!(ListQuery::parse("page=-4").page, 1);
    assert_eq!(ListQuery::parse("page=abc").page, 1);
    assert_eq!(ListQuery::parse("page=%207").page, 7);
}

#[test]
fn parse_limit_outside_allowed_set_yields_default() {
    assert_eq!(ListQuery::parse("limit=20").limit, 20);
    assert_eq!(ListQuery::parse("limit=50").limit, 50);
    assert_eq!(ListQuery::parse("limit=7").limit, DEFAULT_LIMIT);
    assert_eq!(ListQuery::parse("limit=0").limit, DEFAULT_LIMIT);
    assert_eq!(ListQuery::parse("limit=1000").limit, DEFAULT_LIMIT);
    assert_eq!(ListQuery::parse("limit=ten").limit, DEFAULT_LIMIT);
}

#[test]
fn parse_passes_unknown_enum_values_through() {
    let query = ListQuery::parse("jobStatus=ghosted&jobType=contract&sort=salary");
    assert_eq!(query.job_status, "ghosted");
    assert_eq!(query.job_type, "contract");
    assert_eq!(query.sort, "salary");
}

#[test]
fn parse_empty_sort_uses_default() {
    assert_eq!(ListQuery::parse("sort=").sort, DEFAULT_SORT);
}

#[test]
fn parse_decodes_percent_and_plus_encoding() {
    assert_eq!(ListQuery::parse("search=rust%20engineer").search, "rust engineer");
    assert_eq!(ListQuery::parse("search=rust+engineer").search, "rust engineer");
    assert_eq!(ListQuery::parse("search=c%2B%2B").search, "c++");
}

#[test]
fn parse_last_duplicate_key_wins() {
    assert_eq!(ListQuery::parse("page=2&page=5").page, 5);
}

// =============================================================
// update_params
// =============================================================

#[test]
fn update_drops_page_when_it_becomes_one() {
    assert_eq!(update_params("page=4&jobType=internship", &ListQueryUpdate::page(1)), "jobType=internship");
}

#[test]
fn update_keeps_non_default_values_in_canonical_order() {
    let next = update_params("sort=z-a&search=ops", &ListQueryUpdate::page(2));
    assert_eq!(next, "page=2&search=ops&sort=z-a");
}

#[test]
fn update_removes_keys_reset_to_default() {
    let next = update_params("search=ops&sort=newest&limit=20", &ListQueryUpdate { sort: Some("a-z".to_owned()), ..Default::default() });
    assert_eq!(next, "limit=20&search=ops");
    let cleared = update_params(&next, &ListQueryUpdate::clear_all());
    assert_eq!(cleared, "");
}

#[test]
fn update_merge_performs_no_implicit_page_reset() {
    let next = update_params(
        "page=3",
        &ListQueryUpdate { job_status: Some("declined".to_owned()), ..Default::default() },
    );
    assert_eq!(next, "page=3&jobStatus=declined");
}

#[test]
fn filter_constructors_reset_page() {
    for update in [
        ListQueryUpdate::search("rust"),
        ListQueryUpdate::job_status("pending"),
        ListQueryUpdate::job_type("full-time"),
        ListQueryUpdate::sort("newest"),
        ListQueryUpdate::limit(20),
    ] {
        assert_eq!(update.page, Some(1));
        let next = update_params("page=6", &update);
        assert_eq!(ListQuery::parse(&next).page, 1);
        assert!(!next.contains("page="));
    }
}

#[test]
fn update_preserves_unknown_keys() {
    let next = update_params("utm=mail&page=2", &ListQueryUpdate::search("ops"));
    assert_eq!(next, "search=ops&utm=mail");
}

#[test]
fn update_keeps_last_duplicate_of_untouched_key() {
    let next = update_params("search=a&search=b", &ListQueryUpdate::page(2));
    assert_eq!(next, "page=2&search=b");
    assert_eq!(ListQuery::parse(&next).search, "b");
}

#[test]
fn update_canonicalizes_duplicates_like_parse() {
    let current = "page=5&page=1&sort=z-a&sort=a-z";
    let next = update_params(current, &ListQueryUpdate::default());
    assert_eq!(next, "");
    assert_eq!(ListQuery::parse(&next), ListQuery::parse(current));
}

#[test]
fn update_collapses_duplicate_keys() {
    assert_eq!(update_params("page=2&page=3", &ListQueryUpdate::page(4)), "page=4");
}

#[test]
fn update_encodes_values() {
    let next = update_params("", &ListQueryUpdate::search("c++ & rust"));
    assert_eq!(next, "search=c%2B%2B%20%26%20rust");
    assert_eq!(ListQuery::parse(&next).search, "c++ & rust");
}

#[test]
fn update_sequences_never_leave_default_keys() {
    let steps = [
        ListQueryUpdate::page(3),
        ListQueryUpdate::search("data"),
        ListQueryUpdate::limit(50),
        ListQueryUpdate::page(2),
        ListQueryUpdate::limit(10),
        ListQueryUpdate::sort("a-z"),
        ListQueryUpdate::job_status(""),
        ListQueryUpdate::search(""),
        ListQueryUpdate { page: Some(1), sort: Some("newest".to_owned()), ..Default::default() },
        ListQueryUpdate::clear_all(),
    ];
    let mut query = "page=1&limit=10&sort=a-z&search=".to_owned();
    for step in &steps {
        query = update_params(&query, step);
        assert!(!contains_default_key(&query), "default key left in {query:?}");
    }
    assert_eq!(query, "");
}

// =============================================================
// round trip
// =============================================================

#[test]
fn canonical_queries_round_trip() {
    let samples = [
        "",
        "page=3&jobStatus=interview",
        "limit=50&search=rust%20dev&jobType=part-time&sort=oldest",
        "page=9&limit=20&search=a&jobStatus=declined&jobType=internship&sort=z-a",
    ];
    for sample in samples {
        let canonical = ListQuery::parse(&update_params(sample, &ListQueryUpdate::default()));
        let serialized = canonical.to_query_string();
        assert_eq!(ListQuery::parse(&serialized), canonical, "round trip of {sample:?}");
    }
}

#[test]
fn default_query_serializes_to_empty_string() {
    assert_eq!(ListQuery::default().to_query_string(), "");
}

#[test]
fn api_query_is_explicit_about_paging() {
    let query = ListQuery::parse("page=2&jobType=internship");
    assert_eq!(query.to_api_query(), "page=2&limit=10&jobType=internship&sort=a-z");
}

#[test]
fn customized_ignores_page_only() {
    assert!(!ListQuery::parse("page=4").is_customized());
    assert!(ListQuery::parse("sort=newest").is_customized());
    assert!(ListQuery::parse("limit=20").is_customized());
    assert!(ListQuery::parse("search=x").is_customized());
    assert!(!ListQuery::parse(&update_params("sort=z-a&page=3", &ListQueryUpdate::clear_all())).is_customized());
}

#[test]
fn search_commit_skips_unchanged_text() {
    let current = ListQuery::parse("page=3&search=rust");
    assert_eq!(search_commit(&current, "rust".to_owned()), None);
    assert_eq!(search_commit(&current, "rusty".to_owned()), Some(ListQueryUpdate::search("rusty")));
}

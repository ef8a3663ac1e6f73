use super::*;

fn ids(pairs: &[(&str, &str)]) -> Vec<StashId> {
    pairs.iter().map(|(endpoint, id)| StashId::new(*endpoint, *id)).collect()
}

#[test]
fn merge_prefers_source_for_shared_endpoint() {
    let merged = merge_stash_ids(&ids(&[("a", "1")]), &ids(&[("a", "2")]));
    assert_eq!(merged, ids(&[("a", "2")]));
}

#[test]
fn merge_keeps_dest_only_endpoints_before_source() {
    let dest = ids(&[("a", "1"), ("b", "2"), ("c", "3")]);
    let src = ids(&[("c", "30"), ("d", "40")]);
    let merged = merge_stash_ids(&dest, &src);
    assert_eq!(merged, ids(&[("a", "1"), ("b", "2"), ("c", "30"), ("d", "40")]));
}

#[test]
fn merge_does_not_modify_inputs() {
    let dest = ids(&[("a", "1")]);
    let src = ids(&[("a", "2"), ("b", "3")]);
    let _ = merge_stash_ids(&dest, &src);
    assert_eq!(dest, ids(&[("a", "1")]));
    assert_eq!(src, ids(&[("a", "2"), ("b", "3")]));
}

#[test]
fn merge_length_is_bounded_by_inputs() {
    let dest = ids(&[("a", "1"), ("b", "2")]);
    let src = ids(&[("b", "3"), ("c", "4")]);
    let merged = merge_stash_ids(&dest, &src);
    assert!(merged.len() <= dest.len() + src.len());
    assert_eq!(merged.len(), 3);
}

#[test]
fn merge_with_empty_side_returns_other() {
    let only = ids(&[("a", "1"), ("b", "2")]);
    assert_eq!(merge_stash_ids(&only, &[]), only);
    assert_eq!(merge_stash_ids(&[], &only), only);
}

#[test]
fn merge_keeps_every_source_entry_even_with_repeated_endpoints() {
    let src = ids(&[("a", "1"), ("a", "2")]);
    let merged = merge_stash_ids(&ids(&[("a", "0")]), &src);
    assert_eq!(merged, src);
}

#[test]
fn display_name_falls_back_to_one_based_index() {
    assert_eq!(display_name("", 0), "Stash-Box #1");
    assert_eq!(display_name("", 2), "Stash-Box #3");
    assert_eq!(display_name("StashDB", 0), "StashDB");
}

#[test]
fn endpoint_base_strips_graphql_segment() {
    assert_eq!(endpoint_base("https://stashdb.org/graphql"), Some("https://stashdb.org/"));
    assert_eq!(endpoint_base("http://localhost:9999/box/graphql"), Some("http://localhost:9999/box/"));
}

#[test]
fn endpoint_base_stops_at_first_graphql_text() {
    assert_eq!(endpoint_base("https://box.org/graphqlish/graphql"), Some("https://box.org/"));
}

#[test]
fn endpoint_base_requires_scheme_and_graphql_segment() {
    assert_eq!(endpoint_base("stashdb.org/graphql"), None);
    assert_eq!(endpoint_base("https://stashdb.org/api"), None);
}

use crate::ListTicketsQuery;

use axum::extract::FromRequestParts;
use axum::http::Request;

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

async fn extract(uri: &str) -> ListTicketsQuery {
    let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
    ListTicketsQuery::from_request_parts(&mut parts, &())
        .await
        .unwrap()
}

#[test]
fn given_known_params_when_collected_then_each_field_is_set() {
    let query = ListTicketsQuery::from_pairs(pairs(&[
        ("category", "network"),
        ("search", "vpn"),
        ("ordering", "-title"),
        ("page", "2"),
    ]));

    assert_eq!(
        query,
        ListTicketsQuery {
            category: Some("network".to_string()),
            search: Some("vpn".to_string()),
            ordering: Some("-title".to_string()),
            page: Some("2".to_string()),
        }
    );
}

#[test]
fn given_repeated_param_when_collected_then_last_value_wins() {
    let query = ListTicketsQuery::from_pairs(pairs(&[
        ("category", "net"),
        ("page", "1"),
        ("category", "hw"),
    ]));

    assert_eq!(query.category.as_deref(), Some("hw"));
    assert_eq!(query.page.as_deref(), Some("1"));
}

#[test]
fn given_unknown_params_when_collected_then_ignored() {
    let query = ListTicketsQuery::from_pairs(pairs(&[("format", "json"), ("limit", "5")]));

    assert_eq!(query, ListTicketsQuery::default());
}

#[tokio::test]
async fn given_encoded_query_when_extracted_then_values_are_decoded() {
    let query = extract("/tickets?search=%C3%A9cole+ferm%C3%A9e&search=vpn%20down").await;

    assert_eq!(query.search.as_deref(), Some("vpn down"));
}

#[tokio::test]
async fn given_no_query_when_extracted_then_all_absent() {
    let query = extract("/tickets").await;

    assert_eq!(query, ListTicketsQuery::default());
}

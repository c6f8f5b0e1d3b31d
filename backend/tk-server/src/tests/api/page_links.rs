use crate::PageLinks;
use crate::api::cache_layer::cache_key;

use axum::http::{HeaderMap, HeaderValue, Method, Uri, header::HOST};

fn headers_with_host(host: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(HOST, HeaderValue::from_static(host));
    headers
}

#[test]
fn given_host_header_when_linking_then_absolute_url() {
    let uri: Uri = "/tickets?page=2".parse().unwrap();
    let links = PageLinks::from_request(&headers_with_host("api.example.com"), &uri);

    assert_eq!(links.link(3), "http://api.example.com/tickets?page=3");
}

#[test]
fn given_first_page_when_linking_then_page_param_is_omitted() {
    let uri: Uri = "/tickets?page=2".parse().unwrap();
    let links = PageLinks::from_request(&headers_with_host("localhost:8000"), &uri);

    assert_eq!(links.link(1), "http://localhost:8000/tickets");
}

#[test]
fn given_other_params_when_linking_then_they_are_kept_in_order() {
    let uri: Uri = "/tickets?category=it&page=2&search=vpn%20down"
        .parse()
        .unwrap();
    let links = PageLinks::from_request(&headers_with_host("localhost"), &uri);

    assert_eq!(
        links.link(3),
        "http://localhost/tickets?category=it&search=vpn%20down&page=3"
    );
    assert_eq!(
        links.link(1),
        "http://localhost/tickets?category=it&search=vpn%20down"
    );
}

#[test]
fn given_no_host_when_linking_then_path_only() {
    let uri: Uri = "/tickets".parse().unwrap();
    let links = PageLinks::from_request(&HeaderMap::new(), &uri);

    assert_eq!(links.link(2), "/tickets?page=2");
}

#[test]
fn given_forwarded_proto_when_linking_then_scheme_is_used() {
    let mut headers = headers_with_host("tickets.example.com");
    headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
    let uri: Uri = "/tickets/".parse().unwrap();

    let links = PageLinks::from_request(&headers, &uri);

    assert_eq!(links.link(2), "https://tickets.example.com/tickets/?page=2");
}

#[test]
fn given_param_named_like_page_when_linking_then_it_is_kept() {
    let uri: Uri = "/tickets?pages=9&page=1".parse().unwrap();
    let links = PageLinks::from_request(&HeaderMap::new(), &uri);

    assert_eq!(links.link(2), "/tickets?pages=9&page=2");
}

#[test]
fn given_query_when_building_cache_key_then_includes_method_origin_path_and_query() {
    let headers = headers_with_host("testserver");
    let uri: Uri = "/tickets?category=it&page=2".parse().unwrap();

    assert_eq!(
        cache_key(&Method::GET, &headers, &uri),
        "GET http://testserver/tickets?category=it&page=2"
    );
    assert_eq!(
        cache_key(&Method::GET, &HeaderMap::new(), &"/tickets/4".parse().unwrap()),
        "GET /tickets/4"
    );
}

#[test]
fn given_different_hosts_or_schemes_when_building_cache_key_then_keys_differ() {
    let uri: Uri = "/tickets".parse().unwrap();
    let plain = headers_with_host("a.example.com");
    let other_host = headers_with_host("b.example.com");
    let mut forwarded = headers_with_host("a.example.com");
    forwarded.insert("x-forwarded-proto", HeaderValue::from_static("https"));

    let keys = [
        cache_key(&Method::GET, &plain, &uri),
        cache_key(&Method::GET, &other_host, &uri),
        cache_key(&Method::GET, &forwarded, &uri),
    ];

    assert_ne!(keys[0], keys[1]);
    assert_ne!(keys[0], keys[2]);
    assert_eq!(keys[2], "GET https://a.example.com/tickets");
}

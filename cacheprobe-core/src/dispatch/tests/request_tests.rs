use crate::dispatch::{DispatchError, QueryParams, RequestDescriptor};
use http::{Method, Uri};
use pretty_assertions::assert_eq;

#[test]
fn splits_path_and_query_from_uri() {
    // Arrange
    let uri: Uri = "/cache-test?maxAge=60".parse().unwrap();

    // Act
    let req = RequestDescriptor::from_uri(Method::GET, &uri);

    // Assert
    assert_eq!(req.path(), "/cache-test");
    assert_eq!(req.query().unwrap().get("maxAge"), Some("60"));
}

#[test]
fn decodes_form_encoding() {
    let req = RequestDescriptor::new(Method::GET, "/cache-test")
        .with_query("cacheControl=public%2C+max-age%3D60");

    let query = req.query().unwrap();

    assert_eq!(query.get("cacheControl"), Some("public, max-age=60"));
}

#[test]
fn first_value_wins_and_empty_counts_as_absent() {
    let req = RequestDescriptor::new(Method::GET, "/cache-test")
        .with_query("maxAge=1&maxAge=2&cacheControl=&flag");

    let query = req.query().unwrap();

    assert_eq!(query.get("maxAge"), Some("1"));
    assert_eq!(query.get("cacheControl"), None);
    assert_eq!(query.get("flag"), None);
}

#[test]
fn missing_query_is_empty() {
    let req = RequestDescriptor::new(Method::GET, "/cache-test");

    assert_eq!(req.query().unwrap(), QueryParams::default());
}

#[test]
fn invalid_utf8_is_rejected() {
    let req = RequestDescriptor::new(Method::GET, "/cache-test").with_query("maxAge=%FF");

    assert!(matches!(req.query(), Err(DispatchError::MalformedQuery)));
}

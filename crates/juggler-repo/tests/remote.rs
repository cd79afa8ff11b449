use juggler_core::listing::ListingRoot;
use juggler_repo::remote::load_remote_listing;
use juggler_util::errors::JugglerError;

const LISTING: &str = r#"<Listing>
    <Package name="SomePackage"><Build version="v1.0-b0"/><Build version="v1.0-b3"/></Package>
</Listing>"#;

#[test]
fn test_remote_listing_is_loaded() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/builds/juggler_listing.xml")
        .with_status(200)
        .with_body(LISTING)
        .create();

    let base = format!("{}/builds/", server.url());
    let listing = load_remote_listing(&base).unwrap();
    mock.assert();

    assert_eq!(
        listing.root(),
        &ListingRoot::Remote(format!("{}/builds", server.url()))
    );
    let entry = listing.query("SomePackage").get().unwrap();
    assert_eq!(entry.version().to_string(), "v1.0-b3");
    assert_eq!(
        entry.location(),
        format!("{}/builds/SomePackage_vanilla-v1.0-b3.tar.gz", server.url())
    );
}

#[test]
fn test_remote_404_is_file_not_found() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/juggler_listing.xml")
        .with_status(404)
        .create();

    let err = load_remote_listing(&server.url()).unwrap_err();
    assert!(matches!(err, JugglerError::FileNotFound { .. }), "got {err:?}");
}

#[test]
fn test_remote_unreachable_is_file_not_found() {
    let err = load_remote_listing("http://127.0.0.1:1").unwrap_err();
    assert!(matches!(err, JugglerError::FileNotFound { .. }), "got {err:?}");
}

#[test]
fn test_remote_garbage_is_invalid_file() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/juggler_listing.xml")
        .with_status(200)
        .with_body("<Listing><Package>")
        .create();

    let err = load_remote_listing(&server.url()).unwrap_err();
    assert!(matches!(err, JugglerError::InvalidFile { .. }), "got {err:?}");
}

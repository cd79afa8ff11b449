use juggler_core::listing::{Listing, ListingRoot, DEFAULT_FLAVOR};
use juggler_core::version::{parse_spec, VersionSpec};
use juggler_util::errors::JugglerError;

fn some_package_listing() -> Listing {
    let mut listing = Listing::default();
    for version in ["v2.1-local", "v1.0-b0", "v1.1-b2", "v1.0-b3", "v2.1-b2", "v1.2-b2"] {
        listing.add_package("SomePackage", version, DEFAULT_FLAVOR).unwrap();
    }
    for version in ["v1.0-b0", "v1.2-local"] {
        listing.add_package("SomePackage", version, "chocolate").unwrap();
    }
    for version in ["v0.0-b14", "v0.2-b13", "v1.0-b12", "v0.1-b15", "v1.0-b16"] {
        listing.add_package("AnotherPackage", version, DEFAULT_FLAVOR).unwrap();
    }
    listing
}

fn resolve(listing: &Listing, name: &str, spec: &str) -> Option<String> {
    listing
        .query(name)
        .spec(parse_spec(spec).unwrap())
        .get()
        .map(|entry| entry.version().to_string())
}

#[test]
fn test_new_listing_is_empty() {
    let listing = Listing::default();
    assert!(listing.is_empty());
    assert_eq!(listing.root(), &ListingRoot::Local(".".into()));
    assert!(listing.query("SomePackage").get().is_none());
}

#[test]
fn test_listing_keeps_given_root() {
    let listing = Listing::new(std::path::PathBuf::from("/srv/builds"));
    assert_eq!(listing.root().to_string(), "/srv/builds");
}

#[test]
fn test_best_match_per_spec() {
    let listing = some_package_listing();
    assert_eq!(resolve(&listing, "SomePackage", "latest").as_deref(), Some("v2.1-local"));
    assert_eq!(resolve(&listing, "SomePackage", "v1").as_deref(), Some("v1.2-b2"));
    assert_eq!(resolve(&listing, "SomePackage", "v1.1").as_deref(), Some("v1.1-b2"));
    assert_eq!(resolve(&listing, "SomePackage", "v1.0").as_deref(), Some("v1.0-b3"));
    assert_eq!(resolve(&listing, "AnotherPackage", "latest").as_deref(), Some("v1.0-b16"));
    assert_eq!(resolve(&listing, "AnotherPackage", "v1").as_deref(), Some("v1.0-b16"));
    assert_eq!(resolve(&listing, "AnotherPackage", "v0.1").as_deref(), Some("v0.1-b15"));
    assert_eq!(resolve(&listing, "AnotherPackage", "v1.0").as_deref(), Some("v1.0-b16"));
}

#[test]
fn test_ignore_local_build() {
    let listing = some_package_listing();
    let latest = listing
        .get_package("SomePackage", &VersionSpec::latest(), true, DEFAULT_FLAVOR)
        .unwrap();
    assert_eq!(latest.version().to_string(), "v2.1-b2");

    let v1 = listing
        .get_package("SomePackage", &parse_spec("v1").unwrap(), true, DEFAULT_FLAVOR)
        .unwrap();
    assert_eq!(v1.version().to_string(), "v1.2-b2");
}

#[test]
fn test_flavors_are_partitioned() {
    let listing = some_package_listing();
    let chocolate = listing.query("SomePackage").flavor("chocolate").get().unwrap();
    assert_eq!(chocolate.version().to_string(), "v1.2-local");
    assert_eq!(chocolate.flavor(), "chocolate");

    let chocolate_v2 = listing
        .query("SomePackage")
        .flavor("chocolate")
        .spec(parse_spec("v2").unwrap())
        .get();
    assert!(chocolate_v2.is_none());

    assert!(listing.query("AnotherPackage").flavor("chocolate").get().is_none());
}

#[test]
fn test_exact_version_spec() {
    let listing = some_package_listing();
    let b0 = resolve(&listing, "SomePackage", "v1.0-b0");
    let b3 = resolve(&listing, "SomePackage", "v1.0-b3");
    assert_eq!(b0.as_deref(), Some("v1.0-b0"));
    assert_eq!(b3.as_deref(), Some("v1.0-b3"));
}

#[test]
fn test_unmatched_spec_is_none() {
    let listing = some_package_listing();
    assert_eq!(resolve(&listing, "SomePackage", "v3.3-b3"), None);
    assert_eq!(resolve(&listing, "UnknownPackage", "latest"), None);
}

#[test]
fn test_adding_same_build_twice() {
    let mut listing = Listing::default();
    let first = listing.add_package("SomePackage", "v1.0-b0", DEFAULT_FLAVOR).unwrap();
    let second = listing.add_package("SomePackage", "v1.0-b0", DEFAULT_FLAVOR).unwrap();
    assert_eq!(first, second);
    let package = listing.packages().next().unwrap();
    assert_eq!(package.builds().count(), 1);
}

#[test]
fn test_add_incomplete_version_fails() {
    let mut listing = Listing::default();
    for text in ["v1.0", "latest", "v1.0-beta"] {
        let err = listing.add_package("SomePackage", text, DEFAULT_FLAVOR).unwrap_err();
        assert!(matches!(err, JugglerError::InvalidString { .. }), "got {err:?}");
    }
    assert!(listing.is_empty());
}

#[test]
fn test_packages_ordered_by_name_then_flavor() {
    let listing = some_package_listing();
    let keys: Vec<(&str, &str)> = listing
        .packages()
        .map(|p| (p.name(), p.flavor()))
        .collect();
    assert_eq!(
        keys,
        [
            ("AnotherPackage", "vanilla"),
            ("SomePackage", "chocolate"),
            ("SomePackage", "vanilla"),
        ]
    );
}

#[test]
fn test_entry_filename() {
    let listing = some_package_listing();
    let entry = listing.query("SomePackage").flavor("chocolate").get().unwrap();
    assert_eq!(entry.filename(), "SomePackage_chocolate-v1.2-local.tar.gz");
}

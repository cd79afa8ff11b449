//! `juggler_listing.xml` reading and writing.
//!
//! ```xml
//! <Listing>
//!   <Package name="SomePackage" flavor="vanilla">
//!     <Build version="v1.0-b3"/>
//!   </Package>
//! </Listing>
//! ```
//!
//! Only broken XML is an error. A well-formed document of any other shape
//! loads as an empty listing.

use quick_xml::events::attributes::Attributes;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use juggler_core::listing::{Listing, ListingRoot, DEFAULT_FLAVOR};
use juggler_util::errors::{JugglerError, JugglerResult};

/// File name of the listing inside a repository.
pub const LISTING_FILENAME: &str = "juggler_listing.xml";

const LISTING_ELEMENT: &str = "Listing";
const PACKAGE_ELEMENT: &str = "Package";
const BUILD_ELEMENT: &str = "Build";

/// Parse listing document bytes into a [`Listing`] rooted at `root`.
pub fn parse_listing(bytes: &[u8], root: ListingRoot) -> JugglerResult<Listing> {
    let location = root.locate(LISTING_FILENAME);
    let invalid = |message: String| JugglerError::InvalidFile {
        location: location.clone(),
        message,
    };

    let xml = std::str::from_utf8(bytes).map_err(|e| invalid(format!("not UTF-8: {e}")))?;
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut listing = Listing::new(root);
    let mut path: Vec<String> = Vec::new();
    let mut seen_root = false;
    let mut package: Option<(String, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if path.is_empty() && std::mem::replace(&mut seen_root, true) {
                    return Err(invalid("junk after document element".to_string()));
                }
                let name = checked_element(e).map_err(invalid)?;
                match context(&path, &name).as_str() {
                    "Listing>Package" => {
                        package = package_attributes(e.attributes()).map_err(invalid)?;
                    }
                    "Listing>Package>Build" => {
                        add_build(&mut listing, package.as_ref(), e.attributes(), &invalid)?;
                    }
                    _ => {}
                }
                path.push(name);
            }
            Ok(Event::Empty(ref e)) => {
                if path.is_empty() && std::mem::replace(&mut seen_root, true) {
                    return Err(invalid("junk after document element".to_string()));
                }
                let name = checked_element(e).map_err(invalid)?;
                if context(&path, &name) == "Listing>Package>Build" {
                    add_build(&mut listing, package.as_ref(), e.attributes(), &invalid)?;
                }
            }
            Ok(Event::End(_)) => {
                if path.join(">") == "Listing>Package" {
                    package = None;
                }
                path.pop();
            }
            Ok(Event::Text(_)) | Ok(Event::CData(_)) if path.is_empty() => {
                return Err(invalid("text outside of the document element".to_string()));
            }
            Ok(Event::Text(ref e)) => {
                e.unescape().map_err(|e| invalid(e.to_string()))?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(invalid(e.to_string())),
            _ => {}
        }
    }

    if !seen_root {
        return Err(invalid("no element found".to_string()));
    }
    if let Some(open) = path.last() {
        return Err(invalid(format!("unclosed element <{open}>")));
    }

    Ok(listing)
}

/// Element name, after checking that the tag and all its attributes are
/// well-formed whatever the element is.
fn checked_element(e: &BytesStart<'_>) -> Result<String, String> {
    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
    if name.is_empty() {
        return Err("not well-formed: `<` not followed by an element name".to_string());
    }
    for attr in e.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        attr.unescape_value().map_err(|e| e.to_string())?;
    }
    Ok(name)
}

fn context(path: &[String], name: &str) -> String {
    let mut ctx = path.join(">");
    if !ctx.is_empty() {
        ctx.push('>');
    }
    ctx.push_str(name);
    ctx
}

/// Read `name` and `flavor` of a `<Package>`. `None` if it has no name.
fn package_attributes(attributes: Attributes<'_>) -> Result<Option<(String, String)>, String> {
    let mut name = None;
    let mut flavor = None;
    for attr in attributes {
        let attr = attr.map_err(|e| e.to_string())?;
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        match attr.key.as_ref() {
            b"name" => name = Some(value.to_string()),
            b"flavor" => flavor = Some(value.to_string()),
            _ => {}
        }
    }
    match name {
        Some(name) => Ok(Some((
            name,
            flavor.unwrap_or_else(|| DEFAULT_FLAVOR.to_string()),
        ))),
        None => {
            tracing::debug!("Skipping <{PACKAGE_ELEMENT}> without a name");
            Ok(None)
        }
    }
}

fn add_build(
    listing: &mut Listing,
    package: Option<&(String, String)>,
    attributes: Attributes<'_>,
    invalid: &impl Fn(String) -> JugglerError,
) -> JugglerResult<()> {
    let Some((name, flavor)) = package else {
        return Ok(());
    };
    let mut version = None;
    for attr in attributes {
        let attr = attr.map_err(|e| invalid(e.to_string()))?;
        if attr.key.as_ref() == b"version" {
            let value = attr.unescape_value().map_err(|e| invalid(e.to_string()))?;
            version = Some(value.to_string());
        }
    }
    match version {
        Some(version) => {
            listing.add_package(name, &version, flavor)?;
        }
        None => tracing::debug!("Skipping <{BUILD_ELEMENT}> of {name} without a version"),
    }
    Ok(())
}

/// Render a listing as a document: one `<Package>` per name and flavor, one
/// `<Build>` per registered build.
pub fn write_listing(listing: &Listing) -> JugglerResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(write_error)?;

    if listing.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(LISTING_ELEMENT)))
            .map_err(write_error)?;
    } else {
        writer
            .write_event(Event::Start(BytesStart::new(LISTING_ELEMENT)))
            .map_err(write_error)?;
        for package in listing.packages() {
            let start = BytesStart::new(PACKAGE_ELEMENT)
                .with_attributes([("name", package.name()), ("flavor", package.flavor())]);
            writer
                .write_event(Event::Start(start.borrow()))
                .map_err(write_error)?;
            for build in package.builds() {
                let version = build.to_string();
                let element =
                    BytesStart::new(BUILD_ELEMENT).with_attributes([("version", version.as_str())]);
                writer
                    .write_event(Event::Empty(element))
                    .map_err(write_error)?;
            }
            writer
                .write_event(Event::End(start.to_end()))
                .map_err(write_error)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(LISTING_ELEMENT)))
            .map_err(write_error)?;
    }

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(write_error)
}

fn write_error(e: impl std::fmt::Display) -> JugglerError {
    JugglerError::Io(std::io::Error::other(format!(
        "Failed to render {LISTING_FILENAME}: {e}"
    )))
}

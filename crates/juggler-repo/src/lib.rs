//! Juggler repositories: the XML listing document, local repository
//! directories, and listings published over HTTP.

pub mod manifest;
pub mod remote;
pub mod repository;

pub use manifest::LISTING_FILENAME;

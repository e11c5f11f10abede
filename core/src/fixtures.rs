//! Scenario data loaded from JSON fixture files.
//!
//! Each file is a JSON array of records. Accessors re-read their file on every
//! call and hand back an owned iterator, so a scenario can be replayed as many
//! times as a test needs.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::FixtureError;
use crate::models::{AuthorsModel, BookModel};

/// Input and expectation for a get or delete case against Authors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAuthorCase {
    pub id: i32,
    pub expected_status: u16,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub expected_title: Option<String>,
}

/// Input and expectation for a get or delete case against Books.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBookCase {
    pub id: i32,
    pub expected_status: u16,
    #[serde(default)]
    pub expected_title: Option<String>,
}

/// Read every record of one fixture file.
pub fn load_cases<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<std::vec::IntoIter<T>, FixtureError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cases: Vec<T> = serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = cases.len(), "loaded fixture");
    Ok(cases.into_iter())
}

/// Current instant in the `2026-10-19T08:30:00.123Z` form.
pub fn now_iso_instant() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn stamp_publish_date(mut book: BookModel) -> BookModel {
    book.publish_date = Some(now_iso_instant());
    book
}

/// Directory holding the scenario files.
#[derive(Debug, Clone)]
pub struct Fixtures {
    dir: PathBuf,
}

impl Fixtures {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<std::vec::IntoIter<T>, FixtureError> {
        load_cases(self.dir.join(file))
    }

    pub fn author_get_positive(&self) -> Result<impl Iterator<Item = GetAuthorCase>, FixtureError> {
        self.load::<GetAuthorCase>("author_get_positive_data.json")
    }

    pub fn author_get_negative(&self) -> Result<impl Iterator<Item = GetAuthorCase>, FixtureError> {
        self.load::<GetAuthorCase>("author_get_negative_data.json")
    }

    pub fn author_post_positive(&self) -> Result<impl Iterator<Item = AuthorsModel>, FixtureError> {
        self.load::<AuthorsModel>("author_post_positive_data.json")
    }

    pub fn author_post_negative(&self) -> Result<impl Iterator<Item = AuthorsModel>, FixtureError> {
        self.load::<AuthorsModel>("author_post_negative_data.json")
    }

    pub fn author_put_positive(&self) -> Result<impl Iterator<Item = AuthorsModel>, FixtureError> {
        self.load::<AuthorsModel>("author_put_positive_data.json")
    }

    pub fn author_delete_positive(&self) -> Result<impl Iterator<Item = GetAuthorCase>, FixtureError> {
        self.load::<GetAuthorCase>("author_delete_positive_data.json")
    }

    pub fn author_delete_negative(&self) -> Result<impl Iterator<Item = GetAuthorCase>, FixtureError> {
        self.load::<GetAuthorCase>("author_delete_negative_data.json")
    }

    pub fn book_get_positive(&self) -> Result<impl Iterator<Item = GetBookCase>, FixtureError> {
        self.load::<GetBookCase>("book_get_positive_data.json")
    }

    pub fn book_get_negative(&self) -> Result<impl Iterator<Item = GetBookCase>, FixtureError> {
        self.load::<GetBookCase>("book_get_negative_data.json")
    }

    /// Books to create, each stamped with the current instant.
    pub fn book_post_positive(&self) -> Result<impl Iterator<Item = BookModel>, FixtureError> {
        Ok(self.load::<BookModel>("book_post_positive_data.json")?.map(stamp_publish_date))
    }

    pub fn book_post_negative(&self) -> Result<impl Iterator<Item = BookModel>, FixtureError> {
        Ok(self.load::<BookModel>("book_post_negative_data.json")?.map(stamp_publish_date))
    }

    pub fn book_put_positive(&self) -> Result<impl Iterator<Item = BookModel>, FixtureError> {
        Ok(self.load::<BookModel>("book_put_positive_data.json")?.map(stamp_publish_date))
    }

    pub fn book_delete_positive(&self) -> Result<impl Iterator<Item = GetBookCase>, FixtureError> {
        self.load::<GetBookCase>("book_delete_positive_data.json")
    }

    pub fn book_delete_negative(&self) -> Result<impl Iterator<Item = GetBookCase>, FixtureError> {
        self.load::<GetBookCase>("book_delete_negative_data.json")
    }
}

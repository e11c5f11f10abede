//! Authors API suite driven by the `fixtures/author_*` files.

mod common;

use fakerest_core::{AuthorsModel, AuthorsService, ResourcePaths, RestClient};
use pretty_assertions::assert_eq;

fn authors() -> AuthorsService {
    AuthorsService::new(RestClient::new(&common::settings()))
}

fn assert_same_author(expected: &AuthorsModel, actual: &AuthorsModel) {
    assert_eq!(expected.id, actual.id);
    assert_eq!(expected.id_book, actual.id_book);
    assert_eq!(expected.first_name, actual.first_name);
    assert_eq!(expected.last_name, actual.last_name);
}

#[test]
fn get_all_authors() {
    let response = authors().get_all().unwrap();
    assert_eq!(response.status_code, 200);

    let all = response.body.expect("authors list");
    assert!(!all.is_empty(), "authors list should not be empty");

    let last_id = all.last().map(|a| a.id).unwrap_or(-1);
    assert_eq!(last_id as usize, all.len());
}

#[test]
fn get_author_by_id() {
    let authors = authors();
    for case in common::fixtures().author_get_positive().unwrap() {
        let response = authors.get_by_id(case.id).unwrap();
        assert_eq!(response.status_code, case.expected_status, "author {}", case.id);

        let author = response.body.expect("author body");
        assert_eq!(author.id, case.id);
        assert_eq!(author.first_name, case.first_name);
        assert_eq!(author.last_name, case.last_name);
    }
}

#[test]
fn get_author_by_negative_data() {
    let authors = authors();
    for case in common::fixtures().author_get_negative().unwrap() {
        let response = authors.get_error_by_id(case.id).unwrap();
        assert_eq!(response.status_code, case.expected_status, "author {}", case.id);

        let error = response.body.expect("error body");
        assert_eq!(Some(error.title), case.expected_title);
    }
}

#[test]
fn get_author_by_negative_id() {
    let response = authors().get_error_by_id(-5).unwrap();
    assert_eq!(response.status_code, 404);
    assert_eq!(response.body.unwrap().title, "Not Found");
}

#[test]
fn create_author() {
    let authors = authors();
    for author in common::fixtures().author_post_positive().unwrap() {
        let response = authors.create(&author).unwrap();
        assert_eq!(response.status_code, 200, "author {}", author.id);
        assert_same_author(&author, &response.body.expect("created author"));
    }
}

#[test]
fn create_author_joana_faber() {
    let author = AuthorsModel::new(322, 1010, "Joana", "Faber");
    let response = authors().create(&author).unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, Some(author));
}

#[test]
fn create_author_with_unusual_data() {
    let authors = authors();
    for author in common::fixtures().author_post_negative().unwrap() {
        let response = authors.create(&author).unwrap();
        assert_eq!(response.status_code, 200, "author {}", author.id);
        assert_same_author(&author, &response.body.expect("created author"));
    }
}

#[test]
fn update_author() {
    let authors = authors();
    for author in common::fixtures().author_put_positive().unwrap() {
        let response = authors.update(&author, author.id).unwrap();
        assert_eq!(response.status_code, 200, "author {}", author.id);
        assert_same_author(&author, &response.body.expect("updated author"));
    }
}

#[test]
fn get_then_update_author() {
    let authors = authors();
    for author in common::fixtures().author_put_positive().unwrap() {
        let response = authors.get_by_id(author.id).unwrap();
        assert_eq!(response.status_code, 200);
        let before = response.body.expect("existing author");

        let response = authors.update(&author, author.id).unwrap();
        assert_eq!(response.status_code, 200);
        assert_same_author(&before, &response.body.expect("updated author"));
    }
}

#[test]
fn delete_author_then_get_is_not_found() {
    let authors = authors();
    for case in common::fixtures().author_delete_positive().unwrap() {
        let response = authors.delete(case.id).unwrap();
        assert_eq!(response.status_code, 200, "author {}", case.id);
        assert!(response.body.is_none());

        let response = authors.get_by_id(case.id).unwrap();
        assert_eq!(response.status_code, case.expected_status);
    }
}

#[test]
fn delete_author_with_invalid_id() {
    let authors = authors();
    for case in common::fixtures().author_delete_negative().unwrap() {
        let response = authors.delete(case.id).unwrap();
        assert_eq!(response.status_code, case.expected_status, "author {}", case.id);
    }
}

#[test]
fn create_author_with_invalid_id() {
    let invalid = AuthorsModel::new(-8, 1012, "Joana", "Faber");
    let response = authors().create(&invalid).unwrap();

    assert_eq!(response.status_code, 400);
    // The validation payload carries no author fields.
    let echoed = response.body.expect("validation body");
    assert_eq!(echoed.first_name, None);
}

#[test]
fn legacy_delete_path_misses_the_resource() {
    let settings = common::settings();
    let authors = AuthorsService::with_paths(RestClient::new(&settings), ResourcePaths::legacy_authors());

    let response = authors.delete(6).unwrap();
    assert_eq!(response.status_code, 404);

    // The author is still there under the versioned path.
    let response = authors.get_by_id(6).unwrap();
    assert_eq!(response.status_code, 200);
}

//! Tests for router

use super::*;

#[test]
fn test_starts_at_search() {
    let router = Router::new();

    assert_eq!(router.current_path(), "/");
    assert_eq!(router.current_route(), Route::Search);
    assert_eq!(router.depth(), 1);
}

#[test]
fn test_navigate_to_guard_detail() {
    let mut router = Router::new();

    router.navigate_to("/guard/42");

    assert_eq!(router.current_path(), "/guard/42");
    assert_eq!(
        router.current_route(),
        Route::GuardDetail {
            id: "42".to_string()
        }
    );
}

#[test]
fn test_back_returns_to_previous_route() {
    let mut router = Router::new();
    router.navigate_to("/guard/1");
    router.navigate_to("/guard/2");

    assert!(router.back());
    assert_eq!(router.current_path(), "/guard/1");
    assert!(router.back());
    assert_eq!(router.current_route(), Route::Search);
}

#[test]
fn test_back_never_pops_root() {
    let mut router = Router::new();

    assert!(!router.back());
    assert_eq!(router.current_path(), "/");
    assert_eq!(router.depth(), 1);
}

#[test]
fn test_parse_unknown_paths() {
    assert_eq!(
        Route::parse("/guard/"),
        Route::NotFound {
            path: "/guard/".to_string()
        }
    );
    assert_eq!(
        Route::parse("/guard/1/edit"),
        Route::NotFound {
            path: "/guard/1/edit".to_string()
        }
    );
    assert_eq!(
        Route::parse("/account"),
        Route::NotFound {
            path: "/account".to_string()
        }
    );
}

#[test]
fn test_parse_keeps_id_verbatim() {
    assert_eq!(
        Route::parse("/guard/abc-123"),
        Route::GuardDetail {
            id: "abc-123".to_string()
        }
    );
}

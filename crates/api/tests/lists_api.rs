//! HTTP-level integration tests for the list pages and forms.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_text, flash_cookie, get, get_with_cookie, location, post_form, post_xhr, seed_list, seed_todo};
use sqlx::PgPool;
use todos_db::repositories::{TodoListRepo, TodoRepo};

// ---------------------------------------------------------------------------
// Index and forms
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn index_shows_incomplete_lists_first(pool: PgPool) {
    let done = seed_list(&pool, "Alpha").await;
    let todo = seed_todo(&pool, done, "Sweep").await;
    TodoRepo::set_status(&pool, done, todo, true).await.unwrap();
    let pending = seed_list(&pool, "Beta").await;
    seed_todo(&pool, pending, "Mop").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/lists").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.find("Beta").unwrap() < html.find("Alpha").unwrap());
    assert!(html.contains("<p>0 / 1</p>"));
    assert!(html.contains("<p>1 / 1</p>"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_list_form_renders(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/lists/new").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("name=\"list_name\""));
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_list_redirects_with_flash(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/lists", "list_name=++Groceries++").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/lists");
    let cookie = flash_cookie(&response).expect("flash cookie");
    assert_eq!(cookie, "flash=list-created");

    // Name is stored trimmed.
    assert_eq!(TodoListRepo::names(&pool).await.unwrap(), ["Groceries"]);

    // The flash shows once on the next page and is then cleared.
    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/lists", &cookie).await;
    assert_eq!(flash_cookie(&response).as_deref(), Some("flash="));
    assert!(body_text(response)
        .await
        .contains("The list has been created."));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_duplicate_list_rerenders_form(pool: PgPool) {
    seed_list(&pool, "Groceries").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/lists", "list_name=Groceries").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(flash_cookie(&response).is_none());
    let html = body_text(response).await;
    assert!(html.contains("List name must be unique."));
    assert!(html.contains("value=\"Groceries\""));
    assert_eq!(TodoListRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_blank_list_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/lists", "list_name=+++").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response)
        .await
        .contains("List name must be between 1 and 100 characters."));
    assert!(TodoListRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Show / edit / rename
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_list_redirects_to_index(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/lists/999999").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/lists");
    assert_eq!(
        flash_cookie(&response).as_deref(),
        Some("flash=list-not-found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_list_id_redirects_to_index(pool: PgPool) {
    for uri in ["/lists/abc", "/lists/abc/edit", "/lists/99999999999999999999"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), "/lists", "{uri}");
        assert_eq!(
            flash_cookie(&response).as_deref(),
            Some("flash=list-not-found"),
            "{uri}"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_form_shows_current_name(pool: PgPool) {
    let id = seed_list(&pool, "Chores").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/lists/{id}/edit")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("value=\"Chores\""));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_list(pool: PgPool) {
    let id = seed_list(&pool, "Chores").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/lists/{id}"), "list_name=Housework").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/lists/{id}"));
    assert_eq!(
        flash_cookie(&response).as_deref(),
        Some("flash=list-renamed")
    );

    let list = TodoListRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(list.name, "Housework");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_to_existing_name_is_rejected(pool: PgPool) {
    seed_list(&pool, "Groceries").await;
    let id = seed_list(&pool, "Chores").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/lists/{id}"), "list_name=Groceries").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("List name must be unique."));
    assert!(html.contains("Editing &#39;Chores&#39;"));

    let list = TodoListRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(list.name, "Chores");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_missing_list_redirects(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/lists/999999", "list_name=Housework").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/lists");
    assert_eq!(
        flash_cookie(&response).as_deref(),
        Some("flash=list-not-found")
    );
    assert!(TodoListRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_to_overlong_name_keeps_submitted_value(pool: PgPool) {
    let id = seed_list(&pool, "Chores").await;
    let name = "x".repeat(101);

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/lists/{id}"), &format!("list_name={name}")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("List name must be between 1 and 100 characters."));
    assert!(html.contains(&format!("value=\"{name}\"")));
    assert!(html.contains("Editing &#39;Chores&#39;"));

    let list = TodoListRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(list.name, "Chores");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn name_keeps_surrounding_unicode_spaces(pool: PgPool) {
    // U+3000 IDEOGRAPHIC SPACE, percent-encoded.
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/lists", "list_name=%E3%80%80").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(TodoListRepo::names(&pool).await.unwrap(), ["\u{3000}"]);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_list_removes_its_todos(pool: PgPool) {
    let id = seed_list(&pool, "Groceries").await;
    seed_todo(&pool, id, "Milk").await;
    seed_todo(&pool, id, "Eggs").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/lists/{id}/delete"), "").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/lists");
    assert_eq!(
        flash_cookie(&response).as_deref(),
        Some("flash=list-deleted")
    );

    assert!(TodoListRepo::find_by_id(&pool, id).await.unwrap().is_none());
    assert!(TodoRepo::list_for_list(&pool, id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_list_via_xhr_returns_index_path(pool: PgPool) {
    let id = seed_list(&pool, "Groceries").await;

    let app = common::build_test_app(pool.clone());
    let response = post_xhr(app, &format!("/lists/{id}/delete")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(flash_cookie(&response).is_none());
    assert_eq!(body_text(response).await, "/lists");
    assert!(TodoListRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_list_via_xhr_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_xhr(app, "/lists/999999/delete").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

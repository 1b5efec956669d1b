//! Editor page tests — drive /create through the full route table with a
//! cookie session carried between requests.

#[macro_use]
mod common;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;

use deckhand::models::template::Catalog;
use common::*;

async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[actix_rt::test]
async fn test_editor_renders_default_deck() {
    let app = init_app!(Catalog::builtin().clone());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/create").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;

    assert!(html.contains("Title Slide"));
    assert!(html.contains("Content Slide"));
    assert!(html.contains("Welcome to your presentation"));
    assert!(html.contains("Untitled Presentation"));
}

#[actix_rt::test]
async fn test_add_then_delete_round_trip() {
    let app = init_app!(Catalog::builtin().clone());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/create").to_request()).await;
    let mut cookie: Cookie<'static> = session_cookie(&resp).expect("session cookie");
    let token = csrf_token(&body_string(resp).await);

    // add
    let req = test::TestRequest::post()
        .uri("/create/slides")
        .cookie(cookie.clone())
        .set_form(&[("csrf_token", token.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/create");
    if let Some(c) = session_cookie(&resp) {
        cookie = c;
    }

    let req = test::TestRequest::get().uri("/create").cookie(cookie.clone()).to_request();
    let html = body_string(test::call_service(&app, req).await).await;
    assert!(html.contains("Slide 3"));
    // the new slide is the one being edited
    assert!(html.contains(r#"action="/create/slides/3" class="slide-form""#));

    // delete the selected slide
    let req = test::TestRequest::post()
        .uri("/create/slides/3/delete")
        .cookie(cookie.clone())
        .set_form(&[("csrf_token", token.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::get().uri("/create").cookie(cookie).to_request();
    let html = body_string(test::call_service(&app, req).await).await;
    assert!(!html.contains("Slide 3"));
    assert!(html.contains(r#"action="/create/slides/1" class="slide-form""#));
}

#[actix_rt::test]
async fn test_last_slide_cannot_be_deleted() {
    let app = init_app!(Catalog::builtin().clone());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/create").to_request()).await;
    let mut cookie = session_cookie(&resp).expect("session cookie");
    let token = csrf_token(&body_string(resp).await);

    for id in [1, 2] {
        let req = test::TestRequest::post()
            .uri(&format!("/create/slides/{id}/delete"))
            .cookie(cookie.clone())
            .set_form(&[("csrf_token", token.as_str())])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        if let Some(c) = session_cookie(&resp) {
            cookie = c;
        }
    }

    let req = test::TestRequest::get().uri("/create").cookie(cookie).to_request();
    let html = body_string(test::call_service(&app, req).await).await;
    assert!(html.contains("A presentation needs at least one slide"));
    assert!(html.contains("Content Slide"));
    assert!(!html.contains("Delete slide"));
}

#[actix_rt::test]
async fn test_update_and_rename() {
    let app = init_app!(Catalog::builtin().clone());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/create").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let token = csrf_token(&body_string(resp).await);

    let req = test::TestRequest::post()
        .uri("/create/slides/2")
        .cookie(cookie.clone())
        .set_form(&[("csrf_token", token.as_str()), ("title", "Roadmap"), ("content", "Q3 goals")])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::post()
        .uri("/create/name")
        .cookie(cookie.clone())
        .set_form(&[("csrf_token", token.as_str()), ("name", "Board meeting")])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::post()
        .uri("/create/slides/2/select")
        .cookie(cookie.clone())
        .set_form(&[("csrf_token", token.as_str())])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::get().uri("/create?tab=preview").cookie(cookie).to_request();
    let html = body_string(test::call_service(&app, req).await).await;
    assert!(html.contains("<h2>Roadmap</h2>"));
    assert!(html.contains("<p>Q3 goals</p>"));
    assert!(html.contains(r#"value="Board meeting""#));
}

#[actix_rt::test]
async fn test_mutation_without_csrf_is_forbidden() {
    let app = init_app!(Catalog::builtin().clone());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/create").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");

    let req = test::TestRequest::post()
        .uri("/create/slides")
        .cookie(cookie)
        .set_form(&[("csrf_token", "bogus")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn test_editor_shows_source_template() {
    let app = init_app!(Catalog::builtin().clone());

    let req = test::TestRequest::get().uri("/create?template=business-pitch").to_request();
    let html = body_string(test::call_service(&app, req).await).await;
    assert!(html.contains("Based on: Business Pitch Deck"));

    let req = test::TestRequest::get().uri("/create?template=not-a-template").to_request();
    let html = body_string(test::call_service(&app, req).await).await;
    assert!(!html.contains("Based on:"));
}

#[actix_rt::test]
async fn test_cookieless_visits_store_no_decks() {
    let store = deckhand::session::DeckStore::default();
    let app = init_app!(Catalog::builtin().clone(), store.clone());

    for _ in 0..50 {
        let resp = test::call_service(&app, test::TestRequest::get().uri("/create").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    assert_eq!(store.len(), 0);

    // the first edit is what stores a deck
    let resp = test::call_service(&app, test::TestRequest::get().uri("/create").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let token = csrf_token(&body_string(resp).await);
    let req = test::TestRequest::post()
        .uri("/create/slides")
        .cookie(cookie)
        .set_form(&[("csrf_token", token.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(store.len(), 1);
}

#[actix_rt::test]
async fn test_selecting_from_preview_stays_on_preview() {
    let app = init_app!(Catalog::builtin().clone());

    let req = test::TestRequest::get().uri("/create?tab=preview").to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let html = body_string(resp).await;
    let token = csrf_token(&html);
    assert!(html.contains(r#"<input type="hidden" name="tab" value="preview">"#));

    let req = test::TestRequest::post()
        .uri("/create/slides/2/select")
        .cookie(cookie.clone())
        .set_form(&[("csrf_token", token.as_str()), ("tab", "preview")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/create?tab=preview");
    let cookie = session_cookie(&resp).unwrap_or(cookie);

    let req = test::TestRequest::get().uri("/create?tab=preview").cookie(cookie.clone()).to_request();
    let html = body_string(test::call_service(&app, req).await).await;
    assert!(html.contains("<h2>Content Slide</h2>"));

    // without a tab the edit pane is kept
    let req = test::TestRequest::post()
        .uri("/create/slides/1/select")
        .cookie(cookie)
        .set_form(&[("csrf_token", token.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(location(&resp), "/create");
}

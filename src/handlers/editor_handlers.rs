use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::slide::SlideForm;
use crate::models::template::Catalog;
use crate::session::{DeckStore, csrf, get_or_create_deck_key, set_flash};
use crate::templates_structs::{EditorTab, EditorTemplate, PageContext};

/// Slide list actions; `tab` keeps the visitor on the pane they acted from.
#[derive(Deserialize)]
pub struct EditorActionForm {
    pub csrf_token: String,
    #[serde(default)]
    pub tab: Option<String>,
}

#[derive(Deserialize)]
pub struct EditorQuery {
    pub template: Option<String>,
    pub tab: Option<String>,
}

#[derive(Deserialize)]
pub struct DeckNameForm {
    pub name: String,
    pub csrf_token: String,
    #[serde(default)]
    pub tab: Option<String>,
}

fn back_to_editor(tab: EditorTab) -> HttpResponse {
    let location = if tab.is_preview() { "/create?tab=preview" } else { "/create" };
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// GET /create — slide list, edit form and preview for the visitor's deck.
pub async fn index(
    config: web::Data<AppConfig>,
    catalog: web::Data<Catalog>,
    store: web::Data<DeckStore>,
    session: Session,
    query: web::Query<EditorQuery>,
) -> Result<HttpResponse, AppError> {
    let key = get_or_create_deck_key(&session);

    if let Some(template_id) = query.template.as_deref() {
        if catalog.find(template_id).is_some() {
            log::info!("Opening editor from template '{template_id}'");
            store.with_deck(&key, |deck| deck.set_source_template(Some(template_id)));
        } else {
            log::warn!("Ignoring unknown template '{template_id}'");
        }
    }

    let deck = store.snapshot(&key);
    let source_template = deck
        .source_template()
        .and_then(|id| catalog.find(id))
        .cloned();

    let tmpl = EditorTemplate {
        ctx: PageContext::build(&session, &config, "/create"),
        deck_name: deck.name().to_string(),
        current: deck.current_slide().clone(),
        selected_id: deck.selected_id(),
        can_delete: deck.len() > 1,
        slides: deck.slides().to_vec(),
        tab: EditorTab::parse(query.tab.as_deref()),
        source_template,
    };
    render(tmpl)
}

/// POST /create/name
pub async fn rename(
    store: web::Data<DeckStore>,
    session: Session,
    form: web::Form<DeckNameForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let key = get_or_create_deck_key(&session);
    store.with_deck(&key, |deck| deck.rename(&form.name));
    Ok(back_to_editor(EditorTab::parse(form.tab.as_deref())))
}

/// POST /create/slides
pub async fn add_slide(
    store: web::Data<DeckStore>,
    session: Session,
    form: web::Form<EditorActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let key = get_or_create_deck_key(&session);
    let id = store.with_deck(&key, |deck| deck.add_slide());
    log::debug!("Added slide {id}");
    Ok(back_to_editor(EditorTab::parse(form.tab.as_deref())))
}

/// POST /create/slides/{id}/select
pub async fn select_slide(
    store: web::Data<DeckStore>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<EditorActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let key = get_or_create_deck_key(&session);
    if !store.with_deck(&key, |deck| deck.select_slide(id)) {
        log::debug!("Ignoring selection of unknown slide {id}");
    }
    Ok(back_to_editor(EditorTab::parse(form.tab.as_deref())))
}

/// POST /create/slides/{id} — save title and content of one slide.
pub async fn update_slide(
    store: web::Data<DeckStore>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<SlideForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let key = get_or_create_deck_key(&session);
    store.with_deck(&key, |deck| {
        deck.update_slide_title(id, &form.title);
        deck.update_slide_content(id, &form.content);
    });
    Ok(back_to_editor(EditorTab::Edit))
}

/// POST /create/slides/{id}/delete
pub async fn delete_slide(
    store: web::Data<DeckStore>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<EditorActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let key = get_or_create_deck_key(&session);

    let (removed, remaining) = store.with_deck(&key, |deck| (deck.delete_slide(id), deck.len()));
    if !removed && remaining <= 1 {
        set_flash(&session, "A presentation needs at least one slide");
    }
    Ok(back_to_editor(EditorTab::parse(form.tab.as_deref())))
}

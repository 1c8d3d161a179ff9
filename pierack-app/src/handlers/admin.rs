//! Admin screens: list, edit, create, save details, delete

use crate::error::AppError;
use crate::page::page;
use crate::state::AppState;
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use pierack_admin::{
    apply_search, customize_row_actions, default_columns, list_columns, render_column,
    render_details_panel, AdminContext, Capability, RowAction, SavePieDetails, ACTION_TRASH,
    COL_DATE, COL_TITLE, SAVE_PIE_DETAILS,
};
use pierack_content::pie::{AddPie, DeletePie, UpdatePie};
use pierack_content::{Execute, PieId, PieQuery, PieRecord, QueryScope};
use serde::Deserialize;
use std::sync::Arc;

/// Page size on the admin list screen
const ADMIN_PER_PAGE: usize = 20;

/// Action name for delete links
const DELETE_PIE: &str = "delete_pie";

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub s: Option<String>,
    pub paged: Option<u32>,
}

/// GET /admin/pies - the list screen with search and pagination
pub async fn list_pies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, AppError> {
    let search = params.s.clone().unwrap_or_default();

    let mut query = PieQuery::new()
        .with_scope(QueryScope::AdminList)
        .with_per_page(ADMIN_PER_PAGE)
        .with_page(params.paged.unwrap_or(1))
        .with_search(search.clone());
    apply_search(&mut query);

    let results = query.run(&state.content).await?;
    let labels = &state.pies_type().labels;
    let columns = list_columns(default_columns());

    let mut body = format!(
        "<h1>{}</h1>\n<p><a class=\"add-new\" href=\"/admin/pies/new\">{}</a></p>\n",
        html_escape::encode_text(&labels.name),
        html_escape::encode_text(&labels.add_new),
    );
    body.push_str(&format!(
        "<form method=\"get\" action=\"/admin/pies\"><input type=\"search\" name=\"s\" value=\"{}\" placeholder=\"{}\"><button type=\"submit\">Search</button></form>\n",
        html_escape::encode_double_quoted_attribute(&search),
        html_escape::encode_double_quoted_attribute(&labels.search_items),
    ));

    body.push_str("<table class=\"pie-list-table\">\n<thead><tr>");
    for column in &columns {
        body.push_str(&format!(
            "<th>{}</th>",
            html_escape::encode_text(&column.label)
        ));
    }
    body.push_str("</tr></thead>\n<tbody>\n");

    if results.is_empty() {
        body.push_str(&format!(
            "<tr><td colspan=\"{}\">{}</td></tr>\n",
            columns.len(),
            html_escape::encode_text(&labels.not_found),
        ));
    } else {
        for record in &results.records {
            body.push_str("<tr>");
            for column in &columns {
                body.push_str("<td>");
                body.push_str(&render_cell(&state, &column.key, record));
                body.push_str("</td>");
            }
            body.push_str("</tr>\n");
        }
    }
    body.push_str("</tbody>\n</table>\n");

    let extra: Vec<(&str, &str)> = if search.is_empty() {
        Vec::new()
    } else {
        vec![("s", search.as_str())]
    };
    body.push_str(&pierack_directive::paginate_links(
        "/admin/pies",
        &extra,
        results.page,
        results.total_pages,
    ));

    Ok(Html(page(&labels.all_items, &body)))
}

/// One list-table cell; title and date are native, the rest is metadata
fn render_cell(state: &AppState, key: &str, record: &PieRecord) -> String {
    match key {
        COL_TITLE => {
            let edit_url = format!("/admin/pies/{}", record.pie.id);
            let delete_url = format!(
                "/admin/pies/{}/delete?_nonce={}",
                record.pie.id,
                state.nonces.create(DELETE_PIE, state.principal.name()),
            );

            let stock = vec![
                RowAction::new(
                    "edit",
                    format!(
                        "<a href=\"{}\">Edit</a>",
                        html_escape::encode_double_quoted_attribute(&edit_url)
                    ),
                ),
                RowAction::new(
                    ACTION_TRASH,
                    format!(
                        "<a href=\"{}\">Bin</a>",
                        html_escape::encode_double_quoted_attribute(&delete_url)
                    ),
                ),
            ];
            let actions = customize_row_actions(stock, &delete_url);
            let actions_markup: Vec<String> = actions.into_iter().map(|a| a.markup).collect();

            format!(
                "<strong><a href=\"{}\">{}</a></strong><div class=\"row-actions\">{}</div>",
                html_escape::encode_double_quoted_attribute(&edit_url),
                html_escape::encode_text(&record.pie.title),
                actions_markup.join(" | "),
            )
        }
        COL_DATE => record.pie.created_at.format("%Y/%m/%d").to_string(),
        _ => render_column(key, record),
    }
}

/// GET /admin/pies/new - the create form
pub async fn new_pie_form(State(state): State<Arc<AppState>>) -> Html<String> {
    let labels = &state.pies_type().labels;
    let body = format!(
        r#"<h1>{}</h1>
<form method="post" action="/admin/pies">
    <p><label for="title">Title</label><input type="text" id="title" name="title" class="widefat"></p>
    <p><label for="description">Description</label><textarea id="description" name="description" class="widefat"></textarea></p>
    <p><button type="submit">{}</button></p>
</form>
"#,
        html_escape::encode_text(&labels.add_new_item),
        html_escape::encode_text(&labels.add_new),
    );
    Html(page(&labels.add_new_item, &body))
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub title: String,
    pub description: Option<String>,
}

/// POST /admin/pies - create a pie and land on its edit screen
pub async fn create_pie(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EditForm>,
) -> Result<Redirect, AppError> {
    let mut cmd = AddPie::new(form.title);
    if let Some(description) = form.description {
        cmd = cmd.with_description(description);
    }
    let result = cmd.execute(&state.content).await?;

    let id = result["id"].as_str().unwrap_or_default();
    Ok(Redirect::to(&format!("/admin/pies/{}", id)))
}

/// GET /admin/pies/:id - the edit screen with the details panel
pub async fn edit_pie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = PieId::from_string(id);
    let pie = state.content.read_pie(&id).await?;
    let meta = state.content.read_meta(&id).await?;
    let record = PieRecord::new(pie, meta);

    let labels = &state.pies_type().labels;
    let nonce = state.nonces.create(SAVE_PIE_DETAILS, state.principal.name());

    let body = format!(
        r#"<h1>{edit_item}</h1>
<form method="post" action="/admin/pies/{id}">
    <p><label for="title">Title</label><input type="text" id="title" name="title" value="{title}" class="widefat"></p>
    <p><label for="description">Description</label><textarea id="description" name="description" class="widefat">{description}</textarea></p>
    <p><button type="submit">Update</button></p>
</form>
<h2>Pie Details</h2>
<form method="post" action="/admin/pies/{id}/details">
{panel}    <p><button type="submit">Save Details</button></p>
</form>
<p><a href="/admin/pies">{all_items}</a></p>
"#,
        edit_item = html_escape::encode_text(&labels.edit_item),
        id = record.pie.id,
        title = html_escape::encode_double_quoted_attribute(&record.pie.title),
        description = html_escape::encode_text(&record.pie.description),
        panel = render_details_panel(&record, &nonce),
        all_items = html_escape::encode_text(&labels.all_items),
    );

    Ok(Html(page(&labels.edit_item, &body)))
}

/// POST /admin/pies/:id - update native fields
pub async fn update_pie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<EditForm>,
) -> Result<Redirect, AppError> {
    let mut cmd = UpdatePie::new(id.as_str()).with_title(form.title);
    if let Some(description) = form.description {
        cmd = cmd.with_description(description);
    }
    cmd.execute(&state.content).await?;

    Ok(Redirect::to(&format!("/admin/pies/{}", id)))
}

#[derive(Debug, Deserialize)]
pub struct DetailsForm {
    pub pie_nonce: Option<String>,
    pub pie_type: Option<String>,
    pub ingredients: Option<String>,
}

/// POST /admin/pies/:id/details - the guarded metadata save
pub async fn save_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<DetailsForm>,
) -> Result<Redirect, AppError> {
    let ctx = AdminContext::new(
        state.content.clone(),
        state.nonces.clone(),
        state.principal.clone(),
    );

    let mut cmd = SavePieDetails::new(id.as_str());
    if let Some(nonce) = form.pie_nonce {
        cmd = cmd.with_nonce(nonce);
    }
    if let Some(pie_type) = form.pie_type {
        cmd = cmd.with_pie_type(pie_type);
    }
    if let Some(ingredients) = form.ingredients {
        cmd = cmd.with_ingredients(ingredients);
    }
    cmd.execute(&ctx).await?;

    Ok(Redirect::to(&format!("/admin/pies/{}", id)))
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(rename = "_nonce")]
    pub nonce: Option<String>,
}

/// GET /admin/pies/:id/delete - the row action's target
pub async fn delete_pie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> Result<Response, AppError> {
    let valid = params
        .nonce
        .as_deref()
        .map(|token| state.nonces.verify(token, DELETE_PIE, state.principal.name()))
        .unwrap_or(false);

    if !valid || !state.principal.can(Capability::DeletePies) {
        return Ok((StatusCode::FORBIDDEN, "the link you followed has expired").into_response());
    }

    DeletePie::new(id.as_str()).execute(&state.content).await?;

    Ok(Redirect::to("/admin/pies").into_response())
}

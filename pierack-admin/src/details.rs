//! The "Pie Details" editor panel and its save path

use crate::context::AdminContext;
use crate::principal::Capability;
use async_trait::async_trait;
use pierack_content::sanitize::{sanitize_text_field, sanitize_textarea_field};
use pierack_content::{
    ContentError, Execute, PieId, PieRecord, META_INGREDIENTS, META_PIE_TYPE,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Action name the panel's anti-forgery token is scoped to
pub const SAVE_PIE_DETAILS: &str = "save_pie_details";

/// Render the details panel form fragment
///
/// Both inputs are pre-filled from current metadata, and the one-time token
/// rides along as a hidden field named `pie_nonce`.
pub fn render_details_panel(record: &PieRecord, nonce: &str) -> String {
    let pie_type = html_escape::encode_double_quoted_attribute(record.meta(META_PIE_TYPE));
    let ingredients = html_escape::encode_text(record.meta(META_INGREDIENTS));
    let nonce = html_escape::encode_double_quoted_attribute(nonce);

    format!(
        r#"<div class="pie-details-panel">
    <input type="hidden" name="pie_nonce" value="{nonce}" />
    <p>
        <label for="pie_type">Pie Type</label>
        <input type="text" name="pie_type" id="pie_type" value="{pie_type}" class="widefat" />
    </p>
    <p>
        <label for="ingredients">Ingredients</label>
        <textarea name="ingredients" id="ingredients" class="widefat">{ingredients}</textarea>
    </p>
</div>
"#
    )
}

/// Save the details panel's fields as metadata
///
/// Three guards run before anything is written, and each one is a silent
/// no-op rather than an error: the anti-forgery token must verify for
/// [`SAVE_PIE_DETAILS`], the request must not be an automated background
/// save, and the principal must hold the edit capability. Fields absent from
/// the submission are left untouched.
#[derive(Debug, Deserialize)]
pub struct SavePieDetails {
    /// The pie being edited
    pub id: PieId,
    /// The submitted `pie_nonce` field, if any
    pub nonce: Option<String>,
    /// The submitted pie type, if present in the form
    pub pie_type: Option<String>,
    /// The submitted ingredients, if present in the form
    pub ingredients: Option<String>,
    /// Whether this request is an automated background save
    #[serde(default)]
    pub autosave: bool,
}

impl SavePieDetails {
    /// Create a new SavePieDetails command
    pub fn new(id: impl Into<PieId>) -> Self {
        Self {
            id: id.into(),
            nonce: None,
            pie_type: None,
            ingredients: None,
            autosave: false,
        }
    }

    /// Set the submitted token
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Set the submitted pie type
    pub fn with_pie_type(mut self, pie_type: impl Into<String>) -> Self {
        self.pie_type = Some(pie_type.into());
        self
    }

    /// Set the submitted ingredients
    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    /// Mark this request as an automated background save
    pub fn as_autosave(mut self) -> Self {
        self.autosave = true;
        self
    }
}

#[async_trait]
impl Execute<AdminContext, ContentError> for SavePieDetails {
    async fn execute(&self, ctx: &AdminContext) -> Result<Value, ContentError> {
        let skipped = json!({ "saved": false });

        let Some(token) = &self.nonce else {
            return Ok(skipped);
        };
        if !ctx
            .nonces()
            .verify(token, SAVE_PIE_DETAILS, ctx.principal().name())
        {
            return Ok(skipped);
        }
        if self.autosave {
            return Ok(skipped);
        }
        if !ctx.principal().can(Capability::EditPies) {
            return Ok(skipped);
        }

        let content = ctx.content();

        // The record must exist before metadata attaches to it
        content.read_pie(&self.id).await?;

        let mut meta = content.read_meta(&self.id).await?;
        if let Some(pie_type) = &self.pie_type {
            meta.insert(META_PIE_TYPE.to_string(), sanitize_text_field(pie_type));
        }
        if let Some(ingredients) = &self.ingredients {
            meta.insert(
                META_INGREDIENTS.to_string(),
                sanitize_textarea_field(ingredients),
            );
        }
        content.write_meta(&self.id, &meta).await?;
        tracing::debug!(id = %self.id, "saved pie details");

        Ok(json!({ "saved": true, "id": self.id }))
    }
}

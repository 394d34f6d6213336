//! Template catalog for Zentraw (v1).
//!
//! Templates are reusable base documents (album covers, social posts).
//! Instantiation stamps fresh ids and timestamps so edits to the new
//! document never touch the template it came from.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{unix_now, DocumentError, DocumentV1};

/// What kind of design a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    AlbumCover,
    SocialPost,
    Story,
}

/// A reusable base document plus catalog metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub template_id: Uuid,
    pub name: String,
    pub category: TemplateCategory,
    /// Free-form search tags ("minimal", "vaporwave", ...).
    pub tags: Vec<String>,
    pub base: DocumentV1,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        category: TemplateCategory,
        base: DocumentV1,
    ) -> Result<Self, TemplateError> {
        let name = name.into();

        if name.trim().is_empty() {
            tracing::error!("template name cannot be empty");
            return Err(TemplateError::EmptyName);
        }

        base.validate()?;

        let template_id = Uuid::new_v4();
        tracing::info!(
            template_id = %template_id,
            name = %name,
            category = ?category,
            "creating template"
        );

        Ok(Self {
            template_id,
            name,
            category,
            tags: Vec::new(),
            base,
        })
    }

    /// Stamp out a new document from this template. The copy gets a fresh
    /// document id, fresh layer ids, and fresh timestamps.
    pub fn instantiate(&self, document_name: impl Into<String>) -> Result<DocumentV1, TemplateError> {
        let document_name = document_name.into();

        if document_name.trim().is_empty() {
            return Err(TemplateError::EmptyName);
        }

        let mut document = self.base.clone();
        document.document_id = Uuid::new_v4();
        document.name = document_name;
        for layer in &mut document.layers {
            layer.layer_id = Uuid::new_v4();
        }
        let now = unix_now();
        document.created_at = now;
        document.last_modified = now;

        tracing::info!(
            template_id = %self.template_id,
            document_id = %document.document_id,
            "template instantiated"
        );

        Ok(document)
    }
}

/// Template-related errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("invalid base document: {0}")]
    InvalidBase(#[from] DocumentError),
}

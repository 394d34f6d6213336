//! zentraw-document: the design-document model the Zentraw editor versions.
//!
//! Design rules:
//! - Documents are plain serializable data; rendering belongs to the canvas
//!   layer, not here.
//! - Scalar style parameters are bounded and clamped.
//! - AI suggestions arrive as sparse deltas; they never add or remove layers.
//! - Everything round-trips through JSON for save/load.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Schema version for forward compatibility.
pub const DOC_SCHEMA_VERSION: &str = "1.0";

/// File extension recommended for saved documents.
pub const DOCUMENT_FILE_EXT: &str = "zentraw.json";

/// RGBA color with channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const TRANSPARENT: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Validate all channels are in `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let channels = [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)];
        for (channel, value) in channels {
            if !(0.0..=1.0).contains(&value) {
                tracing::error!(channel, value, "color channel out of range");
                return Err(DocumentError::InvalidColorValue { channel, value });
            }
        }
        Ok(())
    }
}

/// A bounded scalar parameter.
/// Everything stays f32 in v1 for simplicity; we can type-split later.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounded {
    pub value: f32,
    pub min: f32,
    pub max: f32,
}

impl Bounded {
    pub fn new(value: f32, min: f32, max: f32) -> Result<Self, DocumentError> {
        if !(min < max) {
            return Err(DocumentError::InvalidBounds { min, max });
        }
        Ok(Self { value, min, max }.clamped())
    }

    pub fn clamped(mut self) -> Self {
        if self.value < self.min {
            self.value = self.min;
        } else if self.value > self.max {
            self.value = self.max;
        }
        self
    }

    /// Validate a deserialized value still sits inside its bounds.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if !(self.min < self.max) {
            return Err(DocumentError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.value < self.min || self.value > self.max {
            return Err(DocumentError::OutOfBounds {
                value: self.value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Placement of a layer on the canvas. Positions are in canvas pixels,
/// rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation_deg: f32,
    pub opacity: Bounded, // [0.0, 1.0]
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation_deg: 0.0,
            opacity: Bounded { value: 1.0, min: 0.0, max: 1.0 },
        }
    }
}

/// Text styling. Font *loading* lives with the renderer; this is pure data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    /// Size in canvas pixels.
    pub font_size: Bounded, // [4.0, 512.0]
    /// Tracking in canvas pixels; negative tightens.
    pub letter_spacing: Bounded, // [-20.0, 100.0]
    pub fill: Rgba,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Inter".into(),
            font_size: Bounded { value: 32.0, min: 4.0, max: 512.0 },
            letter_spacing: Bounded { value: 0.0, min: -20.0, max: 100.0 },
            fill: Rgba::BLACK,
        }
    }
}

impl TextStyle {
    /// Clamp all bounded values.
    pub fn clamp_all(mut self) -> Self {
        self.font_size = self.font_size.clamped();
        self.letter_spacing = self.letter_spacing.clamped();
        self
    }
}

/// Primitive shape kinds supported on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rect,
    Ellipse,
    Line,
}

/// What a layer holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerContent {
    Text { content: String, style: TextStyle },
    Image { source_path: String },
    Shape { kind: ShapeKind, fill: Rgba },
}

/// A single canvas layer. Order within the document is z-order, bottom first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub layer_id: Uuid,
    pub name: String,
    pub visible: bool,
    pub locked: bool,
    pub transform: Transform,
    pub content: LayerContent,
}

impl Layer {
    pub fn new(name: impl Into<String>, content: LayerContent) -> Self {
        Self {
            layer_id: Uuid::new_v4(),
            name: name.into(),
            visible: true,
            locked: false,
            transform: Transform::default(),
            content,
        }
    }
}

/// Sparse additive deltas to a text layer's styling (AI suggestions and
/// slider nudges both map to this). Deltas are added and then clamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyleDelta {
    pub font_size: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub opacity: Option<f32>,
    /// Replacement fill, validated before it is applied.
    pub fill: Option<Rgba>,
}

/// v1 document object. This is the snapshot type the editor feeds to its
/// undo history, and the unit of save/load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentV1 {
    pub document_id: Uuid,
    pub schema_version: String,
    pub name: String,

    /// Canvas size in pixels.
    pub width: u32,
    pub height: u32,
    pub background: Rgba,

    /// Layers in z-order, bottom first.
    pub layers: Vec<Layer>,

    pub created_at: i64,
    pub last_modified: i64,
}

impl DocumentV1 {
    /// Create an empty document with a white background.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Result<Self, DocumentError> {
        let name = name.into();

        if name.trim().is_empty() {
            tracing::error!("document name cannot be empty");
            return Err(DocumentError::EmptyName);
        }
        if width == 0 || height == 0 {
            tracing::error!(width, height, "canvas dimensions must be non-zero");
            return Err(DocumentError::InvalidCanvasSize { width, height });
        }

        let document_id = Uuid::new_v4();
        let now = unix_now();

        tracing::info!(
            document_id = %document_id,
            name = %name,
            width,
            height,
            "creating new document"
        );

        Ok(Self {
            document_id,
            schema_version: DOC_SCHEMA_VERSION.to_string(),
            name,
            width,
            height,
            background: Rgba::WHITE,
            layers: Vec::new(),
            created_at: now,
            last_modified: now,
        })
    }

    /// Append a layer on top of the stack. Returns its id.
    pub fn add_layer(&mut self, layer: Layer) -> Uuid {
        let layer_id = layer.layer_id;
        self.layers.push(layer);
        self.touch();

        tracing::debug!(
            layer_id = %layer_id,
            total_layers = self.layers.len(),
            "layer added"
        );

        layer_id
    }

    /// Remove a layer by id, returning it.
    pub fn remove_layer(&mut self, layer_id: Uuid) -> Result<Layer, DocumentError> {
        let index = self
            .layers
            .iter()
            .position(|l| l.layer_id == layer_id)
            .ok_or(DocumentError::UnknownLayer { layer_id })?;

        let layer = self.layers.remove(index);
        self.touch();

        tracing::debug!(
            layer_id = %layer_id,
            total_layers = self.layers.len(),
            "layer removed"
        );

        Ok(layer)
    }

    pub fn layer(&self, layer_id: Uuid) -> Option<&Layer> {
        self.layers.iter().find(|l| l.layer_id == layer_id)
    }

    pub fn layer_mut(&mut self, layer_id: Uuid) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.layer_id == layer_id)
    }

    /// Move a layer to a new z-position. `index` is into the current stack.
    pub fn move_layer(&mut self, layer_id: Uuid, index: usize) -> Result<(), DocumentError> {
        let from = self
            .layers
            .iter()
            .position(|l| l.layer_id == layer_id)
            .ok_or(DocumentError::UnknownLayer { layer_id })?;

        if index >= self.layers.len() {
            return Err(DocumentError::IndexOutOfRange {
                index,
                len: self.layers.len(),
            });
        }

        let layer = self.layers.remove(from);
        self.layers.insert(index, layer);
        self.touch();

        tracing::debug!(layer_id = %layer_id, from, to = index, "layer moved");
        Ok(())
    }

    /// Apply a styling delta to a text layer. Locked layers and non-text
    /// layers are rejected; applied values are clamped to their bounds.
    pub fn apply_text_delta(
        &mut self,
        layer_id: Uuid,
        delta: &TextStyleDelta,
    ) -> Result<(), DocumentError> {
        if let Some(fill) = &delta.fill {
            fill.validate()?;
        }

        let layer = self
            .layers
            .iter_mut()
            .find(|l| l.layer_id == layer_id)
            .ok_or(DocumentError::UnknownLayer { layer_id })?;

        if layer.locked {
            tracing::warn!(layer_id = %layer_id, "styling delta rejected: layer locked");
            return Err(DocumentError::LayerLocked { layer_id });
        }

        let style = match &mut layer.content {
            LayerContent::Text { style, .. } => style,
            _ => return Err(DocumentError::NotATextLayer { layer_id }),
        };

        if let Some(v) = delta.font_size {
            style.font_size.value += v;
        }
        if let Some(v) = delta.letter_spacing {
            style.letter_spacing.value += v;
        }
        if let Some(fill) = delta.fill {
            style.fill = fill;
        }
        *style = style.clone().clamp_all();

        if let Some(v) = delta.opacity {
            layer.transform.opacity.value += v;
            layer.transform.opacity = layer.transform.opacity.clamped();
        }

        self.touch();
        tracing::debug!(layer_id = %layer_id, "styling delta applied");
        Ok(())
    }

    /// Validate document data, including values that arrived via
    /// deserialization and so bypassed the constructors.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.name.trim().is_empty() {
            return Err(DocumentError::EmptyName);
        }
        if self.width == 0 || self.height == 0 {
            return Err(DocumentError::InvalidCanvasSize {
                width: self.width,
                height: self.height,
            });
        }
        self.background.validate()?;

        for layer in &self.layers {
            layer.transform.opacity.validate()?;
            match &layer.content {
                LayerContent::Text { style, .. } => {
                    style.font_size.validate()?;
                    style.letter_spacing.validate()?;
                    style.fill.validate()?;
                }
                LayerContent::Shape { fill, .. } => fill.validate()?,
                LayerContent::Image { .. } => {}
            }
        }

        Ok(())
    }

    fn touch(&mut self) {
        self.last_modified = unix_now();
    }
}

/// Document-level errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document name cannot be empty")]
    EmptyName,

    #[error("canvas dimensions must be non-zero: {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("invalid bounds: min={min} max={max}")]
    InvalidBounds { min: f32, max: f32 },

    #[error("value {value} outside bounds [{min}, {max}]")]
    OutOfBounds { value: f32, min: f32, max: f32 },

    #[error("color channel '{channel}' out of range [0.0, 1.0]: {value}")]
    InvalidColorValue { channel: &'static str, value: f32 },

    #[error("unknown layer_id: {layer_id}")]
    UnknownLayer { layer_id: Uuid },

    #[error("layer {layer_id} is locked")]
    LayerLocked { layer_id: Uuid },

    #[error("layer {layer_id} is not a text layer")]
    NotATextLayer { layer_id: Uuid },

    #[error("layer index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Save a document to disk as pretty JSON.
pub fn save_document(path: impl AsRef<Path>, document: &DocumentV1) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        // fs::write does NOT create directories; tests may run with missing `target/`
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(document).context("serialize document to json")?;
    fs::write(path, json).with_context(|| format!("write document file: {}", path.display()))?;
    Ok(())
}

/// Load a document from disk.
pub fn load_document(path: impl AsRef<Path>) -> anyhow::Result<DocumentV1> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read document file: {}", path.display()))?;
    let document: DocumentV1 = serde_json::from_str(&data).context("parse document json")?;
    Ok(document)
}

pub(crate) fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

pub mod template;

pub use template::{Template, TemplateCategory, TemplateError};

#[cfg(test)]
mod tests {
    use super::*;

    fn text_layer(name: &str) -> Layer {
        Layer::new(
            name,
            LayerContent::Text {
                content: "Sample".into(),
                style: TextStyle::default(),
            },
        )
    }

    #[test]
    fn test_document_creation() {
        let doc = DocumentV1::new("Album cover", 1080, 1080).unwrap();
        assert_eq!(doc.layers.len(), 0);
        assert_eq!(doc.schema_version, DOC_SCHEMA_VERSION);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            DocumentV1::new("  ", 1080, 1080),
            Err(DocumentError::EmptyName)
        ));
    }

    #[test]
    fn test_zero_canvas_rejected() {
        assert!(matches!(
            DocumentV1::new("Post", 0, 1080),
            Err(DocumentError::InvalidCanvasSize { .. })
        ));
    }

    #[test]
    fn test_add_and_remove_layer() {
        let mut doc = DocumentV1::new("Post", 1080, 1350).unwrap();
        let id = doc.add_layer(text_layer("Title"));
        assert_eq!(doc.layers.len(), 1);

        let removed = doc.remove_layer(id).unwrap();
        assert_eq!(removed.layer_id, id);
        assert_eq!(doc.layers.len(), 0);
    }

    #[test]
    fn test_remove_unknown_layer_errors() {
        let mut doc = DocumentV1::new("Post", 1080, 1350).unwrap();
        let err = doc.remove_layer(Uuid::new_v4());
        assert!(matches!(err, Err(DocumentError::UnknownLayer { .. })));
    }

    #[test]
    fn test_move_layer_reorders() {
        let mut doc = DocumentV1::new("Post", 1080, 1350).unwrap();
        let a = doc.add_layer(text_layer("a"));
        let _b = doc.add_layer(text_layer("b"));
        let _c = doc.add_layer(text_layer("c"));

        doc.move_layer(a, 2).unwrap();
        assert_eq!(doc.layers[2].layer_id, a);
        assert_eq!(doc.layers.len(), 3);
    }

    #[test]
    fn test_move_layer_out_of_range() {
        let mut doc = DocumentV1::new("Post", 1080, 1350).unwrap();
        let a = doc.add_layer(text_layer("a"));
        assert!(matches!(
            doc.move_layer(a, 1),
            Err(DocumentError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_delta_clamps_at_bounds() {
        let mut doc = DocumentV1::new("Post", 1080, 1350).unwrap();
        let id = doc.add_layer(text_layer("Title"));

        let delta = TextStyleDelta {
            font_size: Some(10_000.0),
            opacity: Some(-5.0),
            ..Default::default()
        };
        doc.apply_text_delta(id, &delta).unwrap();

        let layer = doc.layer(id).unwrap();
        match &layer.content {
            LayerContent::Text { style, .. } => assert_eq!(style.font_size.value, 512.0),
            _ => unreachable!(),
        }
        assert_eq!(layer.transform.opacity.value, 0.0);
    }

    #[test]
    fn test_delta_rejected_on_locked_layer() {
        let mut doc = DocumentV1::new("Post", 1080, 1350).unwrap();
        let id = doc.add_layer(text_layer("Title"));
        doc.layer_mut(id).unwrap().locked = true;

        let delta = TextStyleDelta {
            font_size: Some(2.0),
            ..Default::default()
        };
        assert!(matches!(
            doc.apply_text_delta(id, &delta),
            Err(DocumentError::LayerLocked { .. })
        ));
    }

    #[test]
    fn test_delta_rejected_on_image_layer() {
        let mut doc = DocumentV1::new("Post", 1080, 1350).unwrap();
        let id = doc.add_layer(Layer::new(
            "Photo",
            LayerContent::Image {
                source_path: "cover.png".into(),
            },
        ));

        let delta = TextStyleDelta {
            letter_spacing: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            doc.apply_text_delta(id, &delta),
            Err(DocumentError::NotATextLayer { .. })
        ));
    }

    #[test]
    fn test_invalid_fill_rejected_before_apply() {
        let mut doc = DocumentV1::new("Post", 1080, 1350).unwrap();
        let id = doc.add_layer(text_layer("Title"));

        let delta = TextStyleDelta {
            fill: Some(Rgba::new(2.0, 0.0, 0.0, 1.0)),
            ..Default::default()
        };
        assert!(matches!(
            doc.apply_text_delta(id, &delta),
            Err(DocumentError::InvalidColorValue { .. })
        ));

        // Nothing was applied.
        match &doc.layer(id).unwrap().content {
            LayerContent::Text { style, .. } => assert_eq!(style.fill, Rgba::BLACK),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_bounded_invalid_bounds_rejected() {
        assert!(matches!(
            Bounded::new(1.0, 5.0, 5.0),
            Err(DocumentError::InvalidBounds { .. })
        ));
        assert_eq!(Bounded::new(9.0, 0.0, 1.0).unwrap().value, 1.0);
    }

    #[test]
    fn test_validate_catches_deserialized_garbage() {
        let mut doc = DocumentV1::new("Post", 1080, 1350).unwrap();
        doc.background = Rgba::new(0.5, 0.5, 1.5, 1.0);
        assert!(matches!(
            doc.validate(),
            Err(DocumentError::InvalidColorValue { .. })
        ));
    }
}

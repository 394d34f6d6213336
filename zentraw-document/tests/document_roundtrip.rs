use zentraw_document::{
    load_document, save_document, DocumentV1, Layer, LayerContent, Rgba, ShapeKind, TextStyle,
    TextStyleDelta,
};

#[test]
fn document_roundtrip() {
    let mut doc = DocumentV1::new("Album cover", 1080, 1080).unwrap();

    doc.add_layer(Layer::new(
        "Backdrop",
        LayerContent::Shape {
            kind: ShapeKind::Rect,
            fill: Rgba::new(0.1, 0.1, 0.12, 1.0),
        },
    ));
    let title = doc.add_layer(Layer::new(
        "Title",
        LayerContent::Text {
            content: "Midnight Tapes".into(),
            style: TextStyle::default(),
        },
    ));

    doc.apply_text_delta(
        title,
        &TextStyleDelta {
            font_size: Some(16.0),
            letter_spacing: Some(2.5),
            ..Default::default()
        },
    )
    .unwrap();

    let path = std::path::Path::new("target/test_document.zentraw.json");
    save_document(path, &doc).unwrap();
    let loaded = load_document(path).unwrap();

    assert_eq!(doc.document_id, loaded.document_id);
    assert_eq!(doc.layers.len(), loaded.layers.len());
    assert_eq!(doc, loaded);
    assert!(loaded.validate().is_ok());
}

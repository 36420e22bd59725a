use anyhow::{Context, Result};
use std::path::Path;

use crate::appearance::Appearance;
use crate::fragment::{EdgePolyline, MeshFragment, escape_text, fmt_f64, line_set_fragment};

// Byte-identical across documents; the viewer validates against the fixed
// schema URI.
const DOCUMENT_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<X3D style="width:100%;border: none" profile="Immersive" version="3.2" xmlns:xsd="http://www.w3.org/2001/XMLSchema-instance" xsd:noNamespaceSchemaLocation="http://www.web3d.org/specifications/x3d-3.2.xsd">
<head>
    <meta name="generator" content="scenecast X3D exporter"/>
</head>
<Scene>
"#;

/// Assemble one self-contained scene document: every mesh fragment wrapped
/// in a `Shape` with the shared appearance, then every edge polyline as its
/// own `Shape`. `DEF` identifiers are sequential and scoped to the document.
pub fn shape_document(
    mesh_fragments: &[MeshFragment],
    edge_polylines: &[EdgePolyline],
    appearance: &Appearance,
) -> String {
    let mut doc = String::from(DOCUMENT_PROLOG);
    for (shape_id, fragment) in mesh_fragments.iter().enumerate() {
        doc.push_str(&format!("<Shape DEF=\"shape{shape_id}\"><Appearance>\n"));
        doc.push_str(&appearance_block(appearance));
        doc.push_str("</Appearance>\n");
        doc.push_str(fragment.as_str());
        doc.push_str("</Shape>\n");
    }
    for (edge_id, polyline) in edge_polylines.iter().enumerate() {
        doc.push_str(&format!("<Shape DEF=\"edg{edge_id}\">"));
        doc.push_str(&line_set_fragment(polyline));
        doc.push_str("</Shape>\n");
    }
    doc.push_str("</Scene>\n</X3D>\n");
    doc
}

fn appearance_block(appearance: &Appearance) -> String {
    match appearance {
        Appearance::Material(material) => {
            let [dr, dg, db] = material.diffuse_color;
            let [sr, sg, sb] = material.specular_color;
            format!(
                "<Material diffuseColor='{} {} {}' shininess='{}' specularColor='{} {} {}' transparency='{}'>\n</Material>\n",
                fmt_f64(dr),
                fmt_f64(dg),
                fmt_f64(db),
                fmt_f64(material.shininess),
                fmt_f64(sr),
                fmt_f64(sg),
                fmt_f64(sb),
                fmt_f64(material.transparency),
            )
        }
        Appearance::Shader(pair) => format!(
            "<ComposedShader><ShaderPart type=\"VERTEX\" style=\"display:none;\">\n{}\n</ShaderPart>\n<ShaderPart type=\"FRAGMENT\" style=\"display:none;\">\n{}\n</ShaderPart></ComposedShader>\n",
            escape_text(&pair.vertex_source),
            escape_text(&pair.fragment_source),
        ),
    }
}

/// Write the document to `path`, truncating or creating as needed. Write
/// failures carry the path and are not retried; a half-written file is the
/// caller's call.
pub fn write_shape_document(
    path: impl AsRef<Path>,
    mesh_fragments: &[MeshFragment],
    edge_polylines: &[EdgePolyline],
    appearance: &Appearance,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let doc = shape_document(mesh_fragments, edge_polylines, appearance);
    std::fs::write(path, doc).with_context(|| format!("write X3D file {}", path.display()))?;
    Ok(())
}

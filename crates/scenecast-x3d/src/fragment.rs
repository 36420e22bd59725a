use truck_polymesh::{Point3, PolygonMesh};

/// An ordered polyline along one boundary edge of a shape.
pub type EdgePolyline = Vec<Point3>;

/// An already-serialized surface-geometry fragment. The document writer
/// embeds it verbatim and never parses its contents.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshFragment(String);

impl MeshFragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for MeshFragment {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

/// Serialize an ordered point sequence as an X3D LineSet. Total for any
/// finite input, including the empty and single-point cases.
pub fn line_set_fragment(points: &[Point3]) -> String {
    let mut fragment = format!(
        "\t<LineSet vertexCount='{}' lit='false' solid='false' pickable='false'>",
        points.len()
    );
    fragment.push_str("<Coordinate point='");
    for p in points {
        fragment.push_str(&format!(
            "{} {} {} ",
            fmt_f64(p.x),
            fmt_f64(p.y),
            fmt_f64(p.z)
        ));
    }
    fragment.push_str("'/></LineSet>\n");
    fragment
}

/// Serialize a triangulated mesh as an X3D IndexedFaceSet. Normals are
/// emitted only when every triangle vertex carries a normal index.
pub fn indexed_face_set_fragment(mesh: &PolygonMesh) -> MeshFragment {
    let triangles: Vec<_> = mesh.faces().triangle_iter().collect();
    let with_normals = !mesh.normals().is_empty()
        && triangles
            .iter()
            .all(|tri| tri.iter().all(|v| v.nor.is_some()));

    let mut coord_index = String::new();
    let mut normal_index = String::new();
    for tri in &triangles {
        for v in tri {
            coord_index.push_str(&format!("{} ", v.pos));
            if let Some(nor) = v.nor {
                normal_index.push_str(&format!("{nor} "));
            }
        }
        coord_index.push_str("-1 ");
        normal_index.push_str("-1 ");
    }

    let mut fragment = format!(
        "<IndexedFaceSet solid='false' coordIndex='{}'",
        coord_index.trim_end()
    );
    if with_normals {
        fragment.push_str(&format!(" normalIndex='{}'", normal_index.trim_end()));
    }
    fragment.push_str(">\n<Coordinate point='");
    for p in mesh.positions() {
        fragment.push_str(&format!(
            "{} {} {} ",
            fmt_f64(p.x),
            fmt_f64(p.y),
            fmt_f64(p.z)
        ));
    }
    fragment.push_str("'/>\n");
    if with_normals {
        fragment.push_str("<Normal vector='");
        for n in mesh.normals() {
            fragment.push_str(&format!(
                "{} {} {} ",
                fmt_f64(n.x),
                fmt_f64(n.y),
                fmt_f64(n.z)
            ));
        }
        fragment.push_str("'/>\n");
    }
    fragment.push_str("</IndexedFaceSet>\n");
    MeshFragment(fragment)
}

/// Fixed locale-independent scalar format: six fractional digits, trailing
/// zeros trimmed.
pub(crate) fn fmt_f64(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let mut text = format!("{value:.6}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        return "0".to_string();
    }
    text
}

/// Escape XML text content so embedded blobs cannot break the surrounding
/// markup.
pub(crate) fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

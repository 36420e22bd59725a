use scenecast_base::{Guid, Placement};
use serde::{Deserialize, Serialize};

use crate::fragment::fmt_f64;
use crate::registry::SceneRegistry;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HEADER_TEMPLATE: &str = r#"
<head>
    <title>scenecast @VERSION@ x3dom renderer</title>
    <meta charset="utf-8">
    <link rel="stylesheet" type="text/css" href="http://x3dom.org/release/x3dom.css" charset="utf-8" ></link>
    <script type="text/javascript" src="http://x3dom.org/release/x3dom-full.js"></script>
    <script type="text/javascript" src="http://code.jquery.com/jquery-2.1.0.min.js" ></script>
    <style type="text/css">
        body {
            background: linear-gradient(@BG_GRADIENT_COLOR1@, @BG_GRADIENT_COLOR2@);
            margin: 0px;
            overflow: hidden;
        }
        #scenecast_info {
            padding: 5px;
            position: absolute;
            left: 1%;
            top: 85%;
            height: 60px;
            width: 305px;
            border-radius: 5px;
            border: 2px solid #f7941e;
            opacity: 0.7;
            font-family: Arial;
            background-color: #414042;
            color: #ffffff;
            font-size: 16px;
        }
        #selection_info {
            padding: 5px;
            position: absolute;
            left: 85%;
            top: 1%;
            height: 22px;
            width: 200px;
            border-radius: 5px;
            border: 2px solid #f7941e;
            opacity: 0.7;
            font-family: Arial;
            background-color: #414042;
            color: #ffffff;
            font-size: 16px;
        }
        a {
            color: #f7941e;
            text-decoration: none;
        }
        a:hover {
            color: #ffffff;
        }
    </style>
</head>
"#;

const BODY_TEMPLATE: &str = r#"
<body>
    <div id="x3d_scene">@X3DSCENE@</div>
    <div id="scenecast_info">
        <b>scenecast @VERSION@ <a href="https://www.x3dom.org" target="_blank">x3dom</a> renderer</b>
    </div>
    <div id="selection_info">
        <input type="button" value="Fit All" onclick="fitAll();">
    </div>
    <script>
    function fitAll(){
        document.getElementsByTagName('x3d')[0].runtime.showAll();
    }
    </script>
</body>
"#;

/// Viewer-page styling knobs interpolated into the fixed header template.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub bg_gradient_color1: String,
    pub bg_gradient_color2: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            bg_gradient_color1: "#ced7de".to_string(),
            bg_gradient_color2: "#808080".to_string(),
        }
    }
}

/// File name of one shape's scene document, derived from its identity.
pub fn shape_file_name(guid: &Guid) -> String {
    format!("shp{guid}.x3d")
}

/// Compose the complete root page: fixed header, one transform-wrapped
/// inline reference per registered shape, static UI affordances.
pub fn compose_root(registry: &SceneRegistry, style: &StyleConfig) -> String {
    let mut page = String::from("<!DOCTYPE HTML>");
    page.push_str("<html lang=\"en\">");
    page.push_str(&header_str(style));
    page.push_str(&body_str(registry));
    page.push_str("</html>\n");
    page
}

fn header_str(style: &StyleConfig) -> String {
    HEADER_TEMPLATE
        .replace("@BG_GRADIENT_COLOR1@", &style.bg_gradient_color1)
        .replace("@BG_GRADIENT_COLOR2@", &style.bg_gradient_color2)
        .replace("@VERSION@", VERSION)
}

fn body_str(registry: &SceneRegistry) -> String {
    let mut scene = String::from("\n<x3d style=\"width:100%;border: none\" >\n<scene>\n");
    for (guid, placement) in registry.entries() {
        scene.push_str(&inline_reference(guid, placement));
    }
    scene.push_str("</scene>\n</x3d>\n");

    BODY_TEMPLATE
        .replace("@VERSION@", VERSION)
        .replace("@X3DSCENE@", &scene)
}

// Placement policy: the stored transform is applied here, as an explicit
// wrapper around the inline reference. Shape files stay in local
// coordinates.
fn inline_reference(guid: &Guid, placement: &Placement) -> String {
    let [tx, ty, tz] = placement.translation;
    let [ax, ay, az] = placement.rotation_axis;
    format!(
        "\t\t<Transform translation='{} {} {}' rotation='{} {} {} {}'><Inline mapDEFToID=\"true\" url=\"{}\"></Inline></Transform>\n",
        fmt_f64(tx),
        fmt_f64(ty),
        fmt_f64(tz),
        fmt_f64(ax),
        fmt_f64(ay),
        fmt_f64(az),
        fmt_f64(placement.rotation_angle),
        shape_file_name(guid),
    )
}

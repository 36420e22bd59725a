pub mod appearance;
pub mod document;
pub mod fragment;
pub mod html;
pub mod registry;
pub mod tess;

pub use appearance::{Appearance, MaterialSpec, ShaderPair};
pub use document::{shape_document, write_shape_document};
pub use fragment::{EdgePolyline, MeshFragment, indexed_face_set_fragment, line_set_fragment};
pub use html::{StyleConfig, compose_root, shape_file_name};
pub use registry::SceneRegistry;
pub use tess::{DEFAULT_TESSELLATION_TOLERANCE, TessellationOutput, tessellate_solid};

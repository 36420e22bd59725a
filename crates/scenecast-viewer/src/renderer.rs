use anyhow::{Context, Result};
use scenecast_x3d::{
    Appearance, MaterialSpec, SceneRegistry, StyleConfig, compose_root, indexed_face_set_fragment,
    shape_file_name, tessellate_solid, write_shape_document,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::info;

use crate::scene::SceneShape;
use crate::server::StaticServer;

/// Per-shape display options. A supplied shader pair replaces the material
/// form entirely; see `Appearance::from_parts`.
#[derive(Clone, Debug)]
pub struct DisplayOptions {
    pub material: MaterialSpec,
    pub vertex_shader: Option<String>,
    pub fragment_shader: Option<String>,
    pub export_edges: bool,
    pub mesh_quality: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            material: MaterialSpec::default(),
            vertex_shader: None,
            fragment_shader: None,
            export_edges: false,
            mesh_quality: 1.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct RendererConfig {
    /// Scene output directory. A fresh temporary directory when unset.
    pub out_dir: Option<PathBuf>,
    pub style: StyleConfig,
}

/// The rendering facade: accepts shapes one at a time, writes one scene
/// document per shape, and composes the root page over the accumulated
/// registry. Single-writer; re-displaying a shape re-tessellates it and
/// overwrites its entry.
pub struct X3domRenderer {
    out_dir: PathBuf,
    style: StyleConfig,
    registry: SceneRegistry,
    // keeps a generated temp dir alive for the renderer's lifetime
    _temp_dir: Option<TempDir>,
}

impl X3domRenderer {
    pub fn new(config: RendererConfig) -> Result<Self> {
        let (out_dir, temp_dir) = match config.out_dir {
            Some(dir) => {
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("create output directory {}", dir.display()))?;
                (dir, None)
            }
            None => {
                let temp = tempfile::tempdir().context("create temporary output directory")?;
                (temp.path().to_path_buf(), Some(temp))
            }
        };
        info!(path = %out_dir.display(), "renderer initialized, waiting for shapes");
        Ok(Self {
            out_dir,
            style: config.style,
            registry: SceneRegistry::new(),
            _temp_dir: temp_dir,
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// Add a shape to the rendering buffer: resolve its appearance,
    /// tessellate, write its scene document, then record its placement.
    /// Registration happens last, so a failure leaves no registry entry.
    pub fn display_shape(&mut self, shape: &SceneShape, options: &DisplayOptions) -> Result<()> {
        let appearance = Appearance::from_parts(
            Some(&options.material),
            options.vertex_shader.as_deref(),
            options.fragment_shader.as_deref(),
        )?;
        let tess = tessellate_solid(&shape.solid, options.export_edges, options.mesh_quality)
            .with_context(|| format!("tessellate shape {}", shape.name))?;

        let fragments = vec![indexed_face_set_fragment(&tess.mesh)];
        let path = self.out_dir.join(shape_file_name(&shape.guid));
        write_shape_document(&path, &fragments, &tess.edges, &appearance)?;

        self.registry.register(shape.guid, shape.placement);
        info!(
            name = %shape.name,
            path = %path.display(),
            edges = tess.edges.len(),
            "shape exported"
        );
        Ok(())
    }

    /// Compose and persist the root document; returns its path.
    pub fn compose(&self) -> Result<PathBuf> {
        let page = compose_root(&self.registry, &self.style);
        let path = self.out_dir.join("index.html");
        std::fs::write(&path, page)
            .with_context(|| format!("write root document {}", path.display()))?;
        info!(path = %path.display(), shapes = self.registry.len(), "root document written");
        Ok(path)
    }

    /// Compose the root document, then serve the scene directory over HTTP.
    /// Blocks until the process is interrupted.
    pub fn render(&self, port: u16) -> Result<()> {
        self.compose()?;
        let server = StaticServer::bind(self.out_dir.clone(), port)?;
        info!("open your browser at http://localhost:{port}");
        server.serve()
    }
}

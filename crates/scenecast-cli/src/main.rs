use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use scenecast_base::Placement;
use scenecast_modeling::{Point3, Solid, SolidBuilder};
use scenecast_viewer::{DisplayOptions, RendererConfig, SceneShape, X3domRenderer};
use scenecast_x3d::MaterialSpec;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "scenecast")]
#[command(about = "Export CAD shapes to a browser-viewable x3dom scene")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export one shape's scene directory without serving it
    Generate {
        #[command(subcommand)]
        command: GenerateCommand,
    },
    /// Compose a scene and serve it over HTTP
    Render(RenderArgs),
}

#[derive(Subcommand)]
enum GenerateCommand {
    Box(BoxArgs),
    Plate(PlateArgs),
    Cylinder(CylinderArgs),
}

#[derive(Args)]
struct DisplayArgs {
    /// Export boundary edges as line sets
    #[arg(long)]
    edges: bool,
    /// Tessellation quality factor: 1.0 default, below 1 refines
    #[arg(long, default_value_t = 1.0)]
    quality: f64,
}

#[derive(Args)]
struct BoxArgs {
    #[arg(long)]
    size: String,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    name: Option<String>,
    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args)]
struct PlateArgs {
    #[arg(long)]
    width: f64,
    #[arg(long)]
    height: f64,
    #[arg(long)]
    thickness: f64,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    name: Option<String>,
    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args)]
struct CylinderArgs {
    #[arg(long)]
    radius: f64,
    #[arg(long)]
    height: f64,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    name: Option<String>,
    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args)]
struct RenderArgs {
    /// JSON scene description; a built-in demo set when omitted
    #[arg(long)]
    scene: Option<PathBuf>,
    /// Output directory; a fresh temporary directory when omitted
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, default_value_t = 8080)]
    port: u16,
    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Deserialize)]
struct SceneFile {
    shapes: Vec<ShapeSpec>,
}

#[derive(Deserialize)]
struct ShapeSpec {
    name: Option<String>,
    primitive: PrimitiveSpec,
    #[serde(default)]
    placement: Placement,
    #[serde(default)]
    material: MaterialSpec,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum PrimitiveSpec {
    Box { width: f64, height: f64, depth: f64 },
    Plate { width: f64, height: f64, thickness: f64 },
    Cylinder { radius: f64, height: f64 },
}

impl PrimitiveSpec {
    fn build(&self) -> Result<Solid> {
        let solid = match *self {
            Self::Box {
                width,
                height,
                depth,
            } => SolidBuilder::box_solid(width, height, depth),
            Self::Plate {
                width,
                height,
                thickness,
            } => SolidBuilder::plate(width, height, thickness),
            Self::Cylinder { radius, height } => {
                SolidBuilder::cylinder_z(Point3::new(0.0, 0.0, 0.0), radius, height)
            }
        };
        Ok(solid?)
    }

    fn default_name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "Box",
            Self::Plate { .. } => "Plate",
            Self::Cylinder { .. } => "Cylinder",
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            command: GenerateCommand::Box(args),
        } => generate_box(args),
        Command::Generate {
            command: GenerateCommand::Plate(args),
        } => generate_plate(args),
        Command::Generate {
            command: GenerateCommand::Cylinder(args),
        } => generate_cylinder(args),
        Command::Render(args) => render(args),
    }
}

fn generate_box(args: BoxArgs) -> Result<()> {
    let (width, height, depth) = parse_size(&args.size)?;
    let solid =
        SolidBuilder::box_solid(width, height, depth).context("failed to build box solid")?;
    let name = args.name.unwrap_or_else(|| "Box".to_string());
    generate(&args.out, SceneShape::new(name, solid), &args.display)
}

fn generate_plate(args: PlateArgs) -> Result<()> {
    let solid = SolidBuilder::plate(args.width, args.height, args.thickness)
        .context("failed to build plate solid")?;
    let name = args.name.unwrap_or_else(|| "Plate".to_string());
    generate(&args.out, SceneShape::new(name, solid), &args.display)
}

fn generate_cylinder(args: CylinderArgs) -> Result<()> {
    let solid = SolidBuilder::cylinder_z(Point3::new(0.0, 0.0, 0.0), args.radius, args.height)
        .context("failed to build cylinder solid")?;
    let name = args.name.unwrap_or_else(|| "Cylinder".to_string());
    generate(&args.out, SceneShape::new(name, solid), &args.display)
}

fn generate(out: &PathBuf, shape: SceneShape, display: &DisplayArgs) -> Result<()> {
    let mut renderer = X3domRenderer::new(RendererConfig {
        out_dir: Some(out.clone()),
        ..RendererConfig::default()
    })?;
    let options = DisplayOptions {
        export_edges: display.edges,
        mesh_quality: display.quality,
        ..DisplayOptions::default()
    };
    renderer.display_shape(&shape, &options).context("scene export failed")?;
    renderer.compose().context("root document failed")?;
    info!(path = %out.display(), "scene export complete");
    Ok(())
}

fn render(args: RenderArgs) -> Result<()> {
    let mut renderer = X3domRenderer::new(RendererConfig {
        out_dir: args.out.clone(),
        ..RendererConfig::default()
    })?;

    let shapes = match &args.scene {
        Some(path) => scene_from_file(path)?,
        None => demo_scene()?,
    };

    for (shape, material) in shapes {
        let options = DisplayOptions {
            material,
            export_edges: args.display.edges,
            mesh_quality: args.display.quality,
            ..DisplayOptions::default()
        };
        renderer.display_shape(&shape, &options)?;
    }

    renderer.render(args.port)
}

fn scene_from_file(path: &PathBuf) -> Result<Vec<(SceneShape, MaterialSpec)>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read scene file {}", path.display()))?;
    let scene: SceneFile = serde_json::from_str(&text)
        .with_context(|| format!("parse scene file {}", path.display()))?;
    if scene.shapes.is_empty() {
        bail!("scene file {} lists no shapes", path.display());
    }

    let mut shapes = Vec::with_capacity(scene.shapes.len());
    for spec in scene.shapes {
        let solid = spec.primitive.build()?;
        let name = spec
            .name
            .unwrap_or_else(|| spec.primitive.default_name().to_string());
        let shape = SceneShape::new(name, solid).with_placement(spec.placement);
        shapes.push((shape, spec.material));
    }
    Ok(shapes)
}

fn demo_scene() -> Result<Vec<(SceneShape, MaterialSpec)>> {
    let box_shape = SceneShape::new("Box", SolidBuilder::box_solid(100.0, 200.0, 300.0)?);

    let cylinder = SceneShape::new(
        "Cylinder",
        SolidBuilder::cylinder_z(Point3::new(0.0, 0.0, 0.0), 60.0, 250.0)?,
    )
    .with_placement(Placement::translated([250.0, 0.0, 0.0]));
    let red = MaterialSpec {
        diffuse_color: [0.8, 0.1, 0.1],
        ..MaterialSpec::default()
    };

    let plate = SceneShape::new("Plate", SolidBuilder::plate(300.0, 200.0, 20.0)?)
        .with_placement(Placement::new(
            [-400.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            std::f64::consts::FRAC_PI_4,
        ));

    Ok(vec![
        (box_shape, MaterialSpec::default()),
        (cylinder, red),
        (plate, MaterialSpec::default()),
    ])
}

fn parse_size(text: &str) -> Result<(f64, f64, f64)> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        bail!("--size expects three comma-separated numbers, e.g. 100,200,300");
    }

    let width: f64 = parts[0].trim().parse().context("invalid width")?;
    let height: f64 = parts[1].trim().parse().context("invalid height")?;
    let depth: f64 = parts[2].trim().parse().context("invalid depth")?;
    Ok((width, height, depth))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_size_accepts_three_numbers() -> Result<()> {
        assert_eq!(parse_size("100,200,300")?, (100.0, 200.0, 300.0));
        assert_eq!(parse_size(" 1.5, 2 ,3 ")?, (1.5, 2.0, 3.0));
        Ok(())
    }

    #[test]
    fn parse_size_rejects_wrong_arity() {
        assert!(parse_size("100,200").is_err());
        assert!(parse_size("a,b,c").is_err());
    }

    #[test]
    fn scene_file_parses_tagged_primitives() -> Result<()> {
        let text = r#"{
            "shapes": [
                {
                    "name": "base",
                    "primitive": {"type": "box", "width": 10, "height": 20, "depth": 30},
                    "placement": {"translation": [5, 0, 0]},
                    "material": {"diffuse_color": [0.2, 0.4, 0.6]}
                },
                {
                    "primitive": {"type": "cylinder", "radius": 4, "height": 12}
                }
            ]
        }"#;
        let scene: SceneFile = serde_json::from_str(text)?;
        assert_eq!(scene.shapes.len(), 2);
        assert_eq!(scene.shapes[0].placement.translation, [5.0, 0.0, 0.0]);
        assert_eq!(scene.shapes[0].material.diffuse_color, [0.2, 0.4, 0.6]);
        assert_eq!(scene.shapes[1].primitive.default_name(), "Cylinder");
        Ok(())
    }
}

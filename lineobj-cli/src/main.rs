//! lineobj CLI
//!
//! Command-line interface for inspecting, dumping and converting `.lineobj`
//! files.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use lineobj::{
    Environment, GeometryGroup, ImportSettings, LineObjImporter, MemorySink, MeshProcessor,
    export_lineobj, export_yaml,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "lineobj")]
#[command(about = "Inspect and convert .lineobj geometry files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of the meshes in a file
    Inspect {
        /// Input .lineobj file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = InspectFormat::Summary)]
        format: InspectFormat,

        /// Import settings (YAML)
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Dump every parsed group with its raw records
    Dump {
        /// Input .lineobj file
        #[arg(short, long)]
        input: PathBuf,

        /// Import settings (YAML); only the parse section applies
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Import a file and write the resulting mesh
    Export {
        /// Input .lineobj file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file or, when several assets are produced, directory
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Obj)]
        format: ExportFormat,

        /// Import settings (YAML)
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Parse every .lineobj file below a directory
    Scan {
        /// Input directory
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum InspectFormat {
    Summary,
    Detailed,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Obj,
    Yaml,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Obj => "lineobj",
            ExportFormat::Yaml => "yaml",
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            input,
            format,
            settings,
        } => inspect_command(&input, format, settings.as_deref()),
        Commands::Dump { input, settings } => dump_command(&input, settings.as_deref()),
        Commands::Export {
            input,
            output,
            format,
            settings,
        } => export_command(&input, &output, format, settings.as_deref()),
        Commands::Scan { input } => scan_command(&input),
    }
}

fn load_settings(path: Option<&Path>) -> Result<ImportSettings> {
    match path {
        Some(path) => ImportSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(ImportSettings::default()),
    }
}

fn import(input: &Path, settings: ImportSettings) -> Result<(MemorySink, Vec<String>)> {
    let mut sink = MemorySink::new();
    let report = LineObjImporter::with_settings(settings)
        .import_path(input, &mut sink)
        .with_context(|| format!("importing {}", input.display()))?;

    let warnings = report.rejected.iter().map(ToString::to_string).collect();
    Ok((sink, warnings))
}

fn inspect_command(input: &Path, format: InspectFormat, settings: Option<&Path>) -> Result<()> {
    let (sink, warnings) = import(input, load_settings(settings)?)?;

    println!("File: {}", input.display());
    println!("Assets: {}", sink.assets.len());

    for asset in &sink.assets {
        let info = asset.mesh.get_info();
        println!(
            "  {}: {} vertices, {} triangles, {} lines",
            asset.name, info.vertex_count, info.triangle_count, info.line_count
        );

        if let InspectFormat::Detailed = format {
            match info.bounds {
                Some(bounds) => println!(
                    "    Bounds: min {:?} max {:?}",
                    bounds.min(),
                    bounds.max()
                ),
                None => println!("    Bounds: (empty)"),
            }
            for (slot, sub_mesh) in asset.materials.iter().zip(asset.mesh.sub_meshes()) {
                println!(
                    "    Sub-mesh {} [{}]: {} primitives, material '{}'",
                    slot.sub_mesh,
                    sub_mesh.topology.name(),
                    sub_mesh.primitive_count(),
                    slot.name
                );
            }
        }
    }

    if let InspectFormat::Detailed = format {
        let meshes: Vec<_> = sink.assets.iter().map(|a| &a.mesh).collect();
        let stats = MeshProcessor::new().get_mesh_stats(&meshes);
        println!(
            "Totals: {} vertices, {} triangles, {} lines",
            stats.total_vertices, stats.total_triangles, stats.total_lines
        );
    }

    if !warnings.is_empty() {
        println!("Rejected records: {}", warnings.len());
        for warning in &warnings {
            println!("  {}", warning);
        }
    }

    Ok(())
}

fn dump_group(group: &GeometryGroup) {
    println!("Group: {}", group.name());
    for (i, v) in group.positions().iter().enumerate() {
        println!("  v[{}] = {} {} {}", i, v[0], v[1], v[2]);
    }
    for (i, n) in group.normals().iter().enumerate() {
        println!("  vn[{}] = {} {} {}", i, n[0], n[1], n[2]);
    }
    for (i, f) in group.faces().iter().enumerate() {
        println!("  f[{}] = {} {} {}", i, f[0], f[1], f[2]);
    }
    for (i, e) in group.edges().iter().enumerate() {
        println!("  l[{}] = {} {}", i, e[0], e[1]);
    }
}

fn dump_command(input: &Path, settings: Option<&Path>) -> Result<()> {
    let settings = load_settings(settings)?;
    let outcome = lineobj::load_lineobj(input, &settings.parse)
        .with_context(|| format!("parsing {}", input.display()))?;

    for group in outcome.document.groups() {
        dump_group(group);
    }
    for record in &outcome.rejected {
        println!("Rejected: {}", record);
    }

    Ok(())
}

fn export_command(
    input: &Path,
    output: &Path,
    format: ExportFormat,
    settings: Option<&Path>,
) -> Result<()> {
    let (sink, _) = import(input, load_settings(settings)?)?;

    let single = sink.assets.len() == 1;
    if !single {
        std::fs::create_dir_all(output)
            .with_context(|| format!("creating output directory {}", output.display()))?;
    } else if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    for asset in &sink.assets {
        let text = match format {
            ExportFormat::Obj => export_lineobj(&asset.mesh, &asset.name)?,
            ExportFormat::Yaml => export_yaml(&asset.mesh)?,
        };

        let target = if single {
            output.to_path_buf()
        } else {
            output.join(format!(
                "{}.{}",
                asset.name.replace('/', "_"),
                format.extension()
            ))
        };

        std::fs::write(&target, text)
            .with_context(|| format!("writing {}", target.display()))?;
        info!("Wrote {}", target.display());
        println!("✓ {} -> {}", asset.name, target.display());
    }

    Ok(())
}

fn scan_command(input: &Path) -> Result<()> {
    if !input.is_dir() {
        bail!("{} is not a directory", input.display());
    }

    let mut env = Environment::new();
    env.load(input)?;

    println!("Scanned {}", input.display());
    println!("Files: {}", env.len());

    for (path, doc) in env.documents() {
        let rejected = env.rejected().get(path).copied().unwrap_or(0);
        println!(
            "  {}: {} group(s), {} vertices, {} faces, {} edges{}",
            path.display(),
            doc.len(),
            doc.position_count(),
            doc.face_count(),
            doc.edge_count(),
            if rejected > 0 {
                format!(", {} rejected", rejected)
            } else {
                String::new()
            }
        );
    }

    for (path, error) in env.failures() {
        println!("  ✗ {}: {}", path.display(), error);
    }

    Ok(())
}

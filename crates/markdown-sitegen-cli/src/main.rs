use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{generate_pages_recursive, io};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "markdown-sitegen", version, about = "Build a static HTML site from Markdown")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and generate a page for every Markdown file
    Build {
        /// Config file (defaults apply when it doesn't exist)
        #[arg(long, default_value_os_t = Config::config_path())]
        config: PathBuf,
        /// Prefix for root-relative links, overriding the config file
        #[arg(long)]
        basepath: Option<String>,
    },
    /// Write a config file with default settings
    Init {
        #[arg(long, default_value_os_t = Config::config_path())]
        config: PathBuf,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// What a build produced.
#[derive(Debug, PartialEq, Eq)]
struct BuildSummary {
    pages: Vec<PathBuf>,
    assets: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Build { config, basepath } => {
            let config = resolve_config(&config, basepath)?;
            let summary = build_site(&config)?;
            println!(
                "Generated {} page(s) and copied {} asset(s) into {}",
                summary.pages.len(),
                summary.assets.len(),
                config.output_dir.display()
            );
        }
        Command::Init { config, force } => {
            init_config(&config, force)?;
            println!("Wrote default config to {}", config.display());
        }
    }

    Ok(())
}

/// Loads the config file, falling back to defaults, and applies CLI overrides.
fn resolve_config(config_path: &Path, basepath: Option<String>) -> Result<Config> {
    let mut config = match Config::load_from_path(config_path)? {
        Some(config) => {
            log::info!("Using config {}", config_path.display());
            config
        }
        None => {
            log::info!(
                "No config at {}, using defaults",
                config_path.display()
            );
            Config::default()
        }
    };

    if let Some(basepath) = basepath {
        config.basepath = Config::normalize_basepath(&basepath);
    }

    Ok(config)
}

/// Clears the output directory, copies static assets, then renders pages.
fn build_site(config: &Config) -> Result<BuildSummary> {
    if config.output_dir.exists() {
        log::info!("Removing {}", config.output_dir.display());
        fs::remove_dir_all(&config.output_dir).with_context(|| {
            format!("Failed to clear output directory {}", config.output_dir.display())
        })?;
    }

    let assets = if config.static_dir.is_dir() {
        io::copy_directory(&config.static_dir, &config.output_dir).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                config.static_dir.display(),
                config.output_dir.display()
            )
        })?
    } else {
        log::warn!(
            "Static directory {} not found, skipping asset copy",
            config.static_dir.display()
        );
        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!("Failed to create output directory {}", config.output_dir.display())
        })?;
        Vec::new()
    };

    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.basepath,
    )
    .with_context(|| format!("Failed to generate pages from {}", config.content_dir.display()))?;

    Ok(BuildSummary { pages, assets })
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file {} already exists, use --force to overwrite",
            config_path.display()
        );
    }
    Config::default().save_to_path(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(path: PathBuf, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site_config(root: &Path) -> Config {
        Config {
            content_dir: root.join("content"),
            template_path: root.join("template.html"),
            static_dir: root.join("static"),
            output_dir: root.join("public"),
            basepath: "/".to_string(),
        }
    }

    #[test]
    fn cli_parses_build_overrides() {
        let cli = Cli::try_parse_from([
            "markdown-sitegen",
            "build",
            "--config",
            "site.toml",
            "--basepath",
            "repo",
        ])
        .unwrap();
        match cli.command {
            Command::Build { config, basepath } => {
                assert_eq!(config, PathBuf::from("site.toml"));
                assert_eq!(basepath.as_deref(), Some("repo"));
            }
            Command::Init { .. } => panic!("expected build"),
        }
    }

    #[test]
    fn resolve_config_defaults_and_override() {
        let temp_dir = TempDir::new().unwrap();
        let config = resolve_config(&temp_dir.path().join("missing.toml"), Some("docs".into())).unwrap();
        assert_eq!(config.basepath, "/docs/");
        assert_eq!(config.output_dir, PathBuf::from("public"));
    }

    #[test]
    fn build_site_copies_assets_and_generates_pages() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root.join("template.html"), "<title>{{ Title }}</title>{{ Content }}");
        write(root.join("static/index.css"), "body {}");
        write(root.join("content/index.md"), "# Home\n\nHi");
        write(root.join("content/blog/first.md"), "# First\n\n_post_");
        write(root.join("public/stale.html"), "old");

        let summary = build_site(&site_config(root)).unwrap();

        let public = root.join("public");
        assert_eq!(
            summary,
            BuildSummary {
                pages: vec![public.join("blog/first.html"), public.join("index.html")],
                assets: vec![public.join("index.css")],
            }
        );
        assert!(!public.join("stale.html").exists());
        assert_eq!(
            fs::read_to_string(public.join("blog/first.html")).unwrap(),
            "<title>First</title><div><h1>First</h1><p><i>post</i></p></div>"
        );
    }

    #[test]
    fn build_site_without_static_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root.join("template.html"), "{{ Content }}");
        write(root.join("content/index.md"), "# Home");

        let summary = build_site(&site_config(root)).unwrap();
        assert!(summary.assets.is_empty());
        assert_eq!(summary.pages, vec![root.join("public/index.html")]);
    }

    #[test]
    fn build_site_reports_bad_page() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root.join("template.html"), "{{ Content }}");
        write(root.join("content/index.md"), "# Home\n\n**unclosed");

        let err = build_site(&site_config(root)).unwrap_err();
        assert!(format!("{err:#}").contains("index.md"));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sitegen.toml");

        init_config(&config_path, false).unwrap();
        assert!(init_config(&config_path, false).is_err());
        init_config(&config_path, true).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(loaded, Config::default());
    }
}

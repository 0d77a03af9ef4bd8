use clap::{Parser, Subcommand, ValueEnum};
use docs_nav::config::{self, NavConfig};
use docs_nav::i18n::{self, Localizer};
use docs_nav::resolve::{self, UnmatchedPolicy};
use docs_nav::types::LinkNode;
use docs_nav::{manifest, output, render};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docs-nav")]
#[command(version)]
#[command(about = "Previous/next pagination for documentation sites")]
#[command(long_about = "\
Previous/next pagination for documentation sites

Pages are listed in a YAML link manifest. Nested items are read depth-first,
parents before children; entries without an href group their children but
are not pages themselves:

  - id: docs-nav-intro
    href: /developers/docs/intro/
  - id: docs-nav-foundations          # group, no page
    items:
      - id: docs-nav-accounts
        href: /developers/docs/accounts/

A path matching no entry is treated as the first page unless
--unmatched none is given.

Run 'docs-nav gen-config' to generate a documented docs-nav.toml.")]
struct Cli {
    /// Config file
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Link manifest (overrides `manifest` in the config)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the manifest tree and its flattened page order
    Flatten,
    /// Print the previous and next pages for a path
    Resolve(PathArgs),
    /// Render the pagination control as HTML
    Render(RenderArgs),
    /// Validate the manifest and list available locales
    Check,
    /// Print a stock docs-nav.toml with all options documented
    GenConfig,
}

/// Flags shared by commands that resolve a current path.
#[derive(clap::Args, Clone)]
struct PathArgs {
    /// Current page path, e.g. /developers/docs/accounts/
    #[arg(long)]
    path: String,

    /// What to show when the path is not in the manifest
    #[arg(long, value_enum)]
    unmatched: Option<PolicyArg>,
}

#[derive(clap::Args, Clone)]
struct RenderArgs {
    #[command(flatten)]
    current: PathArgs,

    /// Active locale (overrides `i18n.locale`)
    #[arg(long)]
    locale: Option<String>,

    /// The page is shown in the fallback language
    #[arg(long)]
    content_not_translated: bool,

    /// Wrap the control in a standalone HTML page with its stylesheet
    #[arg(long)]
    document: bool,

    /// Write HTML to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    First,
    None,
}

impl From<PolicyArg> for UnmatchedPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::First => UnmatchedPolicy::First,
            PolicyArg::None => UnmatchedPolicy::None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Flatten => {
            let (_, tree) = load_inputs(&cli.config, cli.manifest.as_deref())?;
            let flat = resolve::flatten(&tree);
            output::print_flatten_output(&tree, &flat);
        }
        Command::Resolve(args) => {
            let (nav_config, tree) = load_inputs(&cli.config, cli.manifest.as_deref())?;
            let policy = effective_policy(&args, &nav_config);
            let (index, nav) = resolve::resolve_located(&tree, &args.path, policy);
            output::print_resolve_output(&args.path, index, &nav);
        }
        Command::Render(args) => {
            let (nav_config, tree) = load_inputs(&cli.config, cli.manifest.as_deref())?;
            let policy = effective_policy(&args.current, &nav_config);
            let nav = resolve::resolve(&tree, &args.current.path, policy);

            let locale = args
                .locale
                .as_deref()
                .unwrap_or(&nav_config.i18n.locale)
                .to_string();
            let catalog = i18n::load_catalog(
                &nav_config.locales_dir(config::config_dir(&cli.config)),
                &locale,
                &nav_config.i18n.namespace,
                &nav_config.i18n.fallback_locale,
            )?;
            let content_not_translated =
                args.content_not_translated || nav_config.render.content_not_translated;

            let markup = render::render_docs_nav(&nav, &catalog, content_not_translated);
            let markup = if args.document {
                render::render_document(&args.current.path, &locale, catalog.is_rtl(), markup)
            } else {
                markup
            };

            match &args.out {
                Some(out) => {
                    std::fs::write(out, markup.into_string())?;
                    println!("Wrote {}", out.display());
                }
                None => println!("{}", markup.into_string()),
            }
        }
        Command::Check => {
            let (nav_config, tree) = load_inputs(&cli.config, cli.manifest.as_deref())?;
            let flat = resolve::flatten(&tree);
            let issues = manifest::check_manifest(&tree);
            let locales_dir = nav_config.locales_dir(config::config_dir(&cli.config));
            let locales = if locales_dir.is_dir() {
                i18n::available_locales(&locales_dir, &nav_config.i18n.namespace)?
            } else {
                Vec::new()
            };
            output::print_check_output(&tree, &flat, &issues, &locales);
            if !issues.is_empty() {
                return Err(format!("{} manifest issue(s) found", issues.len()).into());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file, then the manifest it (or `--manifest`) points to.
///
/// `--manifest` is relative to the working directory; `manifest` in the
/// config file is relative to the file's own directory.
fn load_inputs(
    config_path: &Path,
    manifest_override: Option<&Path>,
) -> Result<(NavConfig, Vec<LinkNode>), Box<dyn std::error::Error>> {
    let nav_config = config::load_config(config_path)?;
    let manifest_path = manifest_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| nav_config.manifest_path(config::config_dir(config_path)));
    let tree = manifest::load_manifest(&manifest_path)?;
    Ok((nav_config, tree))
}

/// `--verbose` forces debug output; otherwise `RUST_LOG`, defaulting to warnings.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// CLI flag wins over the config file.
fn effective_policy(args: &PathArgs, nav_config: &NavConfig) -> UnmatchedPolicy {
    args.unmatched
        .map(UnmatchedPolicy::from)
        .unwrap_or(nav_config.navigation.unmatched)
}

//! pagegen CLI - static single-page site generator

mod content;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagegen::{JsonFormat, Page, PageResult, PageTemplate, RenderOptions};

#[derive(Parser)]
#[command(name = "pagegen")]
#[command(author = "aize-lang")]
#[command(version)]
#[command(about = "Generate a static HTML page from a content tree", long_about = None)]
struct Cli {
    /// Output file (overwritten)
    #[arg(short, long, value_name = "FILE", default_value = "index.html")]
    output: PathBuf,

    /// Page template (built-in template if not specified)
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// JSON content file (demo content if not specified)
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Page title
    #[arg(long, default_value = "Aize")]
    title: String,

    /// Line shown under the title
    #[arg(long, default_value = "The Future of Programming")]
    tagline: String,

    /// Stylesheet href
    #[arg(long, default_value = "style.css")]
    stylesheet: String,

    /// Fail when two headers share an anchor id
    #[arg(long)]
    strict_anchors: bool,

    /// Print the content tree as JSON instead of rendering
    #[arg(long)]
    dump_json: bool,

    /// Print render statistics as JSON
    #[arg(long)]
    stats: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_title(&self.title)
            .with_tagline(&self.tagline)
            .with_stylesheet(&self.stylesheet)
            .with_strict_anchors(self.strict_anchors)
    }

    fn load_page(&self) -> pagegen::Result<Page> {
        match &self.content {
            Some(path) => Page::from_json_file(path),
            None => Ok(content::default_page()),
        }
    }

    fn load_template(&self) -> pagegen::Result<PageTemplate> {
        match &self.template {
            Some(path) => PageTemplate::from_file(path),
            None => PageTemplate::builtin(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = if cli.dump_json {
        cmd_dump_json(&cli)
    } else {
        cmd_generate(&cli)
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_generate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let result = generate(cli, &pb)?;

    pb.finish_with_message("Done!");

    println!(
        "{} {} ({} items, {} navigation entries)",
        "Saved to".green(),
        cli.output.display(),
        result.stats.total_items(),
        result.navigation.len()
    );

    if cli.stats {
        println!("{}", serde_json::to_string_pretty(&result.stats)?);
    }

    Ok(())
}

/// Load content and template, render, and write the output file.
fn generate(cli: &Cli, pb: &ProgressBar) -> Result<PageResult, Box<dyn std::error::Error>> {
    pb.set_message("Loading content...");
    let page = cli.load_page()?;
    pb.inc(1);

    pb.set_message("Loading template...");
    let template = cli.load_template()?;
    pb.inc(1);

    pb.set_message("Rendering page...");
    let result = pagegen::render_page(&page.items, &template, &cli.render_options())?;
    pb.inc(1);

    pb.set_message("Writing output...");
    fs::write(&cli.output, &result.html)?;
    log::info!("Wrote {} bytes to {}", result.html_len(), cli.output.display());
    pb.inc(1);

    Ok(result)
}

fn cmd_dump_json(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let page = cli.load_page()?;
    println!("{}", pagegen::to_json(&page, JsonFormat::Pretty)?);
    Ok(())
}

// File: crates/ascent-cli/src/main.rs
// Summary: Fetches (or loads) the cyclist rides once and writes the scatterplot page as HTML, SVG, or PNG.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use ascent_core::{render_chart, render_error, svg, theme, ChartDocument, Container, Rasterizer, RenderOptions, Source};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Svg,
    Png,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Svg => "svg",
            Format::Png => "png",
        }
    }

    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(Format::Html),
            "svg" => Some(Format::Svg),
            "png" => Some(Format::Png),
            _ => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ascent")]
#[command(about = "Scatterplot of the fastest Alpe d'Huez ascents, coloured by doping allegations")]
struct Args {
    /// Dataset URL (fetched once, no retries)
    #[arg(long, default_value = ascent_core::DEFAULT_URL)]
    url: String,

    /// Local .json or .csv file instead of the URL
    #[arg(short, long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Output file; defaults to target/out/cyclist.<format>
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Output format; inferred from --out when omitted
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Colour preset (dark, light)
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Skip text in PNG output
    #[arg(long)]
    no_labels: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let format = args
        .format
        .or_else(|| args.out.as_deref().and_then(Format::from_path))
        .unwrap_or(Format::Html);
    let out = args.out.clone().unwrap_or_else(|| out_name_with("cyclist", format));

    let opts = RenderOptions {
        theme: theme::find(&args.theme),
        draw_labels: !args.no_labels,
        ..RenderOptions::default()
    };
    let container = Container::default();

    let source = match &args.input {
        Some(path) => Source::File(path.clone()),
        None => Source::Remote { url: args.url.clone(), timeout: Duration::from_secs(args.timeout_secs) },
    };

    match source.load().await {
        Ok(dataset) => {
            info!(rides = dataset.len(), alleged = dataset.doping_count(), "building chart");
            let doc = render_chart(&container, &dataset, &opts);
            write_document(&doc, format, &opts, &out)?;
            info!(path = %out.display(), "wrote chart");
            Ok(())
        }
        Err(err) => {
            // the page still gets written so the failure is visible, not a blank chart
            error!(source = %source.describe(), error = %err, "failed to load rides");
            let doc = render_error(&container, &err.to_string(), &opts);
            write_document(&doc, format, &opts, &out)?;
            info!(path = %out.display(), "wrote error page");
            Err(err).with_context(|| format!("loading rides from {}", source.describe()))
        }
    }
}

fn write_document(doc: &ChartDocument, format: Format, opts: &RenderOptions, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    match format {
        Format::Html => std::fs::write(out, svg::html_document(doc))?,
        Format::Svg => std::fs::write(out, svg::page_svg(doc))?,
        Format::Png => Rasterizer::new(opts.draw_labels).render_to_png(doc, None, out)?,
    }
    Ok(())
}

/// Produce output file name like target/out/<stem>.<ext>
fn out_name_with(stem: &str, format: Format) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("{stem}.{}", format.extension()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.PNG")), Some(Format::Png));
        assert_eq!(Format::from_path(Path::new("page.htm")), Some(Format::Html));
        assert_eq!(Format::from_path(Path::new("noext")), None);
    }

    #[test]
    fn input_conflicts_with_url() {
        let r = Args::try_parse_from(["ascent", "--url", "http://x", "--input", "rides.json"]);
        assert!(r.is_err());
        let ok = Args::try_parse_from(["ascent", "--input", "rides.csv", "--format", "svg"]).unwrap();
        assert_eq!(ok.format, Some(Format::Svg));
        assert_eq!(ok.url, ascent_core::DEFAULT_URL);
    }

    #[test]
    fn default_output_lands_in_target_out() {
        assert_eq!(out_name_with("cyclist", Format::Png), PathBuf::from("target/out/cyclist.png"));
    }
}

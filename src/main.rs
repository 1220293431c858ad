use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};
use structopt::StructOpt;

use prose::{block, Renderer};

#[derive(Debug, StructOpt)]
#[structopt(name = "prose", about = "Convert a Markdown document to HTML")]
struct Opt {
    #[structopt(long = "debug")]
    pub debug: bool,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    #[structopt(long, parse(from_os_str))]
    pub template: Option<PathBuf>,

    /// Escape quotes and ampersands in attribute values
    #[structopt(long)]
    pub escape_attributes: bool,

    /// Write to this file instead of stdout
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Markdown file; stdin when omitted
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,
}

fn read(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

fn write(output: &Option<PathBuf>, html: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
            Ok(())
        }
        None => {
            println!("{}", html);
            Ok(())
        }
    }
}

fn run(opt: &Opt) -> Result<()> {
    let markdown = read(&opt.input)?;
    if opt.debug {
        for block in block::segment(&markdown) {
            debug!("{:?} <- {:?}", block::classify(&block), block);
        }
    }
    let renderer = Renderer::new(opt.escape_attributes);
    let html = match &opt.template {
        Some(path) => {
            let template = fs::read_to_string(path)
                .with_context(|| format!("failed to read template {}", path.display()))?;
            prose::generate_page_with(&renderer, &markdown, &template)?
        }
        None => prose::markdown_to_html_with(&renderer, &markdown)?,
    };
    write(&opt.output, &html)
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    let level = if opt.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    debug!("opt = {:?}", &opt);
    run(&opt)
}

//! Page generation: a rendered document substituted into an HTML template.

use crate::error::Result;
use crate::render::Renderer;
use crate::translator::{build, extract_title};

use log::debug;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_with(&Renderer::default(), markdown)
}

pub fn markdown_to_html_with(renderer: &Renderer, markdown: &str) -> Result<String> {
    Ok(renderer.render(&build(markdown)?))
}

pub fn generate_page(markdown: &str, template: &str) -> Result<String> {
    generate_page_with(&Renderer::default(), markdown, template)
}

pub fn generate_page_with(renderer: &Renderer, markdown: &str, template: &str) -> Result<String> {
    let content = markdown_to_html_with(renderer, markdown)?;
    let title = extract_title(markdown)?;
    debug!("page title: {:?}", title);
    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}

//! HTML rendering of the tool list page.

use minijinja::{context, Environment};

use crate::application::tool_list::ToolListPage;

const INDEX_TEMPLATE: &str = "index.html";
const NOT_FOUND_TEMPLATE: &str = "404.html";

/// Errors raised while turning a page model into HTML.
#[derive(Debug, thiserror::Error)]
#[error("Page rendering failed: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Compiled page templates.
///
/// Templates are named `*.html`, so values are HTML-escaped on output.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(
            INDEX_TEMPLATE,
            include_str!("../../../../templates/index.html"),
        )?;
        env.add_template(
            NOT_FOUND_TEMPLATE,
            include_str!("../../../../templates/404.html"),
        )?;
        Ok(Self { env })
    }

    pub fn render(&self, page: &ToolListPage) -> Result<String, RenderError> {
        let html = match page {
            ToolListPage::Fallback => self.env.get_template(NOT_FOUND_TEMPLATE)?.render(context! {})?,
            ToolListPage::Ready(ready) => self.env.get_template(INDEX_TEMPLATE)?.render(ready)?,
        };
        Ok(html)
    }
}

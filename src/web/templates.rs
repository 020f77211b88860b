//! Template rendering with Tera

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))?;
        Ok(Self { tera })
    }

    /// Render a template with a Tera Context
    pub fn render_with_context(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_renders() {
        let templates = Templates::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("instance_name", "Teszt");
        ctx.insert("field", "telepules");

        let html = templates.render_with_context("index.html", &ctx).unwrap();
        assert!(html.contains("<title>Teszt</title>"));
        assert!(html.contains("/api/autocomplete"));
    }
}

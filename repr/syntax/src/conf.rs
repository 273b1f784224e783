use crate::*;
use serde::{Deserialize, Serialize};

/// How values are rendered; loadable from TOML.
///
/// ```toml
/// renderer = "full"
/// pretty = true
/// width = 100
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub renderer: Renderer,
    /// Break long constructors over several lines.
    pub pretty: bool,
    pub width: usize,
    pub indent: isize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            renderer: Renderer::default(),
            pretty: false,
            width: DEFAULT_WIDTH,
            indent: DEFAULT_INDENT,
        }
    }
}

impl RenderConfig {
    pub fn new(renderer: Renderer) -> Self {
        RenderConfig { renderer, ..Default::default() }
    }
    pub fn pretty_at(self, width: usize) -> Self {
        RenderConfig { pretty: true, width, ..self }
    }
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let conf: RenderConfig = toml::from_str(s)?;
        log::debug!(
            "render configuration: {} renderer{}",
            conf.renderer,
            if conf.pretty { format!(", pretty at width {}", conf.width) } else { String::new() }
        );
        Ok(conf)
    }
    pub fn render(&self, repr: &Repr) -> String {
        if self.pretty {
            self.renderer.render_pretty(repr, self.width, self.indent)
        } else {
            self.renderer.render(repr)
        }
    }
}

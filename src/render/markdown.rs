use crate::types::Item;

pub const HEADER: &str = "# Ranking";

pub trait Renderer {
    fn render(&self, items: &[Item]) -> String;
}

/// v0: Markdown bulleted list under a `# Ranking` header.
///
/// Lines are joined with `\n` and the text carries no trailing newline, so
/// an empty list renders as `"# Ranking\n"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, items: &[Item]) -> String {
        let mut lines = Vec::with_capacity(items.len() + 2);
        lines.push(HEADER.to_string());
        lines.push(String::new());
        lines.extend(items.iter().map(render_line));
        lines.join("\n")
    }
}

fn render_line(item: &Item) -> String {
    format!("- **{}**: `{:.2}`", item.name, item.score)
}

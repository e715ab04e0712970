//! Full HTML document for one catalog page

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

use crate::book::{Category, CategoryFilter};

const STYLESHEET: &str = r#"
:root {
  --bg: #fdfbff;
  --fg: #1f1a24;
  --muted: #6b6275;
  --card: #ffffff;
  --accent: #7b3fe4;
  --border: #e6def0;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  background: var(--bg);
  color: var(--fg);
}
.pride-stripe {
  height: 6px;
  background: linear-gradient(90deg, #e40303, #ff8c00, #ffed00, #008026, #004dff, #750787);
}
header { padding: 2rem 1.5rem 1rem; max-width: 72rem; margin: 0 auto; }
header h1 { margin: 0 0 .25rem; font-size: 2rem; }
header p { margin: 0; color: var(--muted); }
nav.chips { display: flex; flex-wrap: wrap; gap: .5rem; padding: 0 1.5rem; max-width: 72rem; margin: 0 auto 1rem; }
.chip {
  display: inline-block;
  padding: .35rem .8rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  color: var(--fg);
  text-decoration: none;
  font-size: .9rem;
}
.chip .count { color: var(--muted); margin-left: .25rem; }
.chip.active { background: var(--accent); border-color: var(--accent); color: #fff; }
.chip.active .count { color: #e9ddff; }
main { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem 3rem; }
.summary { color: var(--muted); margin: 0 0 1rem; }
ul.cards {
  list-style: none;
  margin: 0;
  padding: 0;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: 1rem;
}
.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: .75rem;
  overflow: hidden;
  display: flex;
  flex-direction: column;
}
.card .cover { width: 100%; aspect-ratio: 2 / 3; object-fit: cover; }
.card-body { padding: 1rem; }
.badge {
  font-size: .75rem;
  text-transform: uppercase;
  letter-spacing: .05em;
  color: var(--accent);
}
.title { margin: .35rem 0 .25rem; font-size: 1.1rem; }
.author { margin: 0 0 .5rem; color: var(--muted); }
.description { margin: 0; font-size: .9rem; line-height: 1.4; }
.empty-state {
  padding: 3rem 1rem;
  text-align: center;
  color: var(--muted);
  border: 1px dashed var(--border);
  border-radius: .75rem;
}
"#;

/// Everything a page needs besides the card fragment
pub struct PageContext<'a> {
    pub title: &'a str,
    /// Relative prefix back to the site root (`""` or `"../"`)
    pub root: &'a str,
    pub active: &'a CategoryFilter,
    pub counts: &'a [(Category, usize)],
    pub total: usize,
    pub summary: &'a str,
    /// Output of the HTML card renderer
    pub cards: &'a str,
}

/// Render a complete HTML document
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let heading = match ctx.active {
        CategoryFilter::All => ctx.title.to_string(),
        CategoryFilter::Only(category) => format!("{} · {}", ctx.title, category),
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", text(&heading));
    let _ = writeln!(html, "<style>{STYLESHEET}</style>");
    html.push_str("</head>\n<body>\n<div class=\"pride-stripe\"></div>\n");

    html.push_str("<header>\n");
    let _ = writeln!(html, "<h1>{}</h1>", text(ctx.title));
    html.push_str("<p>A catalog of LGBTQ+ books: history, fiction, memoir, and more.</p>\n");
    html.push_str("</header>\n");

    html.push_str("<nav class=\"chips\" aria-label=\"Categories\">\n");
    push_chip(
        &mut html,
        &format!("{}index.html", ctx.root),
        CategoryFilter::ALL_LABEL,
        ctx.total,
        matches!(ctx.active, CategoryFilter::All),
    );
    for (category, count) in ctx.counts {
        let is_active = matches!(ctx.active, CategoryFilter::Only(c) if c == category);
        push_chip(
            &mut html,
            &format!("{}category/{}.html", ctx.root, category.slug()),
            category.label(),
            *count,
            is_active,
        );
    }
    html.push_str("</nav>\n");

    html.push_str("<main>\n");
    let _ = writeln!(html, "<p class=\"summary\">{}</p>", text(ctx.summary));
    html.push_str(ctx.cards);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn push_chip(html: &mut String, href: &str, label: &str, count: usize, active: bool) {
    let (class, current) = if active {
        ("chip active", " aria-current=\"page\"")
    } else {
        ("chip", "")
    };
    let _ = writeln!(
        html,
        r#"<a class="{class}" href="{}"{current}>{}<span class="count">{count}</span></a>"#,
        attr(href),
        text(label)
    );
}

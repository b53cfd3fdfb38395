//! HTML for the two internal pages (sidebar and placeholder), plus the
//! script that pushes a fresh render model into the sidebar.

use crate::app::App;
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::selection::SidebarView;

const SIDEBAR_CSS: &str = include_str!("../../resources/ui/sidebar.css");
const SIDEBAR_JS: &str = include_str!("../../resources/ui/sidebar.js");
const PLACEHOLDER_CSS: &str = include_str!("../../resources/ui/placeholder.css");

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "globe" => "\u{1F310}",
        "book" => "\u{1F4D6}",
        "laptop" => "\u{1F4BB}",
        _ => "\u{2022}",
    }
}

fn page_shell(theme: &ThemeEngine, css: &str, body: &str, js: &str) -> String {
    let mut html = String::with_capacity(body.len() + css.len() + js.len() + 1024);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(&theme.css_root_block());
    html.push_str("*{margin:0;padding:0;box-sizing:border-box}");
    html.push_str("body{font-family:var(--font);color:var(--fg);user-select:none;overflow:hidden}");
    html.push_str(css);
    html.push_str("</style></head><body>");
    html.push_str(body);
    if !js.is_empty() {
        html.push_str("<script>");
        html.push_str(js);
        html.push_str("</script>");
    }
    html.push_str("</body></html>");
    html
}

/// The sidebar: profile header, project rows, social buttons.
pub fn sidebar_html(app: &App) -> String {
    let mut body = String::from("<div class=\"sidebar\">");
    body.push_str(&format!(
        "<div class=\"profile-name\">{}</div><div class=\"profile-bio\">{}</div>",
        escape_html(&app.profile.name),
        escape_html(&app.profile.bio)
    ));

    body.push_str("<div class=\"info\">");
    for row in &app.profile.info {
        body.push_str(&format!(
            "<div class=\"info-row\"><span class=\"info-icon\">{}</span>{}</div>",
            icon_glyph(&row.icon),
            escape_html(&row.text)
        ));
    }
    body.push_str("</div><div class=\"divider\"></div><div class=\"section-title\">Projects</div>");

    body.push_str("<div class=\"links\">");
    for link in &app.links {
        body.push_str(&format!(
            "<button class=\"link-row\" data-url=\"{}\">{}</button>",
            escape_html(link.id()),
            escape_html(&link.title)
        ));
    }
    body.push_str("</div><div class=\"spacer\"></div><div class=\"socials\">");
    for social in &app.socials {
        body.push_str(&format!(
            "<button class=\"social\" data-url=\"{}\">{}</button>",
            escape_html(&social.url),
            escape_html(&social.label)
        ));
    }
    body.push_str("</div></div>");

    page_shell(&app.theme_engine, SIDEBAR_CSS, &body, SIDEBAR_JS)
}

pub fn placeholder_html(theme: &ThemeEngine) -> String {
    let body = "<div class=\"placeholder\"><div class=\"placeholder-icon\">\u{1F310}</div>\
                <div class=\"placeholder-text\">Select a project to view</div></div>";
    page_shell(theme, PLACEHOLDER_CSS, body, "")
}

/// Script that applies `view` to the already-loaded sidebar page.
pub fn render_script(view: &SidebarView) -> String {
    let json = serde_json::to_string(view).unwrap_or_else(|_| "null".to_string());
    format!("if(window.__zv_render)__zv_render({})", json)
}

//! Theme Engine: the Gruvbox palette, exposed as CSS variables for the
//! HTML-rendered sidebar and placeholder pages.

use std::collections::HashMap;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn get_css_variables(&self) -> HashMap<String, String>;
    fn css_root_block(&self) -> String;
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn with_alpha(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// Gruvbox dark colors.
pub struct GruvboxPalette;
impl GruvboxPalette {
    pub const BG: Rgb = Rgb(40, 40, 40);
    pub const BG0: Rgb = Rgb(29, 32, 33);
    pub const FG: Rgb = Rgb(235, 219, 178);
    pub const YELLOW: Rgb = Rgb(250, 189, 47);
    pub const ORANGE: Rgb = Rgb(254, 128, 25);
    pub const RED: Rgb = Rgb(251, 73, 52);
    pub const GREEN: Rgb = Rgb(184, 187, 38);
    pub const AQUA: Rgb = Rgb(142, 192, 124);
    pub const BLUE: Rgb = Rgb(131, 165, 152);
}

#[derive(Debug, Default)]
pub struct ThemeEngine;

impl ThemeEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn get_css_variables(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("--bg".into(), GruvboxPalette::BG.to_hex());
        vars.insert("--bg0".into(), GruvboxPalette::BG0.to_hex());
        vars.insert("--fg".into(), GruvboxPalette::FG.to_hex());
        vars.insert("--yellow".into(), GruvboxPalette::YELLOW.to_hex());
        vars.insert("--orange".into(), GruvboxPalette::ORANGE.to_hex());
        vars.insert("--red".into(), GruvboxPalette::RED.to_hex());
        vars.insert("--green".into(), GruvboxPalette::GREEN.to_hex());
        vars.insert("--aqua".into(), GruvboxPalette::AQUA.to_hex());
        vars.insert("--blue".into(), GruvboxPalette::BLUE.to_hex());
        vars.insert("--fg-faint".into(), GruvboxPalette::FG.with_alpha(0.1));
        vars.insert("--fg-dim".into(), GruvboxPalette::FG.with_alpha(0.3));
        vars.insert("--fg-muted".into(), GruvboxPalette::FG.with_alpha(0.5));
        vars.insert("--yellow-dim".into(), GruvboxPalette::YELLOW.with_alpha(0.3));
        vars.insert("--yellow-half".into(), GruvboxPalette::YELLOW.with_alpha(0.5));
        vars.insert("--radius".into(), "8px".into());
        vars.insert(
            "--font".into(),
            "-apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif".into(),
        );
        vars
    }

    /// `:root{...}` with variables sorted by name so output is stable.
    fn css_root_block(&self) -> String {
        let vars = self.get_css_variables();
        let mut names: Vec<&String> = vars.keys().collect();
        names.sort();
        let mut css = String::from(":root{");
        for name in names {
            css.push_str(name);
            css.push(':');
            css.push_str(&vars[name]);
            css.push(';');
        }
        css.push('}');
        css
    }
}

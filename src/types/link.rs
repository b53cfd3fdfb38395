/// A selectable project row in the sidebar. The url doubles as the row id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkItem {
    pub title: String,
    pub url: String,
}

impl LinkItem {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    /// Identifier used for hover tracking.
    pub fn id(&self) -> &str {
        &self.url
    }
}

/// A profile link that always opens in the system browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// One "icon + text" line under the bio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub icon: String,
    pub text: String,
}

/// Everything shown in the sidebar header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub info: Vec<InfoRow>,
}

pub fn profile() -> Profile {
    Profile {
        name: "Srijit Dey".to_string(),
        bio: "I'm a passionate developer from India, currently diving deep into the world of web development.".to_string(),
        info: vec![
            InfoRow { icon: "globe".into(), text: "Location: India".into() },
            InfoRow { icon: "book".into(), text: "Learning: MERN Stack".into() },
            InfoRow { icon: "laptop".into(), text: "Interests: Full-stack Development".into() },
        ],
    }
}

/// The fixed project list, in display order.
pub fn project_links() -> Vec<LinkItem> {
    vec![
        LinkItem::new("Portfolio", "https://zeropse.xyz/"),
        LinkItem::new("Valopedia", "https://valopedia-nine.vercel.app/"),
        LinkItem::new("KnightBot", "https://github.com/zeropse/KnightBot"),
    ]
}

pub fn social_links() -> Vec<SocialLink> {
    [
        ("LinkedIn", "https://www.linkedin.com/in/zeropse"),
        ("GitHub", "https://github.com/zeropse"),
        ("X", "https://x.com/zer0pse"),
    ]
    .into_iter()
    .map(|(label, url)| SocialLink {
        label: label.to_string(),
        url: url.to_string(),
    })
    .collect()
}

use crate::config::SiteOptions;
use crate::models::Owner;

const EXTRA_CONFIG: &str = r#"
# ### configuration added by the Mastodon import

SHOW_SOURCELINK = False
COPY_SOURCES = False
GENERATE_RSS = False
FILES_FOLDERS = {'files': 'files'}
INDEX_DISPLAY_POST_COUNT = 30
DISABLED_PLUGINS = ["robots"]
CONTENT_FOOTER = """Contents &copy; {date} - {author} - Powered by
    <a href="https://getnikola.com" rel="nofollow">Nikola</a>"""

# ### end Mastodon import config
"#;

/// Settings of the generated site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContext {
    pub default_lang: String,
    pub blog_title: String,
    pub site_url: String,
    pub blog_description: String,
    pub blog_author: String,
    /// `(url, label)` pairs, in menu order.
    pub navigation_links: Vec<(String, String)>,
}

impl SiteContext {
    pub fn new(site: &SiteOptions, owner: &Owner) -> Self {
        let mut navigation_links = Vec::new();
        if !site.main_url.is_empty() {
            navigation_links.push((site.main_url.clone(), "Back to main site".to_string()));
        }
        navigation_links.push(("/archive.html".to_string(), "Archives".to_string()));
        navigation_links.push(("/categories/index.html".to_string(), "Share status".to_string()));

        Self {
            default_lang: if site.lang.is_empty() {
                "en".to_string()
            } else {
                site.lang.clone()
            },
            blog_title: site.title.clone(),
            site_url: site.url.clone(),
            blog_description: site.descr.clone(),
            blog_author: owner.handle(),
            navigation_links,
        }
    }

    /// Site generator configuration file (`conf.py`).
    pub fn render_conf(&self) -> String {
        let mut conf = String::new();
        conf.push_str("# -*- coding: utf-8 -*-\n\n");
        conf.push_str(&format!("BLOG_AUTHOR = {}\n", py_str(&self.blog_author)));
        conf.push_str(&format!("BLOG_TITLE = {}\n", py_str(&self.blog_title)));
        conf.push_str(&format!("SITE_URL = {}\n", py_str(&self.site_url)));
        conf.push_str("BLOG_EMAIL = \"\"\n");
        conf.push_str(&format!(
            "BLOG_DESCRIPTION = {}\n",
            py_str(&self.blog_description)
        ));
        conf.push_str(&format!("DEFAULT_LANG = {}\n", py_str(&self.default_lang)));
        conf.push_str("TRANSLATIONS = {\n    DEFAULT_LANG: \"\",\n}\n\n");

        conf.push_str("NAVIGATION_LINKS = {\n    DEFAULT_LANG: (\n");
        for (url, label) in &self.navigation_links {
            conf.push_str(&format!("        ({}, {}),\n", py_str(url), py_str(label)));
        }
        conf.push_str("    ),\n}\n\n");

        conf.push_str("THEME = \"hyde\"\n\n");
        conf.push_str(
            "POSTS = (\n    (\"posts/*.html\", \"posts\", \"post.tmpl\"),\n    (\"posts/*.rst\", \"posts\", \"post.tmpl\"),\n)\n",
        );
        conf.push_str("PAGES = ()\n\n");
        conf.push_str(
            "COMPILERS = {\n    \"rest\": (\".txt\", \".rst\"),\n    \"html\": (\".html\", \".htm\"),\n}\n\n",
        );
        conf.push_str("COMMENT_SYSTEM = \"\"\nCOMMENT_SYSTEM_ID = \"\"\n");
        conf.push_str(EXTRA_CONFIG);
        conf
    }
}

fn py_str(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Owner {
        Owner::from_actor_id("https://mastodon.social/users/alice").unwrap()
    }

    #[test]
    fn test_site_context_defaults() {
        let context = SiteContext::new(&SiteOptions::default(), &owner());
        assert_eq!(context.default_lang, "en");
        assert_eq!(context.blog_author, "@alice@mastodon.social");
        assert_eq!(context.navigation_links.len(), 2);
        assert_eq!(context.navigation_links[0].1, "Archives");
    }

    #[test]
    fn test_main_url_adds_back_link() {
        let site = SiteOptions {
            title: "Alice \"toots\"".to_string(),
            main_url: "https://alice.example".to_string(),
            ..Default::default()
        };
        let context = SiteContext::new(&site, &owner());
        assert_eq!(
            context.navigation_links[0],
            ("https://alice.example".to_string(), "Back to main site".to_string())
        );

        let conf = context.render_conf();
        assert!(conf.contains("BLOG_TITLE = \"Alice \\\"toots\\\"\"\n"));
        assert!(conf.contains("(\"https://alice.example\", \"Back to main site\"),"));
        assert!(conf.contains("GENERATE_RSS = False"));
    }
}

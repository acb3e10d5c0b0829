//! List site content

use anyhow::Result;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str, json: bool) -> Result<()> {
    print!("{}", listing(site, content_type, json)?);
    Ok(())
}

/// Build the listing text for `content_type`
pub fn listing(site: &Site, content_type: &str, json: bool) -> Result<String> {
    let loader = site.loader();
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let posts = loader.load_posts();
            if json {
                out.push_str(&serde_json::to_string_pretty(&posts)?);
                out.push('\n');
            } else {
                out.push_str(&format!("Posts ({}):\n", posts.len()));
                for post in posts {
                    out.push_str(&format!(
                        "  {} - {} [{}]\n",
                        post.date.as_deref().unwrap_or("----------"),
                        post.title.as_deref().unwrap_or("Untitled"),
                        post.slug
                    ));
                }
            }
        }
        "page" | "pages" => {
            let pages = loader.load_pages();
            if json {
                out.push_str(&serde_json::to_string_pretty(&pages)?);
                out.push('\n');
            } else {
                out.push_str(&format!("Pages ({}):\n", pages.len()));
                for page in pages {
                    out.push_str(&format!("  {} [{}]\n", page.menu_title(), page.slug));
                }
            }
        }
        "menu" => {
            let menu = loader.build_menu();
            if json {
                out.push_str(&serde_json::to_string_pretty(&menu)?);
                out.push('\n');
            } else {
                out.push_str(&format!("Menu ({}):\n", menu.len()));
                for entry in menu {
                    out.push_str(&format!("  {} -> {}\n", entry.title, entry.slug));
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, page, menu",
                content_type
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> (TempDir, Site) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("posts")).unwrap();
        fs::create_dir(tmp.path().join("pages")).unwrap();
        fs::write(
            tmp.path().join("posts").join("a.md"),
            "---\nslug: a\ntitle: Alpha\ndate: 2024-03-01\ntags: x\n---\nbody",
        )
        .unwrap();
        fs::write(tmp.path().join("pages").join("about.md"), "hi").unwrap();
        let site = Site::new(tmp.path()).unwrap();
        (tmp, site)
    }

    #[test]
    fn test_list_posts_text() {
        let (_tmp, site) = site();
        let out = listing(&site, "post", false).unwrap();
        assert_eq!(out, "Posts (1):\n  2024-03-01 - Alpha [a]\n");
    }

    #[test]
    fn test_list_posts_json() {
        let (_tmp, site) = site();
        let out = listing(&site, "posts", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["slug"], "a");
        assert_eq!(value[0]["title"], "Alpha");
        assert_eq!(value[0]["extra"]["tags"], "x");
        assert_eq!(value[0]["body"], "\nbody");
    }

    #[test]
    fn test_list_menu() {
        let (_tmp, site) = site();
        assert_eq!(
            listing(&site, "menu", false).unwrap(),
            "Menu (1):\n  About -> about\n"
        );
        let out = listing(&site, "menu", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["title"], "About");
    }

    #[test]
    fn test_list_unknown_type() {
        let (_tmp, site) = site();
        assert!(listing(&site, "tags", false).is_err());
    }
}

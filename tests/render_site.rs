use std::fs;
use std::path::Path;
use std::sync::Arc;

use storefront::cli::{read_seed, render_page};
use storefront::{DirectoryFetcher, SiteConfig};

const INDEX: &str = r#"<!DOCTYPE html>
<html><head><title>Shop</title></head><body>
<div id="inject-header"></div>
<input id="header-search-input"><div id="header-search-results"></div>
<div id="main-content"><h1>Welcome</h1></div>
</body></html>"#;

const FEED: &str = r#"{
    "best_seller": [{"title": "Atomic Habits", "author": "James Clear", "img": "/img/atomic.jpg", "link": "/a", "desc": "Tiny changes, remarkable results"}],
    "books": [{"name": "Deep Work", "writer": "Cal Newport", "href": "/b"}],
    "updated": "2024-01-01"
}"#;

fn write(root: &Path, path: &str, contents: &str) {
    let file = root.join(path);
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, contents).unwrap();
}

fn site() -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    write(root.path(), "index.html", INDEX);
    write(root.path(), "data/default.json", FEED);
    write(root.path(), "_includes/header.html", "<nav>Shop nav</nav>");
    root
}

#[test]
fn renders_home_page_from_a_site_directory() {
    let root = site();
    let fetcher = Arc::new(DirectoryFetcher::new(root.path()));

    let html = render_page(
        SiteConfig::default(),
        &root.path().join("index.html"),
        "/index.html",
        fetcher,
        Vec::new(),
        &[String::from("newport")],
    )
    .unwrap();

    let best_seller = html.find("home-section-best-seller").unwrap();
    let books = html.find("home-section-books").unwrap();
    let welcome = html.find("<h1>Welcome</h1>").unwrap();
    assert!(best_seller < books && books < welcome);

    assert!(html.contains("<nav>Shop nav</nav>"));
    assert!(html.contains(r#"<div class="desc">Tiny changes, remarkable results</div>"#));
    assert!(html.contains(r#"<a class="result-item" href="/b">"#));
    assert!(html.contains("display: block"));
}

#[test]
fn missing_feed_leaves_page_as_parsed() {
    let root = tempfile::tempdir().unwrap();
    write(root.path(), "index.html", INDEX);
    let fetcher = Arc::new(DirectoryFetcher::new(root.path()));

    let html = render_page(
        SiteConfig::default(),
        &root.path().join("index.html"),
        "/",
        fetcher,
        Vec::new(),
        &[],
    )
    .unwrap();

    assert!(!html.contains("home-sections"));
    assert!(html.contains(r#"<div id="main-content"><h1>Welcome</h1></div>"#));
    assert!(html.contains(r#"<div id="inject-header"></div>"#));
}

#[test]
fn unreadable_page_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let fetcher = Arc::new(DirectoryFetcher::new(root.path()));

    let error = render_page(SiteConfig::default(), &root.path().join("nope.html"), "/", fetcher, Vec::new(), &[])
        .unwrap_err();
    assert!(error.to_string().contains("Failed to read page"));
}

#[test]
fn seed_files_use_the_feed_format() {
    let root = site();
    let seed = read_seed(Some(&root.path().join("data/default.json"))).unwrap();
    assert_eq!(seed.len(), 2);
    assert_eq!(seed[1].title, "Deep Work");
    assert_eq!(seed[1].link, "/b");

    write(root.path(), "bad.json", "\"not a feed\"");
    assert!(read_seed(Some(&root.path().join("bad.json"))).is_err());
    assert!(read_seed(None).unwrap().is_empty());
}

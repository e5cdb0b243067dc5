//! Route lookup by longest matching URL prefix
use radix_map::RadixTree;
use url::Url;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Routes are keyed by their URL string, handlers are plain names here
    let mut routes = RadixTree::new();
    for (route, handler) in &[
        ("https://example.com/", "home"),
        ("https://example.com/blog", "blog index"),
        ("https://example.com/blog/drafts", "drafts"),
        ("https://example.com/about", "about"),
    ] {
        let url = Url::parse(route)?;
        routes.insert(url.as_str().to_string(), *handler);
    }

    let requests = [
        "https://example.com/blog/first-post",
        "https://example.com/blog/drafts/wip",
        "https://example.com/contact",
        "https://other.org/",
    ];

    println!("Routing requests:");
    for request in &requests {
        let url = Url::parse(request)?;
        match routes.longest_prefix(url.as_str()) {
            Some((route, handler)) => println!("  {} → {} ({})", url, handler, route),
            None => println!("  {} → no route", url),
        }
    }

    // Every route that contributes to a request, outermost first
    let url = Url::parse("https://example.com/blog/drafts/wip")?;
    println!("\nRoutes along {}:", url);
    routes.walk_path(url.as_str(), |route, handler| {
        println!("  {} ({})", route, handler);
        false
    });

    Ok(())
}

use content_search_client::{Applied, ContentCollection, ContentOptions, OaeConfig, SurfTransport};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: search_content [keywords] [config.yaml]
    let keywords = std::env::args().nth(1).unwrap_or_else(|| "physics".to_string());
    let config_path = std::env::args().nth(2).map(PathBuf::from);
    let config = OaeConfig::load(config_path.as_deref())?;

    let options = ContentOptions::default().with_keywords(keywords).with_limit(12);
    let mut collection =
        ContentCollection::new(vec![], options, config, Arc::new(SurfTransport::new()));

    println!("Searching {}", collection.url());
    match collection.fetch().await? {
        Applied::Replaced(count) => println!("Found {} content items", count),
        Applied::Discarded(reason) => println!("Request discarded ({})", reason),
    }

    for item in collection.records() {
        println!(
            "  {} [{}]",
            item.display_name().unwrap_or("(untitled)"),
            item.tags().join(", ")
        );
    }
    println!("Tags: {}", collection.tags().join(", "));

    Ok(())
}

//! Catalog driver.
//!
//! Initializes the store in the working directory, creates one author, one
//! magazine and one article, then prints each row fetched back by id.
//! Running it twice against the same store fails on the duplicate author,
//! which is the store's uniqueness rule at work.

use magazine_core::{default_log_level, init_logging, CatalogService, Store};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::current_dir()?.join("logs");
    // Logging is best-effort for the driver; storage errors still surface.
    if let Err(err) = start_logging(&log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let store = Store::default();
    store.initialize()?;
    log::info!(
        "event=driver_start module=cli status=ok store={}",
        store.path().display()
    );

    let catalog = CatalogService::new(store);
    let author = catalog.create_author("Jane Doe")?;
    let magazine = catalog.create_magazine("Tech Weekly", "Technology")?;
    let article = catalog.create_article("AI Revolution", &author, &magazine)?;

    println!("Author: {:?}", catalog.get_author(author.id)?);
    println!("Magazine: {:?}", catalog.get_magazine(magazine.id)?);
    println!("Article: {:?}", catalog.get_article(article.id)?);

    Ok(())
}

fn start_logging(log_dir: &Path) -> Result<(), String> {
    let dir = log_dir
        .to_str()
        .ok_or_else(|| format!("log directory `{}` is not valid UTF-8", log_dir.display()))?;
    init_logging(default_log_level(), dir)
}

//! RSS 2.0 rendering

use crate::domain::{Feed, FeedItem};
use crate::error::{FolioError, Result};
use rss::validation::Validate;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};

const GENERATOR: &str = concat!("folio ", env!("CARGO_PKG_VERSION"));

/// Render a feed as an RSS 2.0 document.
pub fn render_rss(feed: &Feed) -> Result<String> {
    let items: Vec<rss::Item> = feed.items.iter().map(|item| to_rss_item(feed, item)).collect();

    let channel = ChannelBuilder::default()
        .title(feed.title.clone())
        .link(feed.absolute_url("/"))
        .description(feed.description.clone())
        .generator(Some(GENERATOR.to_string()))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| FolioError::Feed(format!("RSS validation failed: {}", e)))?;
    Ok(channel.to_string())
}

fn to_rss_item(feed: &Feed, item: &FeedItem) -> rss::Item {
    let link = feed.absolute_url(&item.link);

    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
        .description(Some(item.description.clone()))
        .pub_date(Some(item.pub_date.to_rfc2822()))
        .build()
}

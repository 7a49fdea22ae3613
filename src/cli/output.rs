//! Output formatting utilities

use crate::application::PostListing;
use crate::domain::TagView;

/// Format a page of posts for display
pub fn format_post_list(listing: &PostListing) -> String {
    if listing.posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for post in &listing.posts {
        output.push_str(&format!(
            "{}  {}  {}\n",
            post.publish_date.format("%Y-%m-%d"),
            post.slug,
            post.title
        ));
    }

    if listing.last > 1 {
        output.push_str(&format!(
            "\nPage {} of {} ({} posts)\n",
            listing.current, listing.last, listing.total
        ));
    }
    if let Some(next) = &listing.next_url {
        output.push_str(&format!("Next: {}\n", next));
    }

    output
}

/// Format tags with their post counts for display.
pub fn format_tag_list(tags: &[(TagView, usize)]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for (tag, count) in tags {
        output.push_str(&format!("{}  {} ({})\n", tag.slug, tag.name, count));
    }

    output
}

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;

use crate::error::{BotError, Result};

const FEED_URL: &str = "https://www.reddit.com/r/cryptocurrency/top.json?limit=1";
const USER_AGENT: &str = "Taggr.link";

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build HTTP client")
});

/// One entry of the subreddit top listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub title: String,
    pub ups: u32,
    pub num_comments: u32,
    pub url: String,
    pub permalink: String,
}

#[derive(Deserialize)]
struct Child {
    data: Post,
}

#[derive(Deserialize)]
struct Listing {
    children: Vec<Child>,
}

#[derive(Deserialize)]
struct FeedResponse {
    data: Listing,
}

/// Fetches the current top post of the feed. Reddit rejects requests without
/// a User-Agent, so one is always sent.
pub async fn fetch_top_post() -> Result<Post> {
    let response = CLIENT
        .get(FEED_URL)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(BotError::Fetch(format!("Reddit returned {}", status)));
    }

    let body = response.text().await?;
    parse_top_post(&body)
}

pub fn parse_top_post(body: &str) -> Result<Post> {
    let feed: FeedResponse = serde_json::from_str(body)
        .map_err(|err| BotError::Parse(format!("couldn't deserialize JSON response: {}", err)))?;

    feed.data
        .children
        .into_iter()
        .next()
        .map(|child| child.data)
        .ok_or_else(|| BotError::Parse("feed contained no posts".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "data": {
            "children": [
                {
                    "data": {
                        "title": "Bitcoin crosses 100k",
                        "ups": 4211,
                        "num_comments": 389,
                        "url": "https://www.reddit.com/r/CryptoCurrency/comments/abc/bitcoin/",
                        "permalink": "/r/CryptoCurrency/comments/abc/bitcoin/"
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn parses_top_entry() {
        let post = parse_top_post(LISTING).unwrap();
        assert_eq!(post.title, "Bitcoin crosses 100k");
        assert_eq!(post.ups, 4211);
        assert_eq!(post.num_comments, 389);
        assert_eq!(post.permalink, "/r/CryptoCurrency/comments/abc/bitcoin/");
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = parse_top_post("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, BotError::Parse(_)));
    }

    #[test]
    fn missing_fields_are_a_parse_error() {
        let err = parse_top_post(r#"{"data":{"children":[{"data":{"title":"x"}}]}}"#).unwrap_err();
        assert!(matches!(err, BotError::Parse(_)));
    }

    #[test]
    fn empty_listing_is_a_parse_error() {
        let err = parse_top_post(r#"{"data":{"children":[]}}"#).unwrap_err();
        assert!(matches!(err, BotError::Parse(_)));
    }
}

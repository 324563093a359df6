use url::Url;

use crate::profile::Profile;
use crate::reddit::Post;

/// Hostname of whoever hosts the destination URL, or an empty string when the
/// URL does not parse.
pub fn publisher_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|host| host.to_string()))
        .unwrap_or_default()
}

fn is_reddit_url(url: &str) -> bool {
    let host = publisher_host(url);
    host == "reddit.com" || host.ends_with(".reddit.com")
}

/// Canonical `https://reddit.com/...` form of a listing permalink. Reddit
/// permalinks carry a leading slash.
pub fn canonical_permalink(permalink: &str) -> String {
    format!("https://reddit.com/{}", permalink.trim_start_matches('/'))
}

/// Link line for the message body: posts hosted on reddit itself get the
/// canonical permalink, external posts keep their URL annotated with the
/// publisher hostname.
pub fn resolve_link(post: &Post) -> String {
    if is_reddit_url(&post.url) {
        return canonical_permalink(&post.permalink);
    }
    let publisher = publisher_host(&post.url);
    if publisher.is_empty() {
        post.url.clone()
    } else {
        format!("{} ({})", post.url, publisher)
    }
}

pub fn format_message(profile: Profile, post: &Post) -> String {
    match profile {
        Profile::Xbot => format!(
            "> {}\n\n{}\n\n`{}` upvotes, `{}` comments\n#Reddit",
            post.title,
            resolve_link(post),
            post.ups,
            post.num_comments
        ),
        Profile::Icbot => {
            let (href, annotation) = if is_reddit_url(&post.url) {
                (canonical_permalink(&post.permalink), String::new())
            } else {
                let publisher = publisher_host(&post.url);
                let annotation = if publisher.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", publisher)
                };
                (post.url.clone(), annotation)
            };
            format!(
                "## [{}]({}){}\nToday's best #CryptoCurrencySubreddit story: `{}` upvotes, [{} comments]({})",
                post.title,
                href,
                annotation,
                post.ups,
                post.num_comments,
                canonical_permalink(&post.permalink)
            )
        }
    }
}

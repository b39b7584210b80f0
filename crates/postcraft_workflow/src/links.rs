//! Canonical blog links inside post text.

use postcraft_core::GeneratedText;
use tracing::debug;

/// Append `\n\nRead more: {url}` unless the post already links to `url`.
///
/// Failed posts are left alone.
///
/// # Examples
///
/// ```
/// use postcraft_core::GeneratedText;
/// use postcraft_workflow::append_read_more;
///
/// let mut post = GeneratedText::generated("New on the blog!");
/// append_read_more(&mut post, "https://example.com/vpn");
/// assert_eq!(post.as_str(), "New on the blog!\n\nRead more: https://example.com/vpn");
///
/// append_read_more(&mut post, "https://example.com/vpn");
/// assert_eq!(post.as_str().matches("Read more").count(), 1);
/// ```
pub fn append_read_more(post: &mut GeneratedText, url: &str) {
    if post.text().is_some_and(|text| !text.contains(url)) {
        debug!(url, "Appending read-more link");
        post.append(&format!("\n\nRead more: {}", url));
    }
}

/// Point a translated post at the French URL.
///
/// When the post does not already contain `french_url`, an occurrence of
/// `english_url` is replaced; failing that a `Lire la suite` line is appended.
/// Failed posts are left alone.
///
/// # Examples
///
/// ```
/// use postcraft_core::GeneratedText;
/// use postcraft_workflow::localize_post_link;
///
/// let mut post = GeneratedText::generated("Lisez : https://example.com/vpn");
/// localize_post_link(&mut post, "https://example.com/vpn", "https://example.com/le-vpn");
/// assert_eq!(post.as_str(), "Lisez : https://example.com/le-vpn");
/// ```
pub fn localize_post_link(post: &mut GeneratedText, english_url: &str, french_url: &str) {
    let GeneratedText::Generated(text) = post else {
        return;
    };
    if text.contains(french_url) {
        return;
    }
    if !english_url.is_empty() && text.contains(english_url) {
        debug!(english_url, french_url, "Replacing English link in translated post");
        *text = text.replace(english_url, french_url);
    } else {
        debug!(french_url, "Appending French read-more link");
        text.push_str(&format!("\n\nLire la suite : {}", french_url));
    }
}

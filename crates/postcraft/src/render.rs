//! Plain-text rendering of workflow values for the terminal.

use postcraft_core::{ContentBundle, Idea, Topic, TopicCatalog, TranslationBundle};
use postcraft_workflow::{Notice, SessionState};
use std::fmt::Write;

const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Topics grouped by category, in catalog order.
pub fn topics(catalog: &TopicCatalog) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        let _ = writeln!(out, "{}:", category);
        for topic in catalog.topics().iter().filter(|t| t.category == category) {
            let _ = writeln!(out, "  {}", topic_line(topic));
        }
    }
    out
}

fn topic_line(topic: &Topic) -> String {
    if topic.keywords.is_empty() {
        topic.title.clone()
    } else {
        format!("{} [{}]", topic.title, topic.keywords.join(", "))
    }
}

/// Ideas with the index `select-idea` expects.
pub fn ideas(ideas: &[Idea]) -> String {
    let mut out = String::new();
    for (index, idea) in ideas.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", index, idea.title);
        let _ = writeln!(out, "    {}", idea.summary);
        let _ = writeln!(out, "    slug: {}", idea.link_tag());
    }
    out
}

/// English post and article.
pub fn content(bundle: &ContentBundle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Topic: {}", bundle.topic_title);
    let _ = writeln!(out, "Idea: {}", bundle.idea_title);
    let _ = writeln!(out, "URL: {}", bundle.full_blog_url);
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "LinkedIn post:\n\n{}", bundle.linkedin_post.as_str());
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "Blog article:\n\n{}", bundle.blog_article.as_str());
    out
}

/// French post and article.
pub fn translation(bundle: &TranslationBundle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "URL: {}", bundle.full_blog_url_fr);
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "Publication LinkedIn :\n\n{}", bundle.linkedin_post_fr.as_str());
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "Article de blog :\n\n{}", bundle.blog_article_fr.as_str());
    out
}

/// Stage and stored artifacts of a session.
pub fn state(token: &str, state: &SessionState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Session: {}", token);
    let _ = writeln!(out, "Stage: {}", state.stage());

    if let Some(topic) = &state.current_topic {
        let _ = writeln!(out, "Topic: {}", topic_line(topic));
    }
    if !state.generated_ideas.is_empty() {
        let _ = writeln!(out, "Ideas:");
        out.push_str(&ideas(&state.generated_ideas));
    }
    if let Some(idea) = &state.current_selected_idea {
        let _ = writeln!(out, "Selected idea: {}", idea.title);
    }
    if let Some(bundle) = &state.last_generated_content {
        let _ = writeln!(out, "{}", rule());
        out.push_str(&content(bundle));
    }
    if let Some(bundle) = &state.translated_content {
        let _ = writeln!(out, "{}", rule());
        out.push_str(&translation(bundle));
    }
    out
}

/// One `warning:` or `error:` line per notice.
pub fn notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| format!("{}\n", notice))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft_core::GeneratedText;

    #[test]
    fn test_topics_grouped_by_category() {
        let catalog = TopicCatalog::bundled().unwrap();
        let text = topics(&catalog);
        for topic in catalog.topics() {
            assert!(text.contains(&topic.title));
        }
        for category in catalog.categories() {
            assert!(text.contains(&format!("{}:", category)));
        }
    }

    #[test]
    fn test_ideas_show_index_and_default_slug() {
        let text = ideas(&[
            Idea::new("First", "One", "first"),
            Idea::new("Second", "Two", " "),
        ]);
        assert!(text.contains("[0] First"));
        assert!(text.contains("[1] Second"));
        assert!(text.contains("slug: my-default-blog-post"));
    }

    #[test]
    fn test_fresh_state() {
        let text = state("abc", &SessionState::default());
        assert!(text.contains("Session: abc"));
        assert!(text.contains("Stage: fresh"));
    }

    #[test]
    fn test_content_shows_sentinel_for_failed_field() {
        let mut bundle = ContentBundle::degraded("myblogname.com", "vpn", "Idea", "Topic");
        bundle.linkedin_post = GeneratedText::generated("Hello LinkedIn");
        let text = content(&bundle);
        assert!(text.contains("Hello LinkedIn"));
        assert!(text.contains("Error: Could not generate English blog article."));
        assert!(text.contains("https://myblogname.com/vpn"));
    }

    #[test]
    fn test_notices_one_per_line() {
        let text = notices(&[Notice::warning("lenient"), Notice::error("missing")]);
        assert_eq!(text, "warning: lenient\nerror: missing\n");
    }
}

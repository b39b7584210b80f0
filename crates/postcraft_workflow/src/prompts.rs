//! Prompt builders for the three generation stages.

use postcraft_core::{ChatMessage, ContentBundle, Idea, Topic};

/// Ask for five post ideas as a raw JSON list.
pub fn ideas_prompt(topic: &Topic) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are an AI assistant that generates creative content ideas."),
        ChatMessage::user(format!(
            r#"Generate 5 distinct LinkedIn post ideas based on the topic: "{title}".
For each idea, provide:
1. A catchy `title` for the potential LinkedIn post.
2. A brief `summary` (1-2 sentences) of what the post would cover.
3. A suggested URL `slug` (3-5 words, lowercase, hyphenated) for a blog post related to this idea.

Format your response as a valid JSON list of objects. Each object must have 'title', 'summary', and 'slug' keys.
Escape every string properly: newlines as \n, tabs as \t, quotes as \". Do not put raw control characters inside string values.

Example:
[
  {{"title": "Unlocking Password Power", "summary": "Discover why strong passwords are your first line of defense against online threats.", "slug": "unlocking-password-power"}},
  {{"title": "Password Myths Debunked", "summary": "Are long passwords always better? We bust common password security myths.", "slug": "password-myths-debunked"}}
]

Respond with ONLY the JSON list. No explanations and no markdown fences around it."#,
            title = topic.title
        )),
    ]
}

/// Ask for a LinkedIn post and a long Markdown article as one JSON object.
pub fn content_prompt(idea: &Idea, blog_url: &str, link_tag: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(
            "VERY IMPORTANT: Your entire response MUST be a single, valid JSON object and NOTHING ELSE. \
             Do not include commentary, notes, or explanations before or after the JSON object. \
             The JSON object must contain exactly two keys: 'linkedin_post' and 'blog_article'.",
        ),
        ChatMessage::user(format!(
            r##"Generate content based on the topic: "{title}" (summary: "{summary}").
The blog post should link to: {url} with slug: {tag}.

Output a single JSON object with two keys:
1. `linkedin_post`: A concise LinkedIn post for the topic, including the link {url}.
2. `blog_article`: A detailed Markdown blog article (approx. 1000 words) for the topic. This must be the full article, not a note.

JSON Example:
{{
  "linkedin_post": "Example LinkedIn post... Read more: {url}",
  "blog_article": "# Example Title\n\nFull Markdown article content..."
}}

Reminder: ONLY the JSON object, starting with {{ and ending with }}. No ```json wrappers.
Ensure all string values are correctly escaped (newlines as \n, quotes as \")."##,
            title = idea.title,
            summary = idea.summary,
            url = blog_url,
            tag = link_tag,
        )),
    ]
}

/// Ask for a French translation of the stored English content.
pub fn translation_prompt(content: &ContentBundle) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(
            "You are an expert translator. Translate the provided texts from English to French. \
             Keep the original markdown formatting of the blog article. Translate the blog link tag \
             into a suitable French slug (lowercase, hyphenated, 3-5 words). Output a single JSON \
             object with keys: 'linkedin_post_fr', 'blog_article_fr', and 'blog_link_tag_fr'.",
        ),
        ChatMessage::user(format!(
            r##"Please translate the following English content to French.

LinkedIn Post (English):
---
{post}
---

Blog Article (English - Markdown):
---
{article}
---

Blog Link Tag (English Slug):
---
{tag}
---

Return a JSON object with 'linkedin_post_fr', 'blog_article_fr', and 'blog_link_tag_fr'.
Example JSON structure:
{{
  "linkedin_post_fr": "Ceci est la version française...",
  "blog_article_fr": "# Titre de l'article en français\n\nContenu en markdown...",
  "blog_link_tag_fr": "mon-article-en-francais"
}}"##,
            post = content.linkedin_post,
            article = content.blog_article,
            tag = content.blog_link_tag,
        )),
    ]
}

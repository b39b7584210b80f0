/// Keys under which the workflow stores session values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum SessionKey {
    /// Selected [`Topic`](postcraft_core::Topic)
    CurrentTopic,
    /// Ideas from the last successful generation
    GeneratedIdeas,
    /// Idea chosen from `generated_ideas`
    CurrentSelectedIdea,
    /// English [`ContentBundle`](postcraft_core::ContentBundle)
    LastGeneratedContent,
    /// French [`TranslationBundle`](postcraft_core::TranslationBundle)
    TranslatedContent,
}

/// Pipeline position derived from which session keys are present.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
pub enum Stage {
    /// Nothing selected yet
    #[strum(to_string = "fresh")]
    Fresh,
    /// A topic is selected
    #[strum(to_string = "topic selected")]
    TopicSelected,
    /// Ideas are available for selection
    #[strum(to_string = "ideas generated")]
    IdeasGenerated,
    /// An idea is selected
    #[strum(to_string = "idea selected")]
    IdeaSelected,
    /// English content is stored
    #[strum(to_string = "content generated")]
    ContentGenerated,
    /// A French translation is attached to the content
    #[strum(to_string = "translated")]
    Translated,
}

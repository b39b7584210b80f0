use derive_builder::Builder;
use derive_getters::Getters;

/// Default domain for canonical blog URLs.
pub const DEFAULT_BLOG_DOMAIN: &str = "myblogname.com";
/// Default model for ideas and content.
pub const DEFAULT_GENERATION_MODEL: &str = "deepseek/deepseek-chat";
/// Default model for translation.
pub const DEFAULT_TRANSLATION_MODEL: &str = "mistralai/mistral-7b-instruct:free";

/// Workflow parameters taken from configuration.
///
/// # Examples
///
/// ```
/// use postcraft_workflow::WorkflowSettings;
///
/// let settings = WorkflowSettings::builder()
///     .blog_domain("blog.example.com")
///     .build()
///     .unwrap();
/// assert_eq!(settings.blog_domain(), "blog.example.com");
/// assert_eq!(settings.generation_model(), "deepseek/deepseek-chat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct WorkflowSettings {
    /// Domain used in `https://{domain}/{slug}`
    #[builder(default = "DEFAULT_BLOG_DOMAIN.to_string()")]
    blog_domain: String,
    /// Model for the ideas and content stages
    #[builder(default = "DEFAULT_GENERATION_MODEL.to_string()")]
    generation_model: String,
    /// Model for the translation stage
    #[builder(default = "DEFAULT_TRANSLATION_MODEL.to_string()")]
    translation_model: String,
}

impl WorkflowSettings {
    /// Creates a new builder for `WorkflowSettings`.
    pub fn builder() -> WorkflowSettingsBuilder {
        WorkflowSettingsBuilder::default()
    }
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            blog_domain: DEFAULT_BLOG_DOMAIN.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            translation_model: DEFAULT_TRANSLATION_MODEL.to_string(),
        }
    }
}

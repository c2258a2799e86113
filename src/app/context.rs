use crate::ports::{FieldResolver, HistorySource, MetadataSource, OverwritePrompt};

/// Application context holding dependencies for command execution.
pub struct AppContext<M, H, F, P>
where
    M: MetadataSource,
    H: HistorySource,
    F: FieldResolver,
    P: OverwritePrompt,
{
    metadata: M,
    history: H,
    resolver: F,
    prompt: P,
}

impl<M, H, F, P> AppContext<M, H, F, P>
where
    M: MetadataSource,
    H: HistorySource,
    F: FieldResolver,
    P: OverwritePrompt,
{
    /// Create a new application context.
    pub fn new(metadata: M, history: H, resolver: F, prompt: P) -> Self {
        Self { metadata, history, resolver, prompt }
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn resolver(&self) -> &F {
        &self.resolver
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }
}

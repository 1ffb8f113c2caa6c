pub mod cache;
pub mod summary;

pub use cache::NarrativeCache;
pub use summary::{
    parse_narrative, render_narrative, summarize, template_narrative, Narrative, NarrativeOutcome,
    NarrativeSwap, Narrator,
};

mod paste_orchestrator;

pub use paste_orchestrator::{PasteOrchestrator, PasteOutcome};

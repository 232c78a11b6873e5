//! The fixed five-record pet corpus the demo retrieves from.
//!
//! The bodies and tags are deliberately hardcoded — the point of the demo is
//! the latency profile of the retrieval calls, not the data.

use crate::document::Document;

/// Build the sample corpus: five pet descriptions, each tagged with a `type`
/// and a `trait`.
pub fn sample_corpus() -> Vec<Document> {
    vec![
        Document::new(
            "Dogs are great companions, known for their loyalty and friendliness.",
            [("type", "dog"), ("trait", "loyalty")],
        ),
        Document::new(
            "Cats are independent pets that often enjoy their own space.",
            [("type", "cat"), ("trait", "independence")],
        ),
        Document::new(
            "Goldfish are popular pets for beginners, requiring relatively simple care.",
            [("type", "fish"), ("trait", "low maintenance")],
        ),
        Document::new(
            "Parrots are intelligent birds capable of mimicking human speech.",
            [("type", "bird"), ("trait", "intelligence")],
        ),
        Document::new(
            "Rabbits are social animals that need plenty of space to hop around.",
            [("type", "rabbit"), ("trait", "social")],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers into one ingestion run.
//
// Rules for this layer:
//   - No driver code here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - No direct file writes (that's Layer 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// The connect → fetch → write → split → write workflow
pub mod ingest_use_case;

// ============================================================
// Layer 3 — Ingestion Stages
// ============================================================
// A run walks these stages in order and never goes back:
//
//   Validating → Connecting → Fetching → PreparingOutput
//     → WritingRaw → Splitting → WritingTrain → WritingTest → Done
//
// A failure in any stage ends the run; the stage is recorded in
// the IngestionFailure so callers know how far it got.

use std::fmt;

/// Position of a run in the pipeline. Runs only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionStage {
    Validating,
    Connecting,
    Fetching,
    PreparingOutput,
    WritingRaw,
    Splitting,
    WritingTrain,
    WritingTest,
    Done,
}

impl fmt::Display for IngestionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IngestionStage::Validating      => "validating configuration",
            IngestionStage::Connecting      => "connecting to the store",
            IngestionStage::Fetching        => "fetching documents",
            IngestionStage::PreparingOutput => "preparing output directories",
            IngestionStage::WritingRaw      => "writing raw data",
            IngestionStage::Splitting       => "splitting train/test",
            IngestionStage::WritingTrain    => "writing train data",
            IngestionStage::WritingTest     => "writing test data",
            IngestionStage::Done            => "done",
        };
        f.write_str(s)
    }
}

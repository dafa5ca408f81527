//! Guided question-and-answer booking entry.
//!
//! A linear script asks for each field in a fixed order and captures one
//! answer per step, verbatim: no validation, no re-prompting on a bad
//! answer. Completing the last step yields an assembled payload for the
//! remote insert pathway. Answers never enter the local booking store; this
//! flow feeds the remote table only.

use log::info;

use crate::backend::remote::BookingPayload;

/// One step of the entry script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStep {
    pub key: &'static str,
    pub question: &'static str,
}

/// Question script, asked in order
pub const ENTRY_STEPS: [EntryStep; 7] = [
    EntryStep {
        key: "pet_name",
        question: "What's your pet's name?",
    },
    EntryStep {
        key: "owner_name",
        question: "Who is the owner?",
    },
    EntryStep {
        key: "owner_phone",
        question: "What's the owner's phone number?",
    },
    EntryStep {
        key: "start_date",
        question: "What is the start date? Say in YYYY-MM-DD format.",
    },
    EntryStep {
        key: "end_date",
        question: "What is the end date? Say in YYYY-MM-DD format.",
    },
    EntryStep {
        key: "pet_type",
        question: "What kind of pet is it? Dog, cat, etc.?",
    },
    EntryStep {
        key: "special_notes",
        question: "Any special instructions?",
    },
];

/// Outcome of recording one answer
#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    /// More questions remain; ask this one next
    NextQuestion(EntryStep),
    /// Script finished; send this payload to the remote pathway
    Complete(BookingPayload),
}

/// State of one walk through the entry script
#[derive(Debug, Clone, Default)]
pub struct GuidedEntrySession {
    answers: Vec<String>,
}

impl GuidedEntrySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The step currently awaiting an answer, None once the script is done
    pub fn current_step(&self) -> Option<EntryStep> {
        ENTRY_STEPS.get(self.answers.len()).copied()
    }

    /// Zero-based index of the current step, for progress display
    pub fn step_index(&self) -> usize {
        self.answers.len().min(ENTRY_STEPS.len() - 1)
    }

    /// Record the answer for the current step and advance.
    ///
    /// The answer is stored as heard, trimmed only; a misheard answer is the
    /// operator's to live with.
    pub fn record_answer(&mut self, answer: &str) -> EntryOutcome {
        self.answers.push(answer.trim().to_string());

        match self.current_step() {
            Some(step) => EntryOutcome::NextQuestion(step),
            None => {
                info!("Guided entry script complete, assembling payload");
                EntryOutcome::Complete(self.assemble_payload())
            }
        }
    }

    fn assemble_payload(&self) -> BookingPayload {
        let answer = |key: &str| -> String {
            ENTRY_STEPS
                .iter()
                .position(|s| s.key == key)
                .and_then(|i| self.answers.get(i))
                .cloned()
                .unwrap_or_default()
        };

        let special_notes = answer("special_notes");

        BookingPayload {
            pet_name: answer("pet_name"),
            owner_name: answer("owner_name"),
            owner_phone: answer("owner_phone"),
            start_date: answer("start_date"),
            end_date: answer("end_date"),
            pet_type: answer("pet_type"),
            special_notes: (!special_notes.is_empty()).then_some(special_notes),
        }
    }
}

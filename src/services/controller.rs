//! Voice form controller
//!
//! Ties the pieces together: owns the draft store, runs every delivered
//! segment through the reducer, and carries out commits and resets. Manual
//! edits and the manual "create" action go through the same controller, so
//! the two writers can never interleave mid-update.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::{
    CategoryEntry, CategoryVocabulary, Draft, Segment, Transaction, TransactionId,
    TransactionType,
};
use crate::storage::DraftStore;

use super::classifier::CategoryClassifier;
use super::commit_gate::{validate_for_commit, CommitRejection};
use super::dates::{ChronoDateFormatter, DateFormatter};
use super::feed::SegmentSlot;
use super::notification::Notification;
use super::reducer::{ReducerOutcome, SegmentReducer};
use super::sink::{IdGenerator, TransactionSink, UuidIdGenerator};

/// What handling one segment did to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentEffect {
    /// The draft was updated (possibly to an identical value)
    Updated,
    /// The draft was committed under this id and the form reset
    Committed(TransactionId),
    /// The draft was discarded and the form reset
    Discarded,
    /// A commit was triggered but the draft failed validation; the merged
    /// draft was kept
    CommitRejected(CommitRejection),
}

/// A manual change to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Type(TransactionType),
    Category(String),
    Amount(String),
    /// Raw date input, normalized before it is stored
    Date(String),
}

/// Drives the transaction form from speech segments and manual input
pub struct VoiceFormController<S> {
    store: DraftStore,
    reducer: SegmentReducer,
    vocabulary: CategoryVocabulary,
    sink: S,
    ids: Box<dyn IdGenerator>,
    transcript: String,
    notification: Option<Notification>,
    notification_duration: Duration,
}

impl<S: TransactionSink> VoiceFormController<S> {
    /// Create a controller with random ids and a two second confirmation
    pub fn new(
        vocabulary: CategoryVocabulary,
        formatter: Box<dyn DateFormatter>,
        sink: S,
    ) -> Self {
        Self {
            store: DraftStore::new(formatter),
            reducer: SegmentReducer::new(CategoryClassifier::new(&vocabulary)),
            vocabulary,
            sink,
            ids: Box::new(UuidIdGenerator),
            transcript: String::new(),
            notification: None,
            notification_duration: Duration::from_secs(2),
        }
    }

    /// Create a controller configured from user settings
    pub fn from_settings(settings: &Settings, sink: S) -> LedgerResult<Self> {
        settings.validate()?;
        let vocabulary = settings.vocabulary()?;
        let formatter = ChronoDateFormatter::new(settings.date_format.clone());
        Ok(Self::new(vocabulary, Box::new(formatter), sink)
            .with_notification_duration(Duration::from_secs(settings.notification_secs)))
    }

    /// Use a different id source
    pub fn with_ids(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }

    /// The live draft
    pub fn draft(&self) -> &Draft {
        self.store.current()
    }

    /// Words of the most recent segment
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }

    /// Category options for the draft's current type
    pub fn category_options(&self) -> &[CategoryEntry] {
        self.vocabulary.options_for(self.store.current().kind)
    }

    /// The commit confirmation, while it is still visible
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| !n.is_expired())
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Process one delivered segment to completion
    pub fn handle_segment(&mut self, segment: &Segment) -> SegmentEffect {
        self.transcript = segment.transcript();
        debug!(
            intent = %segment.intent,
            is_final = segment.is_final,
            entities = segment.entities.len(),
            "handling segment"
        );

        match self.reducer.reduce(self.store.current(), segment) {
            ReducerOutcome::Continue(draft) => {
                self.store.replace(draft);
                SegmentEffect::Updated
            }
            ReducerOutcome::Reset => {
                debug!("draft discarded");
                self.store.reset();
                SegmentEffect::Discarded
            }
            ReducerOutcome::Commit(draft) => match self.commit(draft.clone()) {
                Ok(id) => SegmentEffect::Committed(id),
                Err(rejection) => {
                    self.store.replace(draft);
                    SegmentEffect::CommitRejected(rejection)
                }
            },
        }
    }

    /// Process the pending segment in `slot`, if any
    pub fn pump(&mut self, slot: &mut SegmentSlot) -> Option<SegmentEffect> {
        slot.take().map(|segment| self.handle_segment(&segment))
    }

    /// Apply a manual field edit
    pub fn edit(&mut self, edit: FieldEdit) {
        let mut draft = self.store.current().clone();
        match edit {
            FieldEdit::Type(kind) => draft.kind = kind,
            FieldEdit::Category(category) => draft.category = category,
            FieldEdit::Amount(amount) => draft.amount = amount,
            FieldEdit::Date(raw) => draft.date = self.store.format_date(&raw),
        }
        self.store.replace(draft);
    }

    /// The manual "create" action
    ///
    /// On rejection the draft is left exactly as it was.
    pub fn create(&mut self) -> Result<TransactionId, CommitRejection> {
        let draft = self.store.current().clone();
        self.commit(draft)
    }

    fn commit(&mut self, draft: Draft) -> Result<TransactionId, CommitRejection> {
        if let Err(rejection) = validate_for_commit(&draft) {
            debug!(%rejection, "commit rejected");
            return Err(rejection);
        }

        let id = self.ids.new_id();
        let transaction = Transaction::from_draft(draft, id);
        let kind = transaction.kind;
        let category = transaction.category.clone();

        self.store.reset();

        match self.sink.record(transaction) {
            Ok(()) => {
                info!(id = %id, kind = %kind, category = %category, "transaction committed");
                self.notification = Some(Notification::created(self.notification_duration));
            }
            Err(e) => warn!(id = %id, error = %e, "failed to record transaction"),
        }

        Ok(id)
    }
}

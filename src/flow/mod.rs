//! The three user-facing workflows: append an entry, create a collection and
//! visualise a collection.
//!
//! A `FlowController` never prints errors or exits on its own. Every flow
//! returns either an [`Outcome`] or the first error it hit, and the caller
//! decides what happens next.
pub mod questions;

use crate::codec::{self, Clock};
use crate::error::{Result, ValidationError};
use crate::storage::CollectionStore;
use crate::types::{EntryKind, EntryResponse};
use crate::ui::{Presenter, Prompter};
use crate::validators::{validate_entry_response, validate_new_collection_name};
use questions::{Visualisation, COLLECTION, MESSAGE, TYPE, VISTYPE};
use std::fmt;
use tracing::{debug, info, warn};

/// Which workflow to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flow {
    #[default]
    Append,
    Visualise,
    Create,
}

/// What a successful flow did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Appended { collection: String, kind: EntryKind },
    Created { collection: String },
    Visualised { collection: String, entries: usize },
    NothingToVisualise,
}

impl Outcome {
    /// The message shown before the process exits.
    pub fn farewell(&self) -> &'static str {
        match self {
            Outcome::Appended { .. } => "Entry Appended To Log",
            Outcome::Created { .. } => "Signal collection created :>",
            Outcome::Visualised { .. } | Outcome::NothingToVisualise => "Goodbye! :>",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Appended { collection, kind } => {
                write!(f, "appended {kind} to '{collection}'")
            }
            Outcome::Created { collection } => write!(f, "created '{collection}'"),
            Outcome::Visualised {
                collection,
                entries,
            } => write!(f, "showed {entries} entries of '{collection}'"),
            Outcome::NothingToVisualise => f.write_str("no collection to show"),
        }
    }
}

const NO_COLLECTIONS: &str = "You do not have any signal collections.";

pub struct FlowController<S, P, R, C> {
    store: S,
    prompter: P,
    presenter: R,
    clock: C,
}

impl<S, P, R, C> FlowController<S, P, R, C>
where
    S: CollectionStore,
    P: Prompter,
    R: Presenter,
    C: Clock,
{
    pub fn new(store: S, prompter: P, presenter: R, clock: C) -> Self {
        Self {
            store,
            prompter,
            presenter,
            clock,
        }
    }

    pub fn presenter(&self) -> &R {
        &self.presenter
    }

    pub async fn run(&self, flow: Flow) -> Result<Outcome> {
        debug!("Running {:?} flow", flow);
        match flow {
            Flow::Append => self.append().await,
            Flow::Visualise => self.visualise().await,
            Flow::Create => self.create().await,
        }
    }

    /// Appends one entry to a collection chosen by the user.
    ///
    /// When no collection exists yet, the user is walked through creating one
    /// first. Each round either creates a collection or fails, so the loop
    /// ends.
    pub async fn append(&self) -> Result<Outcome> {
        let mut collections = self.store.list_collections().await?;
        while collections.is_empty() {
            self.presenter.notice(NO_COLLECTIONS);
            self.create().await?;
            collections = self.store.list_collections().await?;
        }

        let mut answers = self
            .prompter
            .ask(&questions::append_questions(&collections))
            .await?;
        let response = EntryResponse {
            collection: answers.take(COLLECTION)?,
            kind: answers.take(TYPE)?,
            message: answers.take(MESSAGE)?,
        };

        rejected(validate_entry_response(&response))?;
        if !collections.contains(&response.collection) {
            return rejected(Err(ValidationError::UnknownCollection(response.collection)));
        }
        let kind = match response.kind.parse::<EntryKind>() {
            Ok(kind) => kind,
            Err(other) => return rejected(Err(ValidationError::UnknownKind(other))),
        };

        let line = codec::encode(kind, &response.message, &self.clock);
        self.store.append_entry(&response.collection, &line).await?;

        info!("Appended {} to collection '{}'", kind, response.collection);
        Ok(Outcome::Appended {
            collection: response.collection,
            kind,
        })
    }

    /// Creates a new, empty collection named by the user.
    pub async fn create(&self) -> Result<Outcome> {
        let mut answers = self.prompter.ask(&questions::creation_questions()).await?;
        let candidate = answers.take(COLLECTION)?;

        let existing = self.store.list_collections().await?;
        let name = rejected(validate_new_collection_name(&candidate, &existing))?;

        self.store.create_collection(&name).await?;

        info!("Created collection '{}'", name);
        Ok(Outcome::Created { collection: name })
    }

    /// Shows every entry of a collection chosen by the user.
    pub async fn visualise(&self) -> Result<Outcome> {
        let collections = self.store.list_collections().await?;
        if collections.is_empty() {
            self.presenter
                .notice(&format!("{NO_COLLECTIONS} Create one with --create."));
            return Ok(Outcome::NothingToVisualise);
        }

        let mut answers = self
            .prompter
            .ask(&questions::visualisation_questions(&collections))
            .await?;
        let collection = answers.take(COLLECTION)?;
        let vistype = answers.take(VISTYPE)?;

        if !collections.contains(&collection) {
            return rejected(Err(ValidationError::UnknownCollection(collection)));
        }
        let visualisation = match Visualisation::from_label(&vistype) {
            Some(visualisation) => visualisation,
            None => return rejected(Err(ValidationError::UnknownVisualisation(vistype))),
        };

        let blob = self.store.read_collection(&collection).await?;
        let entries = codec::decode(&blob)?;

        match visualisation {
            Visualisation::Log => self.presenter.entries(&entries),
        }

        debug!(
            "Visualised {} entries of collection '{}'",
            entries.len(),
            collection
        );
        Ok(Outcome::Visualised {
            collection,
            entries: entries.len(),
        })
    }
}

fn rejected<T>(result: std::result::Result<T, ValidationError>) -> Result<T> {
    result.map_err(|e| {
        warn!("Rejected input: {}", e);
        e.into()
    })
}

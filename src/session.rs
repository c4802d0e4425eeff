//! Server-side capture sessions.
//!
//! A session binds one captured image to its (eventual) tone analysis. The
//! lifecycle is small and strict: create on capture, classify fills the
//! analysis, retake replaces the image and clears any stale analysis, delete
//! drops everything. Sessions live only in memory.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::capture::{CaptureSource, CapturedImage};
use crate::error::{Error, Result};
use crate::models::ToneClassification;

/// One capture session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Session id, generated on creation.
    pub id: Uuid,
    /// Creation time, UTC.
    pub created_at: DateTime<Utc>,
    /// The image currently under analysis.
    pub image: CapturedImage,
    /// Classification result, once one has succeeded.
    pub analysis: Option<ToneClassification>,
    /// Capture generation, bumped on every retake. Identifies which capture
    /// an in-flight classification belongs to.
    pub generation: u64,
}

/// Wire representation of a session.
///
/// Field names follow the established client contract, camelCase included.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    /// Session id.
    pub id: Uuid,
    /// Creation time, UTC.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// The current image as a data URL.
    #[serde(rename = "capturedImage")]
    pub captured_image: String,
    /// Where the image came from.
    pub source: CaptureSource,
    /// Analysis result, `null` until classification succeeds.
    #[serde(rename = "skinAnalysis")]
    pub skin_analysis: Option<ToneClassification>,
}

impl SessionContext {
    fn new(image: CapturedImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            image,
            analysis: None,
            generation: 0,
        }
    }

    /// Builds the wire representation of this session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            created_at: self.created_at,
            captured_image: self.image.to_data_url(),
            source: self.image.source,
            skin_analysis: self.analysis.clone(),
        }
    }
}

/// In-memory session store, shared across request handlers.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionContext>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session around a captured image and returns its snapshot.
    pub fn create(&self, image: CapturedImage) -> SessionSnapshot {
        let session = SessionContext::new(image);
        let snapshot = session.snapshot();
        self.sessions.write().unwrap().insert(session.id, session);
        snapshot
    }

    /// Looks up a session snapshot by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionNotFound`] when no session has this id.
    pub fn get(&self, id: Uuid) -> Result<SessionSnapshot> {
        self.sessions
            .read()
            .unwrap()
            .get(&id)
            .map(SessionContext::snapshot)
            .ok_or_else(|| Error::SessionNotFound { id: id.to_string() })
    }

    /// Returns a clone of the session's current image and its capture
    /// generation.
    ///
    /// The generation must be handed back to [`SessionStore::set_analysis`]
    /// so that a result computed for a superseded capture can be discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionNotFound`] when no session has this id.
    pub fn capture(&self, id: Uuid) -> Result<(CapturedImage, u64)> {
        self.sessions
            .read()
            .unwrap()
            .get(&id)
            .map(|session| (session.image.clone(), session.generation))
            .ok_or_else(|| Error::SessionNotFound { id: id.to_string() })
    }

    /// Stores a successful classification on the session.
    ///
    /// The result is attached only when `generation` still matches the
    /// session's current capture. A retake that happened while the
    /// classification was in flight supersedes it: the stale result is
    /// discarded and the snapshot is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionNotFound`] when no session has this id.
    pub fn set_analysis(
        &self,
        id: Uuid,
        generation: u64,
        analysis: ToneClassification,
    ) -> Result<SessionSnapshot> {
        let mut sessions = self.sessions.write().unwrap();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::SessionNotFound { id: id.to_string() })?;
        if session.generation == generation {
            session.analysis = Some(analysis);
        }
        Ok(session.snapshot())
    }

    /// Replaces the session's image and clears any previous analysis.
    ///
    /// A retake invalidates the old result, including any classification
    /// still in flight for the replaced image; the new image must be
    /// classified again before the session carries an analysis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionNotFound`] when no session has this id.
    pub fn retake(&self, id: Uuid, image: CapturedImage) -> Result<SessionSnapshot> {
        let mut sessions = self.sessions.write().unwrap();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::SessionNotFound { id: id.to_string() })?;
        session.image = image;
        session.analysis = None;
        session.generation += 1;
        Ok(session.snapshot())
    }

    /// Removes a session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionNotFound`] when no session has this id.
    pub fn clear(&self, id: Uuid) -> Result<()> {
        self.sessions
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::SessionNotFound { id: id.to_string() })
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    /// Whether the store holds no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

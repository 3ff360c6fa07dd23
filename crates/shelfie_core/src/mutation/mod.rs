//! Optimistic mutation controller: patch-first writes with rollback.
//!
//! # Responsibility
//! - Merge a local patch into every list currently holding the target item,
//!   then issue the remote call.
//! - On failure, restore each patched row from its snapshot and surface the
//!   fetch error to the caller.
//!
//! # Invariants
//! - At most one in-flight mutation per `(item id, kind)` pair; a second
//!   attempt while the first is pending is rejected without touching any
//!   list.
//! - Rollback restores rows in place; row positions are not reordered by a
//!   failed mutation.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

use serde_json::Value;

use crate::gateway::{FetchError, GatewayResult};
use crate::model::book::{Book, HasReadBook};
use crate::model::social::{FeedEntry, UserSummary};

/// Collection items addressable by the controller.
pub trait Identifiable {
    fn item_id(&self) -> i64;
}

impl Identifiable for Book {
    fn item_id(&self) -> i64 {
        self.id
    }
}

impl Identifiable for UserSummary {
    fn item_id(&self) -> i64 {
        self.user_id
    }
}

impl Identifiable for HasReadBook {
    fn item_id(&self) -> i64 {
        self.book_id
    }
}

impl Identifiable for FeedEntry {
    fn item_id(&self) -> i64 {
        self.hasread_id
    }
}

/// The write being attempted, used to key the pending guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MutationKind {
    Follow,
    Unfollow,
    Star,
    Unstar,
    MarkAsRead,
    EditReview,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Follow => "follow",
            Self::Unfollow => "unfollow",
            Self::Star => "star",
            Self::Unstar => "unstar",
            Self::MarkAsRead => "mark-as-read",
            Self::EditReview => "edit-review",
        }
    }
}

/// Why a mutation did not commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationFailure {
    /// The same `(item id, kind)` pair already has a call in flight.
    AlreadyPending,
    /// The remote call failed; the local patch has been rolled back.
    Fetch(FetchError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationError {
    pub item_id: i64,
    pub kind: MutationKind,
    pub reason: MutationFailure,
}

impl Display for MutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            MutationFailure::AlreadyPending => write!(
                f,
                "{} mutation for item {} is already in flight",
                self.kind.as_str(),
                self.item_id
            ),
            MutationFailure::Fetch(err) => write!(
                f,
                "{} mutation for item {} rolled back: {}",
                self.kind.as_str(),
                self.item_id,
                err
            ),
        }
    }
}

impl Error for MutationError {}

/// Saved rows for one in-flight mutation, addressed by list and row index.
struct Snapshot<T> {
    rows: Vec<(usize, usize, T)>,
}

/// Tracks in-flight optimistic writes and drives the patch/call/settle
/// cycle.
#[derive(Debug, Default)]
pub struct MutationController {
    pending: BTreeSet<(i64, MutationKind)>,
}

impl MutationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self, item_id: i64, kind: MutationKind) -> bool {
        self.pending.contains(&(item_id, kind))
    }

    /// Applies `patch` to every occurrence of the item, runs `call`, and
    /// either commits or rolls the patch back depending on the outcome.
    pub fn apply<T, P, C>(
        &mut self,
        item_id: i64,
        kind: MutationKind,
        lists: &mut [&mut Vec<T>],
        patch: P,
        call: C,
    ) -> Result<(), MutationError>
    where
        T: Identifiable + Clone,
        P: Fn(&mut T),
        C: FnOnce() -> GatewayResult<Value>,
    {
        if !self.pending.insert((item_id, kind)) {
            return Err(MutationError {
                item_id,
                kind,
                reason: MutationFailure::AlreadyPending,
            });
        }

        let snapshot = patch_lists(item_id, lists, &patch);
        let outcome = call();
        self.pending.remove(&(item_id, kind));

        match outcome {
            Ok(_) => Ok(()),
            Err(err) => {
                restore(lists, snapshot);
                Err(MutationError {
                    item_id,
                    kind,
                    reason: MutationFailure::Fetch(err),
                })
            }
        }
    }
}

fn patch_lists<T, P>(item_id: i64, lists: &mut [&mut Vec<T>], patch: &P) -> Snapshot<T>
where
    T: Identifiable + Clone,
    P: Fn(&mut T),
{
    let mut rows = Vec::new();
    for (list_idx, list) in lists.iter_mut().enumerate() {
        for (row_idx, row) in list.iter_mut().enumerate() {
            if row.item_id() == item_id {
                rows.push((list_idx, row_idx, row.clone()));
                patch(row);
            }
        }
    }
    Snapshot { rows }
}

fn restore<T>(lists: &mut [&mut Vec<T>], snapshot: Snapshot<T>) {
    for (list_idx, row_idx, saved) in snapshot.rows {
        if let Some(row) = lists
            .get_mut(list_idx)
            .and_then(|list| list.get_mut(row_idx))
        {
            *row = saved;
        }
    }
}

//! The list synchronizer: keeps the rendered view consistent with the store.
//!
//! # Design
//! [`ListSync`] is the single source of truth for what the user currently
//! sees. It owns the view, the (at most one) edit session, the pending
//! delete confirmation, and the last-modified timestamp, and mutates the
//! view only from confirmed server responses — with one exception: a toggle
//! flips the checkbox optimistically and reverts it exactly if the store
//! refuses.
//!
//! Every mutating operation takes `&mut self`, so mutations are serialized
//! by construction; two in-flight requests for the same item cannot exist.
//! Validation runs before any request is built — invalid input never costs
//! a round-trip. Load failures are logged and keep the last-known-good
//! view.

use chrono::{DateTime, Utc};

use crate::client::ItemClient;
use crate::error::SyncError;
use crate::http::Transport;
use crate::types::{CreateItem, Item, ItemId, RenameItem};
use crate::validate::validate_name;

/// An in-progress rename. At most one exists; beginning a new edit replaces
/// any open session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    item_id: ItemId,
    original_name: String,
    pending_name: String,
}

impl EditSession {
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    /// The name the item had when the session opened.
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// The name that will be sent on save.
    pub fn pending_name(&self) -> &str {
        &self.pending_name
    }
}

/// The per-item rendering contract with the presentation layer: a checkbox,
/// a name display, and edit/delete affordances bound to the synchronizer's
/// commands by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRow<'a> {
    pub id: ItemId,
    pub name: &'a str,
    pub checked: bool,
}

/// Mediates between the local view and the remote store.
#[derive(Debug)]
pub struct ListSync {
    client: ItemClient,
    view: Vec<Item>,
    last_modified: Option<DateTime<Utc>>,
    edit: Option<EditSession>,
    pending_delete: Option<ItemId>,
}

impl ListSync {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: ItemClient::new(base_url),
            view: Vec::new(),
            last_modified: None,
            edit: None,
            pending_delete: None,
        }
    }

    /// Items currently rendered, in server-provided order.
    pub fn items(&self) -> &[Item] {
        &self.view
    }

    /// Maximum `updated_at` over known items, or the timestamp of the most
    /// recent confirmed mutation.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    /// Last-modified timestamp formatted for the "last updated" display.
    pub fn last_modified_label(&self) -> Option<String> {
        self.last_modified
            .map(|ts| ts.format("%Y/%m/%d %H:%M").to_string())
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Id armed for deletion, awaiting confirmation.
    pub fn pending_delete(&self) -> Option<ItemId> {
        self.pending_delete
    }

    /// Render-model rows for the presentation layer.
    pub fn rows(&self) -> impl Iterator<Item = ItemRow<'_>> {
        self.view.iter().map(|item| ItemRow {
            id: item.id,
            name: &item.name,
            checked: item.is_completed,
        })
    }

    /// Replace the whole view with the store's current collection.
    ///
    /// On success the last-modified timestamp is recomputed as the maximum
    /// `updated_at` of the returned items (left unchanged when the store is
    /// empty). On failure the view keeps its previous state and the error
    /// is logged; callers may ignore the returned error, load is safe to
    /// repeat.
    pub fn load(&mut self, transport: &mut dyn Transport) -> Result<(), SyncError> {
        let request = self.client.build_list_items();
        let items = transport
            .execute(&request)
            .and_then(|response| self.client.parse_list_items(response));
        let items = match items {
            Ok(items) => items,
            Err(err) => {
                log::warn!("load failed, keeping previous view: {err}");
                return Err(err);
            }
        };
        if let Some(max) = items.iter().map(|item| item.updated_at).max() {
            self.last_modified = Some(max);
        }
        self.view = items;
        Ok(())
    }

    /// Create an item. The name is validated locally first; validation
    /// failures never reach the network. There is no optimistic insert —
    /// the item appears only once the store confirms it.
    pub fn create(
        &mut self,
        transport: &mut dyn Transport,
        name: &str,
    ) -> Result<&Item, SyncError> {
        let name = validate_name(name)?;
        let request = self.client.build_create_item(&CreateItem { name })?;
        let response = transport.execute(&request)?;
        let item = self.client.parse_create_item(response)?;
        self.touch(item.updated_at);
        self.view.push(item);
        Ok(&self.view[self.view.len() - 1])
    }

    /// Toggle an item's completion flag.
    ///
    /// The flag flips immediately (the checkbox must not lag the click) and
    /// is provisional until the store answers: a success overwrites the row
    /// with the authoritative server item, a failure reverts the flag to
    /// its pre-toggle value.
    pub fn toggle(
        &mut self,
        transport: &mut dyn Transport,
        id: ItemId,
    ) -> Result<&Item, SyncError> {
        let pos = self.position(id)?;
        self.view[pos].is_completed = !self.view[pos].is_completed;
        let request = self.client.build_toggle_item(id);
        match transport
            .execute(&request)
            .and_then(|response| self.client.parse_toggle_item(response))
        {
            Ok(item) => {
                self.touch(item.updated_at);
                self.view[pos] = item;
                Ok(&self.view[pos])
            }
            Err(err) => {
                self.view[pos].is_completed = !self.view[pos].is_completed;
                Err(err)
            }
        }
    }

    /// Rename an item. Same validation as [`ListSync::create`]; the
    /// displayed name changes only once the store confirms.
    pub fn rename(
        &mut self,
        transport: &mut dyn Transport,
        id: ItemId,
        new_name: &str,
    ) -> Result<&Item, SyncError> {
        let pos = self.position(id)?;
        let name = validate_name(new_name)?;
        let request = self.client.build_rename_item(id, &RenameItem { name })?;
        let response = transport.execute(&request)?;
        let item = self.client.parse_rename_item(response)?;
        self.touch(item.updated_at);
        self.view[pos] = item;
        Ok(&self.view[pos])
    }

    /// Open an edit session for `id`, capturing its current name. Replaces
    /// any session already open.
    pub fn begin_edit(&mut self, id: ItemId) -> Result<(), SyncError> {
        let pos = self.position(id)?;
        let name = self.view[pos].name.clone();
        self.edit = Some(EditSession {
            item_id: id,
            original_name: name.clone(),
            pending_name: name,
        });
        Ok(())
    }

    /// Update the name the open session will send on save. No-op when no
    /// session is open.
    pub fn set_pending_name(&mut self, name: &str) {
        if let Some(session) = &mut self.edit {
            session.pending_name = name.to_string();
        }
    }

    /// Discard the open session without contacting the store.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Attempt the rename held by the open session. The session closes only
    /// on success; on failure it stays open so the user can retry. A save
    /// with no session open is a no-op.
    pub fn save_edit(&mut self, transport: &mut dyn Transport) -> Result<(), SyncError> {
        let (id, pending) = match &self.edit {
            Some(session) => (session.item_id, session.pending_name.clone()),
            None => return Ok(()),
        };
        self.rename(transport, id, &pending)?;
        self.edit = None;
        Ok(())
    }

    /// Arm deletion of `id`. No request is sent until
    /// [`ListSync::confirm_delete`]; [`ListSync::decline_delete`] disarms.
    pub fn request_delete(&mut self, id: ItemId) -> Result<(), SyncError> {
        self.position(id)?;
        self.pending_delete = Some(id);
        Ok(())
    }

    /// Disarm a pending delete without contacting the store.
    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Send the armed delete. On success the whole list is reloaded so the
    /// last-modified display reflects the remaining items' true maximum
    /// (a reload failure at that point keeps the last-known-good view, as
    /// [`ListSync::load`] specifies). On failure the item remains in the
    /// view. A confirm with nothing armed is a no-op.
    pub fn confirm_delete(&mut self, transport: &mut dyn Transport) -> Result<(), SyncError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };
        let request = self.client.build_delete_item(id);
        let response = transport.execute(&request)?;
        self.client.parse_delete_item(response)?;
        let _ = self.load(transport);
        Ok(())
    }

    fn position(&self, id: ItemId) -> Result<usize, SyncError> {
        self.view
            .iter()
            .position(|item| item.id == id)
            .ok_or(SyncError::UnknownItem(id))
    }

    fn touch(&mut self, ts: DateTime<Utc>) {
        self.last_modified = Some(match self.last_modified {
            Some(current) => current.max(ts),
            None => ts,
        });
    }
}

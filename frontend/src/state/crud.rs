use std::future::Future;

use leptos::*;

use crate::{
    api::{ApiError, MutationResponse},
    state::list_store::ListStore,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
        self.success = None;
    }
}

/// Save/delete actions of an editable list, wired so that every successful
/// mutation closes the editor and reloads the list.
pub struct CrudControls<P: 'static> {
    pub save: Action<(Option<i64>, P), Result<MutationResponse, ApiError>>,
    pub delete: Action<i64, Result<MutationResponse, ApiError>>,
    pub messages: RwSignal<MessageState>,
    pub editor_open: RwSignal<bool>,
    /// Record under edit; `None` while creating.
    pub editing: RwSignal<Option<i64>>,
    pub pending_delete: RwSignal<Option<i64>>,
}

impl<P: 'static> Clone for CrudControls<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: 'static> Copy for CrudControls<P> {}

impl<P: Clone + 'static> CrudControls<P> {
    pub fn open_editor(&self, id: Option<i64>) {
        self.messages.update(MessageState::clear);
        self.editing.set(id);
        self.editor_open.set(true);
    }

    pub fn close_editor(&self) {
        self.editor_open.set(false);
        self.editing.set(None);
    }

    pub fn is_saving(&self) -> Signal<bool> {
        self.save.pending().into()
    }

    pub fn editor_title(&self, noun: &str) -> String {
        match self.editing.get() {
            Some(_) => format!("Edit {}", noun),
            None => format!("New {}", noun),
        }
    }

    /// Saves the record under edit unless a save is already running.
    /// Validation failures are reported without a request.
    pub fn submit(&self, payload: Result<P, ApiError>) {
        if self.save.pending().get_untracked() {
            return;
        }
        match payload {
            Ok(payload) => {
                self.messages.update(MessageState::clear);
                self.save.dispatch((self.editing.get_untracked(), payload));
            }
            Err(err) => self.messages.update(|state| state.set_error(err)),
        }
    }

    pub fn request_delete(&self, id: i64) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(id) = self.pending_delete.get_untracked() {
            self.delete.dispatch(id);
        }
    }
}

pub fn use_crud_controls<T, P, S, SF, D, DF>(
    store: ListStore<T>,
    noun: &'static str,
    save: S,
    delete: D,
) -> CrudControls<P>
where
    T: Clone + 'static,
    P: Clone + 'static,
    S: Fn(Option<i64>, P) -> SF + 'static,
    SF: Future<Output = Result<MutationResponse, ApiError>> + 'static,
    D: Fn(i64) -> DF + 'static,
    DF: Future<Output = Result<MutationResponse, ApiError>> + 'static,
{
    let messages = create_rw_signal(MessageState::default());
    let editor_open = create_rw_signal(false);
    let editing = create_rw_signal(None::<i64>);
    let pending_delete = create_rw_signal(None::<i64>);

    let save_action = create_action(move |input: &(Option<i64>, P)| {
        let (id, payload) = input.clone();
        save(id, payload)
    });
    let delete_action = create_action(move |id: &i64| delete(*id));

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(response) => {
                    messages.update(|state| {
                        state.set_success(
                            response
                                .message
                                .unwrap_or_else(|| format!("{} saved.", noun)),
                        )
                    });
                    editor_open.set(false);
                    editing.set(None);
                    store.reload();
                }
                Err(err) => {
                    log::error!("saving {} failed: {}", noun, err);
                    messages.update(|state| state.set_error(err));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            match result {
                Ok(_) => {
                    messages.update(|state| state.set_success(format!("{} deleted.", noun)));
                    store.reload();
                }
                Err(err) => {
                    log::error!("deleting {} failed: {}", noun, err);
                    messages.update(|state| state.set_error(err));
                }
            }
        }
    });

    CrudControls {
        save: save_action,
        delete: delete_action,
        messages,
        editor_open,
        editing,
        pending_delete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_state_keeps_one_outcome() {
        let mut state = MessageState::default();
        state.set_error(ApiError::validation("Name is required"));
        assert!(state.error.is_some());
        assert!(state.success.is_none());

        state.set_success("Saved");
        assert_eq!(state.success.as_deref(), Some("Saved"));
        assert!(state.error.is_none());

        state.clear();
        assert_eq!(state, MessageState::default());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalid_payload_is_reported_without_dispatch() {
        with_runtime(|| {
            let store = ListStore::new(|| async { Ok(Vec::<i64>::new()) });
            let controls = use_crud_controls(
                store,
                "Role",
                |_id, _payload: String| async { Ok(MutationResponse::default()) },
                |_id| async { Ok(MutationResponse::default()) },
            );
            controls.submit(Err(ApiError::validation("Name is required")));
            let messages = controls.messages.get();
            assert_eq!(
                messages.error.map(|e| e.code),
                Some("VALIDATION_ERROR".to_string())
            );
            assert!(controls.save.value().get().is_none());
        });
    }

    #[test]
    fn editor_tracks_the_record_under_edit() {
        with_runtime(|| {
            let store = ListStore::new(|| async { Ok(Vec::<i64>::new()) });
            let controls = use_crud_controls(
                store,
                "Role",
                |_id, _payload: String| async { Ok(MutationResponse::default()) },
                |_id| async { Ok(MutationResponse::default()) },
            );
            controls.open_editor(Some(3));
            assert!(controls.editor_open.get());
            assert_eq!(controls.editor_title("role"), "Edit role");

            controls.close_editor();
            assert!(!controls.editor_open.get());
            assert_eq!(controls.editor_title("role"), "New role");
        });
    }

    #[test]
    fn delete_requests_can_be_cancelled() {
        with_runtime(|| {
            let store = ListStore::new(|| async { Ok(Vec::<i64>::new()) });
            let controls = use_crud_controls(
                store,
                "Role",
                |_id, _payload: String| async { Ok(MutationResponse::default()) },
                |_id| async { Ok(MutationResponse::default()) },
            );
            controls.request_delete(4);
            assert_eq!(controls.pending_delete.get(), Some(4));
            controls.cancel_delete();
            assert_eq!(controls.pending_delete.get(), None);
        });
    }
}

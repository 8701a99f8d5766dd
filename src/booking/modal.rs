//! Visibility and view state of the booking modal.
//!
//! Delayed work (the post-close reset and the post-success auto-close) is
//! handed out as tickets stamped with the current generation. Every
//! transition bumps the generation, so a timer that fires after the user has
//! moved on carries a stale ticket and is ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalView {
    #[default]
    Form,
    Success,
}

/// Entitles the holder to wipe the form once the close transition is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Entitles the holder to close the modal after the success view was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    visible: bool,
    view: ModalView,
    reset_pending: bool,
    generation: u64,
}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn view(&self) -> ModalView {
        self.view
    }

    /// Background scrolling is suspended exactly while the modal is shown.
    pub fn scroll_locked(&self) -> bool {
        self.visible
    }

    /// Shows the modal. Returns `true` when a reset was still pending from an
    /// earlier close; it is applied now and the caller must wipe the form.
    pub fn open(&mut self) -> bool {
        self.generation += 1;
        self.visible = true;
        if self.reset_pending {
            self.reset_pending = false;
            self.view = ModalView::Form;
            return true;
        }
        false
    }

    /// Hides the modal. Safe to call when already hidden.
    pub fn close(&mut self) -> ResetTicket {
        self.generation += 1;
        self.visible = false;
        self.reset_pending = true;
        ResetTicket(self.generation)
    }

    /// Swaps the form for the success view and hands out the auto-close ticket.
    pub fn show_success(&mut self) -> CloseTicket {
        self.generation += 1;
        self.view = ModalView::Success;
        CloseTicket(self.generation)
    }

    /// Restores the form view. Returns `false` for a superseded ticket, in
    /// which case nothing changed and the form must be left alone.
    pub fn complete_reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.0 != self.generation || !self.reset_pending {
            return false;
        }
        self.reset_pending = false;
        self.view = ModalView::Form;
        true
    }

    /// Closes the modal if `ticket` is still current.
    pub fn auto_close(&mut self, ticket: CloseTicket) -> Option<ResetTicket> {
        if ticket.0 != self.generation || !self.visible {
            return None;
        }
        Some(self.close())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_on_form_view() {
        let modal = ModalState::default();
        assert!(!modal.is_visible());
        assert!(!modal.scroll_locked());
        assert_eq!(modal.view(), ModalView::Form);
    }

    #[test]
    fn open_shows_and_locks_scroll() {
        let mut modal = ModalState::default();
        assert!(!modal.open());
        assert!(modal.is_visible());
        assert!(modal.scroll_locked());
    }

    #[test]
    fn close_unlocks_immediately_and_resets_later() {
        let mut modal = ModalState::default();
        modal.open();
        modal.show_success();

        let ticket = modal.close();
        assert!(!modal.is_visible());
        assert!(!modal.scroll_locked());
        assert_eq!(modal.view(), ModalView::Success);

        assert!(modal.complete_reset(ticket));
        assert_eq!(modal.view(), ModalView::Form);
        assert!(!modal.complete_reset(ticket));
    }

    #[test]
    fn close_when_hidden_is_harmless() {
        let mut modal = ModalState::default();
        let first = modal.close();
        let second = modal.close();
        assert!(!modal.is_visible());
        assert!(!modal.complete_reset(first));
        assert!(modal.complete_reset(second));
        assert_eq!(modal.view(), ModalView::Form);
    }

    #[test]
    fn reopening_flushes_pending_reset_and_voids_ticket() {
        let mut modal = ModalState::default();
        modal.open();
        modal.show_success();
        let ticket = modal.close();

        assert!(modal.open());
        assert_eq!(modal.view(), ModalView::Form);
        assert!(!modal.complete_reset(ticket));
        assert!(modal.is_visible());
    }

    #[test]
    fn auto_close_fires_once_for_current_success() {
        let mut modal = ModalState::default();
        modal.open();
        let close = modal.show_success();

        let reset = modal.auto_close(close).expect("current ticket closes");
        assert!(!modal.is_visible());
        assert!(modal.auto_close(close).is_none());
        assert!(modal.complete_reset(reset));
    }

    #[test]
    fn auto_close_ignored_after_manual_close_and_reopen() {
        let mut modal = ModalState::default();
        modal.open();
        let close = modal.show_success();
        modal.close();
        modal.open();

        assert!(modal.auto_close(close).is_none());
        assert!(modal.is_visible());
    }
}

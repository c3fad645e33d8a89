// Notifications from the picker to its host

use chrono::NaiveDateTime;
use std::sync::mpsc::Sender;

use crate::services::layout::PickerSize;

/// Observer of picker state changes.
///
/// Notifications arrive after the state transition and grid rebuild have
/// completed. Hosts that want to react by mutating the picker do so once the
/// triggering call has returned.
#[cfg_attr(test, mockall::automock)]
pub trait DatePickerListener {
    /// The selected date changed, through a click or a programmatic jump
    fn date_selected(&mut self, date_value: NaiveDateTime);

    /// The natural size changed, usually because the row count did
    fn preferred_size_changed(&mut self, _size: PickerSize) {}
}

/// Notification as a value, for hosts that prefer a channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerEvent {
    DateSelected(NaiveDateTime),
    PreferredSizeChanged(PickerSize),
}

impl DatePickerListener for Sender<PickerEvent> {
    fn date_selected(&mut self, date_value: NaiveDateTime) {
        if self.send(PickerEvent::DateSelected(date_value)).is_err() {
            log::debug!("Picker event receiver dropped, date selection not delivered");
        }
    }

    fn preferred_size_changed(&mut self, size: PickerSize) {
        if self.send(PickerEvent::PreferredSizeChanged(size)).is_err() {
            log::debug!("Picker event receiver dropped, size change not delivered");
        }
    }
}

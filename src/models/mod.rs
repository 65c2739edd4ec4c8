//! Domain models: the calendar event, its recurrence kind, and the
//! validated form used to create or edit one.

pub mod event;
pub mod form;
pub mod recurrence;

pub use event::Event;
pub use form::EventForm;
pub use recurrence::RecurrenceKind;

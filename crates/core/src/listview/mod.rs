//! Generic list pipeline shared by every screen.
//!
//! A screen hands its collection and a [`ViewState`] to [`run`], which
//! filters, stable-sorts, paginates and aggregates in that order and returns a
//! [`PageView`]. [`ListScreen`] owns the collection and replaces its state
//! wholesale on every [`ListAction`].

mod criteria;
mod labels;
mod pagination;
mod pipeline;
mod record;
mod screen;

pub use criteria::{SortDirection, SortPolicy, SortSpec, ViewState};
pub use labels::Labelled;
pub(crate) use labels::labelled_enum;
pub use pagination::{PageMarker, clamp_page, page_after_delete, page_count, page_markers, page_range};
pub use pipeline::{PageView, Totals, aggregate, filter, run, sort};
pub use record::{Choice, FieldValue, PriceRange, Record, RecordField, RecordFilter};
pub use screen::{ListAction, ListScreen};

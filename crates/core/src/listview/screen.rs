//! Screen-level state owner for one record collection.

use tracing::info;

use super::pagination::page_after_delete;
use super::pipeline::{self, PageView};
use super::{Record, SortPolicy, SortSpec, ViewState};

/// A user action on a list screen.
#[derive(Debug, Clone)]
pub enum ListAction<R: Record> {
	/// Replace the search text.
	Search(String),
	/// Replace the categorical/range filter.
	Filter(R::Filter),
	/// Activate a column header.
	Sort(R::Field),
	/// Replace the sort outright, bypassing the header cycle.
	SortBy(Option<SortSpec<R::Field>>),
	/// Jump to a page.
	GoTo(usize),
	Next,
	Prev,
	/// Remove the record with this id from the collection.
	Delete(String),
	/// Restore the criteria the screen started with.
	Reset,
}

/// A record collection together with the criteria selected on its screen.
///
/// Actions consume the screen and return its successor, so every render sees
/// one consistent snapshot. The stored page always matches the page the
/// pipeline would show.
#[derive(Debug, Clone)]
pub struct ListScreen<R: Record> {
	records: Vec<R>,
	state: ViewState<R>,
	initial: ViewState<R>,
	page_size: usize,
	sort_policy: SortPolicy,
	reset_page_on_change: bool,
}

/// An empty collection, used as a placeholder while a screen is replaced.
impl<R: Record> Default for ListScreen<R> {
	fn default() -> Self {
		Self::new(Vec::new(), 1)
	}
}

impl<R: Record> ListScreen<R> {
	/// Create a screen over `records` showing `page_size` rows per page.
	pub fn new(records: Vec<R>, page_size: usize) -> Self {
		debug_assert!(
			{
				let mut ids: Vec<&str> = records.iter().map(Record::id).collect();
				ids.sort_unstable();
				ids.windows(2).all(|pair| pair[0] != pair[1])
			},
			"record ids must be unique within a collection"
		);

		Self {
			records,
			state: ViewState::default(),
			initial: ViewState::default(),
			page_size: page_size.max(1),
			sort_policy: SortPolicy::default(),
			reset_page_on_change: false,
		}
	}

	/// Start from `state`; `Reset` returns here.
	#[must_use]
	pub fn with_initial_state(mut self, state: ViewState<R>) -> Self {
		self.initial = state.clone();
		self.state = state;
		self.normalized()
	}

	#[must_use]
	pub fn with_sort_policy(mut self, policy: SortPolicy) -> Self {
		self.sort_policy = policy;
		self
	}

	/// Jump back to page 1 whenever search, filter or sort change.
	#[must_use]
	pub fn resetting_page_on_change(mut self) -> Self {
		self.reset_page_on_change = true;
		self
	}

	/// Apply one action and return the resulting screen.
	#[must_use]
	pub fn apply(self, action: ListAction<R>) -> Self {
		match action {
			ListAction::Search(search) => {
				let state = self.state.clone().with_search(search);
				self.criteria_changed(state)
			}
			ListAction::Filter(filter) => {
				let state = self.state.clone().with_filter(filter);
				self.criteria_changed(state)
			}
			ListAction::Sort(field) => {
				let sort = self.sort_policy.next(self.state.sort, field);
				let state = self.state.clone().with_sort(sort);
				self.criteria_changed(state)
			}
			ListAction::SortBy(sort) => {
				let state = self.state.clone().with_sort(sort);
				self.criteria_changed(state)
			}
			ListAction::GoTo(page) => {
				let state = self.state.clone().with_page(page);
				self.replace_state(state)
			}
			ListAction::Next => {
				let page = self.state.page.saturating_add(1);
				let state = self.state.clone().with_page(page);
				self.replace_state(state)
			}
			ListAction::Prev => {
				let page = self.state.page.saturating_sub(1);
				let state = self.state.clone().with_page(page);
				self.replace_state(state)
			}
			ListAction::Delete(id) => self.delete(&id),
			ListAction::Reset => {
				let state = self.initial.clone();
				self.replace_state(state)
			}
		}
	}

	/// Run the pipeline for the current criteria.
	pub fn view(&self) -> PageView<'_, R> {
		pipeline::run(&self.records, &self.state, self.page_size)
	}

	pub fn state(&self) -> &ViewState<R> {
		&self.state
	}

	/// The full collection, in seed order.
	pub fn records(&self) -> &[R] {
		&self.records
	}

	pub fn page_size(&self) -> usize {
		self.page_size
	}

	pub fn sort_policy(&self) -> SortPolicy {
		self.sort_policy
	}

	/// Look up a record by id.
	pub fn find(&self, id: &str) -> Option<&R> {
		self.records.iter().find(|record| record.id() == id)
	}

	fn criteria_changed(self, state: ViewState<R>) -> Self {
		let state = if self.reset_page_on_change {
			state.with_page(1)
		} else {
			state
		};
		self.replace_state(state)
	}

	fn replace_state(self, state: ViewState<R>) -> Self {
		Self { state, ..self }.normalized()
	}

	fn delete(self, id: &str) -> Self {
		if self.find(id).is_none() {
			return self;
		}

		let records: Vec<R> = self
			.records
			.iter()
			.filter(|record| record.id() != id)
			.cloned()
			.collect();
		let remaining = pipeline::filter(&records, &self.state).len();
		let page = page_after_delete(self.state.page, remaining, self.page_size);
		info!(id, remaining, page, "record deleted");

		let state = self.state.clone().with_page(page);
		Self {
			records,
			state,
			..self
		}
	}

	fn normalized(mut self) -> Self {
		let page = self.view().page;
		self.state.page = page;
		self
	}
}

//! Filter, sort, paginate, aggregate.

use tracing::debug;

use super::pagination::{clamp_page, page_count, page_markers, page_range};
use super::record::SortKey;
use super::{PageMarker, Record, RecordFilter, SortDirection, SortSpec, ViewState};

/// Sums of a record type's numeric fields over the filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals<F> {
	sums: Vec<(F, f64)>,
}

impl<F: Copy + PartialEq> Totals<F> {
	/// Sum for `field`, or `0.0` when the field is not aggregated.
	pub fn get(&self, field: F) -> f64 {
		self.sums
			.iter()
			.find(|(candidate, _)| *candidate == field)
			.map_or(0.0, |(_, sum)| *sum)
	}

	/// Every aggregated field with its sum, in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (F, f64)> + '_ {
		self.sums.iter().copied()
	}
}

/// What a screen renders: one page of records plus summary figures.
#[derive(Debug, Clone)]
pub struct PageView<'a, R: Record> {
	/// Records on the effective page, in display order.
	pub records: Vec<&'a R>,
	/// Effective page, 1-based, never beyond `total_pages`.
	pub page: usize,
	pub total_pages: usize,
	pub page_size: usize,
	/// Number of records that passed the filter, across all pages.
	pub filtered_count: usize,
	pub totals: Totals<R::Field>,
}

impl<R: Record> PageView<'_, R> {
	/// Whether nothing matched, so the screen shows its empty state.
	pub fn is_empty(&self) -> bool {
		self.filtered_count == 0
	}

	/// Page-number strip for the pager.
	pub fn page_markers(&self) -> Vec<PageMarker> {
		page_markers(self.page, self.total_pages)
	}

	pub fn has_previous(&self) -> bool {
		self.page > 1
	}

	pub fn has_next(&self) -> bool {
		self.page < self.total_pages
	}
}

/// Keep the records matching the search term and the filter, in input order.
pub fn filter<'a, R: Record>(records: &'a [R], state: &ViewState<R>) -> Vec<&'a R> {
	let needle = state.needle();
	records
		.iter()
		.filter(|record| record.matches_search(&needle) && state.filter.matches(record))
		.collect()
}

/// Stable sort by one field. Equal keys keep their relative order.
pub fn sort<R: Record>(records: &mut Vec<&R>, spec: SortSpec<R::Field>) {
	if !spec.is_active() {
		return;
	}

	let mut keyed: Vec<(SortKey, &R)> = records
		.iter()
		.map(|record| (record.field(spec.field).sort_key(), *record))
		.collect();
	keyed.sort_by(|(a, _), (b, _)| match spec.direction {
		SortDirection::Descending => b.cmp(a),
		_ => a.cmp(b),
	});

	records.clear();
	records.extend(keyed.into_iter().map(|(_, record)| record));
}

/// Sum the record type's aggregated fields over `records`.
pub fn aggregate<R: Record>(records: &[&R]) -> Totals<R::Field> {
	let sums = R::SUMMED_FIELDS
		.iter()
		.map(|&field| {
			let sum = records
				.iter()
				.filter_map(|record| record.field(field).as_number())
				.sum();
			(field, sum)
		})
		.collect();
	Totals { sums }
}

/// Run the full pipeline over `records` for the given criteria.
pub fn run<'a, R: Record>(records: &'a [R], state: &ViewState<R>, page_size: usize) -> PageView<'a, R> {
	let page_size = page_size.max(1);

	let mut filtered = filter(records, state);
	if let Some(spec) = state.active_sort() {
		sort(&mut filtered, spec);
	}

	let filtered_count = filtered.len();
	let total_pages = page_count(filtered_count, page_size);
	let page = clamp_page(state.page, total_pages);
	let totals = aggregate(&filtered);

	let range = page_range(page, page_size, filtered_count);
	filtered.truncate(range.end);
	let page_records = filtered.split_off(range.start);

	debug!(
		total = records.len(),
		filtered = filtered_count,
		page,
		total_pages,
		"list pipeline evaluated"
	);

	PageView {
		records: page_records,
		page,
		total_pages,
		page_size,
		filtered_count,
		totals,
	}
}

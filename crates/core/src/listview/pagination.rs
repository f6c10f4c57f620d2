//! Page arithmetic shared by every list screen.

use std::ops::Range;

/// Largest page count shown without collapsing into ellipses.
const FULL_STRIP_LIMIT: usize = 7;
/// Pages shown on either side of the current one in a collapsed strip.
const STRIP_WINDOW: usize = 1;

/// Entry in the page-number strip rendered under a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
	Page(usize),
	Ellipsis,
}

/// Number of pages needed for `len` records, never less than one.
pub fn page_count(len: usize, page_size: usize) -> usize {
	len.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `1..=total`.
pub fn clamp_page(requested: usize, total: usize) -> usize {
	requested.clamp(1, total.max(1))
}

/// Slice bounds of `page` within `len` records.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
	let page_size = page_size.max(1);
	let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
	let end = start.saturating_add(page_size).min(len);
	start..end
}

/// Page to show after a deletion left `remaining` filtered records.
///
/// Stays put when the current page still exists, otherwise falls back to the
/// new last page, and to page 1 when nothing remains.
pub fn page_after_delete(current: usize, remaining: usize, page_size: usize) -> usize {
	clamp_page(current, page_count(remaining, page_size))
}

/// Page-number strip for `current` out of `total` pages.
///
/// Up to seven pages are listed in full. Longer strips keep the first and
/// last page plus a one-page window around `current`, with an ellipsis for
/// each collapsed gap.
pub fn page_markers(current: usize, total: usize) -> Vec<PageMarker> {
	let total = total.max(1);
	let current = clamp_page(current, total);

	if total <= FULL_STRIP_LIMIT {
		return (1..=total).map(PageMarker::Page).collect();
	}

	let mut markers = vec![PageMarker::Page(1)];
	if current.saturating_sub(STRIP_WINDOW) > 2 {
		markers.push(PageMarker::Ellipsis);
	}

	let window_start = current.saturating_sub(STRIP_WINDOW).max(2);
	let window_end = (current + STRIP_WINDOW).min(total - 1);
	markers.extend((window_start..=window_end).map(PageMarker::Page));

	if current + STRIP_WINDOW < total - 1 {
		markers.push(PageMarker::Ellipsis);
	}
	markers.push(PageMarker::Page(total));
	markers
}

#[cfg(test)]
mod tests {
	use super::PageMarker::{Ellipsis, Page};
	use super::*;

	#[test]
	fn page_count_is_at_least_one() {
		assert_eq!(page_count(0, 5), 1);
		assert_eq!(page_count(5, 5), 1);
		assert_eq!(page_count(6, 5), 2);
		assert_eq!(page_count(12, 5), 3);
	}

	#[test]
	fn page_range_covers_partial_last_page() {
		assert_eq!(page_range(1, 5, 12), 0..5);
		assert_eq!(page_range(3, 5, 12), 10..12);
		assert_eq!(page_range(4, 5, 12), 12..12);
		assert_eq!(page_range(1, 5, 0), 0..0);
	}

	#[test]
	fn deleting_the_only_row_on_the_last_page_steps_back() {
		// 11 records over pages of 5; deleting the lone record on page 3.
		assert_eq!(page_after_delete(3, 10, 5), 2);
		// Page still exists after the delete.
		assert_eq!(page_after_delete(2, 9, 5), 2);
		// Nothing left at all.
		assert_eq!(page_after_delete(1, 0, 5), 1);
	}

	#[test]
	fn short_strips_list_every_page() {
		assert_eq!(page_markers(1, 1), vec![Page(1)]);
		assert_eq!(
			page_markers(4, 7),
			(1..=7).map(Page).collect::<Vec<_>>()
		);
	}

	#[test]
	fn long_strips_collapse_around_the_current_page() {
		assert_eq!(
			page_markers(1, 10),
			vec![Page(1), Page(2), Ellipsis, Page(10)]
		);
		assert_eq!(
			page_markers(5, 10),
			vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
		);
		assert_eq!(
			page_markers(10, 10),
			vec![Page(1), Ellipsis, Page(9), Page(10)]
		);
		assert_eq!(
			page_markers(3, 10),
			vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
		);
	}
}

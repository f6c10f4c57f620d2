//! Money and count formatting for summary cards and tables.

/// Format as US dollars with thousands separators: `$1,234.56`.
#[allow(clippy::cast_sign_loss)]
pub fn format_currency(value: f64) -> String {
	let cents = (value.abs() * 100.0).round();
	let whole = (cents / 100.0).trunc();
	let fraction = cents - whole * 100.0;
	let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };
	format!("{sign}${}.{:02}", group_thousands(whole), fraction as u64)
}

/// Format rounded to a whole number with thousands separators: `4,500`.
pub fn format_whole(value: f64) -> String {
	let rounded = value.abs().round();
	let sign = if value < 0.0 && rounded > 0.0 { "-" } else { "" };
	format!("{sign}{}", group_thousands(rounded))
}

#[allow(clippy::cast_sign_loss)]
fn group_thousands(whole: f64) -> String {
	let digits = (whole as u64).to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, digit) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(digit);
	}
	grouped
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn currency_groups_and_rounds() {
		assert_eq!(format_currency(0.0), "$0.00");
		assert_eq!(format_currency(9.99), "$9.99");
		assert_eq!(format_currency(149.0), "$149.00");
		assert_eq!(format_currency(1234.567), "$1,234.57");
		assert_eq!(format_currency(61_348.0), "$61,348.00");
		assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
	}

	#[test]
	fn currency_keeps_sign_for_negatives() {
		assert_eq!(format_currency(-48.5), "-$48.50");
		assert_eq!(format_currency(-0.001), "$0.00");
	}

	#[test]
	fn whole_numbers_round() {
		assert_eq!(format_whole(4500.0), "4,500");
		assert_eq!(format_whole(999.6), "1,000");
		assert_eq!(format_whole(12.0), "12");
	}
}

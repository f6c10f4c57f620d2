use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use storefront_core::PromoOutcome;
use tracing::info;

use super::App;
use crate::config::Tab;

impl App<'_> {
	/// Handle one key press. `now` drives the product search debounce.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
		self.status = None;
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

		match key.code {
			KeyCode::Esc => self.should_quit = true,
			KeyCode::Char('c') if ctrl => self.should_quit = true,
			KeyCode::Tab => self.switch_tab(self.tab.next()),
			KeyCode::BackTab => self.switch_tab(self.tab.previous()),
			KeyCode::Left => self.turn_page(false),
			KeyCode::Right => self.turn_page(true),
			KeyCode::Up => self.move_selection(false),
			KeyCode::Down => self.move_selection(true),
			KeyCode::F(number @ 2..=9) => self.sort_column(usize::from(number - 2)),
			KeyCode::Char('f') if ctrl => self.cycle_filter(false),
			KeyCode::Char('r') if ctrl && self.tab == Tab::Customers => self.cycle_filter(true),
			KeyCode::Char('x') if ctrl => self.reset_criteria(),
			KeyCode::Char('p') if ctrl && self.tab == Tab::Cart => self.apply_promo(),
			KeyCode::Char('u') if ctrl && self.tab == Tab::Cart => self.remove_promo(),
			KeyCode::Delete => self.delete_selected(),
			KeyCode::Char('+') if self.tab == Tab::Cart => self.adjust_quantity(true),
			KeyCode::Char('-') if self.tab == Tab::Cart => self.adjust_quantity(false),
			_ => self.edit_input(key, now),
		}
	}

	fn switch_tab(&mut self, tab: Tab) {
		info!(from = self.tab.label(), to = tab.label(), "switched screen");
		self.tab = tab;
		self.sync_selection();
	}

	fn edit_input(&mut self, key: KeyEvent, now: Instant) {
		let tab = self.tab;
		if !self.input_mut(tab).input(key) {
			return;
		}
		let text = self.input(tab).text().to_string();
		match tab {
			Tab::Products => self.search_debounce.schedule(text, now),
			Tab::Cart => {}
			_ => {
				if let Some(list) = self.list_mut(tab) {
					list.search(&text);
				}
				self.select_first();
			}
		}
	}

	fn turn_page(&mut self, forward: bool) {
		if let Some(list) = self.list_mut(self.tab) {
			list.page(forward);
			self.select_first();
		}
	}

	fn move_selection(&mut self, down: bool) {
		let rows = self.row_count();
		if rows == 0 {
			return;
		}
		let state = self.table_state_mut(self.tab);
		let current = state.selected().unwrap_or(0);
		let next = if down {
			(current + 1).min(rows - 1)
		} else {
			current.saturating_sub(1)
		};
		state.select(Some(next));
	}

	fn sort_column(&mut self, index: usize) {
		let message = self
			.list_mut(self.tab)
			.and_then(|list| list.sort_column(index));
		if let Some(message) = message {
			self.set_status(message);
			self.sync_selection();
		}
	}

	fn cycle_filter(&mut self, secondary: bool) {
		let Some(list) = self.list_mut(self.tab) else {
			return;
		};
		let description = list.cycle_filter(secondary);
		self.set_status(description);
		self.select_first();
	}

	fn reset_criteria(&mut self) {
		let tab = self.tab;
		let Some(list) = self.list_mut(tab) else {
			return;
		};
		list.reset();
		self.input_mut(tab).clear();
		if tab == Tab::Products {
			self.search_debounce.cancel();
		}
		self.set_status("Filters reset");
		self.select_first();
	}

	fn delete_selected(&mut self) {
		let tab = self.tab;
		let Some(row) = self.table_state(tab).selected() else {
			return;
		};

		if tab == Tab::Cart {
			let Some(item) = self.cart.items().get(row) else {
				return;
			};
			let (id, name) = (item.id.clone(), item.name.clone());
			self.cart = std::mem::take(&mut self.cart).remove(&id);
			info!(item = %id, "removed cart item");
			self.set_status(format!("Removed {name} from the cart"));
		} else {
			let deleted = self.list_mut(tab).and_then(|list| list.delete_row(row));
			match deleted {
				Some(id) => self.set_status(format!("Deleted {id}")),
				None if tab == Tab::Products => self.set_error("Products cannot be deleted"),
				None => {}
			}
		}
		self.sync_selection();
	}

	fn adjust_quantity(&mut self, increase: bool) {
		let Some(row) = self.table_state(Tab::Cart).selected() else {
			return;
		};
		let Some(item) = self.cart.items().get(row) else {
			return;
		};
		let (id, name, in_stock) = (item.id.clone(), item.name.clone(), item.in_stock);

		let cart = std::mem::take(&mut self.cart);
		self.cart = if increase {
			cart.increment(&id)
		} else {
			cart.decrement(&id)
		};
		if increase && !in_stock {
			self.set_error(format!("{name} is out of stock"));
		}
	}

	fn apply_promo(&mut self) {
		let code = self.input(Tab::Cart).text().trim().to_string();
		if code.is_empty() {
			self.set_error("Enter a promo code first");
			return;
		}

		let (cart, outcome) = std::mem::take(&mut self.cart).apply_promo(&code);
		self.cart = cart;
		match outcome {
			PromoOutcome::Applied => {
				self.input_mut(Tab::Cart).clear();
				self.set_status(format!("Promo code {} applied", code.to_uppercase()));
			}
			PromoOutcome::Rejected { code } => {
				self.set_error(format!("Invalid promo code: {code}"));
			}
		}
	}

	fn remove_promo(&mut self) {
		let Some(code) = self.cart.promo().map(str::to_string) else {
			self.set_error("No promo code applied");
			return;
		};
		self.cart = std::mem::take(&mut self.cart).clear_promo();
		self.set_status(format!("Promo code {code} removed"));
	}

	fn select_first(&mut self) {
		let tab = self.tab;
		self.table_state_mut(tab).select(Some(0));
		self.sync_selection();
	}
}

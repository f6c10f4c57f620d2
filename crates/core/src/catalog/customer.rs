use serde::Serialize;

use crate::listview::{Choice, FieldValue, Labelled, Record, RecordField, RecordFilter, labelled_enum};

labelled_enum! {
	pub enum Gender ("gender") {
		Male => ("male", "Male"),
		Female => ("female", "Female"),
	}
}

labelled_enum! {
	pub enum Role ("role") {
		User => ("user", "User"),
		Admin => ("admin", "Admin"),
	}
}

labelled_enum! {
	pub enum CustomerField ("customer field") {
		Id => ("id", "ID"),
		Name => ("name", "Name"),
		Email => ("email", "Email"),
		Gender => ("gender", "Gender"),
		Role => ("role", "Role"),
	}
}

impl RecordField for CustomerField {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
	pub id: String,
	pub avatar: String,
	pub name: String,
	pub email: String,
	pub gender: Gender,
	pub role: Role,
}

impl Customer {
	/// Up to two initials, shown when the avatar cannot be displayed.
	pub fn initials(&self) -> String {
		self.name
			.split_whitespace()
			.filter_map(|word| word.chars().next())
			.flat_map(char::to_uppercase)
			.take(2)
			.collect()
	}
}

impl Record for Customer {
	type Field = CustomerField;
	type Filter = CustomerFilter;

	const SEARCH_FIELDS: &'static [CustomerField] = &[CustomerField::Name, CustomerField::Email];
	const SUMMED_FIELDS: &'static [CustomerField] = &[];

	fn id(&self) -> &str {
		&self.id
	}

	fn field(&self, field: CustomerField) -> FieldValue<'_> {
		match field {
			CustomerField::Id => FieldValue::Text(&self.id),
			CustomerField::Name => FieldValue::Text(&self.name),
			CustomerField::Email => FieldValue::Text(&self.email),
			CustomerField::Gender => FieldValue::Text(self.gender.as_str()),
			CustomerField::Role => FieldValue::Text(self.role.as_str()),
		}
	}
}

/// Gender and role, both wildcarded by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomerFilter {
	pub gender: Choice<Gender>,
	pub role: Choice<Role>,
}

impl RecordFilter<Customer> for CustomerFilter {
	fn matches(&self, customer: &Customer) -> bool {
		self.gender.accepts(&customer.gender) && self.role.accepts(&customer.role)
	}
}

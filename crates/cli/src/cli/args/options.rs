use clap::ValueEnum;

/// Screens the interactive browser can open on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScreenArg {
	Products,
	Orders,
	Customers,
	Transactions,
	Cart,
}

impl ScreenArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ScreenArg::Products => "products",
			ScreenArg::Orders => "orders",
			ScreenArg::Customers => "customers",
			ScreenArg::Transactions => "transactions",
			ScreenArg::Cart => "cart",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// `--quantity ID=QTY`
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct QuantityUpdate {
	pub(crate) id: String,
	pub(crate) quantity: u32,
}

pub(crate) fn parse_quantity(value: &str) -> Result<QuantityUpdate, String> {
	let (id, quantity) = value
		.split_once('=')
		.ok_or_else(|| format!("expected ID=QTY, got `{value}`"))?;
	let id = id.trim();
	if id.is_empty() {
		return Err(format!("missing item id in `{value}`"));
	}
	let quantity = quantity
		.trim()
		.parse()
		.map_err(|err| format!("invalid quantity in `{value}`: {err}"))?;
	Ok(QuantityUpdate {
		id: id.to_string(),
		quantity,
	})
}

use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};
use storefront_core::{
	Category, Choice, CustomerField, Gender, OrderField, OrderStatus, ProductField, Role, SortSpec,
	TransactionField, TransactionStatus,
};

use super::options::{OutputFormat, QuantityUpdate, ScreenArg, parse_quantity};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `storefront` binary.
#[derive(Parser, Debug)]
#[command(
	name = "storefront",
	version,
	long_version = long_version(),
	about = "Storefront and admin screens over the bundled catalog",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "STOREFRONT_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "THEME",
		global = true,
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "products-page-size",
		value_name = "NUM",
		global = true,
		help = "Products shown per page (default: 8)"
	)]
	pub(crate) products_page_size: Option<usize>,
	#[arg(
		long = "admin-page-size",
		value_name = "NUM",
		global = true,
		help = "Rows per page on the admin screens (default: 5)"
	)]
	pub(crate) admin_page_size: Option<usize>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		global = true,
		help = "Quiet period before product search text applies (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		global = true,
		help = "Minimum log level: trace, debug, info, warn or error (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		global = true,
		help = "Log file for the interactive session (default: <data dir>/storefront.log)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "print-config",
		global = true,
		help = "Print the resolved configuration to stderr before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		global = true,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

/// One screen to render, or the interactive browser.
#[derive(Subcommand, Debug)]
pub(crate) enum Command {
	/// Search the product catalog.
	Products(ProductArgs),
	/// List orders.
	Orders(OrderArgs),
	/// List customers.
	Customers(CustomerArgs),
	/// List transactions.
	Transactions(TransactionArgs),
	/// Show the cart and its order summary.
	Cart(CartArgs),
	/// Open the interactive terminal UI.
	Browse(BrowseArgs),
}

/// Search text and page, shared by every list screen.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct PageArgs {
	#[arg(
		short,
		long,
		value_name = "TEXT",
		help = "Case-insensitive search text (default: none)"
	)]
	pub(crate) search: Option<String>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Page to show, clamped to the last page (default: 1)"
	)]
	pub(crate) page: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ProductArgs {
	#[command(flatten)]
	pub(crate) list: PageArgs,
	#[arg(
		long,
		value_name = "CATEGORY",
		default_value = "all",
		help = "headphone, camera, smartWatch or all"
	)]
	pub(crate) category: Choice<Category>,
	#[arg(
		long = "min-price",
		value_name = "PRICE",
		help = "Lower price bound (default: cheapest product)"
	)]
	pub(crate) min_price: Option<f64>,
	#[arg(
		long = "max-price",
		value_name = "PRICE",
		help = "Upper price bound (default: dearest product)"
	)]
	pub(crate) max_price: Option<f64>,
	#[arg(
		long,
		value_name = "FIELD[:asc|desc]",
		help = "Sort by name, price, rating or reviews (default: name:asc)"
	)]
	pub(crate) sort: Option<SortSpec<ProductField>>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct OrderArgs {
	#[command(flatten)]
	pub(crate) list: PageArgs,
	#[arg(
		long,
		value_name = "STATUS",
		default_value = "all",
		help = "pending, processing, completed, cancelled or all"
	)]
	pub(crate) status: Choice<OrderStatus>,
	#[arg(
		long,
		value_name = "FIELD[:asc|desc]",
		help = "Sort by id, customer, quantity, discount, amount, status or date (default: seed order)"
	)]
	pub(crate) sort: Option<SortSpec<OrderField>>,
	#[arg(
		long,
		value_name = "ID",
		action = ArgAction::Append,
		help = "Delete an order before rendering (repeatable)"
	)]
	pub(crate) delete: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct CustomerArgs {
	#[command(flatten)]
	pub(crate) list: PageArgs,
	#[arg(long, value_name = "GENDER", default_value = "all", help = "male, female or all")]
	pub(crate) gender: Choice<Gender>,
	#[arg(long, value_name = "ROLE", default_value = "all", help = "user, admin or all")]
	pub(crate) role: Choice<Role>,
	#[arg(
		long,
		value_name = "FIELD[:asc|desc]",
		help = "Sort by name, email, gender or role (default: seed order)"
	)]
	pub(crate) sort: Option<SortSpec<CustomerField>>,
	#[arg(
		long,
		value_name = "ID",
		action = ArgAction::Append,
		help = "Delete a customer before rendering (repeatable)"
	)]
	pub(crate) delete: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct TransactionArgs {
	#[command(flatten)]
	pub(crate) list: PageArgs,
	#[arg(
		long,
		value_name = "STATUS",
		default_value = "all",
		help = "processing, shipped, delivered, cancelled or all"
	)]
	pub(crate) status: Choice<TransactionStatus>,
	#[arg(
		long,
		value_name = "FIELD[:asc|desc]",
		help = "Sort by amount, discount, quantity, status or date (default: date:desc)"
	)]
	pub(crate) sort: Option<SortSpec<TransactionField>>,
	#[arg(
		long,
		value_name = "ID",
		action = ArgAction::Append,
		help = "Delete a transaction before rendering (repeatable)"
	)]
	pub(crate) delete: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct CartArgs {
	#[arg(long, value_name = "CODE", help = "Promo code to apply (SAVE10 takes 10% off)")]
	pub(crate) promo: Option<String>,
	#[arg(
		long = "quantity",
		value_name = "ID=QTY",
		value_parser = parse_quantity,
		action = ArgAction::Append,
		help = "Set a line's quantity; values below 1 are ignored (repeatable)"
	)]
	pub(crate) quantities: Vec<QuantityUpdate>,
	#[arg(
		long,
		value_name = "ID",
		action = ArgAction::Append,
		help = "Remove a line before rendering (repeatable)"
	)]
	pub(crate) delete: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct BrowseArgs {
	#[arg(long, value_enum, help = "Screen to open on (default: products)")]
	pub(crate) screen: Option<ScreenArg>,
}

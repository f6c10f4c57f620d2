//! Argument parsing and result printing for the `storefront` binary.

mod args;
mod output;

pub(crate) use args::{
	CartArgs, CliArgs, Command, CustomerArgs, OrderArgs, OutputFormat, PageArgs, ProductArgs,
	TransactionArgs, parse_cli,
};
pub(crate) use output::{PlainRow, print_cart, print_page};

use clap::{CommandFactory, Parser};
use storefront_core::{Choice, OrderField, OrderStatus, SortSpec};

use super::options::{QuantityUpdate, ScreenArg, parse_quantity};
use super::{CliArgs, Command, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn no_arguments_defaults_to_plain_output_without_a_screen() {
	let parsed = CliArgs::try_parse_from(["storefront"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.command.is_none());
}

#[test]
fn order_flags_parse_into_typed_criteria() {
	let parsed = CliArgs::try_parse_from([
		"storefront",
		"orders",
		"--status",
		"Completed",
		"--sort",
		"amount:desc",
		"--delete",
		"ORD-001",
		"--delete",
		"ORD-002",
		"--output",
		"json",
	])
	.expect("parses");

	assert_eq!(parsed.output, OutputFormat::Json);
	let Some(Command::Orders(args)) = parsed.command else {
		panic!("expected the orders command");
	};
	assert_eq!(args.status, Choice::Only(OrderStatus::Completed));
	assert_eq!(args.sort, Some(SortSpec::descending(OrderField::Amount)));
	assert_eq!(args.delete, vec!["ORD-001", "ORD-002"]);
}

#[test]
fn unknown_status_is_rejected_with_the_bad_value() {
	let err = CliArgs::try_parse_from(["storefront", "orders", "--status", "shipped"])
		.expect_err("shipped is not an order status");
	assert!(err.to_string().contains("shipped"));
}

#[test]
fn unknown_sort_field_is_rejected() {
	let err = CliArgs::try_parse_from(["storefront", "customers", "--sort", "salary"])
		.expect_err("customers have no salary");
	assert!(err.to_string().contains("salary"));
}

#[test]
fn global_flags_are_accepted_after_the_screen() {
	let parsed = CliArgs::try_parse_from([
		"storefront",
		"browse",
		"--screen",
		"cart",
		"--theme",
		"light",
		"--admin-page-size",
		"10",
	])
	.expect("parses");

	assert_eq!(parsed.theme.as_deref(), Some("light"));
	assert_eq!(parsed.admin_page_size, Some(10));
	let Some(Command::Browse(args)) = parsed.command else {
		panic!("expected the browse command");
	};
	assert_eq!(args.screen, Some(ScreenArg::Cart));
}

#[test]
fn quantity_updates_parse_id_and_count() {
	assert_eq!(
		parse_quantity("2=5"),
		Ok(QuantityUpdate {
			id: "2".into(),
			quantity: 5,
		})
	);
	assert!(parse_quantity("2").is_err());
	assert!(parse_quantity("=5").is_err());
	assert!(parse_quantity("2=-1").is_err());
}

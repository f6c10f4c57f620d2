//! Literal collections each screen starts from.
//!
//! Every call returns a fresh copy; nothing written to a collection survives
//! past the screen that owns it.

use super::{
	Category, Customer, Gender, Order, OrderStatus, Product, Role, Transaction, TransactionStatus,
};
use crate::cart::CartItem;

pub fn products() -> Vec<Product> {
	vec![
		Product {
			id: "p-1".into(),
			name: "Wireless Headphones X200".into(),
			image: "/wireless-headphones.png".into(),
			price: 149.0,
			original_price: Some(199.0),
			discount: Some(25),
			rating: 4.5,
			reviews: 328,
			category: Category::Headphone,
			is_new: true,
			stock: Some(18),
		},
		Product {
			id: "p-2".into(),
			name: "Mirrorless Camera ProLite 4K".into(),
			image: "/placeholder.jpg".into(),
			price: 899.0,
			original_price: Some(999.0),
			discount: Some(10),
			rating: 4.7,
			reviews: 142,
			category: Category::Camera,
			is_new: false,
			stock: Some(7),
		},
		Product {
			id: "p-3".into(),
			name: "Smart Watch Series S".into(),
			image: "/placeholder-user.jpg".into(),
			price: 229.0,
			original_price: None,
			discount: None,
			rating: 4.2,
			reviews: 502,
			category: Category::SmartWatch,
			is_new: false,
			stock: Some(0),
		},
		Product {
			id: "p-4".into(),
			name: "Studio Headphones Reference One".into(),
			image: "/placeholder.jpg".into(),
			price: 299.0,
			original_price: None,
			discount: None,
			rating: 4.8,
			reviews: 88,
			category: Category::Headphone,
			is_new: false,
			stock: Some(11),
		},
		Product {
			id: "p-5".into(),
			name: "Travel Camera Compact Zoom".into(),
			image: "/placeholder.jpg".into(),
			price: 349.0,
			original_price: None,
			discount: None,
			rating: 4.1,
			reviews: 63,
			category: Category::Camera,
			is_new: false,
			stock: Some(24),
		},
		Product {
			id: "p-6".into(),
			name: "Fitness Smart Watch Lite".into(),
			image: "/placeholder-user.jpg".into(),
			price: 119.0,
			original_price: None,
			discount: None,
			rating: 3.9,
			reviews: 210,
			category: Category::SmartWatch,
			is_new: true,
			stock: Some(46),
		},
	]
}

fn order(
	id: &str,
	quantity: u32,
	discount: f64,
	amount: f64,
	status: OrderStatus,
	date: &str,
	customer: &str,
) -> Order {
	Order {
		id: id.into(),
		quantity,
		discount,
		amount,
		status,
		date: date.into(),
		customer: customer.into(),
	}
}

pub fn orders() -> Vec<Order> {
	use OrderStatus::{Cancelled, Completed, Pending, Processing};

	vec![
		order("ORD-001", 3, 150.0, 4500.0, Processing, "2024-01-15", "John Doe"),
		order("ORD-002", 6, 400.0, 6999.0, Completed, "2024-01-14", "Jane Smith"),
		order("ORD-003", 2, 200.0, 2999.0, Pending, "2024-01-13", "Sarah Johnson"),
		order("ORD-004", 4, 850.0, 8500.0, Processing, "2024-01-12", "Mike Chen"),
		order("ORD-005", 1, 0.0, 3200.0, Cancelled, "2024-01-11", "Emily Davis"),
		order("ORD-006", 3, 540.0, 5400.0, Completed, "2024-01-10", "Alex Rodriguez"),
		order("ORD-007", 5, 720.0, 7200.0, Processing, "2024-01-09", "Lisa Wang"),
		order("ORD-008", 1, 100.0, 1800.0, Pending, "2024-01-08", "David Brown"),
		order("ORD-009", 7, 950.0, 9500.0, Completed, "2024-01-07", "Jennifer Lee"),
		order("ORD-010", 2, 300.0, 4100.0, Processing, "2024-01-06", "Robert Taylor"),
		order("ORD-011", 4, 600.0, 6800.0, Completed, "2024-01-05", "Maria Garcia"),
		order("ORD-012", 3, 250.0, 3750.0, Pending, "2024-01-04", "James Wilson"),
	]
}

fn customer(id: &str, portrait: &str, name: &str, email: &str, gender: Gender, role: Role) -> Customer {
	Customer {
		id: id.into(),
		avatar: format!("https://randomuser.me/api/portraits/{portrait}.jpg"),
		name: name.into(),
		email: email.into(),
		gender,
		role,
	}
}

pub fn customers() -> Vec<Customer> {
	use Gender::{Female, Male};
	use Role::{Admin, User};

	vec![
		customer("1", "women/54", "Emily Palmer", "emily.palmer@example.com", Female, User),
		customer("2", "women/50", "May Scoot", "aunt.may@example.com", Female, User),
		customer("3", "men/32", "John Smith", "john.smith@example.com", Male, Admin),
		customer("4", "women/68", "Sarah Johnson", "sarah.johnson@example.com", Female, User),
		customer("5", "men/45", "Mike Wilson", "mike.wilson@example.com", Male, User),
		customer("6", "women/23", "Lisa Brown", "lisa.brown@example.com", Female, Admin),
		customer("7", "men/67", "David Lee", "david.lee@example.com", Male, User),
		customer("8", "women/89", "Anna Davis", "anna.davis@example.com", Female, User),
	]
}

fn transaction(
	id: &str,
	user: &str,
	amount: f64,
	discount: f64,
	quantity: u32,
	status: TransactionStatus,
	date: &str,
) -> Transaction {
	Transaction {
		id: id.into(),
		user: user.into(),
		avatar: None,
		amount,
		discount,
		quantity,
		status,
		date: date.into(),
	}
}

pub fn transactions() -> Vec<Transaction> {
	use TransactionStatus::{Cancelled, Delivered, Processing, Shipped};

	vec![
		transaction("txn_001", "Charas", 4500.0, 400.0, 3, Processing, "2024-01-15"),
		transaction("txn_002", "Xavirors", 6999.0, 400.0, 6, Shipped, "2024-01-14"),
		transaction("txn_003", "Sarah Johnson", 2999.0, 200.0, 2, Delivered, "2024-01-13"),
		transaction("txn_004", "Mike Chen", 8500.0, 850.0, 4, Processing, "2024-01-12"),
		transaction("txn_005", "Emily Davis", 3200.0, 0.0, 1, Cancelled, "2024-01-11"),
		transaction("txn_006", "Alex Rodriguez", 5400.0, 540.0, 3, Delivered, "2024-01-10"),
		transaction("txn_007", "Lisa Wang", 7200.0, 720.0, 5, Shipped, "2024-01-09"),
		transaction("txn_008", "David Brown", 1800.0, 100.0, 1, Processing, "2024-01-08"),
		transaction("txn_009", "Jennifer Lee", 9500.0, 950.0, 7, Delivered, "2024-01-07"),
		transaction("txn_010", "Robert Taylor", 4100.0, 300.0, 2, Shipped, "2024-01-06"),
	]
}

pub fn cart_items() -> Vec<CartItem> {
	vec![
		CartItem {
			id: "1".into(),
			name: "Wireless Bluetooth Headphones".into(),
			price: 79.99,
			original_price: Some(99.99),
			image: "/wireless-headphones.png".into(),
			quantity: 2,
			category: "Electronics".into(),
			in_stock: true,
		},
		CartItem {
			id: "2".into(),
			name: "Premium Coffee Beans".into(),
			price: 24.99,
			original_price: None,
			image: "/pile-of-coffee-beans.png".into(),
			quantity: 1,
			category: "Food & Beverage".into(),
			in_stock: true,
		},
		CartItem {
			id: "3".into(),
			name: "Ergonomic Office Chair".into(),
			price: 299.99,
			original_price: Some(399.99),
			image: "/ergonomic-office-chair.png".into(),
			quantity: 1,
			category: "Furniture".into(),
			in_stock: false,
		},
	]
}

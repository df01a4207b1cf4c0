//! Basic usage example for claws

use claws::prelude::*;

struct Order {
    customer: Option<String>,
    lines: Option<Vec<u32>>,
    quantity: u32,
    discount: String,
}

fn place(order: Order) -> GuardResult<f64> {
    let customer = not_null_not_blank(named!(order.customer))?;
    let lines = not_null_not_empty(named!(order.lines))?;
    let quantity = greater_than(named!(order.quantity), 0)?;
    let discount = numeric(named!(order.discount))?;
    let discount = ensure!(discount, "between 0 and 1", |d| (0.0..=1.0).contains(d))?;

    println!(
        "✓ {customer}: {} line(s), {quantity} unit(s), {:.0}% off",
        lines.len(),
        discount * 100.0
    );
    Ok(discount)
}

fn main() {
    let orders = [
        Order {
            customer: Some("ada".into()),
            lines: Some(vec![1, 2]),
            quantity: 3,
            discount: "0.1".into(),
        },
        Order {
            customer: Some(String::new()),
            lines: Some(vec![1]),
            quantity: 1,
            discount: "0".into(),
        },
        Order {
            customer: Some("grace".into()),
            lines: Some(vec![]),
            quantity: 1,
            discount: "0".into(),
        },
        Order {
            customer: Some("linus".into()),
            lines: Some(vec![7]),
            quantity: 2,
            discount: "ten percent".into(),
        },
    ];

    for order in orders {
        if let Err(e) = place(order) {
            println!("✗ [{}] {e}", e.code());
        }
    }
}

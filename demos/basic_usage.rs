// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use std::sync::Arc;
use stock_typeahead::domain::{format_money, share_label, TradeRequest, TransactionType};
use stock_typeahead::prelude::*;

fn main() {
    println!("=== Stock Typeahead Example ===\n");

    // Session starts: log in and mount the search box, then load the catalog
    let session = SessionContext::with_event_handler(Arc::new(LoggingEventHandler));
    session.login(User::new("ada@example.com", "Ada", "Lovelace"));
    let search = match session.search_builder().build() {
        Ok(search) => search,
        Err(err) => {
            eprintln!("invalid search configuration: {err}");
            return;
        },
    };
    let mut typeahead = Typeahead::new(search);

    session.load_catalog(&StaticSource::new(vec![
        StockRecord::new("MSFT", "Microsoft Corp"),
        StockRecord::new("AAPL", "Apple Inc"),
        StockRecord::new("AA", "Alcoa"),
        StockRecord::new("AMD", "Advanced Micro Devices"),
    ]));

    println!("Catalog loaded: {} stocks\n", session.catalog().len());

    // Drive the search box like a user typing
    for query in ["a", "aa", "mic", "zzz"] {
        typeahead.on_input_change(query);
        println!("Query {:?} -> {:?}", query, typeahead.state());
        for (i, entry) in typeahead.results().iter().enumerate() {
            println!("  {}. {}", i + 1, entry);
        }
    }

    typeahead.on_input_change("a");
    typeahead.on_key(Key::ArrowDown);
    if let TypeaheadAction::Navigate(nav) = typeahead.on_key(Key::Enter) {
        println!("\nNavigate to {}", nav.path);
    }

    println!("\nHolding: {}", share_label(3));
    let price = Decimal::new(187_25, 2);
    match TradeRequest::new(TransactionType::Buy, "AAPL", 3, price, 0) {
        Ok(order) => println!(
            "POST {} -> estimated {}",
            order.endpoint(),
            format_money(order.estimated_cost())
        ),
        Err(err) => println!("Rejected: {err}"),
    }
    if let Err(err) = TradeRequest::new(TransactionType::Sell, "AAPL", 5, price, 3) {
        println!("Sell 5 rejected: {err}");
    }

    session.logout();
    typeahead.on_input_change("a");
    println!(
        "\nLogged out, catalog size {}, results for \"a\": {}",
        session.catalog().len(),
        typeahead.results().len()
    );
}

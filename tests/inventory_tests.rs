//! Inventory tests.
//!
//! These tests drive whole flows through `Inventory`:
//! - Moving cards between the collection and containers
//! - Selling and trading with the wallet kept in step
//! - Deleting containers and returning their cards
//! - Reports and serialization

use card_ledger::binders::BinderKind;
use card_ledger::cards::{Card, Rarity, Variant};
use card_ledger::core::{InventoryConfig, InventoryError};
use card_ledger::decks::DeckKind;
use card_ledger::inventory::Inventory;

fn card(name: &str, rarity: Rarity, variant: Variant, value: f64) -> Card {
    Card::new(name, rarity, variant, value).unwrap()
}

fn bolt() -> Card {
    card("Bolt", Rarity::Common, Variant::Normal, 1.0)
}

fn drake() -> Card {
    card("Drake", Rarity::Legendary, Variant::FullArt, 10.0)
}

// =============================================================================
// Binder Flows
// =============================================================================

/// Moving into a binder commits a copy; returning it uncommits it.
#[test]
fn test_binder_move_and_return() {
    let mut inventory = Inventory::new();
    inventory.add_card(bolt());
    inventory.add_card(bolt());
    inventory.create_binder("Bulk", BinderKind::Pauper).unwrap();

    inventory.move_to_binder("bulk", &bolt().key()).unwrap();
    assert_eq!(inventory.collection().units_of(&bolt().key()), 1);
    assert_eq!(inventory.binder("Bulk").unwrap().total_units(), 1);

    inventory.move_to_binder("Bulk", &bolt().key()).unwrap();
    assert_eq!(inventory.collection().units_of(&bolt().key()), 0);
    // Still listed while committed
    assert_eq!(inventory.collection().card_count(), 1);

    inventory.return_from_binder("Bulk", "bolt").unwrap();
    assert_eq!(inventory.collection().units_of(&bolt().key()), 1);
    assert_eq!(inventory.binder("Bulk").unwrap().total_units(), 1);

    assert!(matches!(
        inventory.return_from_binder("Bulk", "Shock"),
        Err(InventoryError::NotFound { .. })
    ));
}

/// The Rares binder scenario through the inventory.
#[test]
fn test_rares_binder_scenario() {
    let mut inventory = Inventory::new();
    inventory.add_card(bolt());
    inventory.add_card(drake());
    inventory.create_binder("R1", BinderKind::Rares).unwrap();

    assert!(matches!(
        inventory.move_to_binder("R1", &bolt().key()),
        Err(InventoryError::NotAllowed { .. })
    ));
    inventory.move_to_binder("R1", &drake().key()).unwrap();

    assert_eq!(inventory.binder("R1").unwrap().total_value(), 20.0);
}

/// Selling a binder credits the wallet, removes the binder and its cards.
#[test]
fn test_sell_binder() {
    let mut inventory = Inventory::new();
    inventory.add_card(drake());
    inventory.add_card(drake());
    inventory.create_binder("Lux", BinderKind::Luxury).unwrap();
    inventory.move_to_binder("Lux", &drake().key()).unwrap();

    let payout = inventory.sell_binder("Lux").unwrap();
    assert!((payout - 22.0).abs() < 1e-9);
    assert!((inventory.wallet().balance() - 22.0).abs() < 1e-9);
    assert!(inventory.binders().is_empty());

    // The uncommitted copy is untouched
    assert_eq!(inventory.collection().units_of(&drake().key()), 1);
}

/// Trade binders cannot be sold; the binder and its cards survive.
#[test]
fn test_sell_trade_binder_fails() {
    let mut inventory = Inventory::new();
    inventory.add_card(bolt());
    inventory.create_binder("Trades", BinderKind::NonCurated).unwrap();
    inventory.move_to_binder("Trades", &bolt().key()).unwrap();

    assert!(matches!(
        inventory.sell_binder("Trades"),
        Err(InventoryError::NotSellable { .. })
    ));
    assert_eq!(inventory.binders().len(), 1);
    assert_eq!(inventory.wallet().balance(), 0.0);
}

/// A trade through the inventory swaps the binder card and lists the new one.
#[test]
fn test_trade_flow() {
    let mut inventory = Inventory::new();
    inventory.add_card(bolt());
    inventory.create_binder("Trades", BinderKind::NonCurated).unwrap();
    inventory.move_to_binder("Trades", &bolt().key()).unwrap();

    let wyrm = card("Wyrm", Rarity::Rare, Variant::AltArt, 2.0);

    // $5 gap: declined leaves everything in place
    let declined = inventory.trade("Trades", "Bolt", wyrm.clone(), |_| false);
    assert_eq!(declined, Err(InventoryError::TradeDeclined { difference: 5.0 }));
    assert!(inventory.binder("Trades").unwrap().find_by_name("Bolt").is_some());

    let receipt = inventory.trade("Trades", "Bolt", wyrm.clone(), |_| true).unwrap();
    assert_eq!(receipt.difference, 5.0);

    let binder = inventory.binder("Trades").unwrap();
    assert!(binder.find_by_name("Bolt").is_none());
    assert!(binder.find_by_match(&wyrm).is_some());

    let collection = inventory.collection();
    assert!(collection.find_by_match(&bolt()).is_none());
    assert_eq!(collection.units_of(&wyrm.key()), 0);

    // Returning the traded-in card makes it available
    inventory.return_from_binder("Trades", "Wyrm").unwrap();
    assert_eq!(inventory.collection().units_of(&wyrm.key()), 1);
}

/// The confirmation threshold comes from the inventory config.
#[test]
fn test_configured_trade_threshold() {
    let config = InventoryConfig::new().with_trade_confirm_threshold(10.0);
    let mut inventory = Inventory::with_config(config);
    inventory.add_card(bolt());
    inventory.create_binder("Trades", BinderKind::NonCurated).unwrap();
    inventory.move_to_binder("Trades", &bolt().key()).unwrap();

    let wyrm = card("Wyrm", Rarity::Rare, Variant::AltArt, 2.0);
    let receipt = inventory
        .trade("Trades", "Bolt", wyrm, |_| panic!("no confirmation under the threshold"))
        .unwrap();
    assert_eq!(receipt.difference, 5.0);
}

/// Deleting a binder hands every copy back.
#[test]
fn test_delete_binder_returns_cards() {
    let mut inventory = Inventory::new();
    inventory.add_card(bolt());
    inventory.add_card(bolt());
    inventory.add_card(drake());
    inventory.create_binder("All", BinderKind::NonCurated).unwrap();
    inventory.move_to_binder("All", &bolt().key()).unwrap();
    inventory.move_to_binder("All", &bolt().key()).unwrap();
    inventory.move_to_binder("All", &drake().key()).unwrap();

    let deleted = inventory.delete_binder("ALL").unwrap();
    assert_eq!(deleted.name(), "All");
    assert!(deleted.is_empty());
    assert!(inventory.binders().is_empty());

    assert_eq!(inventory.collection().units_of(&bolt().key()), 2);
    assert_eq!(inventory.collection().units_of(&drake().key()), 1);
}

// =============================================================================
// Deck Flows
// =============================================================================

/// The sellable deck scenario: $15 paid, deck gone.
#[test]
fn test_sell_deck_scenario() {
    let mut inventory = Inventory::new();
    let cards = [
        card("Bolt", Rarity::Common, Variant::Normal, 5.0),
        card("Drake", Rarity::Rare, Variant::FullArt, 5.0),
    ];
    for c in &cards {
        inventory.add_card(c.clone());
    }
    inventory.create_deck("S1", DeckKind::Sellable).unwrap();
    for c in &cards {
        inventory.move_to_deck("S1", &c.key()).unwrap();
    }

    assert_eq!(inventory.sell_deck("s1"), Ok(15.0));
    assert_eq!(inventory.wallet().balance(), 15.0);
    assert!(inventory.decks().is_empty());
    assert!(inventory.collection().is_empty());
}

/// Plain decks cannot be sold.
#[test]
fn test_sell_standard_deck_fails() {
    let mut inventory = Inventory::new();
    inventory.create_deck("D1", DeckKind::Standard).unwrap();

    assert!(matches!(
        inventory.sell_deck("D1"),
        Err(InventoryError::NotSellable { .. })
    ));
    assert_eq!(inventory.decks().len(), 1);
}

/// A deck rejects a second card of the same name, even another printing.
#[test]
fn test_deck_duplicate_through_inventory() {
    let mut inventory = Inventory::new();
    let normal = card("Drake", Rarity::Rare, Variant::Normal, 2.0);
    let foil = card("Drake", Rarity::Rare, Variant::FullArt, 2.0);
    inventory.add_card(normal.clone());
    inventory.add_card(foil.clone());
    inventory.create_deck("D1", DeckKind::Standard).unwrap();

    inventory.move_to_deck("D1", &normal.key()).unwrap();
    assert!(matches!(
        inventory.move_to_deck("D1", &foil.key()),
        Err(InventoryError::DuplicateCard { .. })
    ));
    assert_eq!(inventory.collection().units_of(&foil.key()), 1);
}

/// Returning a card from a deck and moving it back round-trips.
#[test]
fn test_deck_return_and_move_back() {
    let mut inventory = Inventory::new();
    inventory.add_card(bolt());
    inventory.create_deck("D1", DeckKind::Standard).unwrap();
    inventory.move_to_deck("D1", &bolt().key()).unwrap();

    inventory.return_from_deck("D1", "BOLT").unwrap();
    assert!(inventory.deck("D1").unwrap().is_empty());
    assert_eq!(inventory.collection().units_of(&bolt().key()), 1);

    inventory.move_to_deck("D1", &bolt().key()).unwrap();
    assert_eq!(inventory.deck("D1").unwrap().len(), 1);

    assert!(matches!(
        inventory.return_from_deck("D1", "Shock"),
        Err(InventoryError::NotFound { .. })
    ));
}

/// Deleting a deck returns its cards.
#[test]
fn test_delete_deck_returns_cards() {
    let mut inventory = Inventory::new();
    inventory.add_card(bolt());
    inventory.add_card(drake());
    inventory.create_deck("D1", DeckKind::Sellable).unwrap();
    inventory.move_to_deck("D1", &bolt().key()).unwrap();
    inventory.move_to_deck("D1", &drake().key()).unwrap();

    let deleted = inventory.delete_deck("d1").unwrap();
    assert!(deleted.is_empty());
    assert!(inventory.deck("D1").is_none());
    assert_eq!(inventory.collection().total_units(), 2);
}

// =============================================================================
// Collection Edits
// =============================================================================

/// An amount change that does not fit is rejected and the entry is kept.
#[test]
fn test_adjust_card_amount_overflow() {
    let mut inventory = Inventory::new();
    inventory.add_card(bolt());

    assert!(matches!(
        inventory.adjust_card_amount(&bolt().key(), i64::MAX),
        Err(InventoryError::InvalidInput(_))
    ));
    assert_eq!(inventory.collection().units_of(&bolt().key()), 1);

    assert_eq!(inventory.adjust_card_amount(&bolt().key(), 3), Ok(4));
}

// =============================================================================
// Reports
// =============================================================================

/// Holdings and net worth count cards wherever they sit.
#[test]
fn test_holdings_and_net_worth() {
    let mut inventory = Inventory::new();
    inventory.add_card(bolt());
    inventory.add_card(bolt());
    inventory.add_card(drake());
    inventory.create_binder("R1", BinderKind::Rares).unwrap();
    inventory.create_deck("D1", DeckKind::Standard).unwrap();
    inventory.move_to_binder("R1", &drake().key()).unwrap();
    inventory.move_to_deck("D1", &bolt().key()).unwrap();

    let holdings = inventory.holdings();
    assert_eq!(holdings.len(), 2);
    assert_eq!(holdings[&bolt().key()], 2);
    assert_eq!(holdings[&drake().key()], 1);

    assert_eq!(inventory.card_value(), 22.0);

    inventory.sell_card(&bolt().key(), 1).unwrap();
    assert_eq!(inventory.wallet().balance(), 1.0);
    assert_eq!(inventory.net_worth(), 22.0);
}

// =============================================================================
// Serialization
// =============================================================================

/// The whole inventory survives a JSON round trip.
#[test]
fn test_inventory_json_round_trip() {
    let mut inventory = Inventory::new();
    inventory.add_card(bolt());
    inventory.add_card(drake());
    inventory.create_binder("R1", BinderKind::Rares).unwrap();
    inventory.create_deck("D1", DeckKind::Sellable).unwrap();
    inventory.move_to_binder("R1", &drake().key()).unwrap();
    inventory.move_to_deck("D1", &bolt().key()).unwrap();

    let json = serde_json::to_string(&inventory).unwrap();
    let restored: Inventory = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, inventory);
    assert_eq!(restored.binder("r1").unwrap().kind(), BinderKind::Rares);
}

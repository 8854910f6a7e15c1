use enchsort_core::{
    EnchantmentCatalog, EnchantmentSorter, SortError, TypeOrder,
    sorting::{TypeLengthSorter, sort_grouped},
};
use enchsort_model::{
    EnchantmentEntry, EnchantmentKey, EnchantmentLookup, EnchantmentType,
    LookupError,
};

fn ty(name: &str) -> EnchantmentType {
    EnchantmentType::new(name).expect("type")
}

fn key(raw: &str) -> EnchantmentKey {
    EnchantmentKey::new(raw).expect("key")
}

fn catalog(entries: &[(&str, &str, &str)]) -> EnchantmentCatalog {
    entries
        .iter()
        .map(|(k, t, name)| (key(k), EnchantmentEntry::new(ty(t), *name)))
        .collect()
}

fn damage_utility() -> TypeOrder {
    TypeOrder::new(vec![ty("DAMAGE"), ty("UTILITY")]).expect("order")
}

fn keys(items: &[EnchantmentKey]) -> Vec<&str> {
    items.iter().map(EnchantmentKey::key).collect()
}

#[test]
fn groups_by_type_then_orders_by_name_length() {
    let lookup = catalog(&[
        ("a", "DAMAGE", "Sharp"),
        ("b", "UTILITY", "Luck"),
        ("c", "DAMAGE", "Fire"),
    ]);
    let order = damage_utility();
    let sorter = TypeLengthSorter::new(&lookup, &order);

    let mut items = vec![key("a"), key("b"), key("c")];
    sorter.sort_enchantments(&mut items).expect("sort");

    assert_eq!(keys(&items), vec!["c", "a", "b"]);
}

#[test]
fn empty_lore_stays_empty() {
    let lookup = catalog(&[("a", "DAMAGE", "Sharp")]);
    let order = damage_utility();
    let sorter = TypeLengthSorter::new(&lookup, &order);

    let mut items: Vec<EnchantmentKey> = Vec::new();
    sorter.sort_enchantments(&mut items).expect("sort");

    assert!(items.is_empty());
}

#[test]
fn enchantment_with_unlisted_type_is_removed() {
    let lookup = catalog(&[
        ("a", "DAMAGE", "Sharp"),
        ("v", "CURSE", "Vanishing"),
        ("b", "UTILITY", "Luck"),
    ]);
    let order = damage_utility();
    let sorter = TypeLengthSorter::new(&lookup, &order);

    let mut items = vec![key("v"), key("a"), key("b")];
    sorter.sort_enchantments(&mut items).expect("sort");

    assert_eq!(keys(&items), vec!["a", "b"]);
}

#[test]
fn equal_type_and_length_keep_input_order() {
    let lookup = catalog(&[("x", "DAMAGE", "Smite"), ("y", "DAMAGE", "Sweep")]);
    let order = damage_utility();
    let sorter = TypeLengthSorter::new(&lookup, &order);

    let mut items = vec![key("x"), key("y")];
    sorter.sort_enchantments(&mut items).expect("sort");
    assert_eq!(keys(&items), vec!["x", "y"]);

    let mut items = vec![key("y"), key("x")];
    sorter.sort_enchantments(&mut items).expect("sort");
    assert_eq!(keys(&items), vec!["y", "x"]);
}

#[test]
fn empty_type_order_removes_everything_without_lookups() {
    // An empty catalog would fail any lookup.
    let lookup = EnchantmentCatalog::new();
    let order: Vec<EnchantmentType> = Vec::new();
    let sorter = TypeLengthSorter::new(&lookup, &order);

    let mut items = vec![key("a"), key("b")];
    sorter.sort_enchantments(&mut items).expect("sort");

    assert!(items.is_empty());
}

#[test]
fn missing_metadata_is_reported_not_defaulted() {
    let lookup = catalog(&[("a", "DAMAGE", "Sharp")]);
    let order = damage_utility();
    let sorter = TypeLengthSorter::new(&lookup, &order);

    let mut items = vec![key("a"), key("ghost")];
    let err = sorter.sort_enchantments(&mut items).unwrap_err();

    assert!(matches!(err, SortError::Lookup(LookupError::Unknown(_))));
    assert_eq!(keys(&items), vec!["a", "ghost"]);
}

#[test]
fn pure_sort_leaves_input_alone() {
    let lookup = catalog(&[
        ("a", "DAMAGE", "Sharp"),
        ("b", "UTILITY", "Luck"),
        ("c", "DAMAGE", "Fire"),
    ]);
    let order = damage_utility();
    let items = vec![key("a"), key("b"), key("c")];

    let sorted = sort_grouped(
        &items,
        &order.iter().cloned().collect::<Vec<_>>(),
        |k| Ok(lookup.entry(k)?.enchantment_type),
        |k| Ok(lookup.entry(k)?.display_length()),
    )
    .expect("sort");

    assert_eq!(keys(&sorted), vec!["c", "a", "b"]);
    assert_eq!(keys(&items), vec!["a", "b", "c"]);
}

#[test]
fn repeated_type_in_order_is_rejected() {
    let items = vec![key("a")];
    let lookup = catalog(&[("a", "DAMAGE", "Sharp")]);
    let types = vec![ty("damage"), ty("utility"), ty("damage")];

    let result = sort_grouped(
        &items,
        &types,
        |k| Ok(lookup.entry(k)?.enchantment_type),
        |k| Ok(lookup.entry(k)?.display_length()),
    );

    assert!(matches!(
        result,
        Err(SortError::DuplicateCategory { position: 2 })
    ));
}

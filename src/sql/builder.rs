//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the products table.

use crate::store::ProductFilter;

pub const PRODUCTS_TABLE: &str = "products";
pub const CATEGORY_TYPE: &str = "category";

/// Column order matches the fields of [`crate::model::Product`].
pub const COLUMNS: [&str; 6] = ["id", "name", "description", "price", "available", "category"];

/// Quote identifier for PostgreSQL.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn select_column_list() -> String {
    COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// Column compared by a filter, if any.
fn filter_column(filter: &ProductFilter) -> Option<&'static str> {
    match filter {
        ProductFilter::All => None,
        ProductFilter::Name(_) => Some("name"),
        ProductFilter::Category(_) => Some("category"),
        ProductFilter::Available(_) => Some("available"),
    }
}

/// SELECT by primary key. Caller binds id as $1.
pub fn select_by_id() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_column_list(),
        quoted(PRODUCTS_TABLE),
        quoted("id")
    )
}

/// SELECT with at most one exact-match predicate, ORDER BY id. Caller binds the filter value as $1.
pub fn select_list(filter: &ProductFilter) -> String {
    let where_clause = filter_column(filter)
        .map(|c| format!(" WHERE {} = $1", quoted(c)))
        .unwrap_or_default();
    format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        select_column_list(),
        quoted(PRODUCTS_TABLE),
        where_clause,
        quoted("id")
    )
}

/// INSERT every column except id. Binds: name, description, price, available, category.
pub fn insert() -> String {
    let cols = &COLUMNS[1..];
    let placeholders: Vec<String> = (1..=cols.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(PRODUCTS_TABLE),
        cols.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", "),
        placeholders.join(", "),
        quoted("id")
    )
}

/// UPDATE every column by id. Binds: id, then name, description, price, available, category.
pub fn update() -> String {
    let sets: Vec<String> = COLUMNS[1..]
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c), i + 2))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = $1",
        quoted(PRODUCTS_TABLE),
        sets.join(", "),
        quoted("id")
    )
}

/// DELETE by id.
pub fn delete() -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(PRODUCTS_TABLE), quoted("id"))
}

//! Quote a cart built from product ids.

use std::io::Write;

use automats_core::{Cart, Catalog, ProductId};
use tracing::debug;

use super::CliError;

/// Add each id to an empty cart in order, then write its lines and totals.
///
/// # Errors
///
/// Returns [`CliError::UnknownProduct`] for an id missing from the catalog,
/// or an I/O error if writing to `out` fails.
pub fn print(out: &mut impl Write, ids: &[ProductId]) -> Result<(), CliError> {
    let cart = build(&Catalog::seeded(), ids)?;
    debug!(lines = cart.items().len(), "Built cart");

    for item in cart.items() {
        writeln!(
            out,
            "{:<24} {:>8} x {:<3} {:>10}",
            item.product.name,
            item.product.price,
            item.quantity,
            item.line_total()
        )?;
    }
    writeln!(out, "Итого: {}", cart.total())?;
    writeln!(out, "Товаров: {}", cart.count())?;

    Ok(())
}

/// Fold the ids into a cart, rejecting any id the catalog lacks.
fn build(catalog: &Catalog, ids: &[ProductId]) -> Result<Cart, CliError> {
    ids.iter().try_fold(Cart::new(), |cart, &id| {
        catalog
            .find(id)
            .map(|product| cart.add_to_cart(product))
            .ok_or(CliError::UnknownProduct(id))
    })
}

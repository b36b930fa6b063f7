//! Print the product catalog.

use std::io::Write;

use automats_core::{Catalog, MaterialFilter, filter_by_material};
use tracing::{debug, warn};

use super::CliError;

/// Write one line per product matching `material` to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list(out: &mut impl Write, material: &str) -> Result<(), CliError> {
    let catalog = Catalog::seeded();

    if let MaterialFilter::Unknown(label) = MaterialFilter::parse(material) {
        warn!(material = %label, "Unknown material, nothing will match");
    }

    let products = filter_by_material(catalog.products(), material);
    debug!(material, count = products.len(), "Filtered catalog");

    for product in products {
        writeln!(
            out,
            "{:>2}  {:<24} {:<12} {:>8}",
            product.id, product.name, product.material, product.price
        )?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(material: &str) -> String {
        let mut out = Vec::new();
        list(&mut out, material).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_lists_all_products() {
        let output = render("all");
        assert_eq!(output.lines().count(), 6);
        assert!(output.lines().next().unwrap().contains("Коврики Premium EVA"));
    }

    #[test]
    fn test_filters_by_material() {
        let output = render("Автовойлок");
        assert_eq!(output.lines().count(), 2);
        assert!(output.lines().all(|line| line.contains("Felt")));
    }

    #[test]
    fn test_unknown_material_prints_nothing() {
        assert!(render("rubber").is_empty());
    }
}
